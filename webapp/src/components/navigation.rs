use dioxus::prelude::*;

use site::{NavState, Section, SiteConfig, Theme};

use crate::home::go_to;

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    nav_signal: Signal<NavState>,
    target: Section,
    #[props(default)]
    mobile: bool,
}

#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let nav_signal = props.nav_signal;
    let target = props.target;

    let class = match (props.mobile, nav_signal().active == target) {
        (true, _) => "nav-link nav-link-mobile",
        (false, true) => "nav-link active",
        (false, false) => "nav-link",
    };

    rsx! {
        button {
            class,
            r#type: "button",
            aria_label: "Navigate to {target} section",
            onclick: move |_| go_to(nav_signal, target),
            "{target.label()}"
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct NavBarProps {
    nav_signal: Signal<NavState>,
    theme_signal: Signal<Theme>,
}

#[component]
pub fn NavBar(props: NavBarProps) -> Element {
    let mut nav_signal = props.nav_signal;
    let mut theme_signal = props.theme_signal;

    let config = use_context::<SiteConfig>();
    let menu_open = nav_signal().menu_open;

    rsx! {
        header { class: "app-header",
            nav { class: "nav-container",
                div { class: "logo",
                    span { class: "logo-mark", "{config.brand_mark}" }
                    span { class: "logo-text", "{config.brand}" }
                }

                div { class: "nav-links",
                    for section in Section::ALL {
                        NavBarButton { key: "{section}", nav_signal, target: section }
                    }
                }

                div { class: "nav-actions",
                    button {
                        class: "theme-toggle",
                        r#type: "button",
                        aria_label: "{theme_signal().toggle_label()}",
                        onclick: move |_| {
                            let next = theme_signal().toggle();
                            theme_signal.set(next);
                        },
                        if theme_signal() == Theme::Light { "☾" } else { "☀" }
                    }
                    button {
                        class: "menu-toggle",
                        r#type: "button",
                        aria_label: "Toggle mobile menu",
                        onclick: move |_| nav_signal.write().toggle_menu(),
                        if menu_open { "✕" } else { "☰" }
                    }
                }
            }

            if menu_open {
                div { class: "mobile-menu",
                    for section in Section::ALL {
                        NavBarButton {
                            key: "{section}",
                            nav_signal,
                            target: section,
                            mobile: true,
                        }
                    }
                }
            }
        }
    }
}
