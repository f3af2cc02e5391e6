use dioxus::prelude::*;

use site::{NavState, Section};

use super::go_to;

#[derive(Clone, PartialEq, Props)]
pub struct HeroProps {
    nav_signal: Signal<NavState>,
}

#[component]
pub fn Hero(props: HeroProps) -> Element {
    let nav_signal = props.nav_signal;

    rsx! {
        section { id: Section::Home.id(), class: "hero",
            div { class: "container",
                div { class: "hero-content",
                    h1 { class: "hero-title",
                        "Building Tomorrow's"
                        span { class: "hero-highlight", " Digital Solutions" }
                    }
                    p { class: "hero-subtitle",
                        "We transform ideas into powerful digital experiences through innovative web development, stunning design, and cutting-edge technology solutions."
                    }
                    div { class: "hero-actions",
                        button {
                            class: "btn btn-primary btn-lg",
                            r#type: "button",
                            onclick: move |_| go_to(nav_signal, Section::Portfolio),
                            "View Our Work"
                        }
                        button {
                            class: "btn btn-secondary btn-lg",
                            r#type: "button",
                            onclick: move |_| go_to(nav_signal, Section::Contact),
                            "Get In Touch"
                        }
                    }
                }
            }
        }
    }
}
