use dioxus::prelude::*;

use site::{Section, SiteConfig, content::VALUES};

#[component]
pub fn About() -> Element {
    let config = use_context::<SiteConfig>();

    rsx! {
        section { id: Section::About.id(), class: "page-section",
            div { class: "container",
                div { class: "section-header",
                    h2 { class: "section-title", "About {config.company}" }
                    p { class: "section-lead",
                        "Founded with a vision to bridge the gap between innovative ideas and exceptional digital solutions, {config.company} has been at the forefront of web development and digital transformation for businesses worldwide."
                    }
                }

                div { class: "values-grid",
                    for value in VALUES {
                        div {
                            key: "{value.title}",
                            class: "value-card",
                            style: "background-color: {value.accent.to_css_background()};",
                            div {
                                class: "value-icon icon {value.icon.css_class()}",
                                style: "background-color: {value.accent};",
                            }
                            h3 { class: "card-title", "{value.title}" }
                            p { class: "card-text", "{value.blurb}" }
                        }
                    }
                }
            }
        }
    }
}
