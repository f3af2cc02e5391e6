use dioxus::prelude::*;

use site::{Section, content::SERVICES};

#[component]
pub fn Services() -> Element {
    rsx! {
        section { id: Section::Services.id(), class: "page-section alt",
            div { class: "container",
                div { class: "section-header",
                    h2 { class: "section-title", "Our Services" }
                    p { class: "section-lead",
                        "Comprehensive digital solutions designed to elevate your business and drive growth in the digital age."
                    }
                }

                div { class: "card-grid",
                    for service in SERVICES {
                        div { key: "{service.id}", class: "service-card",
                            div { class: "service-icon icon {service.icon.css_class()}" }
                            h3 { class: "card-title", "{service.title}" }
                            p { class: "card-text", "{service.description}" }
                        }
                    }
                }
            }
        }
    }
}
