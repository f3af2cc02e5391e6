use dioxus::prelude::*;

use site::{Section, content::PORTFOLIO};

#[component]
pub fn Portfolio() -> Element {
    rsx! {
        section { id: Section::Portfolio.id(), class: "page-section",
            div { class: "container",
                div { class: "section-header",
                    h2 { class: "section-title", "Our Portfolio" }
                    p { class: "section-lead",
                        "Showcasing our latest projects and the innovative solutions we've delivered for our clients."
                    }
                }

                div { class: "card-grid",
                    for project in PORTFOLIO {
                        div { key: "{project.id}", class: "project-card",
                            div { class: "project-image",
                                img {
                                    src: project.image_src(),
                                    alt: project.title,
                                    loading: "lazy",
                                }
                                div { class: "project-overlay" }
                            }
                            div { class: "project-body",
                                h3 { class: "card-title", "{project.title}" }
                                div { class: "tag-list",
                                    for tag in project.tags {
                                        span { key: "{tag}", class: "tag", "{tag}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
