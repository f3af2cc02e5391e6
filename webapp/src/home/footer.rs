use chrono::{Datelike, Local};
use dioxus::prelude::*;

use site::SiteConfig;

#[component]
pub fn Footer() -> Element {
    let config = use_context::<SiteConfig>();
    let copyright = config.copyright_line(Local::now().year());

    rsx! {
        footer { class: "site-footer",
            div { class: "container",
                div { class: "logo footer-logo",
                    span { class: "logo-mark", "{config.brand_mark}" }
                    span { class: "logo-text", "{config.brand}" }
                }
                p { class: "footer-tagline", "{config.tagline}" }
                div { class: "social-links",
                    for link in config.social.iter() {
                        a {
                            key: "{link.network.label()}",
                            class: "social-link {link.network.css_class()}",
                            href: "{link.href}",
                            aria_label: link.network.label(),
                        }
                    }
                }
                div { class: "footer-bottom",
                    p { "{copyright}" }
                }
            }
        }
    }
}
