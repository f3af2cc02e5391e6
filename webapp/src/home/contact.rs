use dioxus::prelude::*;
use gloo_timers::callback::Timeout;
use tracing::debug;

use site::{ContactForm, Field, Section, SiteConfig, SubmitOutcome};

#[derive(Clone, PartialEq, Props)]
struct FormFieldProps {
    form_signal: Signal<ContactForm>,
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    #[props(default)]
    multiline: bool,
}

#[component]
fn FormField(props: FormFieldProps) -> Element {
    let mut form_signal = props.form_signal;
    let field = props.field;
    let id = field.id();

    let value = form_signal.read().value(field).to_owned();
    let error = form_signal.read().error(field);

    let class = if error.is_some() {
        "form-input has-error"
    } else {
        "form-input"
    };
    let described_by = error.map(|_| format!("{id}-error"));

    rsx! {
        div { class: "form-group",
            label { class: "form-label", r#for: id, "{props.label} *" }
            if props.multiline {
                textarea {
                    id,
                    name: id,
                    class,
                    rows: 5,
                    placeholder: props.placeholder,
                    aria_describedby: described_by.clone(),
                    value: "{value}",
                    oninput: move |evt| form_signal.write().edit(field, evt.value()),
                }
            } else {
                input {
                    id,
                    name: id,
                    class,
                    r#type: if field == Field::Email { "email" } else { "text" },
                    placeholder: props.placeholder,
                    aria_describedby: described_by,
                    value: "{value}",
                    oninput: move |evt| form_signal.write().edit(field, evt.value()),
                }
            }
            if let Some(error) = error {
                p { id: "{id}-error", class: "form-error", "{error}" }
            }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    let config = use_context::<SiteConfig>();
    let mut form_signal = use_signal(ContactForm::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let outcome = form_signal.write().submit();
        match outcome {
            SubmitOutcome::Accepted { hide_after } => {
                // not cancelled on resubmit; each timer just lowers the flag when it fires
                let millis = u32::try_from(hide_after.as_millis()).unwrap_or(u32::MAX);
                let task = Timeout::new(millis, move || {
                    form_signal.write().dismiss_banner();
                });
                task.forget();
            }
            SubmitOutcome::Rejected { errors } => {
                debug!("contact form has {errors} invalid fields");
            }
        }
    };

    rsx! {
        section { id: Section::Contact.id(), class: "page-section alt",
            div { class: "container",
                div { class: "section-header",
                    h2 { class: "section-title", "Get In Touch" }
                    p { class: "section-lead",
                        "Ready to start your next project? Let's discuss how we can help bring your vision to life."
                    }
                }

                div { class: "contact-grid",
                    div { class: "contact-info",
                        h3 { class: "contact-heading", "Let's Connect" }
                        ul { class: "contact-details",
                            li { span { class: "icon icon-mail" } span { "{config.contact.email}" } }
                            li { span { class: "icon icon-phone" } span { "{config.contact.phone}" } }
                            li { span { class: "icon icon-map-pin" } span { "{config.contact.location}" } }
                        }
                        div { class: "social-links",
                            for link in config.social.iter() {
                                a {
                                    key: "{link.network.label()}",
                                    class: "social-link social-link-filled {link.network.css_class()}",
                                    href: "{link.href}",
                                    aria_label: link.network.label(),
                                }
                            }
                        }
                    }

                    div { class: "contact-form-wrapper",
                        if form_signal.read().submitted() {
                            div { class: "banner banner-success", role: "status",
                                "Thank you! Your message has been sent successfully."
                            }
                        }

                        form { class: "contact-form", novalidate: true, onsubmit: handle_submit,
                            FormField {
                                form_signal,
                                field: Field::Name,
                                label: "Full Name",
                                placeholder: "Enter your full name",
                            }
                            FormField {
                                form_signal,
                                field: Field::Email,
                                label: "Email Address",
                                placeholder: "Enter your email address",
                            }
                            FormField {
                                form_signal,
                                field: Field::Message,
                                label: "Message",
                                placeholder: "Tell us about your project...",
                                multiline: true,
                            }
                            button { class: "btn btn-primary btn-block", r#type: "submit",
                                "Send Message"
                            }
                        }
                    }
                }
            }
        }
    }
}
