//! Contact section and form.

use dioxus::prelude::*;
use folio_content::{FieldKind, CONTACT, PERSONAL_INFO, SOCIAL_LINKS};

use crate::state::{submit, ContactField, ContactForm, SectionId, SubmitStatus};

use super::{Reveal, SectionHeader, SiteContext};

/// Contact section with the message form and its status banners.
#[component]
pub fn Contact() -> Element {
    let relay = use_context::<SiteContext>().relay;
    let form = use_signal(ContactForm::new);
    let mut notice = use_signal(|| None::<String>);

    let notice_text = notice.read().clone();
    let (status, can_submit) = {
        let f = form.read();
        (f.status(), f.can_submit())
    };

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        let relay = relay.clone();
        spawn(async move {
            notice.set(None);
            if let Err(e) = submit(&form, &*relay, PERSONAL_INFO.name).await {
                tracing::debug!("Contact form not sent: {}", e);
                notice.set(Some(e.to_string()));
            }
        });
    };

    rsx! {
        section {
            id: SectionId::Contact.anchor(),
            class: "section contact",

            SectionHeader { heading: CONTACT.heading }

            div {
                class: "contact-grid",
                Reveal {
                    class: "contact-info",
                    p { "{CONTACT.description}" }
                    ul {
                        class: "contact-details",
                        li {
                            span { class: "contact-label", "Email" }
                            a { href: "mailto:{PERSONAL_INFO.email}", "{PERSONAL_INFO.email}" }
                        }
                        li {
                            span { class: "contact-label", "Phone" }
                            "{PERSONAL_INFO.phone}"
                        }
                        li {
                            span { class: "contact-label", "Location" }
                            "{PERSONAL_INFO.location}"
                        }
                    }
                    div {
                        class: "contact-social",
                        for link in SOCIAL_LINKS {
                            a {
                                key: "{link.label}",
                                href: link.url,
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "{link.label}"
                            }
                        }
                    }
                }

                Reveal {
                    class: "contact-form-wrap",
                    form {
                        class: "contact-form",
                        onsubmit,

                        for spec in CONTACT.fields {
                            if let Some(field) = ContactField::from_key(spec.name) {
                                FormInput {
                                    form,
                                    field,
                                    label: spec.label,
                                    placeholder: spec.placeholder,
                                    kind: spec.kind,
                                }
                            }
                        }

                        if let Some(message) = notice_text {
                            p { class: "form-notice", "{message}" }
                        }

                        button {
                            class: "btn btn-primary contact-submit",
                            r#type: "submit",
                            disabled: !can_submit,
                            if status == SubmitStatus::Submitting { "Sending..." } else { "{CONTACT.submit_label}" }
                        }

                        {
                            match status {
                                SubmitStatus::Success => rsx! {
                                    div {
                                        class: "form-banner success",
                                        "Message sent successfully! I'll get back to you soon."
                                    }
                                },
                                SubmitStatus::Error => rsx! {
                                    div {
                                        class: "form-banner error",
                                        "Failed to send message. Please try again or email me directly."
                                    }
                                },
                                _ => rsx! {},
                            }
                        }
                    }
                }
            }
        }
    }
}

/// One labelled form control bound to a contact field.
#[component]
fn FormInput(
    form: Signal<ContactForm>,
    field: ContactField,
    label: &'static str,
    placeholder: &'static str,
    kind: FieldKind,
) -> Element {
    let mut form = form;
    let value = form.read().draft.get(field).to_string();
    let id = format!("contact-{}", field.key());

    rsx! {
        div {
            class: "form-field",
            label { r#for: "{id}", "{label}" }
            {
                match kind {
                    FieldKind::TextArea { rows } => rsx! {
                        textarea {
                            id: "{id}",
                            name: field.key(),
                            rows: "{rows}",
                            required: true,
                            placeholder,
                            value: "{value}",
                            oninput: move |evt| form.write().set_field(field, evt.value()),
                        }
                    },
                    FieldKind::Email | FieldKind::Text => rsx! {
                        input {
                            id: "{id}",
                            name: field.key(),
                            r#type: if kind == FieldKind::Email { "email" } else { "text" },
                            required: true,
                            placeholder,
                            value: "{value}",
                            oninput: move |evt| form.write().set_field(field, evt.value()),
                        }
                    },
                }
            }
        }
    }
}
