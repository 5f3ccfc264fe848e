//! Contact section: owner details and the message form.

use dioxus::prelude::*;
use webfolio_core::form::{submit, SUCCESS_MESSAGE};
use webfolio_core::{ContactForm, CoreError, FormField, LogSink, ValidationError};
use webfolio_ui::{Button, ButtonVariant, Input, SectionTitle, TextArea};

use crate::components::PageSection;
use crate::context::use_site;

/// Result of the last submit, shown under the form
#[derive(Clone, Debug, PartialEq)]
enum Notice {
    Sent,
    Rejected(ValidationError),
    Failed(String),
}

impl Notice {
    fn class(&self) -> &'static str {
        match self {
            Notice::Sent => "form-notice success",
            _ => "form-notice error",
        }
    }

    fn text(&self) -> String {
        match self {
            Notice::Sent => SUCCESS_MESSAGE.to_string(),
            Notice::Rejected(e) => e.to_string(),
            Notice::Failed(msg) => msg.clone(),
        }
    }

    fn flags(&self, field: FormField) -> bool {
        match self {
            Notice::Rejected(ValidationError::MissingField(missing)) => *missing == field,
            Notice::Rejected(ValidationError::MalformedEmail) => field == FormField::Email,
            _ => false,
        }
    }
}

#[component]
pub fn Contact() -> Element {
    let site = use_site();
    let mut form = use_signal(ContactForm::default);
    let mut notice = use_signal(|| None::<Notice>);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let outcome = submit(&mut *form.write(), &LogSink);
        let next = match outcome {
            Ok(()) => Notice::Sent,
            Err(CoreError::Validation(e)) => Notice::Rejected(e),
            Err(e) => {
                tracing::error!("Message not delivered: {}", e);
                Notice::Failed("Your message could not be sent.".to_string())
            }
        };
        notice.set(Some(next));
    };

    let current = notice();
    let invalid = |field: FormField| current.as_ref().is_some_and(|n| n.flags(field));
    let values = form();
    let owner = &site.config.owner;

    rsx! {
        PageSection { id: "contact".to_string(),
            SectionTitle {
                title: "Contact Me".to_string(),
                subtitle: "Have a project in mind? Let's talk.".to_string(),
            }
            div { class: "contact-content",
                div { class: "contact-info",
                    div { class: "contact-item", h4 { "Email" } p { "{owner.email}" } }
                    div { class: "contact-item", h4 { "Phone" } p { "{owner.phone}" } }
                    div { class: "contact-item", h4 { "Location" } p { "{owner.location}" } }
                }
                form { id: "contact-form", class: "contact-form", novalidate: true, onsubmit: on_submit,
                    Input {
                        id: "name".to_string(),
                        value: values.name.clone(),
                        placeholder: "Your Name".to_string(),
                        invalid: invalid(FormField::Name),
                        oninput: move |v| form.write().name = v,
                    }
                    Input {
                        id: "email".to_string(),
                        input_type: "email".to_string(),
                        value: values.email.clone(),
                        placeholder: "Your Email".to_string(),
                        invalid: invalid(FormField::Email),
                        oninput: move |v| form.write().email = v,
                    }
                    Input {
                        id: "subject".to_string(),
                        value: values.subject.clone(),
                        placeholder: "Subject".to_string(),
                        invalid: invalid(FormField::Subject),
                        oninput: move |v| form.write().subject = v,
                    }
                    TextArea {
                        id: "message".to_string(),
                        value: values.message.clone(),
                        placeholder: "Your Message".to_string(),
                        invalid: invalid(FormField::Message),
                        oninput: move |v| form.write().message = v,
                    }
                    Button { variant: ButtonVariant::Primary, button_type: "submit".to_string(), "Send Message" }
                    if let Some(n) = current.as_ref() {
                        {
                            let text = n.text();
                            rsx! { p { class: n.class(), role: "alert", "{text}" } }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_flags_the_offending_field() {
        let missing = Notice::Rejected(ValidationError::MissingField(FormField::Subject));
        assert!(missing.flags(FormField::Subject));
        assert!(!missing.flags(FormField::Name));

        let malformed = Notice::Rejected(ValidationError::MalformedEmail);
        assert!(malformed.flags(FormField::Email));
        assert!(!malformed.flags(FormField::Message));
        assert!(!Notice::Sent.flags(FormField::Email));
    }

    #[test]
    fn notice_text_matches_page_copy() {
        assert_eq!(Notice::Sent.text(), SUCCESS_MESSAGE);
        assert_eq!(
            Notice::Rejected(ValidationError::MalformedEmail).text(),
            "Please enter a valid email address"
        );
        assert_eq!(Notice::Sent.class(), "form-notice success");
    }
}
