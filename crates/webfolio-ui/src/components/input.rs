//! Form Field Components
//!
//! Labelled text inputs and textareas for the contact form.

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Element id, also used for the label association
    pub id: String,
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Input label text
    #[props(default)]
    pub label: Option<String>,
    /// Input type (text, email, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Marks the field as failing validation
    #[props(default = false)]
    pub invalid: bool,
}

/// Class list for a form control
pub fn control_class(invalid: bool) -> &'static str {
    if invalid {
        "form-control invalid"
    } else {
        "form-control"
    }
}

/// Labelled single-line input
///
/// # Example
///
/// ```rust,ignore
/// let mut name = use_signal(String::new);
///
/// rsx! {
///     Input {
///         id: "name".to_string(),
///         value: name(),
///         oninput: move |s| name.set(s),
///         placeholder: "Your Name".to_string()
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    rsx! {
        div { class: "form-group",
            if let Some(label) = &props.label {
                label { r#for: "{props.id}", "{label}" }
            }
            input {
                id: "{props.id}",
                name: "{props.id}",
                class: control_class(props.invalid),
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Properties for the TextArea component
#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    /// Element id, also used for the label association
    pub id: String,
    /// Current textarea value
    pub value: String,
    /// Handler called when textarea changes
    pub oninput: EventHandler<String>,
    /// Placeholder text
    #[props(default)]
    pub placeholder: Option<String>,
    /// Textarea label
    #[props(default)]
    pub label: Option<String>,
    /// Number of visible rows
    #[props(default = 5)]
    pub rows: u32,
    /// Marks the field as failing validation
    #[props(default = false)]
    pub invalid: bool,
}

/// Labelled multi-line input
#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    rsx! {
        div { class: "form-group",
            if let Some(label) = &props.label {
                label { r#for: "{props.id}", "{label}" }
            }
            textarea {
                id: "{props.id}",
                name: "{props.id}",
                class: control_class(props.invalid),
                rows: "{props.rows}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                value: "{props.value}",
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_class_marks_invalid() {
        assert_eq!(control_class(false), "form-control");
        assert_eq!(control_class(true), "form-control invalid");
    }
}
