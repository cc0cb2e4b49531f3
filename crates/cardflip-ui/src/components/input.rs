//! Input Field Components
//!
//! Labelled text inputs for the card form.
//! Features:
//! - Controlled value, owned by the parent
//! - Focus and blur reported so the parent can move the card outline
//! - Optional native `maxlength`

use dioxus::prelude::*;

/// Properties for the FieldInput component
#[derive(Clone, PartialEq, Props)]
pub struct FieldInputProps {
    /// Value of the `name` attribute, also used to derive the element id
    pub name: String,
    /// Label text shown above the input
    pub label: String,
    /// Current input value
    pub value: String,
    /// Input type (text, number, ...)
    #[props(default = "text".to_string())]
    pub input_type: String,
    /// Native length limit
    #[props(default)]
    pub max_len: Option<usize>,
    /// Handler called with each new raw value
    pub oninput: EventHandler<String>,
    /// Handler called when the input gains focus
    pub onfocus: EventHandler<()>,
    /// Handler called when the input loses focus
    pub onblur: EventHandler<()>,
}

/// Labelled input that reports focus, blur, and input to its parent
///
/// # Example
///
/// ```rust,ignore
/// let mut number = use_signal(String::new);
///
/// rsx! {
///     FieldInput {
///         name: "cardNumber".to_string(),
///         label: "Card Number".to_string(),
///         value: number(),
///         input_type: "number".to_string(),
///         max_len: Some(16),
///         oninput: move |s| number.set(s),
///         onfocus: move |_| {},
///         onblur: move |_| {},
///     }
/// }
/// ```
#[component]
pub fn FieldInput(props: FieldInputProps) -> Element {
    let id = field_id(&props.name);
    let max_len = props.max_len.map(|len| len.to_string());

    rsx! {
        div { class: "input-block",
            label { class: "input-label", r#for: "{id}", "{props.label}" }
            input {
                id: "{id}",
                class: "input-field",
                name: "{props.name}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                maxlength: max_len,
                onfocus: move |_| props.onfocus.call(()),
                onblur: move |_| props.onblur.call(()),
                oninput: move |e| props.oninput.call(e.value()),
            }
        }
    }
}

/// Element id for a control name, so labels can point at their control
pub fn field_id(name: &str) -> String {
    format!("card-form-{}", name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_id_is_prefixed() {
        assert_eq!(field_id("cardNumber"), "card-form-cardNumber");
        assert_eq!(field_id("cvc"), "card-form-cvc");
    }
}
