//! Select Components
//!
//! Drop-down selectors and the labelled block that groups them.

use dioxus::prelude::*;

/// Labelled block wrapping one or more controls
#[component]
pub fn InputBlock(
    /// Label shown above the controls
    label: String,
    children: Element,
) -> Element {
    rsx! {
        div { class: "input-block",
            label { class: "input-label", "{label}" }
            div { class: "input-row", {children} }
        }
    }
}

/// Properties for the FieldSelect component
#[derive(Clone, PartialEq, Props)]
pub struct FieldSelectProps {
    /// Value of the `name` attribute
    pub name: String,
    /// Text of the leading option, which carries an empty value
    pub placeholder: String,
    /// Option values in display order; each value is also its label
    pub options: Vec<String>,
    /// Handler called with the newly selected value
    pub onchange: EventHandler<String>,
    /// Handler called when the select gains focus
    pub onfocus: EventHandler<()>,
    /// Handler called when the select loses focus
    pub onblur: EventHandler<()>,
}

/// Selector with an empty placeholder option followed by `options`
///
/// The selection lives in the DOM; the parent only hears about changes.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FieldSelect {
///         name: "expirationMonth".to_string(),
///         placeholder: "Month".to_string(),
///         options: vec!["1".to_string(), "2".to_string()],
///         onchange: move |s| month.set(s),
///         onfocus: move |_| {},
///         onblur: move |_| {},
///     }
/// }
/// ```
#[component]
pub fn FieldSelect(props: FieldSelectProps) -> Element {
    rsx! {
        select {
            class: "select-field",
            name: "{props.name}",
            onfocus: move |_| props.onfocus.call(()),
            onblur: move |_| props.onblur.call(()),
            onchange: move |e| props.onchange.call(e.value()),
            option { value: "", "{props.placeholder}" }
            for value in props.options.iter() {
                option {
                    key: "{value}",
                    value: "{value}",
                    "{value}"
                }
            }
        }
    }
}
