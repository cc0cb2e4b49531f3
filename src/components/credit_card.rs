//! Credit Card Form - the card preview together with its data-entry form
//!
//! Owns all widget state in a single [`CardForm`] signal. Every focus, blur,
//! and change on a form control becomes a [`ControlEvent`]; the preview is
//! re-derived from the state on each render.

use cardflip_core::{month_options, year_options, CardForm, ControlEvent, FormControl};
use cardflip_ui::{FieldInput, FieldSelect, InputBlock};
use dioxus::prelude::*;

use crate::components::CardPreview;

/// Apply one control event to the shared form state.
fn dispatch(mut state: Signal<CardForm>, event: ControlEvent) {
    state.write().handle(event);
}

/// Option values offered by a selector control
fn selector_options(control: FormControl) -> Vec<String> {
    match control {
        FormControl::ExpirationMonth => month_options(),
        FormControl::ExpirationYear => year_options(),
        _ => Vec::new(),
    }
}

/// Credit Card Form Widget
///
/// Layout, top to bottom:
/// - Card preview (front: number, holder, expiry; back: CVC)
/// - Card number input
/// - Holder name input
/// - Expiration month and year selectors
/// - CVC input
#[component]
pub fn CreditCardForm() -> Element {
    let state = use_signal(CardForm::new);
    let view = state.read().view();

    rsx! {
        div { class: "card-form",
            CardPreview { view }

            div { class: "form-block",
                CardTextInput { state, control: FormControl::CardNumber }
                CardTextInput { state, control: FormControl::HolderName }
                InputBlock { label: FormControl::ExpirationMonth.label().to_string(),
                    CardSelect { state, control: FormControl::ExpirationMonth }
                    CardSelect { state, control: FormControl::ExpirationYear }
                }
                CardTextInput { state, control: FormControl::Cvc }
            }
        }
    }
}

/// Text input bound to one clamped field of the form
#[component]
fn CardTextInput(state: Signal<CardForm>, control: FormControl) -> Element {
    let value = control
        .field()
        .map(|field| state.read().values().get(field).to_string())
        .unwrap_or_default();

    rsx! {
        FieldInput {
            name: control.name().to_string(),
            label: control.label().to_string(),
            value,
            input_type: control.input_type().unwrap_or("text").to_string(),
            max_len: control.max_len(),
            oninput: move |raw: String| dispatch(state, ControlEvent::Change(control, raw)),
            onfocus: move |_| dispatch(state, ControlEvent::Focus(control)),
            onblur: move |_| dispatch(state, ControlEvent::Blur(control)),
        }
    }
}

/// Expiration month or year selector
#[component]
fn CardSelect(state: Signal<CardForm>, control: FormControl) -> Element {
    rsx! {
        FieldSelect {
            name: control.name().to_string(),
            placeholder: control.placeholder().unwrap_or_default().to_string(),
            options: selector_options(control),
            onchange: move |value: String| dispatch(state, ControlEvent::Change(control, value)),
            onfocus: move |_| dispatch(state, ControlEvent::Focus(control)),
            onblur: move |_| dispatch(state, ControlEvent::Blur(control)),
        }
    }
}
