//! Card Preview Component
//!
//! Two stacked faces turned about the Y axis. The front carries the number,
//! holder, and expiry plus the focus outline; the back carries the CVC.
//! Both faces hide their back side, so the paired rotations read as a single
//! card flipping over.

use cardflip_core::{CardView, FocusPosition};
use dioxus::prelude::*;

/// Card preview rendered from a derived [`CardView`]
///
/// # Example
///
/// ```rust,ignore
/// let form = use_signal(CardForm::new);
///
/// rsx! {
///     CardPreview { view: form.read().view() }
/// }
/// ```
#[component]
pub fn CardPreview(view: CardView) -> Element {
    rsx! {
        div { class: "card-preview", "data-side": view.side.label(),
            CardFront {
                number: view.card_number.clone(),
                holder: view.holder_name.clone(),
                expiration: view.expiration.clone(),
                transform: view.rotation.front_css(),
                outline: view.outline,
            }
            CardBack {
                cvc: view.cvc.clone(),
                transform: view.rotation.back_css(),
            }
        }
    }
}

#[component]
pub fn CardFront(
    /// Grouped, filler-padded card number
    number: String,
    holder: String,
    expiration: String,
    /// Inline rotation for this face
    transform: String,
    outline: FocusPosition,
) -> Element {
    rsx! {
        div { class: "card-face card-face--front", style: "{transform}",
            FocusOutline { position: outline }
            div { class: "card-row" }
            div { class: "card-row",
                p { class: "card-number", "{number}" }
            }
            div { class: "card-row",
                div {
                    label { class: "card-label", "Card Holder" }
                    p { class: "card-holder", "{holder}" }
                }
                div {
                    label { class: "card-label", "Expiration Date" }
                    p { class: "card-expiration", "{expiration}" }
                }
            }
        }
    }
}

#[component]
pub fn CardBack(cvc: String, transform: String) -> Element {
    rsx! {
        div { class: "card-face card-face--back", style: "{transform}",
            p { class: "card-cvc", "{cvc}" }
        }
    }
}

/// Highlight drawn over the focused field.
///
/// Always rendered; hidden targets use opacity 0 so the outline can animate
/// between positions.
#[component]
pub fn FocusOutline(position: FocusPosition) -> Element {
    let style = position.css();

    rsx! {
        div {
            class: "focus-outline",
            style: "{style}",
            "aria-hidden": "true",
        }
    }
}
