//! Visual theme for Card Flip.

mod colors;
mod styles;


/// Full stylesheet: palette variables followed by the global rules
pub fn stylesheet() -> String {
    format!("{}{}", colors::root_variables(), styles::GLOBAL_STYLES)
}
