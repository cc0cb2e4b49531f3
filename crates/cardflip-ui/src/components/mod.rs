//! Reusable form controls

mod input;
mod select;

pub use input::*;
pub use select::*;
