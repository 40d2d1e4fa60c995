//! Widget styles: palette, buttons, containers and inputs.

mod buttons;
mod containers;
mod inputs;
pub mod palette;
mod shadows;

pub use buttons::{
    accent_button_style, ghost_button_style, link_button_style, primary_button_style,
};
pub use containers::{
    background_style, badge_style, card_style, results_style, toast_error_style,
    toast_success_style,
};
pub use inputs::{field_input_style, invalid_input_style, scrollable_style};
