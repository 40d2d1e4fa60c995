//! View components for the application.

mod form;
mod header;
mod results;
mod toast;

pub use form::view_form;
pub use header::view_header;
pub use results::view_results;
pub use toast::view_toast;
