//! Input components for user interaction.
//!
//! - **FormField**: labelled text inputs with inline validation errors
//! - **SelectField**: labelled drop-downs
//! - **SearchBar**: filter inputs with a Search button

mod form_field;
mod search_bar;

pub use form_field::{checkbox_row, field_error, form_field, secure_field, select_field};
pub use search_bar::search_input;
