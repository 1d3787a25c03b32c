//! Form domain layer
//!
//! Field values, invalid markers and focus handling for the contact form.
//! Rendering lives in `ui::form`; checks live in `validation`.

mod field;
mod form_state;

pub use field::{is_form_whitespace, FieldKind, FieldValue, FormField};
pub use form_state::{ContactForm, Form, FIELD_COUNT};
