//! Form rendering

mod contact_form;
mod field_renderer;

pub use contact_form::draw;
