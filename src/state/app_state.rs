//! Application state definitions

use super::forms::{ContactForm, Form};
use super::message::FormMessage;
use crate::coordinator::SubmitControl;
use crate::validation;
use std::sync::Arc;
use tokio::time::Instant;

/// Everything the UI draws
#[derive(Debug)]
pub struct AppState {
    pub form: ContactForm,
    /// Submit button, shared with any in-flight attempt
    pub submit_control: Arc<SubmitControl>,
    /// Message region under the form
    pub message: Option<FormMessage>,
    /// Name of the active transport, for the status bar
    pub transport_name: &'static str,
    /// Whether the help overlay is open
    pub show_help: bool,
}

impl AppState {
    pub fn new(submit_control: Arc<SubmitControl>, transport_name: &'static str) -> Self {
        Self {
            form: ContactForm::new(),
            submit_control,
            message: None,
            transport_name,
            show_help: false,
        }
    }

    /// A submission is in flight; editing is locked until it comes back
    pub fn is_busy(&self) -> bool {
        self.submit_control.is_loading()
    }

    /// Move to next form field, checking the one being left
    pub fn next_form_field(&mut self) {
        self.blur_active_field();
        self.form.next_field();
    }

    /// Move to previous form field, checking the one being left
    pub fn prev_form_field(&mut self) {
        self.blur_active_field();
        self.form.prev_field();
    }

    fn blur_active_field(&mut self) {
        if let Some(field) = self.form.get_active_field_mut() {
            validation::on_blur(field);
        }
    }

    /// Type a character into the active field
    pub fn form_input_char(&mut self, c: char) {
        if self.is_busy() {
            return;
        }
        if let Some(field) = self.form.get_active_field_mut() {
            field.push_char(c);
            validation::on_input(field);
        }
    }

    /// Enter adds a line break in multiline fields
    pub fn form_newline(&mut self) {
        if self.is_busy() {
            return;
        }
        if let Some(field) = self.form.get_active_field_mut() {
            if field.is_multiline {
                field.push_char('\n');
                validation::on_input(field);
            }
        }
    }

    /// Delete the last character of the active field
    pub fn form_backspace(&mut self) {
        if self.is_busy() {
            return;
        }
        if let Some(field) = self.form.get_active_field_mut() {
            field.pop_char();
            validation::on_input(field);
        }
    }

    /// Left/right on a choice field
    pub fn form_cycle_choice(&mut self, forward: bool) {
        if self.is_busy() {
            return;
        }
        if let Some(field) = self.form.get_active_field_mut() {
            if forward {
                field.next_choice();
            } else {
                field.prev_choice();
            }
            validation::on_input(field);
        }
    }

    /// Show a message, replacing whatever was there
    pub fn set_message(&mut self, message: FormMessage) {
        self.message = Some(message);
    }

    /// Drop the message once its display time is over.
    /// Returns true if a message was removed.
    pub fn clear_expired_message(&mut self, now: Instant) -> bool {
        if self.message.as_ref().is_some_and(|m| m.is_expired(now)) {
            self.message = None;
            return true;
        }
        false
    }
}
