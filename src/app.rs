//! Main application state and logic

use crate::config::ContactConfig;
use crate::coordinator::{Delivered, SubmissionCoordinator, SubmitControl, SubmitStep};
use crate::platform::SEND_ENTER_MODIFIER;
use crate::state::{AppState, Form};
use crate::transport::{self, Transport};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;

/// Second Ctrl+C within this window quits
const QUIT_CONFIRM_WINDOW: Duration = Duration::from_secs(1);

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    coordinator: SubmissionCoordinator<dyn Transport>,
    /// Delivery running on a background task
    pending: Option<JoinHandle<Delivered>>,
    /// Whether the app should quit
    quit: bool,
    /// Timestamp of last Ctrl+C press for double-tap quit
    pub last_ctrl_c: Option<Instant>,
    /// "Press Ctrl+C again" hint for the status bar
    pub quit_hint: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &ContactConfig) -> Result<Self> {
        let transport = transport::from_config(config)?;
        Ok(Self::with_transport(transport, config.message_ttl()))
    }

    pub fn with_transport(transport: Arc<dyn Transport>, message_ttl: Duration) -> Self {
        let transport_name = transport.name();
        let coordinator = SubmissionCoordinator::new(
            transport,
            Arc::new(SubmitControl::default()),
            message_ttl,
        );
        Self {
            state: AppState::new(Arc::clone(coordinator.control()), transport_name),
            coordinator,
            pending: None,
            quit: false,
            last_ctrl_c: None,
            quit_hint: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.handle_ctrl_c();
            return Ok(());
        }
        self.quit_hint = None;

        // Help overlay is modal
        if self.state.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::F(1)) {
                self.state.show_help = false;
            }
            return Ok(());
        }

        let is_send_enter = key.code == KeyCode::Enter && key.modifiers.contains(SEND_ENTER_MODIFIER);
        if is_send_enter
            || (key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            self.submit();
            return Ok(());
        }

        match key.code {
            KeyCode::F(1) => self.state.show_help = true,
            KeyCode::Tab | KeyCode::Down => self.state.next_form_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_form_field(),
            KeyCode::Enter => {
                if self.state.form.is_submit_row_active() {
                    self.submit();
                } else if self.active_field_is_multiline() {
                    self.state.form_newline();
                } else {
                    self.state.next_form_field();
                }
            }
            KeyCode::Left => self.state.form_cycle_choice(false),
            KeyCode::Right => self.state.form_cycle_choice(true),
            KeyCode::Backspace => self.state.form_backspace(),
            KeyCode::Char(c) => {
                if !key.modifiers.contains(KeyModifiers::CONTROL) {
                    self.state.form_input_char(c);
                }
            }
            _ => {}
        }

        Ok(())
    }

    fn active_field_is_multiline(&self) -> bool {
        let form = &self.state.form;
        form.get_field(form.active_field())
            .is_some_and(|f| f.is_multiline)
    }

    fn handle_ctrl_c(&mut self) {
        let now = Instant::now();
        if self
            .last_ctrl_c
            .is_some_and(|t| now.duration_since(t) < QUIT_CONFIRM_WINDOW)
        {
            if let Some(handle) = self.pending.take() {
                tracing::warn!("Quitting with a submission still in flight");
                handle.abort();
            }
            self.quit = true;
        } else {
            self.last_ctrl_c = Some(now);
            self.quit_hint = Some("Press Ctrl+C again to quit".to_string());
        }
    }

    /// Start a submit attempt. The delivery runs on its own task and is
    /// picked up by [`App::poll_submission`].
    pub fn submit(&mut self) {
        if self.pending.is_some() {
            return;
        }

        match self.coordinator.begin(&mut self.state.form) {
            SubmitStep::Ignored => {}
            SubmitStep::Rejected(message) => self.state.set_message(message),
            SubmitStep::Submitting(in_flight) => {
                self.state.message = None;
                self.pending = Some(tokio::spawn(in_flight.deliver()));
            }
        }
    }

    /// Apply the delivery result once its task is done
    pub async fn poll_submission(&mut self) {
        if !self.pending.as_ref().is_some_and(|h| h.is_finished()) {
            return;
        }
        let Some(handle) = self.pending.take() else {
            return;
        };

        let message = match handle.await {
            Ok(delivered) => self.coordinator.finish(&mut self.state.form, delivered),
            Err(err) => self.coordinator.finish_aborted(&err),
        };
        self.state.set_message(message);
    }

    /// Per-frame housekeeping: expire the success message and the quit hint
    pub fn tick(&mut self) {
        self.state.clear_expired_message(tokio::time::Instant::now());

        if self
            .last_ctrl_c
            .is_some_and(|t| t.elapsed() >= QUIT_CONFIRM_WINDOW)
        {
            self.last_ctrl_c = None;
            self.quit_hint = None;
        }
    }
}
