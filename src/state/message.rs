//! Message region shown under the contact form

use tokio::time::{Duration, Instant};

/// How long a success message stays on screen unless configured otherwise
pub const DEFAULT_SUCCESS_TTL: Duration = Duration::from_secs(10);

/// Category of a form message, decides its colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// A user-facing message about the last submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMessage {
    pub kind: MessageKind,
    pub text: String,
    /// Success messages disappear at this instant; errors stay until replaced
    pub expires_at: Option<Instant>,
}

impl FormMessage {
    pub fn success(text: impl Into<String>, ttl: Duration) -> Self {
        Self {
            kind: MessageKind::Success,
            text: text.into(),
            expires_at: Some(Instant::now() + ttl),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
            expires_at: None,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|deadline| now >= deadline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_success_expires_after_ttl() {
        let message = FormMessage::success("Thanks!", DEFAULT_SUCCESS_TTL);
        assert!(!message.is_expired(Instant::now()));

        tokio::time::advance(Duration::from_secs(9)).await;
        assert!(!message.is_expired(Instant::now()));

        tokio::time::advance(Duration::from_secs(1)).await;
        assert!(message.is_expired(Instant::now()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_error_never_expires() {
        let message = FormMessage::error("Nope");
        tokio::time::advance(Duration::from_secs(3600)).await;
        assert!(!message.is_expired(Instant::now()));
        assert_eq!(message.kind, MessageKind::Error);
    }
}
