//! Notification submission rules
//!
//! Validation happens before any network call: a message without at least
//! one non-whitespace character is rejected locally and the sender is
//! never invoked.

use std::future::Future;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotifyError {
    #[error("Notification should contain at least 1 character.")]
    EmptyMessage,

    #[error("{0}")]
    Send(String),
}

/// Check a notification message; `Ok` carries the original text.
pub fn validate_message(message: &str) -> Result<&str, NotifyError> {
    if message.trim().is_empty() {
        Err(NotifyError::EmptyMessage)
    } else {
        Ok(message)
    }
}

/// Validate and, only then, hand the message to the sender exactly once.
pub async fn submit_notification<F, Fut>(message: &str, send: F) -> Result<(), NotifyError>
where
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<(), String>>,
{
    let message = validate_message(message)?;
    send(message.to_string()).await.map_err(NotifyError::Send)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[tokio::test]
    async fn whitespace_message_is_rejected_without_sending() {
        let calls = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&calls);

        let result = submit_notification("   ", |_message| {
            counter.set(counter.get() + 1);
            async { Ok(()) }
        })
        .await;

        assert_eq!(result, Err(NotifyError::EmptyMessage));
        assert_eq!(calls.get(), 0, "validation failures must not reach the network");
    }

    #[tokio::test]
    async fn valid_message_is_sent_exactly_once() {
        let calls = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&calls);

        let result = submit_notification("ok", |message| {
            counter.set(counter.get() + 1);
            assert_eq!(message, "ok");
            async { Ok(()) }
        })
        .await;

        assert_eq!(result, Ok(()));
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn sender_failure_surfaces_as_send_error() {
        let result = submit_notification("hello", |_message| async {
            Err("service responded with status 502".to_string())
        })
        .await;

        assert_eq!(
            result,
            Err(NotifyError::Send("service responded with status 502".to_string()))
        );
    }

    #[test]
    fn validation_keeps_surrounding_whitespace() {
        assert_eq!(validate_message(" ok "), Ok(" ok "));
        assert_eq!(validate_message(""), Err(NotifyError::EmptyMessage));
    }
}
