//! Redacting wrapper for Action logging.
//!
//! `RedactedAction` implements `Debug` so that line data and backend error
//! text never reach the log file. Always log `RedactedAction(&action)`
//! instead of `?action`.
//!
//! # Invariants
//!
//! - Variants carrying API payloads are handled explicitly and print sizes.
//! - Error payloads print only their kind, never the message.
//! - Payload-free variants fall through to the default `Debug`.

use linedesk_client::ClientError;

use crate::action::variants::Action;

/// Short, message-free label for a client error.
fn error_kind(err: &ClientError) -> String {
    match err {
        ClientError::AuthFailed(_) => "AuthFailed".to_string(),
        ClientError::HttpError(_) => "HttpError".to_string(),
        ClientError::ApiError { status, .. } => format!("ApiError({status})"),
        ClientError::SessionExpired { .. } => "SessionExpired".to_string(),
        ClientError::InvalidResponse(_) => "InvalidResponse".to_string(),
        ClientError::InvalidUrl(_) => "InvalidUrl".to_string(),
    }
}

/// Redacted wrapper for Action that prevents sensitive payloads from being logged.
///
/// # Example
/// ```
/// use linedesk_tui::action::{Action, RedactedAction};
///
/// let action = Action::LinesLoaded { generation: 3, result: Ok(Vec::new()) };
/// assert_eq!(
///     format!("{:?}", RedactedAction(&action)),
///     "LinesLoaded(gen=3, Ok(<0 items>))"
/// );
/// ```
pub struct RedactedAction<'a>(pub &'a Action);

impl std::fmt::Debug for RedactedAction<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Action::LinesLoaded { generation, result } => match result {
                Ok(lines) => write!(
                    f,
                    "LinesLoaded(gen={generation}, Ok(<{} items>))",
                    lines.len()
                ),
                Err(e) => write!(f, "LinesLoaded(gen={generation}, Err({}))", error_kind(e)),
            },
            Action::LoggedOut(result) => match result {
                Ok(()) => write!(f, "LoggedOut(Ok)"),
                Err(e) => write!(f, "LoggedOut(Err({}))", error_kind(e)),
            },
            Action::FetchLines {
                generation,
                reset,
                cancel,
            } => write!(
                f,
                "FetchLines(gen={generation}, reset={reset}, cancelled={})",
                cancel.is_cancelled()
            ),
            other => write!(f, "{other:?}"),
        }
    }
}
