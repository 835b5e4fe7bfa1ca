//! Redaction tests for `RedactedAction`.

use super::*;
use crate::app::Route;
use linedesk_client::{ClientError, Line};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

fn redacted(action: &Action) -> String {
    format!("{:?}", RedactedAction(action))
}

fn secret_line() -> Line {
    Line {
        id: 42,
        number: "555-0100".to_string(),
        sim_slot: 1,
        device_mark: "Pixel-7".to_string(),
        endpoint: "sip.example.com".to_string(),
    }
}

#[test]
fn test_lines_loaded_hides_line_data() {
    let action = Action::LinesLoaded {
        generation: 7,
        result: Ok(vec![secret_line(), secret_line()]),
    };
    let output = redacted(&action);

    assert!(!output.contains("555-0100"));
    assert!(!output.contains("Pixel-7"));
    assert!(!output.contains("sip.example.com"));
    assert_eq!(output, "LinesLoaded(gen=7, Ok(<2 items>))");
}

#[test]
fn test_lines_loaded_error_hides_message() {
    let action = Action::LinesLoaded {
        generation: 1,
        result: Err(Arc::new(ClientError::ApiError {
            status: 500,
            url: "https://lines.internal/api/lines".to_string(),
            message: "db password rejected".to_string(),
        })),
    };
    let output = redacted(&action);

    assert!(!output.contains("db password"));
    assert!(!output.contains("lines.internal"));
    assert!(output.contains("ApiError(500)"));
}

#[test]
fn test_logged_out_redaction() {
    let ok = Action::LoggedOut(Ok(()));
    assert_eq!(redacted(&ok), "LoggedOut(Ok)");

    let err = Action::LoggedOut(Err(Arc::new(ClientError::AuthFailed(
        "token abc123 invalid".to_string(),
    ))));
    let output = redacted(&err);
    assert!(!output.contains("abc123"));
    assert_eq!(output, "LoggedOut(Err(AuthFailed))");
}

#[test]
fn test_fetch_lines_shows_generation_and_cancel_state() {
    let cancel = CancellationToken::new();
    let action = Action::FetchLines {
        generation: 4,
        reset: true,
        cancel: cancel.clone(),
    };
    assert_eq!(
        redacted(&action),
        "FetchLines(gen=4, reset=true, cancelled=false)"
    );

    cancel.cancel();
    assert!(redacted(&action).contains("cancelled=true"));
}

#[test]
fn test_simple_variants_use_default_debug() {
    assert_eq!(redacted(&Action::Quit), "Quit");
    assert_eq!(redacted(&Action::Logout), "Logout");
    assert_eq!(
        redacted(&Action::Navigate(Route::LineDetail { line_id: 9 })),
        "Navigate(LineDetail { line_id: 9 })"
    );
}
