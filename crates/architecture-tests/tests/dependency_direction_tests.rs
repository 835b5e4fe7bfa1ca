//! Crate layering: config <- client <- tui.
//!
//! Lower crates must never depend on higher ones.

use architecture_tests::workspace_root;
use std::fs;

fn manifest(crate_dir: &str) -> String {
    let path = workspace_root().join("crates").join(crate_dir).join("Cargo.toml");
    fs::read_to_string(&path).unwrap_or_else(|e| panic!("read {}: {e}", path.display()))
}

#[test]
fn test_config_depends_on_no_workspace_crate() {
    let config = manifest("config");
    assert!(!config.contains("linedesk-client"));
    assert!(!config.contains("linedesk-tui"));
}

#[test]
fn test_client_does_not_depend_on_tui() {
    let client = manifest("client");
    assert!(client.contains("linedesk-config"));
    assert!(!client.contains("linedesk-tui"));
}

#[test]
fn test_ui_crates_stay_out_of_libraries() {
    for crate_dir in ["config", "client"] {
        let manifest = manifest(crate_dir);
        for ui_crate in ["ratatui", "crossterm"] {
            assert!(
                !manifest.contains(ui_crate),
                "{crate_dir} must not depend on {ui_crate}"
            );
        }
    }
}
