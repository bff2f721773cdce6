//! Dummy data generation for testing and demonstration.
//!
//! This module provides a sample workspace so the TUI has realistic
//! entries to show in every pane and picker.
//!
//! # Examples
//!
//! ```
//! use volley_protocol::dummy::dummy_workspace;
//!
//! let ws = dummy_workspace();
//! assert!(ws.has_workflows());
//! assert_eq!(ws.requests.len(), 6);
//! ```

use crate::workspace::{RequestSummary, Workspace};

/// Creates a sample workspace with files, requests, workflows and picker
/// entries.
#[must_use]
pub fn dummy_workspace() -> Workspace {
    Workspace {
        files: vec![
            "auth.http".to_string(),
            "users.http".to_string(),
            "billing/invoices.http".to_string(),
            "billing/refunds.http".to_string(),
        ],
        requests: vec![
            RequestSummary::new("POST", "login", "https://api.example.com/auth/login"),
            RequestSummary::new("POST", "refresh", "https://api.example.com/auth/refresh"),
            RequestSummary::new("GET", "list users", "https://api.example.com/users"),
            RequestSummary::new("GET", "get user", "https://api.example.com/users/{{id}}"),
            RequestSummary::new("PATCH", "rename user", "https://api.example.com/users/{{id}}"),
            RequestSummary::new("DELETE", "remove user", "https://api.example.com/users/{{id}}"),
        ],
        workflows: vec![
            "login → list users".to_string(),
            "create → rename → remove".to_string(),
        ],
        history: vec![
            "200 GET list users (142 ms)".to_string(),
            "201 POST login (88 ms)".to_string(),
            "404 GET get user (35 ms)".to_string(),
            "401 POST refresh (41 ms)".to_string(),
        ],
        environments: vec![
            "local".to_string(),
            "staging".to_string(),
            "production".to_string(),
        ],
        themes: vec![
            "default".to_string(),
            "high-contrast".to_string(),
            "solarized".to_string(),
            "monochrome".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dummy_workspace_fills_every_list() {
        let ws = dummy_workspace();
        assert!(!ws.files.is_empty());
        assert!(!ws.requests.is_empty());
        assert!(!ws.history.is_empty());
        assert!(!ws.environments.is_empty());
        assert!(!ws.themes.is_empty());
        assert!(ws.has_workflows());
    }

    #[test]
    fn dummy_workspace_is_deterministic() {
        assert_eq!(dummy_workspace(), dummy_workspace());
    }
}
