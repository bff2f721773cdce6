//! Workspace contents shown in the panes.
//!
//! The layout core never looks inside these values; they only exist so the
//! presentation layer has something to list in each region.

use serde::{Deserialize, Serialize};

/// A request entry in the request list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestSummary {
    /// HTTP method, e.g. `GET`.
    pub method: String,
    /// Display name of the request.
    pub name: String,
    /// Target URL.
    pub url: String,
}

impl RequestSummary {
    /// Creates a request summary.
    #[must_use]
    pub fn new(method: impl Into<String>, name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Everything listed in the workbench panes and pickers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workspace {
    /// Request files in the file browser.
    #[serde(default)]
    pub files: Vec<String>,
    /// Requests defined by the selected file.
    #[serde(default)]
    pub requests: Vec<RequestSummary>,
    /// Workflows defined by the selected file.
    #[serde(default)]
    pub workflows: Vec<String>,
    /// Recently sent requests, newest first.
    #[serde(default)]
    pub history: Vec<String>,
    /// Available environments.
    #[serde(default)]
    pub environments: Vec<String>,
    /// Available themes.
    #[serde(default)]
    pub themes: Vec<String>,
}

impl Workspace {
    /// Creates an empty workspace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the workflow list has entries.
    ///
    /// The layout engine only reserves space for the workflow list when
    /// this is true.
    ///
    /// # Examples
    ///
    /// ```
    /// use volley_protocol::Workspace;
    ///
    /// let mut ws = Workspace::new();
    /// assert!(!ws.has_workflows());
    /// ws.workflows.push("login-then-fetch".to_string());
    /// assert!(ws.has_workflows());
    /// ```
    #[must_use]
    pub fn has_workflows(&self) -> bool {
        !self.workflows.is_empty()
    }

    /// Returns the entries listed by an overlay region.
    ///
    /// Non-overlay regions have no entries.
    #[must_use]
    pub fn overlay_entries(&self, region: crate::RegionId) -> &[String] {
        match region {
            crate::RegionId::History => &self.history,
            crate::RegionId::EnvironmentPicker => &self.environments,
            crate::RegionId::ThemePicker => &self.themes,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RegionId;

    #[test]
    fn overlay_entries_follow_region() {
        let ws = Workspace {
            history: vec!["GET /users".to_string()],
            environments: vec!["dev".to_string(), "prod".to_string()],
            themes: vec!["dark".to_string()],
            ..Default::default()
        };

        assert_eq!(ws.overlay_entries(RegionId::History).len(), 1);
        assert_eq!(ws.overlay_entries(RegionId::EnvironmentPicker).len(), 2);
        assert_eq!(ws.overlay_entries(RegionId::ThemePicker), ["dark"]);
        assert!(ws.overlay_entries(RegionId::Editor).is_empty());
    }

    #[test]
    fn deserialize_with_defaults() {
        let ws: Workspace = serde_json::from_str("{}").unwrap();
        assert_eq!(ws, Workspace::new());
    }
}
