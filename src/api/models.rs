use serde::{Deserialize, Serialize};

/// A single playable item. Immutable once created; sourced from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub title: String,
    pub artist: String,
    /// Locator for the audio resource.
    pub url: String,
    #[serde(default)]
    pub artwork: Option<String>,
}

pub fn format_duration(seconds: u32) -> String {
    let mins = seconds / 60;
    let secs = seconds % 60;
    format!("{}:{:02}", mins, secs)
}
