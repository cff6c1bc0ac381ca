//! Artifact store wire types

use serde::{Deserialize, Serialize};

/// A resolved, versioned artifact as reported by the tracker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactEntry {
    pub name: String,
    pub version: String,
    /// Where the artifact's payload can be fetched from
    pub download_url: Option<String>,
    /// Where a freshly registered artifact's payload must be uploaded to
    pub upload_url: Option<String>,
}

/// Caller-supplied identity for a new artifact.
#[derive(Debug, Clone, Serialize)]
pub struct ArtifactSpec {
    pub name: String,
    #[serde(rename = "type")]
    pub artifact_type: String,
    pub description: String,
}

impl ArtifactEntry {
    /// "name:version" form used in logs and reports
    pub fn qualified_name(&self) -> String {
        format!("{}:{}", self.name, self.version)
    }
}
