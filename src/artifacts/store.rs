use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::{StoreError, StoreResult};

/// Reference to one published artifact version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtifactRef {
    pub name: String,
    pub version: u32,
}

impl ArtifactRef {
    /// Canonical reference string, `name:vN`.
    pub fn reference(&self) -> String {
        format!("{}:v{}", self.name, self.version)
    }
}

impl fmt::Display for ArtifactRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:v{}", self.name, self.version)
    }
}

/// Metadata stored beside every artifact version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    pub name: String,
    pub version: u32,
    #[serde(rename = "type")]
    pub artifact_type: String,
    pub description: String,
    /// File name of the backing file inside the version directory.
    pub file_name: String,
    /// SHA-256 of the backing file content, hex-encoded.
    pub digest: String,
    pub created_at: DateTime<Utc>,
}

/// Version selector within an artifact lineage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum VersionSpec {
    Latest,
    Version(u32),
}

/// Interface between pipeline steps and the artifact tracking backend.
///
/// Published artifacts are immutable: publishing under an existing name
/// creates a new version, never overwrites an old one.
pub trait ArtifactStore {
    /// Resolve `name`, `name:latest` or `name:vN` to the local path of the
    /// version's backing file.
    fn resolve(&self, reference: &str) -> StoreResult<PathBuf>;

    /// Register `file` as the next version of `name`, tagged with a type and
    /// a human-readable description.
    fn publish(
        &self,
        file: &Path,
        name: &str,
        artifact_type: &str,
        description: &str,
    ) -> StoreResult<ArtifactRef>;
}

/// Split a reference string into artifact name and version selector.
pub(crate) fn parse_reference(reference: &str) -> StoreResult<(String, VersionSpec)> {
    let (name, spec) = match reference.rsplit_once(':') {
        None => (reference, VersionSpec::Latest),
        Some((name, "latest")) => (name, VersionSpec::Latest),
        Some((name, version)) => {
            let number = version
                .strip_prefix('v')
                .and_then(|v| v.parse::<u32>().ok())
                .ok_or_else(|| StoreError::InvalidReference {
                    reference: reference.to_string(),
                    reason: format!("unknown version or alias '{version}'"),
                })?;
            (name, VersionSpec::Version(number))
        }
    };

    if name.is_empty() {
        return Err(StoreError::InvalidReference {
            reference: reference.to_string(),
            reason: "empty artifact name".to_string(),
        });
    }

    Ok((name.to_string(), spec))
}
