//! Filesystem-backed artifact store.
//!
//! Layout: `root/<name>/v<N>/{<file>, metadata.json}`. Version numbering is
//! dense per artifact name; `latest` resolves to the highest version whose
//! metadata file exists. Metadata is written only after the backing file copy
//! completes, so a half-written version is never visible to `resolve`.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use tracing::debug;

use super::config::StoreConfig;
use super::digest::content_digest;
use super::error::{StoreError, StoreResult};
use super::store::{parse_reference, ArtifactMetadata, ArtifactRef, ArtifactStore, VersionSpec};

const METADATA_FILE: &str = "metadata.json";

/// Artifact store rooted at a local directory.
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    /// Open a store at `root`, creating the directory if needed.
    pub fn new(root: impl Into<PathBuf>) -> StoreResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn from_config(config: &StoreConfig) -> StoreResult<Self> {
        Self::new(&config.root)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Metadata of the referenced artifact version.
    pub fn metadata(&self, reference: &str) -> StoreResult<ArtifactMetadata> {
        let (name, spec) = parse_reference(reference)?;
        let version = self.resolve_version(&name, spec, reference)?;
        self.read_metadata(&name, version)
    }

    fn artifact_dir(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    fn version_dir(&self, name: &str, version: u32) -> PathBuf {
        self.artifact_dir(name).join(format!("v{version}"))
    }

    fn read_metadata(&self, name: &str, version: u32) -> StoreResult<ArtifactMetadata> {
        let path = self.version_dir(name, version).join(METADATA_FILE);
        if !path.exists() {
            return Err(StoreError::NotFound(format!("{name}:v{version}")));
        }
        let content = fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Highest committed version of `name`, or `None` for an unknown name.
    fn latest_version(&self, name: &str) -> StoreResult<Option<u32>> {
        let dir = self.artifact_dir(name);
        if !dir.exists() {
            return Ok(None);
        }

        let mut latest = None;
        for entry in fs::read_dir(&dir)? {
            let entry = entry?;
            let file_name = entry.file_name();
            let Some(version) = file_name
                .to_str()
                .and_then(|s| s.strip_prefix('v'))
                .and_then(|s| s.parse::<u32>().ok())
            else {
                continue;
            };
            // Versions without committed metadata are invisible.
            if !entry.path().join(METADATA_FILE).exists() {
                continue;
            }
            latest = Some(latest.map_or(version, |v: u32| v.max(version)));
        }
        Ok(latest)
    }

    fn resolve_version(
        &self,
        name: &str,
        spec: VersionSpec,
        reference: &str,
    ) -> StoreResult<u32> {
        match spec {
            VersionSpec::Version(version) => Ok(version),
            VersionSpec::Latest => self
                .latest_version(name)?
                .ok_or_else(|| StoreError::NotFound(reference.to_string())),
        }
    }
}

impl ArtifactStore for LocalStore {
    fn resolve(&self, reference: &str) -> StoreResult<PathBuf> {
        let (name, spec) = parse_reference(reference)?;
        let version = self.resolve_version(&name, spec, reference)?;
        let metadata = self.read_metadata(&name, version)?;

        let path = self.version_dir(&name, version).join(&metadata.file_name);
        if !path.exists() {
            return Err(StoreError::NotFound(format!(
                "backing file for {reference} is missing"
            )));
        }
        Ok(path)
    }

    fn publish(
        &self,
        file: &Path,
        name: &str,
        artifact_type: &str,
        description: &str,
    ) -> StoreResult<ArtifactRef> {
        validate_artifact_name(name)?;

        let file_name = file
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                StoreError::Configuration(format!(
                    "cannot derive a file name from {}",
                    file.display()
                ))
            })?
            .to_string();

        let version = self.latest_version(name)?.map_or(1, |v| v + 1);
        let dir = self.version_dir(name, version);
        fs::create_dir_all(&dir)?;

        let content = fs::read(file)?;
        fs::write(dir.join(&file_name), &content)?;

        let metadata = ArtifactMetadata {
            name: name.to_string(),
            version,
            artifact_type: artifact_type.to_string(),
            description: description.to_string(),
            digest: content_digest(&content),
            file_name,
            created_at: Utc::now(),
        };
        // Writing metadata commits the version.
        fs::write(
            dir.join(METADATA_FILE),
            serde_json::to_string_pretty(&metadata)?,
        )?;

        debug!(name, version, "artifact published");
        Ok(ArtifactRef {
            name: name.to_string(),
            version,
        })
    }
}

fn validate_artifact_name(name: &str) -> StoreResult<()> {
    if name.is_empty() || name.contains([':', '/', '\\']) {
        return Err(StoreError::Configuration(format!(
            "invalid artifact name '{name}'"
        )));
    }
    Ok(())
}
