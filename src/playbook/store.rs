//! Filesystem-backed playbook store.

use super::types::Playbook;
use crate::error::{NetopsError, Result};
use std::path::{Path, PathBuf};

/// Environment variable naming the playbook directory.
pub const PLAYBOOKS_ENV: &str = "NETOPS_PLAYBOOKS";

/// Directory of `<domain>.yaml` playbook files.
#[derive(Debug, Clone)]
pub struct PlaybookStore {
    dir: PathBuf,
}

impl PlaybookStore {
    /// Create a store rooted at a directory.
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    /// Resolve the store for this invocation: `NETOPS_PLAYBOOKS` if set,
    /// otherwise `./playbooks`.
    pub fn resolve() -> Self {
        match std::env::var_os(PLAYBOOKS_ENV) {
            Some(dir) => Self::new(PathBuf::from(dir)),
            None => Self::new("playbooks"),
        }
    }

    /// The directory this store reads from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Discover available domains from `*.yaml` files, sorted by name.
    ///
    /// A missing or unreadable directory yields an empty list; the caller
    /// decides whether that is an error (interactive runbook mode treats
    /// it as one).
    pub fn available_domains(&self) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(&self.dir) else {
            return Vec::new();
        };

        let mut domains: Vec<String> = entries
            .flatten()
            .filter_map(|entry| {
                let path = entry.path();
                if path.extension().and_then(|ext| ext.to_str()) == Some("yaml") {
                    path.file_stem()
                        .and_then(|stem| stem.to_str())
                        .map(|stem| stem.to_string())
                } else {
                    None
                }
            })
            .collect();
        domains.sort();
        domains
    }

    /// Load the playbook for a domain.
    ///
    /// A missing file is a `Lookup` error (the domain does not exist); a
    /// present but unparseable file is a `UserError` (the operator's file
    /// is broken).
    pub fn load(&self, domain: &str) -> Result<Playbook> {
        let path = self.dir.join(format!("{}.yaml", domain));
        if !path.exists() {
            return Err(NetopsError::Lookup(format!(
                "no playbook found for domain '{}'",
                domain
            )));
        }

        let content = std::fs::read_to_string(&path).map_err(|e| {
            NetopsError::UserError(format!(
                "failed to read playbook '{}': {}",
                path.display(),
                e
            ))
        })?;

        serde_yaml::from_str(&content).map_err(|e| {
            NetopsError::UserError(format!(
                "failed to parse playbook '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Symptom categories for a domain, in stable order.
    pub fn symptoms_for(&self, domain: &str) -> Result<Vec<String>> {
        let playbook = self.load(domain)?;
        Ok(playbook.symptoms.keys().cloned().collect())
    }
}
