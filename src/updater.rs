//! Public suffix list updater.
//!
//! Downloads the upstream list, partitions it by its section markers and
//! persists the rules as JSON snapshots, so processes can load the
//! partitioned set at startup without re-parsing list text. Runs out of
//! the lookup path entirely; adopting a refreshed list is an `Arc` swap
//! through [`SharedSuffixList`](crate::SharedSuffixList).

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ListErrorKind, Result, TldError};
use crate::list::{RuleSnapshot, SuffixList};
use crate::parser::parse_psl_sections;

/// Canonical upstream location of the public suffix list.
pub const DEFAULT_PROVIDER_URL: &str = "https://publicsuffix.org/list/public_suffix_list.dat";

/// Snapshot file holding the partitioned rule set
const RULES_FILE: &str = "rules.json";
/// Snapshot file holding the ICANN rules only
const ICANN_FILE: &str = "icann.json";
/// Snapshot file holding the PRIVATE rules only
const PRIVATE_FILE: &str = "private.json";

/// Downloads the list and writes rule snapshots.
pub struct ListUpdater {
    url: String,
    data_dir: Option<PathBuf>,
}

impl Default for ListUpdater {
    fn default() -> Self {
        Self::new()
    }
}

impl ListUpdater {
    /// Create an updater pointed at the canonical provider URL.
    pub fn new() -> Self {
        Self {
            url: DEFAULT_PROVIDER_URL.to_string(),
            data_dir: None,
        }
    }

    /// Set a custom provider URL.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set the directory snapshots are written to.
    pub fn with_data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.data_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Download, partition and (if a data dir is configured) persist the
    /// list, returning the freshly built rule set.
    pub fn run(&self) -> Result<SuffixList> {
        log::info!("downloading public suffix list from {}", self.url);
        let text = self.download()?;

        let (icann, private) = parse_psl_sections(&text)?;
        log::info!(
            "parsed public suffix list: {} icann rules, {} private rules",
            icann.len(),
            private.len()
        );

        let snapshot = RuleSnapshot {
            icann,
            private,
        };
        if let Some(dir) = &self.data_dir {
            self.persist(dir, &snapshot)?;
        }

        Ok(SuffixList::from(snapshot))
    }

    /// Load the most recently persisted snapshot without touching the network.
    pub fn load_snapshot(&self) -> Result<SuffixList> {
        let dir = self.data_dir.as_ref().ok_or_else(|| TldError::ListError {
            kind: ListErrorKind::NotConfigured,
            message: "snapshot data directory not configured".to_string(),
        })?;

        let bytes = fs::read(dir.join(RULES_FILE)).map_err(|e| TldError::ListError {
            kind: ListErrorKind::InvalidSnapshot,
            message: format!("failed to read {}: {}", dir.join(RULES_FILE).display(), e),
        })?;
        SuffixList::from_json_slice(&bytes)
    }

    fn download(&self) -> Result<String> {
        let response = ureq::get(&self.url)
            .call()
            .map_err(|e| TldError::ListError {
                kind: ListErrorKind::DownloadFailed,
                message: format!("download failed: {}", e),
            })?;

        let (_, body) = response.into_parts();
        let mut reader = body.into_reader();
        let mut text = String::new();
        std::io::Read::read_to_string(&mut reader, &mut text)?;
        Ok(text)
    }

    fn persist(&self, dir: &Path, snapshot: &RuleSnapshot) -> Result<()> {
        fs::create_dir_all(dir)?;

        write_json(&dir.join(RULES_FILE), snapshot)?;
        write_json(&dir.join(ICANN_FILE), &snapshot.icann)?;
        write_json(&dir.join(PRIVATE_FILE), &snapshot.private)?;

        log::info!("wrote rule snapshots to {}", dir.display());
        Ok(())
    }
}

/// Write JSON through a temp file and rename, so readers never observe a
/// partially written snapshot.
fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let data = serde_json::to_vec(value)?;
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, data)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}
