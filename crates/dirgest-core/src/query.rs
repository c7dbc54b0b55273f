//! Scan query configuration.

use std::path::PathBuf;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};

use dirgest_match::PatternMode;

/// Default cap on extracted file size: 10 MiB.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

/// Immutable configuration for one scan.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct Query {
    /// Root path of the materialized tree.
    pub root: PathBuf,

    /// Subtree of the root the scan is restricted to (`/` for the whole
    /// tree).
    #[builder(default = "String::from(\"/\")")]
    #[serde(default = "default_subpath")]
    pub subpath: String,

    /// Branch name, carried through for callers; unused by the core.
    #[builder(default)]
    #[serde(default)]
    pub branch: Option<String>,

    /// Commit id, carried through for callers; unused by the core.
    #[builder(default)]
    #[serde(default)]
    pub commit: Option<String>,

    /// Files larger than this are dropped at extraction time.
    #[builder(default = "DEFAULT_MAX_FILE_SIZE")]
    #[serde(default = "default_max_file_size")]
    pub max_file_size: u64,

    /// Identifier for this scan, passed through to output.
    #[builder(default)]
    #[serde(default)]
    pub slug: String,

    /// Always-active exclusion patterns.
    #[builder(default)]
    #[serde(default)]
    pub ignore_patterns: Vec<String>,

    /// Include patterns; only consulted when `pattern_mode` is `Include`.
    #[builder(default)]
    #[serde(default)]
    pub include_patterns: Option<Vec<String>>,

    /// Whether unmatched entries default to included or excluded.
    #[builder(default)]
    #[serde(default)]
    pub pattern_mode: PatternMode,
}

fn default_subpath() -> String {
    String::from("/")
}

fn default_max_file_size() -> u64 {
    DEFAULT_MAX_FILE_SIZE
}

impl QueryBuilder {
    fn validate(&self) -> Result<(), String> {
        match self.root {
            Some(ref root) if !root.as_os_str().is_empty() => Ok(()),
            Some(_) => Err("root path cannot be empty".to_string()),
            None => Err("root path is required".to_string()),
        }
    }
}

impl Query {
    /// Create a new query builder.
    pub fn builder() -> QueryBuilder {
        QueryBuilder::default()
    }

    /// Create a simple query for scanning a path with defaults.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            subpath: default_subpath(),
            branch: None,
            commit: None,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            slug: String::new(),
            ignore_patterns: Vec::new(),
            include_patterns: None,
            pattern_mode: PatternMode::Exclude,
        }
    }

    /// Absolute path the walk starts from: root joined with the subpath.
    pub fn scan_root(&self) -> PathBuf {
        let sub = self.subpath.trim_matches('/');
        if sub.is_empty() {
            self.root.clone()
        } else {
            self.root.join(sub)
        }
    }

    /// Include patterns as a slice, empty when none were supplied.
    pub fn include_patterns(&self) -> &[String] {
        self.include_patterns.as_deref().unwrap_or_default()
    }
}
