//! The pattern grammar and its compiled form.
//!
//! The grammar is deliberately small: literal path segments, the `*`
//! wildcard, and leading/trailing separator anchors. Each raw pattern is
//! normalized and classified exactly once; matching a path against a
//! [`CompiledPattern`] does no further string rewriting.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Whether unmatched entries default to included or excluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternMode {
    /// Everything is included unless it matches an ignore pattern.
    #[default]
    Exclude,
    /// Only entries matching an include pattern are included.
    Include,
}

/// A pattern that falls outside the supported grammar.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// Pattern is empty after normalization.
    #[error("empty pattern")]
    Empty,

    /// Pattern uses syntax the grammar does not support.
    #[error("unsupported syntax in pattern `{pattern}`: `{token}`")]
    Unsupported { pattern: String, token: char },
}

/// A single pattern, normalized and classified by its anchoring.
///
/// Candidate paths are always relative to the scan root, `/`-separated,
/// with no leading separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompiledPattern {
    /// `src/` — the named directory and everything beneath it.
    Subtree(Vec<String>),
    /// `src/*` — direct children of the named directory only.
    Children(Vec<String>),
    /// `src*` — string prefix over the whole relative path, so it covers
    /// the subtree plus prefix-named siblings (`srcfoo`).
    Prefix(String),
    /// `*.txt` or `.git` — matched against the final path segment at any
    /// depth.
    Basename(String),
    /// Any other multi-segment pattern, globbed over the full path with
    /// `*` free to cross separator boundaries.
    Path(String),
}

/// Characters reserved for syntax the grammar does not define.
const UNSUPPORTED: [char; 5] = ['[', ']', '{', '}', '?'];

impl CompiledPattern {
    /// Normalize and classify one raw pattern.
    pub fn compile(raw: &str) -> Result<Self, PatternError> {
        let normalized = normalize(raw);

        if let Some(token) = normalized.chars().find(|c| UNSUPPORTED.contains(c)) {
            return Err(PatternError::Unsupported {
                pattern: raw.to_string(),
                token,
            });
        }
        if normalized.is_empty() {
            return Err(PatternError::Empty);
        }

        if let Some(prefix) = normalized.strip_suffix('/') {
            if prefix.is_empty() {
                return Err(PatternError::Empty);
            }
            return Ok(Self::Subtree(segments(prefix)));
        }

        if let Some(parent) = normalized.strip_suffix("/*") {
            if parent.is_empty() {
                return Err(PatternError::Empty);
            }
            return Ok(Self::Children(segments(parent)));
        }

        if !normalized.contains('/') {
            if let Some(stem) = normalized.strip_suffix('*') {
                if !stem.is_empty() && !stem.contains('*') {
                    return Ok(Self::Prefix(stem.to_string()));
                }
            }
            return Ok(Self::Basename(normalized));
        }

        Ok(Self::Path(normalized))
    }

    /// Test one normalized relative path against this pattern.
    pub fn matches(&self, path: &str) -> bool {
        match self {
            Self::Subtree(anchor) => {
                let segs: Vec<&str> = path.split('/').collect();
                segs.len() >= anchor.len() && segments_match(anchor, &segs)
            }
            Self::Children(anchor) => {
                let segs: Vec<&str> = path.split('/').collect();
                segs.len() == anchor.len() + 1 && segments_match(anchor, &segs)
            }
            Self::Prefix(stem) => path.starts_with(stem.as_str()),
            Self::Basename(glob) => {
                let name = path.rsplit('/').next().unwrap_or(path);
                wildcard_match(glob, name)
            }
            Self::Path(glob) => wildcard_match(glob, path),
        }
    }
}

/// Canonicalize separators and strip a single leading separator, so
/// `/src/*` and `src/*` compile to the same form.
fn normalize(raw: &str) -> String {
    let unified = raw.replace('\\', "/");
    unified
        .strip_prefix('/')
        .unwrap_or(&unified)
        .to_string()
}

fn segments(prefix: &str) -> Vec<String> {
    prefix.split('/').map(str::to_string).collect()
}

/// Match each anchor segment against the leading path segments; `*`
/// stays within its segment here.
fn segments_match(anchor: &[String], segs: &[&str]) -> bool {
    anchor
        .iter()
        .zip(segs)
        .all(|(pat, seg)| wildcard_match(pat, seg))
}

/// Classic iterative `*` glob: the wildcard matches any run of characters.
/// Segment boundaries are the caller's concern.
pub(crate) fn wildcard_match(pattern: &str, text: &str) -> bool {
    let pat: Vec<char> = pattern.chars().collect();
    let txt: Vec<char> = text.chars().collect();

    let (mut p, mut t) = (0usize, 0usize);
    let mut star: Option<usize> = None;
    let mut star_t = 0usize;

    while t < txt.len() {
        if p < pat.len() && (pat[p] == '*' || pat[p] == txt[t]) {
            if pat[p] == '*' {
                star = Some(p);
                star_t = t;
                p += 1;
            } else {
                p += 1;
                t += 1;
            }
        } else if let Some(sp) = star {
            // Backtrack: let the last star absorb one more character.
            p = sp + 1;
            star_t += 1;
            t = star_t;
        } else {
            return false;
        }
    }

    while p < pat.len() && pat[p] == '*' {
        p += 1;
    }
    p == pat.len()
}
