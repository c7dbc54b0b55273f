//! Include/exclude decision procedure over compiled pattern sets.

use crate::pattern::{CompiledPattern, PatternError, PatternMode};

/// An ordered set of compiled patterns.
#[derive(Debug, Clone, Default)]
pub struct PatternSet {
    patterns: Vec<CompiledPattern>,
}

impl PatternSet {
    /// Compile a set of raw patterns. Fails on the first malformed pattern,
    /// before any path is ever tested.
    pub fn compile<S: AsRef<str>>(raw: &[S]) -> Result<Self, PatternError> {
        let patterns = raw
            .iter()
            .map(|p| CompiledPattern::compile(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// True if `path` matches at least one pattern in the set.
    pub fn matches(&self, path: &str) -> bool {
        self.patterns.iter().any(|p| p.matches(path))
    }

    /// Number of compiled patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// True if the set contains no patterns. An empty set matches nothing.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// The full inclusion decision for one scan: an always-active ignore set,
/// an optional include set, and the mode tying them together.
#[derive(Debug, Clone)]
pub struct PathFilter {
    ignore: PatternSet,
    include: PatternSet,
    mode: PatternMode,
}

impl PathFilter {
    /// Compile both pattern sets up front.
    pub fn new<S: AsRef<str>>(
        ignore: &[S],
        include: &[S],
        mode: PatternMode,
    ) -> Result<Self, PatternError> {
        Ok(Self {
            ignore: PatternSet::compile(ignore)?,
            include: PatternSet::compile(include)?,
            mode,
        })
    }

    /// The pattern mode this filter was built with.
    pub fn mode(&self) -> PatternMode {
        self.mode
    }

    /// True if `path` matches an ignore pattern. For directories this also
    /// means the subtree is pruned: nothing beneath it is visited.
    pub fn is_ignored(&self, path: &str) -> bool {
        self.ignore.matches(path)
    }

    /// Full decision for a file entry. Exclusion always wins; in include
    /// mode an empty include set admits nothing.
    pub fn includes_file(&self, path: &str) -> bool {
        if self.ignore.matches(path) {
            return false;
        }
        match self.mode {
            PatternMode::Exclude => true,
            PatternMode::Include => self.include.matches(path),
        }
    }
}
