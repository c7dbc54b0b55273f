//! Pattern matching for dirgest.
//!
//! This crate normalizes and evaluates glob-style include/exclude patterns
//! against relative paths. The dialect is small and anchoring-aware:
//!
//! - `src/` — a directory and its whole subtree
//! - `src/*` — direct children of a directory only
//! - `src*` — prefix match over the full relative path
//! - `*.txt` — basename match at any depth
//!
//! Patterns are compiled once into [`CompiledPattern`]s; a malformed
//! pattern is rejected at compile time with [`PatternError`], never during
//! traversal.
//!
//! # Example
//!
//! ```rust
//! use dirgest_match::{PathFilter, PatternMode};
//!
//! let filter = PathFilter::new(&[".git"], &["*.rs"], PatternMode::Include).unwrap();
//! assert!(filter.includes_file("src/main.rs"));
//! assert!(!filter.includes_file("README.md"));
//! ```

mod filter;
mod pattern;

pub use filter::{PathFilter, PatternSet};
pub use pattern::{CompiledPattern, PatternError, PatternMode};
