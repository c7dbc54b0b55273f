//! Recursive directory scanner.

use std::fs;
use std::io;
use std::path::Path;
use std::time::Instant;

use dirgest_core::{FileNode, FileTree, IngestError, NodeKind, Query, ScanWarning, TreeStats};
use dirgest_match::PathFilter;

/// Depth-first scanner producing an immutable [`FileTree`].
///
/// One scan is a single bounded synchronous pass: patterns are compiled up
/// front, the walk consults the filter for every entry, and counts are
/// aggregated bottom-up as the recursion unwinds. Symlinks are never
/// followed, which also bounds traversal without any cycle detection.
pub struct DirectoryScanner;

impl DirectoryScanner {
    /// Create a new scanner.
    pub fn new() -> Self {
        Self
    }

    /// Scan the query's root (restricted to its subpath).
    ///
    /// Fails with [`IngestError::NotFound`] or [`IngestError::NotADirectory`]
    /// on a bad root, and [`IngestError::Pattern`] on a malformed pattern.
    /// Unreadable subdirectories are recovered as empty nodes with a
    /// warning.
    pub fn scan(&self, query: &Query) -> Result<FileTree, IngestError> {
        let start = Instant::now();

        let filter = PathFilter::new(
            &query.ignore_patterns,
            query.include_patterns(),
            query.pattern_mode,
        )?;

        let scan_root = query.scan_root();
        let metadata =
            fs::symlink_metadata(&scan_root).map_err(|e| IngestError::io(&scan_root, e))?;
        if !metadata.is_dir() {
            return Err(IngestError::NotADirectory { path: scan_root });
        }
        let root_path = scan_root
            .canonicalize()
            .map_err(|e| IngestError::io(&scan_root, e))?;

        tracing::debug!(path = %root_path.display(), "starting scan");

        let root_name = root_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| root_path.to_string_lossy().into_owned());

        let mut stats = TreeStats::new();
        let mut warnings = Vec::new();
        let root = walk(
            &root_path,
            &root_name,
            "",
            0,
            &filter,
            &mut stats,
            &mut warnings,
        );

        tracing::debug!(
            files = stats.total_files,
            dirs = stats.total_dirs,
            warnings = warnings.len(),
            "scan complete"
        );

        Ok(FileTree::new(
            root,
            root_path,
            query.clone(),
            stats,
            start.elapsed(),
            warnings,
        ))
    }
}

impl Default for DirectoryScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Build one directory node, recursing into unpruned child directories and
/// aggregating counts and sizes as children complete.
fn walk(
    abs: &Path,
    name: &str,
    rel: &str,
    depth: u32,
    filter: &PathFilter,
    stats: &mut TreeStats,
    warnings: &mut Vec<ScanWarning>,
) -> FileNode {
    let mut node = FileNode::new_directory(name, rel, depth);

    let entries = match fs::read_dir(abs) {
        Ok(entries) => entries,
        Err(err) => {
            // Recovered: the subtree stays in the tree as an empty node.
            record_read_failure(abs, &err, warnings);
            return node;
        }
    };

    let mut file_count: u64 = 0;
    let mut dir_count: u64 = 0;
    let mut total_size: u64 = 0;

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                record_read_failure(abs, &err, warnings);
                continue;
            }
        };

        let child_name = entry.file_name().to_string_lossy().into_owned();
        let child_rel = join_rel(rel, &child_name);

        let file_type = match entry.file_type() {
            Ok(t) => t,
            Err(err) => {
                warnings.push(ScanWarning::metadata_error(entry.path(), &err));
                tracing::warn!(path = %entry.path().display(), error = %err, "metadata unreadable");
                continue;
            }
        };

        if file_type.is_symlink() {
            if filter.is_ignored(&child_rel) {
                continue;
            }
            stats.record_symlink();
            node.children
                .push(FileNode::new_symlink(child_name, child_rel, depth + 1));
        } else if file_type.is_dir() {
            if filter.is_ignored(&child_rel) {
                continue;
            }
            stats.record_dir(depth + 1);
            let child = walk(
                &entry.path(),
                &child_name,
                &child_rel,
                depth + 1,
                filter,
                stats,
                warnings,
            );
            file_count += child.file_count();
            dir_count += child.dir_count() + 1;
            total_size += child.size;
            node.children.push(child);
        } else if file_type.is_file() {
            if !filter.includes_file(&child_rel) {
                continue;
            }
            let size = match entry.metadata() {
                Ok(m) => m.len(),
                Err(err) => {
                    warnings.push(ScanWarning::metadata_error(entry.path(), &err));
                    tracing::warn!(path = %entry.path().display(), error = %err, "metadata unreadable");
                    continue;
                }
            };
            stats.record_file(size, depth + 1);
            file_count += 1;
            total_size += size;
            node.children
                .push(FileNode::new_file(child_name, child_rel, size, depth + 1));
        }
    }

    node.size = total_size;
    node.kind = NodeKind::Directory {
        file_count,
        dir_count,
    };
    node
}

fn join_rel(rel: &str, name: &str) -> String {
    if rel.is_empty() {
        name.to_string()
    } else {
        format!("{rel}/{name}")
    }
}

fn record_read_failure(path: &Path, err: &io::Error, warnings: &mut Vec<ScanWarning>) {
    let warning = if err.kind() == io::ErrorKind::PermissionDenied {
        ScanWarning::permission_denied(path)
    } else {
        ScanWarning::read_error(path, err)
    };
    tracing::warn!(path = %path.display(), kind = ?warning.kind, "directory skipped");
    warnings.push(warning);
}

#[cfg(test)]
mod tests {
    use super::*;
    use dirgest_core::PatternMode;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_tree() -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path();

        fs::create_dir(root.join("dir1")).unwrap();
        fs::create_dir(root.join("dir1/subdir")).unwrap();
        fs::write(root.join("file1.txt"), "hello").unwrap();
        fs::write(root.join("dir1/file2.txt"), "world world world").unwrap();
        fs::write(root.join("dir1/subdir/file3.txt"), "test").unwrap();

        temp
    }

    #[test]
    fn test_basic_scan() {
        let temp = create_test_tree();
        let query = Query::new(temp.path());

        let tree = DirectoryScanner::new().scan(&query).unwrap();

        assert_eq!(tree.root.file_count(), 3);
        assert_eq!(tree.root.dir_count(), 2);
        assert_eq!(tree.stats.total_files, 3);
        assert_eq!(tree.stats.total_dirs, 2);
        assert_eq!(tree.stats.max_depth, 3);
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let temp = TempDir::new().unwrap();
        let query = Query::new(temp.path().join("nope"));

        let err = DirectoryScanner::new().scan(&query).unwrap_err();
        assert!(matches!(err, IngestError::NotFound { .. }));
    }

    #[test]
    fn test_file_root_is_fatal() {
        let temp = create_test_tree();
        let query = Query::new(temp.path().join("file1.txt"));

        let err = DirectoryScanner::new().scan(&query).unwrap_err();
        assert!(matches!(err, IngestError::NotADirectory { .. }));
    }

    #[test]
    fn test_bad_pattern_fails_before_walking() {
        let temp = create_test_tree();
        let mut query = Query::new(temp.path());
        query.ignore_patterns = vec!["[broken".to_string()];

        let err = DirectoryScanner::new().scan(&query).unwrap_err();
        assert!(matches!(err, IngestError::Pattern(_)));
    }

    #[test]
    fn test_ignored_directory_is_pruned() {
        let temp = create_test_tree();
        let mut query = Query::new(temp.path());
        query.ignore_patterns = vec!["dir1".to_string()];

        let tree = DirectoryScanner::new().scan(&query).unwrap();
        assert_eq!(tree.root.file_count(), 1);
        assert_eq!(tree.root.dir_count(), 0);
        assert!(!tree.root.children.iter().any(|c| c.name == "dir1"));
    }

    #[test]
    fn test_subpath_scan() {
        let temp = create_test_tree();
        let mut query = Query::new(temp.path());
        query.subpath = "/dir1".to_string();

        let tree = DirectoryScanner::new().scan(&query).unwrap();
        assert_eq!(tree.root.file_count(), 2);
        assert_eq!(tree.root.dir_count(), 1);
        // Paths are relative to the scan root, not the query root.
        assert!(tree.root.children.iter().any(|c| c.path == "file2.txt"));
    }

    #[test]
    fn test_include_mode_keeps_traversing_unmatched_dirs() {
        let temp = create_test_tree();
        let mut query = Query::new(temp.path());
        query.pattern_mode = PatternMode::Include;
        query.include_patterns = Some(vec!["file3.txt".to_string()]);

        let tree = DirectoryScanner::new().scan(&query).unwrap();
        // dir1 and dir1/subdir do not match, but the nested file does.
        assert_eq!(tree.root.file_count(), 1);
        assert_eq!(tree.root.dir_count(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinks_are_recorded_not_followed() {
        let temp = create_test_tree();
        std::os::unix::fs::symlink(temp.path().join("dir1"), temp.path().join("loop")).unwrap();

        let query = Query::new(temp.path());
        let tree = DirectoryScanner::new().scan(&query).unwrap();

        let link = tree
            .root
            .children
            .iter()
            .find(|c| c.name == "loop")
            .unwrap();
        assert!(link.kind.is_symlink());
        assert_eq!(link.size, 0);
        assert!(link.children.is_empty());
        // The link target's contents are not double-counted.
        assert_eq!(tree.root.file_count(), 3);
        assert_eq!(tree.stats.total_symlinks, 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_subdir_is_recovered() {
        use std::os::unix::fs::PermissionsExt;

        let temp = create_test_tree();
        let locked = temp.path().join("locked");
        fs::create_dir(&locked).unwrap();
        fs::write(locked.join("secret.txt"), "secret").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        if fs::read_dir(&locked).is_ok() {
            // Running as root; permissions are not enforced.
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let query = Query::new(temp.path());
        let result = DirectoryScanner::new().scan(&query);

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

        let tree = result.unwrap();
        assert!(tree.has_warnings());
        let node = tree
            .root
            .children
            .iter()
            .find(|c| c.name == "locked")
            .unwrap();
        assert_eq!(node.file_count(), 0);
        assert!(node.children.is_empty());
        // Siblings are unaffected.
        assert_eq!(tree.root.file_count(), 3);
    }
}
