//! Content extraction over a scanned tree.

use std::fs;
use std::path::Path;

use dirgest_core::{FileNode, FileRecord, FileTree, Query};

/// Extract flat file records from a scanned node tree.
///
/// Walks the tree depth-first in the order the scanner produced it. Files
/// larger than `max_file_size` are dropped entirely; this is a second
/// filter on top of the pattern decision already baked into the tree. A
/// file whose bytes are not valid UTF-8 yields a placeholder record rather
/// than an error.
pub fn extract_files(query: &Query, root: &FileNode, max_file_size: u64) -> Vec<FileRecord> {
    let base = query.scan_root();
    let mut records = Vec::new();
    collect(&base, root, max_file_size, &mut records);
    records
}

/// Extract from a complete scan result using the query's own size cap.
pub fn extract_tree(tree: &FileTree) -> Vec<FileRecord> {
    let mut records = Vec::new();
    collect(
        &tree.root_path,
        &tree.root,
        tree.query.max_file_size,
        &mut records,
    );
    records
}

fn collect(base: &Path, node: &FileNode, max_file_size: u64, out: &mut Vec<FileRecord>) {
    for child in &node.children {
        if child.is_file() {
            if child.size > max_file_size {
                tracing::debug!(path = %child.path, size = child.size, "over size cap, dropped");
                continue;
            }
            match fs::read(base.join(child.path.as_str())) {
                Ok(bytes) => {
                    let record = match String::from_utf8(bytes) {
                        Ok(content) => FileRecord::new(child.path.clone(), content, child.size),
                        Err(_) => FileRecord::non_text(child.path.clone(), child.size),
                    };
                    out.push(record);
                }
                Err(err) => {
                    // File disappeared or became unreadable since the scan.
                    tracing::warn!(path = %child.path, error = %err, "skipped during extraction");
                }
            }
        } else if child.is_dir() {
            collect(base, child, max_file_size, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::DirectoryScanner;
    use dirgest_core::NON_TEXT_PLACEHOLDER;
    use std::fs;
    use tempfile::TempDir;

    fn scan(query: &Query) -> FileTree {
        DirectoryScanner::new().scan(query).unwrap()
    }

    #[test]
    fn test_extracts_content() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("hello.txt"), "Hello World").unwrap();

        let query = Query::new(temp.path());
        let tree = scan(&query);
        let records = extract_tree(&tree);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].path, "hello.txt");
        assert_eq!(records[0].content, "Hello World");
        assert_eq!(records[0].size, 11);
    }

    #[test]
    fn test_size_cap_is_inclusive() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("exact.txt"), vec![b'a'; 16]).unwrap();
        fs::write(temp.path().join("over.txt"), vec![b'a'; 17]).unwrap();

        let mut query = Query::new(temp.path());
        query.max_file_size = 16;
        let tree = scan(&query);
        let records = extract_files(&query, &tree.root, query.max_file_size);

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].path, "exact.txt");
    }

    #[test]
    fn test_non_utf8_becomes_placeholder() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("data.bin"), [0xff, 0xfe, 0x00, 0x42]).unwrap();
        fs::write(temp.path().join("ok.txt"), "fine").unwrap();

        let query = Query::new(temp.path());
        let records = extract_tree(&scan(&query));

        assert_eq!(records.len(), 2);
        let bin = records.iter().find(|r| r.path == "data.bin").unwrap();
        assert_eq!(bin.content, NON_TEXT_PLACEHOLDER);
        let ok = records.iter().find(|r| r.path == "ok.txt").unwrap();
        assert_eq!(ok.content, "fine");
    }

    #[test]
    fn test_traversal_order_matches_tree() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        fs::write(temp.path().join("sub/inner.txt"), "inner").unwrap();
        fs::write(temp.path().join("outer.txt"), "outer").unwrap();

        let query = Query::new(temp.path());
        let tree = scan(&query);
        let records = extract_tree(&tree);

        // Record order is exactly the depth-first order of file nodes.
        let mut expected = Vec::new();
        fn files(node: &dirgest_core::FileNode, out: &mut Vec<String>) {
            for child in &node.children {
                if child.is_file() {
                    out.push(child.path.to_string());
                } else if child.is_dir() {
                    files(child, out);
                }
            }
        }
        files(&tree.root, &mut expected);
        let got: Vec<String> = records.iter().map(|r| r.path.to_string()).collect();
        assert_eq!(got, expected);
    }
}
