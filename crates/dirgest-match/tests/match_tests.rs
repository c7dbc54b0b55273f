use dirgest_match::{PathFilter, PatternMode, PatternSet};

/// Relative paths of the eight files in the reference layout:
/// file1.txt, file2.py, src/{subfile1.txt, subfile2.py,
/// subdir/{file_subdir.txt, file_subdir.py}}, dir1/file_dir1.txt,
/// dir2/file_dir2.txt.
const FILES: [&str; 8] = [
    "file1.txt",
    "file2.py",
    "src/subfile1.txt",
    "src/subfile2.py",
    "src/subdir/file_subdir.txt",
    "src/subdir/file_subdir.py",
    "dir1/file_dir1.txt",
    "dir2/file_dir2.txt",
];

fn included(patterns: &[&str]) -> Vec<&'static str> {
    let filter = PathFilter::new(&[] as &[&str], patterns, PatternMode::Include).unwrap();
    FILES
        .iter()
        .copied()
        .filter(|p| filter.includes_file(p))
        .collect()
}

#[test]
fn test_txt_basename_selects_five() {
    let hits = included(&["*.txt"]);
    assert_eq!(hits.len(), 5);
    assert!(hits.iter().all(|p| p.ends_with(".txt")));
}

#[test]
fn test_nonexistent_extension_selects_none() {
    assert!(included(&["*.qwerty"]).is_empty());
}

#[test]
fn test_direct_children_patterns_select_two() {
    for pattern in ["src/*", "/src/*"] {
        let hits = included(&[pattern]);
        assert_eq!(hits.len(), 2, "pattern {pattern:?}");
        assert!(hits.contains(&"src/subfile1.txt"));
        assert!(hits.contains(&"src/subfile2.py"));
    }
}

#[test]
fn test_subtree_patterns_select_four() {
    for pattern in ["/src/", "/src*"] {
        let hits = included(&[pattern]);
        assert_eq!(hits.len(), 4, "pattern {pattern:?}");
        assert!(hits.iter().all(|p| p.starts_with("src")));
    }
}

#[test]
fn test_union_of_patterns() {
    assert_eq!(included(&["*.txt", "*.py"]).len(), 8);
    assert_eq!(included(&["/src/*", "*.txt"]).len(), 6);
    assert_eq!(included(&["/src*", "*.txt"]).len(), 7);
}

#[test]
fn test_anchoring_equivalence() {
    // `src/*` and `/src/*` are the same pattern after normalization, and
    // the subtree forms match a superset of the direct-children form.
    let children: Vec<_> = included(&["src/*"]);
    assert_eq!(children, included(&["/src/*"]));
    for wider in ["/src/", "/src*"] {
        let hits = included(&[wider]);
        assert!(children.iter().all(|p| hits.contains(p)), "pattern {wider:?}");
        assert!(hits.len() > children.len());
    }
}

#[test]
fn test_pattern_set_compiles_once_and_reuses() {
    let set = PatternSet::compile(&["*.py", "src/"]).unwrap();
    assert_eq!(set.len(), 2);
    assert!(set.matches("deep/nested/mod.py"));
    assert!(set.matches("src/anything"));
    assert!(!set.matches("docs/readme.md"));
}
