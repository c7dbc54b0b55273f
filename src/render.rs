//! Digest rendering: summary header, directory structure, file contents.

use color_eyre::eyre::Result;
use humansize::{format_size, DECIMAL};
use serde_json::json;

use dirgest_core::{FileNode, FileRecord, FileTree};

const SEPARATOR: &str = "================================================";

/// Render the full text digest.
pub fn text_digest(tree: &FileTree, records: &[FileRecord]) -> String {
    let mut out = String::new();

    out.push_str(&summary(tree, records));
    out.push('\n');
    out.push_str("Directory structure:\n");
    out.push_str(&structure(&tree.root));
    out.push('\n');

    for record in records {
        out.push_str(SEPARATOR);
        out.push('\n');
        out.push_str(&format!("File: {}\n", record.path));
        out.push_str(SEPARATOR);
        out.push('\n');
        out.push_str(&record.content);
        if !record.content.ends_with('\n') {
            out.push('\n');
        }
        out.push('\n');
    }

    out
}

/// Render the summary header.
pub fn summary(tree: &FileTree, records: &[FileRecord]) -> String {
    let name = if tree.query.slug.is_empty() {
        tree.root_path.display().to_string()
    } else {
        tree.query.slug.clone()
    };

    let mut out = format!("Digest: {name}\n");
    if let Some(branch) = &tree.query.branch {
        out.push_str(&format!("Branch: {branch}\n"));
    }
    out.push_str(&format!(
        "Files analyzed: {} ({} extracted)\n",
        tree.total_files(),
        records.len()
    ));
    out.push_str(&format!("Directories: {}\n", tree.total_dirs()));
    out.push_str(&format!(
        "Total size: {}\n",
        format_size(tree.total_size(), DECIMAL)
    ));
    out
}

/// Render the tree as box-drawing lines.
pub fn structure(root: &FileNode) -> String {
    let mut out = format!("{}/\n", root.name);
    children(&root.children, "", &mut out);
    out
}

fn children(nodes: &[FileNode], prefix: &str, out: &mut String) {
    let last = nodes.len().saturating_sub(1);
    for (i, node) in nodes.iter().enumerate() {
        let connector = if i == last { "└── " } else { "├── " };
        let suffix = if node.is_dir() {
            "/"
        } else if node.kind.is_symlink() {
            " (symlink, not followed)"
        } else {
            ""
        };
        out.push_str(&format!("{prefix}{connector}{}{suffix}\n", node.name));
        if node.is_dir() {
            let deeper = format!("{prefix}{}", if i == last { "    " } else { "│   " });
            children(&node.children, &deeper, out);
        }
    }
}

/// Render the digest as pretty-printed JSON.
pub fn json_digest(tree: &FileTree, records: &[FileRecord]) -> Result<String> {
    let value = json!({
        "slug": tree.query.slug,
        "root": tree.root_path.display().to_string(),
        "branch": tree.query.branch,
        "stats": tree.stats,
        "warnings": tree.warnings,
        "files": records,
    });
    Ok(serde_json::to_string_pretty(&value)?)
}
