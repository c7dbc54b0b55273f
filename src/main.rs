//! dirgest - flatten a directory tree into a filtered text digest.
//!
//! Usage:
//!   dirgest [PATH]               Digest the whole tree
//!   dirgest [PATH] -i '*.rs'     Only files matching the pattern
//!   dirgest [PATH] -e target     Extra exclusions on top of the defaults
//!   dirgest [PATH] -f json       Machine-readable output

use std::fs;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use color_eyre::eyre::{Context, Result};
use tracing_subscriber::EnvFilter;

use dirgest_core::{PatternMode, Query, DEFAULT_MAX_FILE_SIZE};
use dirgest_scan::{extract_tree, DirectoryScanner};

mod render;

/// Exclusions applied to every scan unless `--no-default-excludes` is set.
const DEFAULT_IGNORE_PATTERNS: [&str; 10] = [
    ".git",
    ".svn",
    ".hg",
    "__pycache__",
    "*.pyc",
    "node_modules",
    "target",
    ".venv",
    ".DS_Store",
    "*.lock",
];

#[derive(Parser)]
#[command(
    name = "dirgest",
    version,
    about = "Turn a directory tree into a filtered, flattened text digest",
    long_about = "dirgest walks a directory, filters entries with glob-style \
                  include/exclude patterns, and emits a digest: a summary, the \
                  directory structure, and the concatenated file contents."
)]
struct Cli {
    /// Directory to digest (defaults to current directory)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Restrict the scan to this subpath of the root
    #[arg(long, default_value = "/")]
    subpath: String,

    /// Include only files matching these patterns (repeatable)
    #[arg(short = 'i', long = "include")]
    include: Vec<String>,

    /// Additional exclusion patterns (repeatable)
    #[arg(short = 'e', long = "exclude")]
    exclude: Vec<String>,

    /// Skip the built-in exclusion set (.git, caches, build output)
    #[arg(long)]
    no_default_excludes: bool,

    /// Maximum file size to extract, in bytes
    #[arg(short = 's', long = "max-size", default_value_t = DEFAULT_MAX_FILE_SIZE)]
    max_size: u64,

    /// Branch name recorded in the digest header
    #[arg(long)]
    branch: Option<String>,

    /// Write the digest to this file instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, default_value = "text")]
    format: OutputFormat,
}

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut ignore_patterns: Vec<String> = if cli.no_default_excludes {
        Vec::new()
    } else {
        DEFAULT_IGNORE_PATTERNS.iter().map(|p| p.to_string()).collect()
    };
    ignore_patterns.extend(cli.exclude);

    let slug = cli
        .path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.path.to_string_lossy().into_owned());

    let mut builder = Query::builder();
    builder
        .root(&cli.path)
        .subpath(cli.subpath)
        .max_file_size(cli.max_size)
        .slug(slug)
        .branch(cli.branch)
        .ignore_patterns(ignore_patterns);
    if !cli.include.is_empty() {
        builder
            .include_patterns(Some(cli.include))
            .pattern_mode(PatternMode::Include);
    }
    let query = builder.build().context("Invalid query")?;

    eprintln!("Scanning {}...", query.scan_root().display());

    let tree = DirectoryScanner::new().scan(&query).context("Scan failed")?;
    let records = extract_tree(&tree);

    let digest = match cli.format {
        OutputFormat::Text => render::text_digest(&tree, &records),
        OutputFormat::Json => render::json_digest(&tree, &records)?,
    };

    match cli.output {
        Some(path) => fs::write(&path, digest)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => print!("{digest}"),
    }

    if tree.has_warnings() {
        eprintln!("{} warning(s) during scan", tree.warnings.len());
    }

    Ok(())
}
