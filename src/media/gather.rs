pub use crate::media::types::MediaFile;

use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use path_slash::PathExt;

use crate::constants::MEDIA_EXTENSIONS;

#[derive(Debug)]
pub struct InvalidExcludePattern {
    pub pattern: String,
    pub reason: String,
}

impl std::fmt::Display for InvalidExcludePattern {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(
            f,
            "Invalid --exclude pattern {:?}: {}",
            self.pattern, self.reason
        )
    }
}

impl std::error::Error for InvalidExcludePattern {}

/// How far to look and what to hide when listing a directory.
#[derive(Debug, Default, Clone)]
pub struct ListOptions {
    pub recursive: bool,
    pub exclude: Vec<String>,
}

/// True when the file name ends with one of the allowed media extensions.
pub fn is_media_file(path: &Path) -> bool {
    path.file_name()
        .map(|n| n.to_string_lossy())
        .is_some_and(|name| MEDIA_EXTENSIONS.iter().any(|ext| name.ends_with(ext)))
}

pub fn build_exclude_set(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let normalized = pattern.replace('\\', "/");
        let glob = Glob::new(&normalized).map_err(|e| {
            anyhow!(InvalidExcludePattern {
                pattern: pattern.clone(),
                reason: e.kind().to_string(),
            })
        })?;
        builder.add(glob);
    }
    Ok(builder.build()?)
}

/// Lists media files under `dir`, sorted by path.
///
/// Without `recursive` only direct children are considered and nothing is
/// filtered besides the extension allow-list. With it, the walker's standard
/// filters apply (hidden entries, `.gitignore`).
pub fn list_media_files(
    dir: &Path,
    options: &ListOptions,
) -> Result<Vec<MediaFile>> {
    let excludes = build_exclude_set(&options.exclude)?;

    let walker = WalkBuilder::new(dir)
        .max_depth(if options.recursive { None } else { Some(1) })
        .standard_filters(options.recursive)
        .follow_links(false)
        .build();

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry_result in walker {
        match entry_result {
            Ok(entry) => {
                let path = entry.path();
                // Follows symlinks so linked media stays in the list
                if !path.is_file() || !is_media_file(path) {
                    continue;
                }
                let rel = path.strip_prefix(dir).unwrap_or(path).to_slash_lossy();
                if excludes.is_match(&*rel) {
                    tracing::debug!("excluded {rel}");
                    continue;
                }
                paths.push(path.to_path_buf());
            }
            Err(e) => {
                tracing::warn!("Could not process entry in {:?}: {}", dir, e);
            }
        }
    }

    paths.sort();
    paths.dedup();
    tracing::debug!("found {} media files in {}", paths.len(), dir.display());

    Ok(paths
        .into_iter()
        .map(|path| {
            let label = path
                .strip_prefix(dir)
                .unwrap_or(&path)
                .to_slash_lossy()
                .into_owned();
            MediaFile { path, label }
        })
        .collect())
}
