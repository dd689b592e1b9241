use crate::app::error::CombineError;
use crate::app::models::{Config, EntryKind, TraversalEntry};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::{DirEntry, WalkBuilder};
use pathdiff::diff_paths;
use std::fs;
use std::path::PathBuf;

pub struct Scanner {
    root: PathBuf,
    config: Config,
    exclude_set: GlobSet,
}

impl Scanner {
    pub fn new(root: PathBuf, config: Config) -> Result<Self, CombineError> {
        let exclude_set = build_globset(&config.exclude)?;
        Ok(Self {
            root,
            config,
            exclude_set,
        })
    }

    /// Walks the root depth-first in filesystem listing order and yields every
    /// file that passes the name, suffix and exclude filters.
    ///
    /// Ignored directories are cut from the walk before it descends, so nothing
    /// beneath them is listed or read. The root itself is never pruned.
    pub fn scan(&self) -> Result<impl Iterator<Item = TraversalEntry> + '_, CombineError> {
        // Surface an unreadable root as fatal instead of a per-entry warning
        fs::read_dir(&self.root).map_err(|e| CombineError::RootUnreadable(self.root.clone(), e))?;

        let prune = PruneRule {
            root: self.root.clone(),
            config: self.config.clone(),
            exclude_set: self.exclude_set.clone(),
        };

        // No .gitignore/.ignore/hidden handling: only the configured rules apply
        let walker = WalkBuilder::new(&self.root)
            .standard_filters(false)
            .follow_links(false)
            .filter_entry(move |entry| !prune.should_prune(entry))
            .build();

        Ok(walker.filter_map(move |result| match result {
            Ok(entry) => self.process_entry(&entry),
            Err(err) => {
                log::warn!("Error walking entry: {}", err);
                None
            }
        }))
    }

    fn process_entry(&self, entry: &DirEntry) -> Option<TraversalEntry> {
        if entry.depth() == 0 {
            return None;
        }

        let kind = classify(entry);
        if kind == EntryKind::Directory {
            return None;
        }

        let name = entry.file_name().to_string_lossy();
        if self.config.is_ignored_file(&name) {
            log::debug!("Ignored file name: {}", entry.path().display());
            return None;
        }
        if !self.config.has_allowed_extension(&name) {
            return None;
        }

        let relative = diff_paths(entry.path(), &self.root)?;
        if self.exclude_set.is_match(&relative) {
            log::debug!("Excluded by pattern: {}", relative.display());
            return None;
        }

        Some(TraversalEntry {
            path: entry.path().to_path_buf(),
            relative_path: relative.to_string_lossy().to_string(),
            kind,
        })
    }
}

/// Decides, before the walker descends, whether a directory is cut off.
struct PruneRule {
    root: PathBuf,
    config: Config,
    exclude_set: GlobSet,
}

impl PruneRule {
    fn should_prune(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_some_and(|t| t.is_dir()) {
            return false;
        }

        let name = entry.file_name().to_string_lossy();
        if self.config.is_ignored_dir(&name) {
            log::debug!("Pruned directory: {}", entry.path().display());
            return true;
        }

        match diff_paths(entry.path(), &self.root) {
            Some(relative) if self.exclude_set.is_match(&relative) => {
                log::debug!("Pruned by pattern: {}", relative.display());
                true
            }
            _ => false,
        }
    }
}

/// Symlinks are never followed; one that points at a directory counts as a
/// directory and everything else is read as a file.
fn classify(entry: &DirEntry) -> EntryKind {
    let is_dir = match entry.file_type() {
        Some(t) if t.is_dir() => true,
        Some(t) if t.is_symlink() => entry.path().is_dir(),
        _ => false,
    };
    if is_dir {
        EntryKind::Directory
    } else {
        EntryKind::File
    }
}

fn build_globset(patterns: &[String]) -> Result<GlobSet, CombineError> {
    let mut builder = GlobSetBuilder::new();
    for pat in patterns {
        builder.add(Glob::new(pat).map_err(|e| CombineError::InvalidGlob(pat.clone(), e))?);
    }
    builder
        .build()
        .map_err(|e| CombineError::InvalidGlob(patterns.join(", "), e))
}
