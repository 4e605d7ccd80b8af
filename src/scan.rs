//! Folder names used as patterns.
//!
//! A directory whose immediate sub-folders are named like `Host001~010` or
//! `Web%` acts as a lookup table: the folders whose pattern accepts a machine
//! name are the ones that apply to it.

use crate::error::{Error, Result};
use crate::pattern::{NamePattern, PatternError};
use rayon::prelude::*;
use std::path::Path;
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct FolderPattern {
    pub name: String,
    pub pattern: NamePattern,
    /// Why the folder name did not compile, if it didn't.
    pub error: Option<PatternError>,
}

impl FolderPattern {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        match NamePattern::parse(&name) {
            Ok(pattern) => Self {
                name,
                pattern,
                error: None,
            },
            Err(e) => Self {
                name,
                pattern: NamePattern::Unavailable,
                error: Some(e),
            },
        }
    }

    pub fn matches(&self, candidate: &str) -> bool {
        self.pattern.matches(candidate)
    }
}

/// Names of the visible immediate sub-folders of `dir`, sorted.
pub fn folder_names(dir: &Path) -> Result<Vec<String>> {
    if !dir.is_dir() {
        return Err(Error::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let mut names = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        names.push(name);
    }

    names.sort();
    Ok(names)
}

/// Compiles every sub-folder name of `dir` into a pattern.
pub fn load_folder_patterns(dir: &Path, sequential: bool) -> Result<Vec<FolderPattern>> {
    let names = folder_names(dir)?;

    let folders: Vec<FolderPattern> = if sequential || names.len() == 1 {
        names.iter().map(FolderPattern::new).collect()
    } else {
        names.par_iter().map(FolderPattern::new).collect()
    };

    Ok(folders)
}

pub fn matching_folders<'a>(folders: &'a [FolderPattern], candidate: &str) -> Vec<&'a FolderPattern> {
    folders.iter().filter(|f| f.matches(candidate)).collect()
}
