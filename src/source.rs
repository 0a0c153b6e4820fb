//! Where catalog text comes from.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

pub trait CatalogSource {
    /// Fetch the catalog text for `reference`, or `None` if it does not exist.
    fn get_catalog_text(&self, reference: &str) -> Result<Option<String>>;
}

/// Reads catalogs from the filesystem, relative to a root directory.
pub struct FileSource {
    root: PathBuf,
}

impl FileSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn resolve(&self, reference: &str) -> PathBuf {
        self.root.join(reference)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl CatalogSource for FileSource {
    fn get_catalog_text(&self, reference: &str) -> Result<Option<String>> {
        let path = self.resolve(reference);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => {
                Err(err).with_context(|| format!("Failed to read catalog: {}", path.display()))
            }
        }
    }
}
