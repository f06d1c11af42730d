//! Document Store — the fixed résumé, loaded once at startup and shared read-only.
//!
//! The store is injected into `AppState` rather than held in a global so tests
//! can substitute their own fixtures.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::chunk::Chunk;

/// Résumé bundled with the binary, used when `CV_CONTENT_PATH` is not set.
const BUNDLED_CV_CONTENT: &str = include_str!("../../data/cv-content.json");

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid CV content JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate chunk id {0}")]
    DuplicateId(u32),
}

#[derive(Debug, Clone)]
pub struct DocumentStore {
    chunks: Vec<Chunk>,
}

impl DocumentStore {
    /// Builds a store, rejecting duplicate ids. Chunk order is preserved and
    /// is the tie-break order for ranking.
    pub fn new(chunks: Vec<Chunk>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(chunks.len());
        for chunk in &chunks {
            if !seen.insert(chunk.id) {
                return Err(StoreError::DuplicateId(chunk.id));
            }
        }
        Ok(Self { chunks })
    }

    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let chunks: Vec<Chunk> = serde_json::from_str(json)?;
        Self::new(chunks)
    }

    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let json = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn bundled() -> Result<Self, StoreError> {
        Self::from_json(BUNDLED_CV_CONTENT)
    }

    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    pub fn get(&self, id: u32) -> Option<&Chunk> {
        self.chunks.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}
