//! Dataset file loading for ChurnAI.
//!
//! Reads the exported subscriber CSV from disk. This is the only place
//! ingestion I/O errors can originate; parsing itself never fails.

use std::path::Path;

use churn_core::error::{ChurnError, Result};

// ── Public API ────────────────────────────────────────────────────────────────

/// Read the raw dataset blob at `path`.
///
/// Any I/O failure (missing file, permissions, unreadable bytes) is reported
/// as [`ChurnError::Ingestion`] carrying the offending path.
pub fn read_dataset(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| ChurnError::Ingestion {
        path: path.to_path_buf(),
        source,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────
