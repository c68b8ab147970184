// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Temporary directory management for integration tests.

use std::path::PathBuf;

use tempfile::TempDir;

/// Temporary directories used for testing, removed on drop.
#[derive(Debug)]
pub struct TempDirs {
    /// State directory for the key-value files.
    pub state_dir: PathBuf,

    /// Directory for exports and seed files.
    pub files_dir: PathBuf,

    _base: TempDir,
}

impl TempDirs {
    /// Creates new temporary directories for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn new() -> std::io::Result<Self> {
        let base = tempfile::tempdir()?;
        let state_dir = base.path().join("state");
        let files_dir = base.path().join("files");
        std::fs::create_dir_all(&files_dir)?;

        Ok(Self {
            state_dir,
            files_dir,
            _base: base,
        })
    }
}

/// Sets up temporary directories for integration tests.
///
/// The state directory is left uncreated so the store has to create it.
pub fn setup_temp_dirs() -> std::io::Result<TempDirs> {
    TempDirs::new()
}
