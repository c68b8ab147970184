// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Test data factories (fixtures)
//! - Custom assertion helpers
//! - Temporary directory management with auto-cleanup

mod assertions;
mod fixtures;
mod temp_dir;

#[allow(unused_imports)]
pub use assertions::{assert_dates, assert_event_matches_draft, assert_ids_unique};
#[allow(unused_imports)]
pub use fixtures::{
    draft_at, file_calendar, memory_calendar, memory_store, t, test_config, test_event_draft,
};
#[allow(unused_imports)]
pub use temp_dir::{TempDirs, setup_temp_dirs};
