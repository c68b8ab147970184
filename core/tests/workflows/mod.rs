// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end workflow tests for the keracal-core crate.
//!
//! These tests drive the calendar the way a front end would: several
//! operations in sequence against one store, checking what a view would see.

mod event_lifecycle;
mod holiday_overlay;
mod persistence;
mod recurring_series;
mod reminders;
