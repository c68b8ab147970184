// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod grid;
mod time_of_day;
mod view;

pub use grid::{
    MONTH_GRID_LEN, end_of_month, end_of_week, is_same_day, is_same_month, is_today, month_grid,
    start_of_month, start_of_week, week_grid, year_months,
};
pub use time_of_day::{format_time, minutes_of_day, parse_date, parse_time};
pub(crate) use time_of_day::{serde_hhmm, serde_opt_date, serde_opt_text};
pub use view::{View, hour_slots};
