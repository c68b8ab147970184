// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::Write;

use jiff::civil::DateTime;

use crate::Event;

const CRLF: &str = "\r\n";

/// Renders events as an iCalendar document with local floating times.
///
/// Lines are CRLF-separated; the closing `END:VCALENDAR` has no trailing CRLF.
pub fn to_ics<'a>(events: impl IntoIterator<Item = &'a Event>) -> String {
    let mut out = String::new();
    out.push_str("BEGIN:VCALENDAR");
    out.push_str(CRLF);
    out.push_str("VERSION:2.0");
    out.push_str(CRLF);
    out.push_str("PRODID:-//Calendar App//EN");
    out.push_str(CRLF);

    for event in events {
        push_line(&mut out, "BEGIN", "VEVENT");
        push_line(&mut out, "UID", &format!("{}@calendar-app", event.id()));
        push_line(&mut out, "DTSTART", &ics_datetime(event.start_instant()));
        push_line(&mut out, "DTEND", &ics_datetime(event.end_instant()));
        push_line(&mut out, "SUMMARY", &event.title);
        if let Some(description) = &event.description {
            push_line(&mut out, "DESCRIPTION", description);
        }
        push_line(&mut out, "END", "VEVENT");
    }

    out.push_str("END:VCALENDAR");
    out
}

fn push_line(out: &mut String, name: &str, value: &str) {
    // writing into a String cannot fail
    let _ = write!(out, "{name}:{value}{CRLF}");
}

fn ics_datetime(dt: DateTime) -> String {
    dt.strftime("%Y%m%dT%H%M%S").to_string()
}
