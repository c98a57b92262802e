//! Calendar date parsing for export date columns.
//!
//! Upstream tools disagree on date formatting (ISO, US slash/dash/dot, compact,
//! and spelled-out months), so each value is tried against a fixed list of
//! layouts in priority order and the first successful parse wins.

use chrono::NaiveDate;

use intake_model::DateOptions;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Order {
    /// YYYY?MM?DD with two-digit month and day.
    YearFirst,
    /// M?D?Y with one- or two-digit month and day.
    MonthFirst,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum YearDigits {
    Four,
    Two,
}

#[derive(Debug, Clone, Copy)]
enum DateLayout {
    Separated {
        sep: char,
        order: Order,
        year: YearDigits,
    },
    /// YYYYMMDD
    Compact,
    /// chrono format string ending in a four-digit year
    Textual(&'static str),
}

use DateLayout::{Compact, Separated, Textual};
use Order::{MonthFirst, YearFirst};
use YearDigits::{Four, Two};

/// Layouts in priority order.
const DATE_LAYOUTS: &[DateLayout] = &[
    Separated { sep: '-', order: YearFirst, year: Four },
    Separated { sep: '/', order: YearFirst, year: Four },
    Separated { sep: '/', order: MonthFirst, year: Four },
    Separated { sep: '/', order: MonthFirst, year: Two },
    Separated { sep: '-', order: MonthFirst, year: Four },
    Separated { sep: '-', order: MonthFirst, year: Two },
    Separated { sep: '.', order: MonthFirst, year: Four },
    Separated { sep: '.', order: MonthFirst, year: Two },
    Separated { sep: '.', order: YearFirst, year: Four },
    Compact,
    Textual("%b %d, %Y"),
    Textual("%d %b %Y"),
];

/// Parse a calendar date.
///
/// Two-digit years are expanded with [`DateOptions::expand_two_digit_year`].
/// Dates that do not exist on the calendar (Feb 30, month 13) are rejected
/// rather than rolled over.
pub fn parse_date(value: &str, options: &DateOptions) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    DATE_LAYOUTS
        .iter()
        .find_map(|layout| parse_with_layout(trimmed, *layout, options))
}

/// Check if a string parses as a date.
pub fn is_date(value: &str, options: &DateOptions) -> bool {
    parse_date(value, options).is_some()
}

fn parse_with_layout(value: &str, layout: DateLayout, options: &DateOptions) -> Option<NaiveDate> {
    match layout {
        Separated { sep, order, year } => parse_separated(value, sep, order, year, options),
        Compact => parse_compact(value),
        Textual(format) => parse_textual(value, format),
    }
}

/// chrono's `%Y` takes one to four digits, so the year token is checked
/// separately to keep "Jan 15, 24" from becoming year 24.
fn parse_textual(value: &str, format: &str) -> Option<NaiveDate> {
    number(value.split_whitespace().last()?, 4, 4)?;
    NaiveDate::parse_from_str(value, format).ok()
}

fn parse_separated(
    value: &str,
    sep: char,
    order: Order,
    year_digits: YearDigits,
    options: &DateOptions,
) -> Option<NaiveDate> {
    let mut parts = value.split(sep);
    let (first, second, third) = (parts.next()?, parts.next()?, parts.next()?);
    if parts.next().is_some() {
        return None;
    }

    let (year, month, day) = match order {
        YearFirst => (
            number(first, 4, 4)?,
            number(second, 2, 2)?,
            number(third, 2, 2)?,
        ),
        MonthFirst => {
            let year = match year_digits {
                Four => number(third, 4, 4)?,
                Two => options.expand_two_digit_year(number(third, 2, 2)?),
            };
            (year, number(first, 1, 2)?, number(second, 1, 2)?)
        }
    };

    ymd(year, month, day)
}

fn parse_compact(value: &str) -> Option<NaiveDate> {
    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    ymd(
        value[0..4].parse().ok()?,
        value[4..6].parse().ok()?,
        value[6..8].parse().ok()?,
    )
}

fn number(part: &str, min_digits: usize, max_digits: usize) -> Option<i32> {
    if part.len() < min_digits
        || part.len() > max_digits
        || !part.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    part.parse().ok()
}

fn ymd(year: i32, month: i32, day: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, u32::try_from(month).ok()?, u32::try_from(day).ok()?)
}
