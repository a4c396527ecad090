//! Interval arithmetic for matched literals.
//!
//! Every mode resolves to a pair of calendar days (earliest, latest). The
//! start instant is 00:00:00 UTC of the earliest day, the end instant is
//! 23:59:59 UTC of the latest day. Years are proleptic Gregorian with
//! astronomical numbering; a `vdZw` literal negates the year before the date
//! is built.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use crate::error::{Error, Result};
use crate::reference::Mode;
use crate::registry::MONTH_NAMES;

const ERA_MARKER: &str = "vdzw";

/// Interval and display text of a single literal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub normalized: String,
}

/// Resolve `literal` for `mode`.
///
/// # Algorithm
/// - `Day`: the named day.
/// - `Month`: the first day of the month only.
/// - `Year`: Jan 1 .. Dec 31.
/// - `DecadeAbsolute` (`D`er Jahre): `D` .. `D+9`; BCE `-(D+9)` .. `-D`.
///   A zero decade uses 1 instead of 0 on the boundary nearest the epoch.
/// - `DecadeRelative` (`D`er Jahre des `C`. Jh.): offset `100*C - 100`, then
///   as for an absolute decade shifted by the offset, except that the CE start
///   keeps a zero `D`.
/// - `Century` (`N`. Jh.): `100*N - 99` .. `100*N`; BCE `-100*N` .. `-100*N + 99`.
///
/// # Errors
/// Returns [`Error::Arithmetic`] if a numeric component cannot be read and
/// [`Error::InvalidDate`] if the components do not name a calendar day.
pub fn resolve(literal: &str, mode: Mode, is_bce: bool) -> Result<Resolution> {
    let ctx = Literal { text: literal, mode };
    let body = strip_era(literal);

    let (first, last) = match mode {
        Mode::Day => {
            let (day, rest) = ctx.split(body, ". ", "day")?;
            let (month, year) = ctx.split(rest, " ", "month")?;
            let date = ctx.date(
                signed(ctx.number(year, "year")?, is_bce),
                ctx.month(month)?,
                ctx.unsigned(day, "day")?,
            )?;
            (date, date)
        }
        Mode::Month => {
            let (month, year) = ctx.split(body, " ", "month")?;
            let date = ctx.date(signed(ctx.number(year, "year")?, is_bce), ctx.month(month)?, 1)?;
            (date, date)
        }
        Mode::Year => {
            let year = body
                .strip_prefix("Jahr ")
                .ok_or_else(|| ctx.arithmetic("year"))?;
            let year = signed(ctx.number(year, "year")?, is_bce);
            (ctx.date(year, 1, 1)?, ctx.date(year, 12, 31)?)
        }
        Mode::DecadeAbsolute => {
            let (decade, _) = ctx.split(body, "er Jahre", "decade")?;
            ctx.decade(0, ctx.number(decade, "decade")?, is_bce, true)?
        }
        Mode::DecadeRelative => {
            let (decade, rest) = ctx.split(body, "er Jahre", "decade")?;
            let (_, century) = ctx.split(rest, " des ", "century")?;
            let (century, _) = ctx.split(century, ".", "century")?;
            let offset = ctx.number(century, "century")? * 100 - 100;
            ctx.decade(offset, ctx.number(decade, "decade")?, is_bce, false)?
        }
        Mode::Century => {
            let (century, _) = ctx.split(body, ".", "century")?;
            let hundreds = ctx.number(century, "century")? * 100;
            if is_bce {
                (ctx.date(-hundreds, 1, 1)?, ctx.date(-hundreds + 99, 12, 31)?)
            } else {
                (ctx.date(hundreds - 99, 1, 1)?, ctx.date(hundreds, 12, 31)?)
            }
        }
    };

    Ok(Resolution {
        start: first.and_time(NaiveTime::MIN).and_utc(),
        end: ctx.end_of_day(last)?,
        normalized: normalize(literal),
    })
}

/// Display form of a literal.
///
/// Drops the leading "Jahr " keyword, abbreviates "Jahrhundert(s)" and "JH"
/// to "Jh." and turns "Jahren" into "Jahre". The era marker stays as is.
#[must_use]
pub fn normalize(literal: &str) -> String {
    literal
        .strip_prefix("Jahr ")
        .unwrap_or(literal)
        .replace("er Jahren", "er Jahre")
        .replace("Jahrhunderts", "Jh.")
        .replace("Jahrhundert", "Jh.")
        .replace(" JH", " Jh.")
}

/// Whether a literal ends with the `vdZw` marker, in any letter case.
#[must_use]
pub fn has_era_marker(literal: &str) -> bool {
    era_split(literal.trim_end()).is_some()
}

fn era_split(text: &str) -> Option<&str> {
    let at = text.len().checked_sub(ERA_MARKER.len())?;
    let tail = text.get(at..)?;
    tail.eq_ignore_ascii_case(ERA_MARKER)
        .then(|| text.get(..at))
        .flatten()
}

fn strip_era(literal: &str) -> &str {
    let trimmed = literal.trim_end();
    era_split(trimmed).map_or(trimmed, str::trim_end)
}

const fn signed(year: i32, is_bce: bool) -> i32 {
    if is_bce { -year } else { year }
}

/// The literal under resolution, carried for error reporting.
struct Literal<'a> {
    text: &'a str,
    mode: Mode,
}

impl Literal<'_> {
    fn arithmetic(&self, component: &'static str) -> Error {
        Error::Arithmetic {
            literal: self.text.to_string(),
            mode: self.mode,
            component,
        }
    }

    fn split<'t>(
        &self,
        text: &'t str,
        delimiter: &str,
        component: &'static str,
    ) -> Result<(&'t str, &'t str)> {
        text.split_once(delimiter)
            .ok_or_else(|| self.arithmetic(component))
    }

    /// Non-negative numeral; the sign comes from the era flag only.
    fn number(&self, text: &str, component: &'static str) -> Result<i32> {
        text.trim()
            .parse::<u16>()
            .map(i32::from)
            .map_err(|_| self.arithmetic(component))
    }

    fn unsigned(&self, text: &str, component: &'static str) -> Result<u32> {
        text.trim()
            .parse::<u32>()
            .map_err(|_| self.arithmetic(component))
    }

    fn month(&self, name: &str) -> Result<u32> {
        MONTH_NAMES
            .iter()
            .position(|month| *month == name.trim())
            .and_then(|index| u32::try_from(index + 1).ok())
            .ok_or_else(|| self.arithmetic("month"))
    }

    fn date(&self, year: i32, month: u32, day: u32) -> Result<NaiveDate> {
        NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| Error::InvalidDate {
            literal: self.text.to_string(),
            mode: self.mode,
            year,
            month,
            day,
        })
    }

    fn end_of_day(&self, date: NaiveDate) -> Result<DateTime<Utc>> {
        date.and_hms_opt(23, 59, 59)
            .map(|end| end.and_utc())
            .ok_or_else(|| self.arithmetic("end of day"))
    }

    /// Ten years starting at `offset + decade`, mirrored below the epoch for BCE.
    ///
    /// A zero `decade` counts as 1 on the BCE end. With `lift_zero_start`
    /// it counts as 1 on the CE start as well.
    fn decade(
        &self,
        offset: i32,
        decade: i32,
        is_bce: bool,
        lift_zero_start: bool,
    ) -> Result<(NaiveDate, NaiveDate)> {
        let lifted = if decade == 0 { 1 } else { decade };
        if is_bce {
            Ok((
                self.date(-(offset + decade + 9), 1, 1)?,
                self.date(-(offset + lifted), 12, 31)?,
            ))
        } else {
            let start = offset + if lift_zero_start { lifted } else { decade };
            Ok((self.date(start, 1, 1)?, self.date(offset + decade + 9, 12, 31)?))
        }
    }
}
