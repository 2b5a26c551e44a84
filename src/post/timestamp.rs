//! Publish timestamp formatting.
//!
//! Every label for a post is derived from the same instant: the absolute
//! label ("3 de maio às 10:00h"), the relative label ("há cerca de 1 hora"),
//! and the ISO instant for the `datetime` attribute. The relative label
//! depends on the current time and is recomputed on each render.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, FixedOffset, Offset, SecondsFormat, Timelike, Utc};

const MINUTES_IN_DAY: i64 = 1440;
const MINUTES_IN_MONTH: i64 = 43_200;
const MINUTES_IN_TWO_MONTHS: i64 = 86_400;

/// Locale used for month names and relative phrasing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    PtBr,
    EnUs,
}

impl Locale {
    /// BCP 47 tag, also used for the `lang` attribute.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::PtBr => "pt-BR",
            Self::EnUs => "en-US",
        }
    }

    /// Full month name for a 1-based month number.
    #[must_use]
    pub fn month_name(&self, month: u32) -> &'static str {
        const PT: [&str; 12] = [
            "janeiro", "fevereiro", "março", "abril", "maio", "junho", "julho", "agosto",
            "setembro", "outubro", "novembro", "dezembro",
        ];
        const EN: [&str; 12] = [
            "January", "February", "March", "April", "May", "June", "July", "August",
            "September", "October", "November", "December",
        ];
        let idx = (month.clamp(1, 12) - 1) as usize;
        match self {
            Self::PtBr => PT[idx],
            Self::EnUs => EN[idx],
        }
    }
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "pt-br" | "pt" => Ok(Self::PtBr),
            "en-us" | "en" => Ok(Self::EnUs),
            _ => Err(format!("unsupported locale '{s}', expected 'pt-BR' or 'en-US'")),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Parse a fixed UTC offset such as "-03:00", "+0530", "Z" or "UTC".
#[must_use]
pub fn parse_utc_offset(value: &str) -> Option<FixedOffset> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("z") || value.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0);
    }

    let (sign, rest) = match value.as_bytes().first()? {
        b'+' => (1, &value[1..]),
        b'-' => (-1, &value[1..]),
        _ => return None,
    };
    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let hours: i32 = digits[..2].parse().ok()?;
    let minutes: i32 = digits[2..].parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}

/// Coarse distance between two instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distance {
    LessThanAMinute,
    Minutes(i64),
    AboutHours(i64),
    Days(i64),
    AboutMonths(i64),
    Months(i64),
    AboutYears(i64),
    OverYears(i64),
    AlmostYears(i64),
}

impl Distance {
    /// Bucket the distance between `a` and `b`, in either order.
    #[must_use]
    pub fn between(a: DateTime<Utc>, b: DateTime<Utc>) -> Self {
        let (earlier, later) = if a <= b { (a, b) } else { (b, a) };
        let seconds = (later - earlier).num_seconds();
        let minutes = (seconds + 30) / 60;

        if minutes < 2 {
            return if minutes == 0 {
                Self::LessThanAMinute
            } else {
                Self::Minutes(minutes)
            };
        }
        if minutes < 45 {
            return Self::Minutes(minutes);
        }
        if minutes < 90 {
            return Self::AboutHours(1);
        }
        if minutes < MINUTES_IN_DAY {
            return Self::AboutHours((minutes + 30) / 60);
        }
        // 42 hours
        if minutes < 2520 {
            return Self::Days(1);
        }
        if minutes < MINUTES_IN_MONTH {
            return Self::Days((minutes + MINUTES_IN_DAY / 2) / MINUTES_IN_DAY);
        }
        if minutes < MINUTES_IN_TWO_MONTHS {
            return Self::AboutMonths((minutes + MINUTES_IN_MONTH / 2) / MINUTES_IN_MONTH);
        }

        let months = calendar_months_between(earlier, later);
        if months < 12 {
            let nearest = (minutes + MINUTES_IN_MONTH / 2) / MINUTES_IN_MONTH;
            return Self::Months(nearest.max(1));
        }

        let years = months / 12;
        match months % 12 {
            0..=2 => Self::AboutYears(years),
            3..=8 => Self::OverYears(years),
            _ => Self::AlmostYears(years + 1),
        }
    }

    /// Phrase without direction ("cerca de 1 hora", "about 1 hour").
    #[must_use]
    pub fn phrase(&self, locale: Locale) -> String {
        match locale {
            Locale::PtBr => match *self {
                Self::LessThanAMinute => "menos de um minuto".to_string(),
                Self::Minutes(n) => plural(n, "minuto", "minutos"),
                Self::AboutHours(n) => format!("cerca de {}", plural(n, "hora", "horas")),
                Self::Days(n) => plural(n, "dia", "dias"),
                Self::AboutMonths(n) => format!("cerca de {}", plural(n, "mês", "meses")),
                Self::Months(n) => plural(n, "mês", "meses"),
                Self::AboutYears(n) => format!("cerca de {}", plural(n, "ano", "anos")),
                Self::OverYears(n) => format!("mais de {}", plural(n, "ano", "anos")),
                Self::AlmostYears(n) => format!("quase {}", plural(n, "ano", "anos")),
            },
            Locale::EnUs => match *self {
                Self::LessThanAMinute => "less than a minute".to_string(),
                Self::Minutes(n) => plural(n, "minute", "minutes"),
                Self::AboutHours(n) => format!("about {}", plural(n, "hour", "hours")),
                Self::Days(n) => plural(n, "day", "days"),
                Self::AboutMonths(n) => format!("about {}", plural(n, "month", "months")),
                Self::Months(n) => plural(n, "month", "months"),
                Self::AboutYears(n) => format!("about {}", plural(n, "year", "years")),
                Self::OverYears(n) => format!("over {}", plural(n, "year", "years")),
                Self::AlmostYears(n) => format!("almost {}", plural(n, "year", "years")),
            },
        }
    }
}

fn plural(n: i64, one: &str, many: &str) -> String {
    if n == 1 {
        format!("1 {one}")
    } else {
        format!("{n} {many}")
    }
}

/// Whole calendar months from `earlier` to `later`, not counting a partial last month.
fn calendar_months_between(earlier: DateTime<Utc>, later: DateTime<Utc>) -> i64 {
    let mut months = i64::from(later.year() - earlier.year()) * 12
        + i64::from(later.month()) - i64::from(earlier.month());
    let later_pos = (later.day(), later.num_seconds_from_midnight());
    let earlier_pos = (earlier.day(), earlier.num_seconds_from_midnight());
    if months > 0 && later_pos < earlier_pos {
        months -= 1;
    }
    months
}

/// All labels rendered for one publish instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishLabels {
    /// "3 de maio às 10:00h"
    pub absolute: String,
    /// "há cerca de 1 hora"
    pub relative: String,
    /// "2022-05-03T10:00:00.000Z"
    pub iso: String,
}

/// Formats publish instants in one fixed locale and UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimestampFormatter {
    locale: Locale,
    offset: FixedOffset,
}

impl Default for TimestampFormatter {
    fn default() -> Self {
        Self::new(Locale::default(), FixedOffset::west_opt(3 * 3600).unwrap_or_else(utc))
    }
}

fn utc() -> FixedOffset {
    Utc.fix()
}

impl TimestampFormatter {
    #[must_use]
    pub const fn new(locale: Locale, offset: FixedOffset) -> Self {
        Self { locale, offset }
    }

    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// "`<day>` de `<month>` às `<HH:mm>`h" (pt-BR) or "`<Month> <day>` at
    /// `<HH:mm>`" (en-US), in the configured offset.
    #[must_use]
    pub fn absolute_label(&self, instant: DateTime<Utc>) -> String {
        let local = instant.with_timezone(&self.offset);
        let month = self.locale.month_name(local.month());
        match self.locale {
            Locale::PtBr => format!(
                "{} de {month} às {:02}:{:02}h",
                local.day(),
                local.hour(),
                local.minute()
            ),
            Locale::EnUs => format!(
                "{month} {} at {:02}:{:02}",
                local.day(),
                local.hour(),
                local.minute()
            ),
        }
    }

    /// Distance from `now` with a direction suffix.
    #[must_use]
    pub fn relative_label(&self, instant: DateTime<Utc>, now: DateTime<Utc>) -> String {
        let phrase = Distance::between(instant, now).phrase(self.locale);
        let future = instant > now;
        match (self.locale, future) {
            (Locale::PtBr, true) => format!("em {phrase}"),
            (Locale::PtBr, false) => format!("há {phrase}"),
            (Locale::EnUs, true) => format!("in {phrase}"),
            (Locale::EnUs, false) => format!("{phrase} ago"),
        }
    }

    /// Labels for `instant` as seen at `now`.
    #[must_use]
    pub fn labels_at(&self, instant: DateTime<Utc>, now: DateTime<Utc>) -> PublishLabels {
        PublishLabels {
            absolute: self.absolute_label(instant),
            relative: self.relative_label(instant, now),
            iso: instant.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}
