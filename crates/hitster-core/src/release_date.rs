//! Partial release dates (`YYYY`, `YYYY-MM`, `YYYY-MM-DD`) and their card labels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid release date {0:?} (expected YYYY, YYYY-MM or YYYY-MM-DD)")]
pub struct ReleaseDateError(pub String);

/// A release date known to year, month or day precision.
///
/// Field order gives the ordering: chronological, and a less precise date
/// sorts before a more precise one in the same period ("1985" < "1985-03").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ReleaseDate {
    year: u16,
    month: Option<u8>,
    day: Option<u8>,
}

impl ReleaseDate {
    /// Year-only date. Year 0 is what Spotify reports for "unknown" and is rejected.
    pub fn from_year(year: u16) -> Option<Self> {
        (1..=9999).contains(&year).then_some(Self {
            year,
            month: None,
            day: None,
        })
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn month(&self) -> Option<u8> {
        self.month
    }

    pub fn day(&self) -> Option<u8> {
        self.day
    }

    /// 1 = year, 2 = month, 3 = day.
    pub fn precision(&self) -> u8 {
        1 + self.month.is_some() as u8 + self.day.is_some() as u8
    }

    /// True when `self` is more precise than `coarser` and agrees with it,
    /// e.g. `1987-11-12` refines `1987` and `1987-11` but not `1987-03`.
    pub fn refines(&self, coarser: &ReleaseDate) -> bool {
        self.precision() > coarser.precision()
            && self.year == coarser.year
            && coarser.month.map_or(true, |m| self.month == Some(m))
    }

    /// Labels printed on the card back: `("1985", "March", "7.")`.
    pub fn display_parts(&self, lang: MonthLang, show_day: bool) -> (String, String, String) {
        let year = format!("{:04}", self.year);
        let month = self
            .month
            .map(|m| lang.month_name(m).to_string())
            .unwrap_or_default();
        let day = match self.day {
            Some(d) if show_day => format!("{}.", d),
            _ => String::new(),
        };
        (year, month, day)
    }
}

impl FromStr for ReleaseDate {
    type Err = ReleaseDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ReleaseDateError(s.to_string());
        let parts: Vec<&str> = s.trim().split('-').collect();
        if parts.is_empty() || parts.len() > 3 {
            return Err(err());
        }
        let number = |p: &str, len: usize| -> Option<u16> {
            if p.len() == len && p.bytes().all(|b| b.is_ascii_digit()) {
                p.parse().ok()
            } else {
                None
            }
        };

        let year = number(parts[0], 4).ok_or_else(err)?;
        let mut date = Self::from_year(year).ok_or_else(err)?;
        if let Some(m) = parts.get(1) {
            let month = number(m, 2).filter(|m| (1..=12).contains(m)).ok_or_else(err)?;
            date.month = Some(month as u8);
        }
        if let Some(d) = parts.get(2) {
            let day = number(d, 2).ok_or_else(err)?;
            chrono::NaiveDate::from_ymd_opt(year as i32, date.month.unwrap_or(1) as u32, day as u32)
                .ok_or_else(err)?;
            date.day = Some(day as u8);
        }
        Ok(date)
    }
}

impl fmt::Display for ReleaseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.year)?;
        if let Some(m) = self.month {
            write!(f, "-{:02}", m)?;
        }
        if let Some(d) = self.day {
            write!(f, "-{:02}", d)?;
        }
        Ok(())
    }
}

impl TryFrom<String> for ReleaseDate {
    type Error = ReleaseDateError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ReleaseDate> for String {
    fn from(d: ReleaseDate) -> Self {
        d.to_string()
    }
}

/// Accept a judge's answer only if it is exactly a four-digit year.
pub fn parse_year_answer(text: &str) -> Option<ReleaseDate> {
    let t = text.trim();
    if t.len() != 4 || !t.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    ReleaseDate::from_year(t.parse().ok()?)
}

/// Language for month names on the cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthLang {
    #[default]
    En,
    De,
}

const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTHS_DE: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

impl MonthLang {
    /// Full month name for `month` in 1..=12; empty otherwise.
    pub fn month_name(self, month: u8) -> &'static str {
        let names = match self {
            MonthLang::En => &MONTHS_EN,
            MonthLang::De => &MONTHS_DE,
        };
        month
            .checked_sub(1)
            .and_then(|i| names.get(i as usize))
            .copied()
            .unwrap_or("")
    }
}

impl FromStr for MonthLang {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(MonthLang::En),
            "de" => Ok(MonthLang::De),
            other => Err(format!("unsupported month language: {other}")),
        }
    }
}
