//! Release-year distribution chart staging.

use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

pub(crate) const MAIN: &str = "years.typ";
const TEMPLATE: &str = include_str!("templates/years.typ");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearCount {
    pub year: u16,
    pub count: usize,
}

/// Songs per year, covering every year from the earliest to the latest (gaps are 0).
pub fn year_distribution(years: impl IntoIterator<Item = u16>) -> Vec<YearCount> {
    let mut counts: BTreeMap<u16, usize> = BTreeMap::new();
    for y in years {
        *counts.entry(y).or_default() += 1;
    }
    let (Some((&min, _)), Some((&max, _))) = (counts.first_key_value(), counts.last_key_value())
    else {
        return Vec::new();
    };
    (min..=max)
        .map(|year| YearCount {
            year,
            count: counts.get(&year).copied().unwrap_or(0),
        })
        .collect()
}

pub fn stage_years(dir: &Path, counts: &[YearCount]) -> Result<()> {
    let json = serde_json::to_string_pretty(counts).context("serialize year counts")?;
    std::fs::write(dir.join("years.json"), json).context("write years.json")?;
    std::fs::write(dir.join(MAIN), TEMPLATE).context("write years.typ")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_gaps_with_zero() {
        let d = year_distribution([1987, 1985, 1985]);
        assert_eq!(
            d,
            vec![
                YearCount { year: 1985, count: 2 },
                YearCount { year: 1986, count: 0 },
                YearCount { year: 1987, count: 1 },
            ]
        );
    }

    #[test]
    fn empty_input() {
        assert!(year_distribution(std::iter::empty()).is_empty());
    }

    #[test]
    fn stage_writes_data() {
        let dir = tempfile::tempdir().unwrap();
        stage_years(dir.path(), &year_distribution([2001, 2003])).unwrap();
        let data: serde_json::Value =
            serde_json::from_slice(&std::fs::read(dir.path().join("years.json")).unwrap()).unwrap();
        assert_eq!(data.as_array().unwrap().len(), 3);
        assert_eq!(data[1]["count"], 0);
        assert!(dir.path().join("years.typ").exists());
    }
}
