//! Choose one date among candidates from different sources.

use crate::model::DateSource;
use crate::release_date::ReleaseDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub date: ReleaseDate,
    pub source: DateSource,
}

impl Candidate {
    pub fn new(date: ReleaseDate, source: DateSource) -> Self {
        Self { date, source }
    }
}

/// Whether `challenger` should replace `current` as the release date.
///
/// A date that refines the other (`1987-11-12` over `1987`) wins; a date the
/// other refines loses. Otherwise the chronologically earlier date wins and
/// equal dates keep `current`.
pub fn prefers(challenger: &ReleaseDate, current: &ReleaseDate) -> bool {
    if challenger.refines(current) {
        true
    } else if current.refines(challenger) {
        false
    } else {
        challenger < current
    }
}

/// Pick the winning candidate. Callers pass candidates in source priority
/// order, so full ties go to the first one.
pub fn reconcile(candidates: &[Candidate]) -> Option<Candidate> {
    let mut iter = candidates.iter().copied();
    let first = iter.next()?;
    Some(iter.fold(first, |best, c| {
        if prefers(&c.date, &best.date) {
            c
        } else {
            best
        }
    }))
}
