//! Proof-type classification for the records table.
//!
//! Each table row carries the kind of evidence backing the record. The
//! filter radio group selects which kinds are shown; the summary line reports
//! how many rows survived.

use std::fmt;
use std::str::FromStr;

use crate::error::PageError;

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

/// Evidence kind attached to a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProofType {
    Photo,
    Video,
    Livestream,
    /// Anything else (e.g. `claimed`). Never counts as verified.
    Other,
}

impl ProofType {
    /// Classify a raw attribute value. Matching is exact.
    pub fn from_attribute(raw: &str) -> Self {
        match raw {
            "photo" => Self::Photo,
            "video" => Self::Video,
            "livestream" => Self::Livestream,
            _ => Self::Other,
        }
    }

    /// Classify an optional attribute; a missing attribute is `Other`.
    pub fn from_optional(raw: Option<&str>) -> Self {
        raw.map_or(Self::Other, Self::from_attribute)
    }

    pub fn is_verified(self) -> bool {
        matches!(self, Self::Photo | Self::Video | Self::Livestream)
    }
}

/// Selected radio in the filter group.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProofFilter {
    /// Every row, whatever its proof.
    #[default]
    All,
    /// Photo, video, or livestream proof.
    Verified,
    Photo,
    Video,
    Livestream,
}

impl ProofFilter {
    #[cfg(test)]
    pub const ALL: [Self; 5] = [Self::All, Self::Verified, Self::Photo, Self::Video, Self::Livestream];

    /// Filter for the checked radio's value. No selection, or a value that
    /// is not a known filter, falls back to `All`; the error says which.
    pub fn from_radio(raw: Option<&str>) -> (Self, Option<PageError>) {
        match raw.map(str::parse::<Self>) {
            Some(Ok(filter)) => (filter, None),
            Some(Err(err)) => (Self::All, Some(err)),
            None => (Self::All, Some(PageError::NoFilterSelected)),
        }
    }

    pub fn matches(self, proof: ProofType) -> bool {
        match self {
            Self::All => true,
            Self::Verified => proof.is_verified(),
            Self::Photo => proof == ProofType::Photo,
            Self::Video => proof == ProofType::Video,
            Self::Livestream => proof == ProofType::Livestream,
        }
    }

    /// Human-readable description used in the summary line.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "all records",
            Self::Verified => "verified records only",
            Self::Photo => "photo proof only",
            Self::Video => "video proof only",
            Self::Livestream => "livestream proof only",
        }
    }
}

impl FromStr for ProofFilter {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all-record" | "all" => Ok(Self::All),
            "verified-record" | "verified" => Ok(Self::Verified),
            "photo" => Ok(Self::Photo),
            "video" => Ok(Self::Video),
            "livestream" => Ok(Self::Livestream),
            other => Err(PageError::UnknownFilter(other.to_string())),
        }
    }
}

/// Visible/total counts for the active filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterSummary {
    pub visible: usize,
    pub total: usize,
    pub filter: ProofFilter,
}

impl fmt::Display for FilterSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {} of {} records ({})", self.visible, self.total, self.filter.label())
    }
}

/// Per-row visibility, in row order, plus the summary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterOutcome {
    pub visibility: Vec<bool>,
    pub summary: FilterSummary,
}

/// Apply `filter` to every row.
pub fn classify<I>(filter: ProofFilter, rows: I) -> FilterOutcome
where
    I: IntoIterator<Item = ProofType>,
{
    let visibility: Vec<bool> = rows.into_iter().map(|proof| filter.matches(proof)).collect();
    let visible = visibility.iter().filter(|shown| **shown).count();
    let summary = FilterSummary { visible, total: visibility.len(), filter };
    FilterOutcome { visibility, summary }
}
