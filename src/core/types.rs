use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::StatementError;

/// Play genre. Determines the pricing formula and the credit bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    /// Flat base amount plus a per-seat surcharge above the threshold.
    Tragedy,
    /// Per-seat pricing with an over-capacity surcharge and bonus credits.
    Comedy,
}

impl Genre {
    /// Genre code as it appears in play catalogs.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Tragedy => "tragedy",
            Self::Comedy => "comedy",
        }
    }

    /// Parse from a catalog genre code. Matching is exact.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "tragedy" => Some(Self::Tragedy),
            "comedy" => Some(Self::Comedy),
            _ => None,
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A play that can be staged.
///
/// The genre is kept as the raw catalog string and only checked when a
/// performance of the play is priced, see [`Play::genre`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    /// Display name, printed on statement lines.
    pub name: String,
    /// Genre code (e.g. "tragedy").
    #[serde(rename = "type")]
    pub kind: String,
}

impl Play {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
        }
    }

    /// Resolve the genre, failing with [`StatementError::UnknownGenre`] for
    /// anything outside the supported set.
    pub fn genre(&self) -> Result<Genre, StatementError> {
        Genre::from_code(&self.kind).ok_or_else(|| StatementError::UnknownGenre(self.kind.clone()))
    }
}

/// One staging of a play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performance {
    /// Catalog key of the performed play.
    #[serde(rename = "playID")]
    pub play_id: String,
    /// Seat count.
    pub audience: u32,
}

impl Performance {
    pub fn new(play_id: impl Into<String>, audience: u32) -> Self {
        Self {
            play_id: play_id.into(),
            audience,
        }
    }
}

/// A customer's bill covering a sequence of performances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub customer: String,
    /// Performances in statement order.
    pub performances: Vec<Performance>,
}

/// Read-only mapping from play ID to [`Play`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    plays: HashMap<String, Play>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a play, returning the previous entry for that ID.
    pub fn insert(&mut self, play_id: impl Into<String>, play: Play) -> Option<Play> {
        self.plays.insert(play_id.into(), play)
    }

    pub fn get(&self, play_id: &str) -> Option<&Play> {
        self.plays.get(play_id)
    }

    /// Look up a play, failing with [`StatementError::UnknownPlay`] if absent.
    pub fn play(&self, play_id: &str) -> Result<&Play, StatementError> {
        self.plays
            .get(play_id)
            .ok_or_else(|| StatementError::UnknownPlay(play_id.to_string()))
    }

    pub fn contains(&self, play_id: &str) -> bool {
        self.plays.contains_key(play_id)
    }

    pub fn len(&self) -> usize {
        self.plays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plays.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Play)> {
        self.plays.iter().map(|(id, play)| (id.as_str(), play))
    }
}

impl<K: Into<String>> FromIterator<(K, Play)> for Catalog {
    fn from_iter<I: IntoIterator<Item = (K, Play)>>(iter: I) -> Self {
        Self {
            plays: iter.into_iter().map(|(id, play)| (id.into(), play)).collect(),
        }
    }
}
