use std::fmt;

use serde::{Deserialize, Serialize};

/// Discriminator between the two parallel species families.
///
/// A photo id or species id is only meaningful together with its `Kind`;
/// the fauna and flora tables use independent integer key spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Fauna,
    Flora,
}

impl Kind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Fauna => "fauna",
            Kind::Flora => "flora",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind selector accepted by the gallery endpoints (`tipo` query parameter).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KindFilter {
    Fauna,
    Flora,
    #[default]
    Todos,
}

impl KindFilter {
    /// Parse the wire value. `None` for anything that is not
    /// `fauna`, `flora` or `todos`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "fauna" => Some(KindFilter::Fauna),
            "flora" => Some(KindFilter::Flora),
            "todos" => Some(KindFilter::Todos),
            _ => None,
        }
    }

    pub fn is_both(&self) -> bool {
        matches!(self, KindFilter::Todos)
    }
}
