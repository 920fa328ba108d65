//! Pre-defined page sizes for common paper formats.
//!
//! All sizes are provided in portrait orientation (width, height) where width ≤ height.
//! Use [`Orientation`] to turn them sideways when a page is started.

use crate::units::*;
use serde::{Deserialize, Serialize};

/// Page dimensions as (width, height) in millimetres.
pub type PageSize = (Mm, Mm);

pub const A3: PageSize = (Mm(297.0), Mm(420.0));
pub const A4: PageSize = (Mm(210.0), Mm(297.0));
pub const A5: PageSize = (Mm(148.0), Mm(210.0));
pub const LETTER: PageSize = (Mm(215.9), Mm(279.4));
pub const LEGAL: PageSize = (Mm(215.9), Mm(355.6));

/// Look up a page size by its common name (`A4`, `letter`, ...)
pub fn by_name(name: &str) -> Option<PageSize> {
    match name.trim().to_ascii_uppercase().as_str() {
        "A3" => Some(A3),
        "A4" => Some(A4),
        "A5" => Some(A5),
        "LETTER" => Some(LETTER),
        "LEGAL" => Some(LEGAL),
        _ => None,
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    #[default]
    Landscape,
}

impl Orientation {
    /// Apply the orientation to a page size
    pub fn apply(self, size: PageSize) -> PageSize {
        let (short, long) = if size.0 <= size.1 {
            (size.0, size.1)
        } else {
            (size.1, size.0)
        };
        match self {
            Orientation::Portrait => (short, long),
            Orientation::Landscape => (long, short),
        }
    }
}

impl std::str::FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "portrait" | "p" => Ok(Orientation::Portrait),
            "landscape" | "l" => Ok(Orientation::Landscape),
            other => Err(format!("unknown orientation '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn landscape_swaps_dimensions() {
        assert_eq!(Orientation::Landscape.apply(A4), (Mm(297.0), Mm(210.0)));
        assert_eq!(Orientation::Portrait.apply((Mm(297.0), Mm(210.0))), A4);
    }

    #[test]
    fn parses_names() {
        assert_eq!(by_name(" a4 "), Some(A4));
        assert_eq!(by_name("tabloid"), None);
        assert_eq!("L".parse::<Orientation>(), Ok(Orientation::Landscape));
        assert!("sideways".parse::<Orientation>().is_err());
    }
}
