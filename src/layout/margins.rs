use crate::units::Mm;
use serde::{Deserialize, Serialize};

/// Page margins. Nothing stops content from being drawn into them; the canvas and the
/// pagination policy use them as guides, and each [`Page`](crate::Page) derives its content
/// box from them.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: Mm,
    pub right: Mm,
    pub bottom: Mm,
    pub left: Mm,
}

impl Margins {
    /// Create margins where all values are equal
    pub fn all<D: Into<Mm>>(value: D) -> Margins {
        let value: Mm = value.into();
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}
