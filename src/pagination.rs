//! When to start a new page.
//!
//! Before a section is drawn the driver compares the cursor against the threshold for the
//! region it is about to enter; past the threshold the page is in the [PageState::NeedsBreak]
//! state and a fresh page is started. Thresholds are per region because sections differ in
//! how tall they can get. On top of that, rows of measurement tables and lines of long text
//! blocks are checked one by one against the actual space left, so content is never drawn
//! past the bottom of a page unless a single item is taller than a whole page.

use crate::canvas::Canvas;
use crate::units::Mm;
use serde::{Deserialize, Serialize};

/// Cursor positions (down from the top edge) past which a region starts on a new page.
/// Tuned for a landscape A4 page with 8 mm margins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Checked after the party/device blocks, before environment and functional checks
    pub party_device: Mm,
    /// Checked before each measurement table
    pub measurement_table: Mm,
    /// Checked before the conformity block and each of its free-text items
    pub conformity: Mm,
    pub sign_off: Mm,
    pub standards: Mm,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            party_device: Mm(170.0),
            measurement_table: Mm(160.0),
            conformity: Mm(175.0),
            sign_off: Mm(165.0),
            standards: Mm(175.0),
        }
    }
}

/// Part of the certificate a threshold applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    PartyDevice,
    MeasurementTable,
    Conformity,
    SignOff,
    Standards,
}

impl Thresholds {
    pub fn for_region(&self, region: Region) -> Mm {
        match region {
            Region::PartyDevice => self.party_device,
            Region::MeasurementTable => self.measurement_table,
            Region::Conformity => self.conformity,
            Region::SignOff => self.sign_off,
            Region::Standards => self.standards,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    OnPage,
    NeedsBreak,
}

#[derive(Debug, Clone, Default)]
pub struct PaginationPolicy {
    thresholds: Thresholds,
}

impl PaginationPolicy {
    pub fn new(thresholds: Thresholds) -> PaginationPolicy {
        PaginationPolicy { thresholds }
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    /// State of the page for entering `region`. Evaluated fresh on every call.
    pub fn check(&self, canvas: &Canvas<'_>, region: Region) -> PageState {
        if canvas.current_y() > self.thresholds.for_region(region) {
            PageState::NeedsBreak
        } else {
            PageState::OnPage
        }
    }

    /// Start a new page if the cursor is past the threshold of `region`. Returns whether a
    /// page was started.
    pub fn break_if_needed(&self, canvas: &mut Canvas<'_>, region: Region) -> bool {
        match self.check(canvas, region) {
            PageState::OnPage => false,
            PageState::NeedsBreak => {
                tracing::debug!(
                    ?region,
                    y = canvas.current_y().0,
                    threshold = self.thresholds.for_region(region).0,
                    page = canvas.page_index() + 1,
                    "threshold passed, starting new page"
                );
                canvas.start_default_page();
                true
            }
        }
    }

    /// Start a new page if something `height` tall would not fit above the bottom limit.
    /// Nothing happens on a page that is still empty, since a new page would not have more
    /// room. Returns whether a page was started.
    pub fn ensure_room(&self, canvas: &mut Canvas<'_>, height: Mm) -> bool {
        let at_top = canvas.current_y() <= canvas.margins().top;
        if !canvas.would_overflow(height) || at_top {
            return false;
        }
        tracing::debug!(
            y = canvas.current_y().0,
            height = height.0,
            page = canvas.page_index() + 1,
            "not enough room left, starting new page"
        );
        canvas.start_default_page();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::PageSetup;
    use crate::colour::colours;
    use crate::document::Assets;
    use crate::layout::Margins;
    use crate::page::Stroke;
    use crate::pagesize::{Orientation, A4};
    use crate::units::Pt;

    fn canvas(assets: &Assets) -> Canvas<'_> {
        Canvas::new(
            assets,
            PageSetup {
                size: A4,
                orientation: Orientation::Landscape,
                margins: Margins::all(Mm(8.0)),
                footer_height: Mm(6.0),
            },
            Stroke {
                colour: colours::BLACK,
                width: Pt(0.5),
            },
        )
    }

    #[test]
    fn thresholds_are_per_region() {
        let assets = Assets::standard();
        let mut canvas = canvas(&assets);
        let policy = PaginationPolicy::default();
        canvas.set_y(Mm(165.0));
        assert_eq!(policy.check(&canvas, Region::PartyDevice), PageState::OnPage);
        assert_eq!(
            policy.check(&canvas, Region::MeasurementTable),
            PageState::NeedsBreak
        );
        assert_eq!(policy.check(&canvas, Region::Conformity), PageState::OnPage);
    }

    #[test]
    fn breaking_resets_to_top_margin() {
        let assets = Assets::standard();
        let mut canvas = canvas(&assets);
        let policy = PaginationPolicy::default();
        canvas.set_y(Mm(180.0));
        assert!(policy.break_if_needed(&mut canvas, Region::Conformity));
        assert_eq!(canvas.page_count(), 2);
        assert_eq!(canvas.current_y(), Mm(8.0));
        assert_eq!(canvas.margins(), Margins::all(Mm(8.0)));
        assert!(!policy.break_if_needed(&mut canvas, Region::Conformity));
        assert_eq!(canvas.page_count(), 2);
    }

    #[test]
    fn ensure_room_breaks_only_when_needed() {
        let assets = Assets::standard();
        let mut canvas = canvas(&assets);
        let policy = PaginationPolicy::default();
        canvas.set_y(Mm(185.0));
        assert!(!policy.ensure_room(&mut canvas, Mm(6.0)));
        canvas.set_y(Mm(192.0));
        assert!(policy.ensure_room(&mut canvas, Mm(6.0)));
        assert_eq!(canvas.current_y(), Mm(8.0));
        // taller than a page: drawn where it is rather than breaking forever
        assert!(!policy.ensure_room(&mut canvas, Mm(500.0)));
        assert_eq!(canvas.page_count(), 2);
    }
}
