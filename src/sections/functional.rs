use super::{band, label_value_row_coloured, SectionContext};
use crate::canvas::Canvas;
use crate::model::{CheckOutcome, FunctionalCheckResult};
use crate::style::Border;
use crate::units::Mm;

/// One row per check: the check name as label, the outcome as value. Pass and fail are
/// printed in bold green and red.
pub fn render_functional(
    canvas: &mut Canvas<'_>,
    result: &FunctionalCheckResult,
    ctx: &SectionContext<'_>,
) {
    let theme = ctx.theme;
    let labels = ctx.labels;
    band(canvas, &labels.functional_section, ctx);

    ctx.policy.ensure_room(canvas, theme.row_height * 2.0);
    canvas.write_cell(
        theme.label_width,
        theme.row_height,
        &labels.check,
        &theme.table_header,
        Border::ALL,
        Some(theme.table_header_fill),
    );
    canvas.write_cell(
        Mm(0.0),
        theme.row_height,
        &labels.result,
        &theme.table_header,
        Border::ALL,
        Some(theme.table_header_fill),
    );
    canvas.advance_vertical(theme.row_height);

    for check in &result.checks {
        let (text, colour) = match &check.result {
            CheckOutcome::Pass => (labels.pass.as_str(), Some(theme.pass)),
            CheckOutcome::Fail => (labels.fail.as_str(), Some(theme.fail)),
            CheckOutcome::Narrative(text) => (text.display(), None),
        };
        label_value_row_coloured(canvas, check.name.display(), text, colour, ctx);
    }
}
