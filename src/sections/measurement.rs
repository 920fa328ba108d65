use super::{band, SectionContext};
use crate::canvas::Canvas;
use crate::model::MeasurementKind;
use crate::table::{ColumnSpec, TableRenderer, TableRow};

/// Band and table for one measurement category. An empty record list prints the column
/// headers only.
pub fn render_measurement_table<R: TableRow>(
    canvas: &mut Canvas<'_>,
    kind: MeasurementKind,
    records: &[R],
    ctx: &SectionContext<'_>,
) {
    let labels = ctx.labels;
    let title = match kind {
        MeasurementKind::OuterDiameter => &labels.outer_diameter_section,
        MeasurementKind::InnerDiameter => &labels.inner_diameter_section,
        MeasurementKind::Depth => &labels.depth_section,
        MeasurementKind::Step => &labels.step_section,
    };
    band(canvas, title, ctx);
    let spec = ColumnSpec::for_kind(kind, labels);
    TableRenderer::new(ctx.policy, ctx.theme).render(canvas, records, &spec);
}
