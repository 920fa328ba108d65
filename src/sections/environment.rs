use super::{band, label_value_row, SectionContext};
use crate::canvas::Canvas;
use crate::model::EnvironmentalConditions;

pub fn render_environment(
    canvas: &mut Canvas<'_>,
    environment: &EnvironmentalConditions,
    ctx: &SectionContext<'_>,
) {
    let labels = ctx.labels;
    band(canvas, &labels.environment_section, ctx);
    label_value_row(canvas, &labels.temperature, environment.temperature.display(), ctx);
    label_value_row(canvas, &labels.humidity, environment.humidity.display(), ctx);
    label_value_row(canvas, &labels.note, environment.note.display(), ctx);
}
