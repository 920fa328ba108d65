use super::{band, label_value_row, SectionContext};
use crate::canvas::Canvas;
use crate::model::PartyInfo;

pub fn render_party(canvas: &mut Canvas<'_>, party: &PartyInfo, ctx: &SectionContext<'_>) {
    let labels = ctx.labels;
    band(canvas, &labels.party_section, ctx);
    label_value_row(canvas, &labels.customer_name, party.customer_name.display(), ctx);
    label_value_row(canvas, &labels.address, party.address.display(), ctx);
    label_value_row(canvas, &labels.request_number, party.request_number.display(), ctx);
}
