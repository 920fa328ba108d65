use super::{band, SectionContext};
use crate::canvas::Canvas;
use crate::model::SignOff;
use crate::style::{Align, Border};
use crate::units::Mm;

const SIGNATURE_HEIGHT: Mm = Mm(14.0);

/// Who calibrated and who approved, side by side, with empty signature boxes underneath
pub fn render_sign_off(canvas: &mut Canvas<'_>, sign_off: &SignOff, ctx: &SectionContext<'_>) {
    let theme = ctx.theme;
    let labels = ctx.labels;
    let row = theme.row_height;

    // the block is short and reads badly split, so it moves to a new page as a whole
    ctx.policy.ensure_room(
        canvas,
        theme.band_height + row * 4.0 + SIGNATURE_HEIGHT,
    );
    band(canvas, &labels.sign_off_section, ctx);

    let column = (canvas.usable_width() - theme.label_width) / 2.0;
    let header = theme.label.align(Align::Center);
    canvas.write_cell(theme.label_width, row, "", &theme.label, Border::ALL, Some(theme.label_fill));
    canvas.write_cell(column, row, &labels.performed_by, &header, Border::ALL, Some(theme.label_fill));
    canvas.write_cell(column, row, &labels.approved_by, &header, Border::ALL, Some(theme.label_fill));
    canvas.advance_vertical(row);

    let performer = &sign_off.performer;
    let approver = &sign_off.approver;
    let rows = [
        (&labels.name, performer.name.display(), approver.name.display(), row),
        (&labels.title, performer.title.display(), approver.title.display(), row),
        (&labels.date, "", approver.date.display(), row),
        (&labels.signature, "", "", SIGNATURE_HEIGHT),
    ];
    let value = theme.body.align(Align::Center);
    for (label, performed, approved, height) in rows {
        canvas.write_cell(theme.label_width, height, label, &theme.label, Border::ALL, Some(theme.label_fill));
        canvas.write_cell(column, height, performed, &value, Border::ALL, None);
        canvas.write_cell(column, height, approved, &value, Border::ALL, None);
        canvas.advance_vertical(height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Assets;
    use crate::labels::Labels;
    use crate::model::{Approver, Performer};
    use crate::pagination::PaginationPolicy;
    use crate::sections::testing::*;
    use crate::style::Theme;

    #[test]
    fn performer_and_approver_side_by_side() {
        let assets = Assets::standard();
        let mut canvas = canvas(&assets);
        let (theme, labels, policy) = (Theme::default(), Labels::default(), PaginationPolicy::default());
        let ctx = SectionContext {
            theme: &theme,
            labels: &labels,
            policy: &policy,
        };
        let sign_off = SignOff {
            performer: Performer {
                name: "Ayşe Demir".into(),
                title: "Calibration Technician".into(),
            },
            approver: Approver {
                name: "Mehmet Kaya".into(),
                ..Default::default()
            },
        };
        render_sign_off(&mut canvas, &sign_off, &ctx);
        let texts = all_text(&canvas);
        let performer = texts.iter().position(|t| t == "Ayşe Demir").unwrap();
        assert_eq!(texts[performer + 1], "Mehmet Kaya");
        // missing approver title and date
        assert_eq!(texts.iter().filter(|t| *t == "-").count(), 2);
    }

    #[test]
    fn moves_to_a_new_page_as_a_whole() {
        let assets = Assets::standard();
        let mut canvas = canvas(&assets);
        let (theme, labels, policy) = (Theme::default(), Labels::default(), PaginationPolicy::default());
        let ctx = SectionContext {
            theme: &theme,
            labels: &labels,
            policy: &policy,
        };
        canvas.advance_vertical(Mm(160.0));
        render_sign_off(&mut canvas, &SignOff::default(), &ctx);
        assert_eq!(canvas.page_count(), 2);
        assert!(!canvas.pages()[0].contains_text(&labels.sign_off_section));
    }
}
