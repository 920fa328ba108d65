use super::SectionContext;
use crate::canvas::Canvas;
use crate::model::CertificateTitle;
use crate::style::{Align, Border};
use crate::units::Mm;

const TITLE_HEIGHT: Mm = Mm(10.0);

/// The certificate heading, with the certificate number and issue date beneath it
pub fn render_title(canvas: &mut Canvas<'_>, title: &CertificateTitle, ctx: &SectionContext<'_>) {
    let theme = ctx.theme;
    let labels = ctx.labels;
    let heading = title.title.as_str().unwrap_or(&labels.default_title);
    canvas.bookmark(heading);
    canvas.write_wrapped_block(Mm(0.0), TITLE_HEIGHT, heading, &theme.title, Border::NONE);

    let half = canvas.usable_width() / 2.0;
    let number = format!(
        "{}: {}",
        labels.certificate_number,
        title.certificate_number.display()
    );
    let date = format!("{}: {}", labels.issue_date, title.issue_date.display());
    canvas.write_cell(
        half,
        theme.row_height,
        &number,
        &theme.label.align(Align::Center),
        Border::NONE,
        None,
    );
    canvas.write_cell(
        half,
        theme.row_height,
        &date,
        &theme.label.align(Align::Center),
        Border::NONE,
        None,
    );
    canvas.advance_vertical(theme.row_height);
}
