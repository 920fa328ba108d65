use super::SectionContext;
use crate::canvas::Canvas;
use crate::image::Image;
use crate::model::CompanyInfo;
use crate::page::Stroke;
use crate::style::Border;
use crate::units::{Mm, Pt};
use id_arena::Id;

/// Height the logo is scaled to
const LOGO_HEIGHT: Mm = Mm(18.0);
const LOGO_MAX_WIDTH: Mm = Mm(50.0);
const LOGO_GAP: Mm = Mm(4.0);
const COMPANY_LINE_HEIGHT: Mm = Mm(7.0);

/// Company block: the logo if there is one, the company name, address, contact details and
/// accreditation number, underlined by a rule across the page.
pub fn render_header(
    canvas: &mut Canvas<'_>,
    company: &CompanyInfo,
    logo: Option<(Id<Image>, &Image)>,
    ctx: &SectionContext<'_>,
) {
    let theme = ctx.theme;
    let labels = ctx.labels;
    let left = canvas.margins().left;
    let top = canvas.current_y();

    let mut text_left = left;
    let mut bottom = top;
    if let Some((id, image)) = logo {
        // scale to the logo height, unless that makes a wide logo too wide
        let width = (LOGO_HEIGHT / image.aspect_ratio()).min(LOGO_MAX_WIDTH);
        let height = width * image.aspect_ratio();
        canvas.draw_image(id, left, top, width, height);
        text_left = left + width + LOGO_GAP;
        bottom = top + height;
    }

    canvas.set_x(text_left);
    canvas.write_wrapped_block(
        Mm(0.0),
        COMPANY_LINE_HEIGHT,
        company.name.display(),
        &theme.company,
        Border::NONE,
    );

    let details = [
        (company.address.display().to_string(), theme.body),
        (
            format!("{}: {}", labels.contact, company.contact.display()),
            theme.body,
        ),
        (
            format!(
                "{}: {}",
                labels.accreditation,
                company.accreditation_number.display()
            ),
            theme.small,
        ),
    ];
    for (text, style) in details {
        canvas.set_x(text_left);
        canvas.write_wrapped_block(Mm(0.0), theme.line_height, &text, &style, Border::NONE);
    }

    let rule_y = canvas.current_y().max(bottom) + Mm(1.5);
    let right = canvas.page_width() - canvas.margins().right;
    canvas.draw_line(
        (left, rule_y),
        (right, rule_y),
        Stroke {
            colour: theme.band.colour,
            width: Pt(1.0),
        },
    );
    canvas.set_y(rule_y);
    canvas.advance_vertical(Mm(3.0));
}
