//! One renderer per certificate section.
//!
//! A renderer draws its section at the cursor and leaves the cursor at the left margin below
//! it. Whether the section starts on a fresh page is decided by the caller before the
//! renderer runs; renderers only guard single rows and text lines against running off the
//! bottom of the page. Missing data prints as a placeholder, so no renderer can fail.

mod conformity;
mod device;
mod environment;
mod functional;
mod header;
mod measurement;
mod party;
mod signoff;
mod standards;
mod title;

pub use conformity::*;
pub use device::*;
pub use environment::*;
pub use functional::*;
pub use header::*;
pub use measurement::*;
pub use party::*;
pub use signoff::*;
pub use standards::*;
pub use title::*;

use crate::canvas::Canvas;
use crate::colour::Colour;
use crate::labels::Labels;
use crate::pagination::{PaginationPolicy, Region};
use crate::style::{Border, TextStyle, Theme};
use crate::units::Mm;

/// What every section renderer draws with
#[derive(Clone, Copy)]
pub struct SectionContext<'r> {
    pub theme: &'r Theme,
    pub labels: &'r Labels,
    pub policy: &'r PaginationPolicy,
}

/// Full-width filled band carrying a section title, bookmarked in the document outline.
/// Kept on the same page as the first row that follows it.
pub(crate) fn band(canvas: &mut Canvas<'_>, title: &str, ctx: &SectionContext<'_>) {
    let theme = ctx.theme;
    ctx.policy
        .ensure_room(canvas, theme.band_height + theme.row_height);
    canvas.bookmark(title);
    canvas.write_cell(
        Mm(0.0),
        theme.band_height,
        title,
        &theme.band,
        Border::ALL,
        Some(theme.band_fill),
    );
    canvas.advance_vertical(theme.band_height);
}

/// A shaded label cell followed by a value cell reaching the right margin. Values too long
/// for one line wrap inside a taller row. A value taller than a whole page is split, and each
/// page it continues on gets its own label cell.
pub(crate) fn label_value_row(
    canvas: &mut Canvas<'_>,
    label: &str,
    value: &str,
    ctx: &SectionContext<'_>,
) {
    label_value_row_coloured(canvas, label, value, None, ctx);
}

pub(crate) fn label_value_row_coloured(
    canvas: &mut Canvas<'_>,
    label: &str,
    value: &str,
    colour: Option<Colour>,
    ctx: &SectionContext<'_>,
) {
    let theme = ctx.theme;
    let value_style = match colour {
        Some(colour) => theme.label.colour(colour),
        None => theme.body,
    };
    let value_width = canvas.usable_width() - theme.label_width;
    let lines = canvas.wrap(value, &value_style, value_width);
    let page_room = canvas.bottom_limit() - canvas.margins().top;

    if row_height(lines.len(), theme) <= page_room {
        ctx.policy.ensure_room(canvas, row_height(lines.len(), theme));
        draw_row(canvas, label, &lines, &value_style, value_width, theme);
        return;
    }

    let mut rest = lines.as_slice();
    while !rest.is_empty() {
        ctx.policy.ensure_room(canvas, theme.row_height);
        let room = canvas.bottom_limit() - canvas.current_y() - PADDING;
        let fit = ((room / theme.line_height).floor() as usize).clamp(1, rest.len());
        let (chunk, tail) = rest.split_at(fit);
        draw_row(canvas, label, chunk, &value_style, value_width, theme);
        rest = tail;
    }
}

const PADDING: Mm = Mm(1.0);

fn row_height(line_count: usize, theme: &Theme) -> Mm {
    (theme.line_height * line_count as f32 + PADDING).max(theme.row_height)
}

fn draw_row(
    canvas: &mut Canvas<'_>,
    label: &str,
    lines: &[String],
    value_style: &TextStyle,
    value_width: Mm,
    theme: &Theme,
) {
    let height = row_height(lines.len(), theme);
    canvas.write_cell(
        theme.label_width,
        height,
        label,
        &theme.label,
        Border::ALL,
        Some(theme.label_fill),
    );
    if lines.len() <= 1 {
        let text = lines.first().map(String::as_str).unwrap_or_default();
        canvas.write_cell(value_width, height, text, value_style, Border::ALL, None);
    } else {
        let (left, top) = (canvas.x(), canvas.current_y());
        canvas.draw_box(left, top, value_width, height, Border::ALL, None);
        canvas.set_y(top + PADDING / 2.0);
        for line in lines {
            canvas.set_x(left);
            canvas.write_cell(value_width, theme.line_height, line, value_style, Border::NONE, None);
            canvas.set_y(canvas.current_y() + theme.line_height);
        }
        canvas.set_y(top);
    }
    canvas.advance_vertical(height);
}

/// A titled run of free text. The cursor is checked against the threshold of `region`
/// before the item starts, and against the bottom of the page before every line.
pub(crate) fn text_item(
    canvas: &mut Canvas<'_>,
    heading: &str,
    text: &str,
    region: Region,
    ctx: &SectionContext<'_>,
) {
    let theme = ctx.theme;
    ctx.policy.break_if_needed(canvas, region);
    ctx.policy
        .ensure_room(canvas, theme.line_height * 2.0);
    canvas.write_cell(Mm(0.0), theme.line_height, heading, &theme.label, Border::NONE, None);
    canvas.advance_vertical(theme.line_height);
    text_lines(canvas, text, ctx);
}

/// Wrapped body text across the usable width, one page-bottom check per line
pub(crate) fn text_lines(canvas: &mut Canvas<'_>, text: &str, ctx: &SectionContext<'_>) {
    let theme = ctx.theme;
    let width = canvas.usable_width();
    for line in canvas.wrap(text, &theme.body, width) {
        ctx.policy.ensure_room(canvas, theme.line_height);
        canvas.write_cell(width, theme.line_height, &line, &theme.body, Border::NONE, None);
        canvas.advance_vertical(theme.line_height);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::canvas::{Canvas, PageSetup};
    use crate::colour::colours;
    use crate::document::Assets;
    use crate::layout::Margins;
    use crate::page::Stroke;
    use crate::pagesize::{Orientation, A4};
    use crate::units::{Mm, Pt};

    pub fn canvas(assets: &Assets) -> Canvas<'_> {
        Canvas::new(
            assets,
            PageSetup {
                size: A4,
                orientation: Orientation::Landscape,
                margins: Margins::all(Mm(8.0)),
                footer_height: Mm(6.0),
            },
            Stroke {
                colour: colours::MID_GREY,
                width: Pt(0.5),
            },
        )
    }

    /// All text drawn on every page, in order
    pub fn all_text(canvas: &Canvas<'_>) -> Vec<String> {
        canvas
            .pages()
            .iter()
            .flat_map(|page| page.spans().map(|span| span.text.clone()))
            .collect()
    }
}
