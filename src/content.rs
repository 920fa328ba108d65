//! Conversion of laid out page contents into PDF content stream operators.

use crate::font::Font;
use crate::page::{PageContents, SpanLayout, Stroke};
use crate::RenderError;
use id_arena::Arena;
use std::io::Write;

/// Renders page contents to an uncompressed PDF content stream.
#[allow(clippy::write_with_newline)]
pub(crate) fn render_contents(
    contents: &[PageContents],
    fonts: &Arena<Font>,
) -> Result<Vec<u8>, RenderError> {
    let mut content: Vec<u8> = Vec::default();

    for item in contents.iter() {
        match item {
            PageContents::Text(span) => render_span(&mut content, span, fonts)?,
            PageContents::Rect(layout) => {
                let r = &layout.rect;
                write!(&mut content, "q\n")?;
                if let Some(fill) = layout.fill {
                    write!(&mut content, "{}\n", fill.fill_operator())?;
                }
                if let Some(stroke) = layout.stroke {
                    write_stroke(&mut content, stroke)?;
                }
                write!(
                    &mut content,
                    "{} {} {} {} re\n",
                    r.x1.0,
                    r.y1.0,
                    r.width().0,
                    r.height().0
                )?;
                let paint = match (layout.fill.is_some(), layout.stroke.is_some()) {
                    (true, true) => "B",
                    (true, false) => "f",
                    (false, true) => "S",
                    (false, false) => "n",
                };
                write!(&mut content, "{paint}\nQ\n")?;
            }
            PageContents::Line(line) => {
                write!(&mut content, "q\n")?;
                write_stroke(&mut content, line.stroke)?;
                write!(
                    &mut content,
                    "{} {} m {} {} l S\nQ\n",
                    line.from.0 .0, line.from.1 .0, line.to.0 .0, line.to.1 .0
                )?;
            }
            PageContents::Image(image) => {
                write!(&mut content, "q\n")?;
                write!(
                    &mut content,
                    "{} 0 0 {} {} {} cm\n",
                    image.position.width().0,
                    image.position.height().0,
                    image.position.x1.0,
                    image.position.y1.0
                )?;
                write!(&mut content, "/I{} Do\n", image.image_id.index())?;
                write!(&mut content, "Q\n")?;
            }
        }
    }

    Ok(content)
}

#[allow(clippy::write_with_newline)]
fn render_span(
    content: &mut Vec<u8>,
    span: &SpanLayout,
    fonts: &Arena<Font>,
) -> Result<(), RenderError> {
    if span.text.is_empty() {
        return Ok(());
    }
    let font = fonts
        .get(span.font.id)
        .ok_or(RenderError::MissingFont(span.font.id.index()))?;

    write!(content, "BT\n")?;
    write!(content, "/F{} {} Tf\n", span.font.id.index(), span.font.size.0)?;
    write!(content, "{}\n", span.colour.fill_operator())?;
    write!(content, "{} {} Td\n", span.coords.0 .0, span.coords.1 .0)?;
    write!(content, "<{}> Tj\n", font.encode_hex(&span.text))?;
    write!(content, "ET\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn write_stroke(content: &mut Vec<u8>, stroke: Stroke) -> Result<(), std::io::Error> {
    write!(content, "{}\n{} w\n", stroke.colour.stroke_operator(), stroke.width.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;
    use crate::font::StandardFont;
    use crate::page::{RectLayout, SpanFont};
    use crate::rect::Rect;
    use crate::units::Pt;

    #[test]
    fn writes_text_and_boxes() {
        let mut fonts: Arena<Font> = Arena::new();
        let id = fonts.alloc(StandardFont::Helvetica.into());
        let contents = vec![
            PageContents::Rect(RectLayout {
                rect: Rect::from_origin(Pt(10.0), Pt(20.0), Pt(30.0), Pt(5.0)),
                fill: Some(colours::WHITE),
                stroke: Some(Stroke {
                    colour: colours::BLACK,
                    width: Pt(0.5),
                }),
            }),
            PageContents::Text(SpanLayout {
                text: "Hi".into(),
                font: SpanFont { id, size: Pt(9.0) },
                colour: colours::BLACK,
                coords: (Pt(12.0), Pt(22.0)),
            }),
        ];

        let rendered = String::from_utf8(render_contents(&contents, &fonts).unwrap()).unwrap();
        assert!(rendered.contains("10 20 30 5 re\nB\n"));
        assert!(rendered.contains("/F0 9 Tf"));
        assert!(rendered.contains("<4869> Tj"));
    }

    #[test]
    fn unknown_font_is_an_error() {
        let mut other: Arena<Font> = Arena::new();
        let id = other.alloc(StandardFont::Helvetica.into());
        let fonts: Arena<Font> = Arena::new();
        let contents = vec![PageContents::Text(SpanLayout {
            text: "x".into(),
            font: SpanFont { id, size: Pt(9.0) },
            colour: colours::BLACK,
            coords: (Pt(0.0), Pt(0.0)),
        })];
        assert!(matches!(
            render_contents(&contents, &fonts),
            Err(RenderError::MissingFont(0))
        ));
    }
}
