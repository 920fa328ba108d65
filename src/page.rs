use crate::colour::Colour;
use crate::font::Font;
use crate::image::Image;
use crate::layout::Margins;
use crate::pagesize::{Orientation, PageSize};
use crate::rect::Rect;
use crate::units::{Mm, Pt};
use id_arena::Id;

/// Which font, at which size, a span is set in
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub id: Id<Font>,
    pub size: Pt,
}

/// A run of text placed at a baseline position in page space
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    pub coords: (Pt, Pt),
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Stroke {
    pub colour: Colour,
    pub width: Pt,
}

/// A rectangle that is filled, stroked, or both
#[derive(Clone, PartialEq, Debug)]
pub struct RectLayout {
    pub rect: Rect,
    pub fill: Option<Colour>,
    pub stroke: Option<Stroke>,
}

#[derive(Clone, PartialEq, Debug)]
pub struct LineLayout {
    pub from: (Pt, Pt),
    pub to: (Pt, Pt),
    pub stroke: Stroke,
}

#[derive(Clone, PartialEq, Debug)]
pub struct ImageLayout {
    pub image_id: Id<Image>,
    pub position: Rect,
}

#[derive(Clone, PartialEq, Debug)]
pub enum PageContents {
    Text(SpanLayout),
    Rect(RectLayout),
    Line(LineLayout),
    Image(ImageLayout),
}

impl PageContents {
    /// Lowest point (in page space) the item reaches
    pub fn bottom(&self, fonts: &id_arena::Arena<Font>) -> Pt {
        match self {
            PageContents::Text(span) => {
                let descent = fonts
                    .get(span.font.id)
                    .map(|font| font.descent(span.font.size))
                    .unwrap_or_default();
                span.coords.1 + descent
            }
            PageContents::Rect(layout) => layout.rect.y1,
            PageContents::Line(line) => Pt(line.from.1 .0.min(line.to.1 .0)),
            PageContents::Image(image) => image.position.y1,
        }
    }
}

/// One page of the certificate
pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// Where content can live, i.e. within the margins
    pub content_box: Rect,
    pub orientation: Orientation,
    pub margins: Margins,
    /// The laid out content, in painting order
    pub contents: Vec<PageContents>,
}

impl Page {
    /// Create a page of the given (portrait) size turned to `orientation`
    pub fn new(size: PageSize, orientation: Orientation, margins: Margins) -> Page {
        let (width, height) = orientation.apply(size);
        let media_box = Rect {
            x1: Pt(0.0),
            y1: Pt(0.0),
            x2: width.into(),
            y2: height.into(),
        };
        let content_box = Rect {
            x1: margins.left.into(),
            y1: margins.bottom.into(),
            x2: (width - margins.right).into(),
            y2: (height - margins.top).into(),
        };
        Page {
            media_box,
            content_box,
            orientation,
            margins,
            contents: Vec::default(),
        }
    }

    /// Page width in millimetres
    pub fn width(&self) -> Mm {
        self.media_box.width().into()
    }

    /// Page height in millimetres
    pub fn height(&self) -> Mm {
        self.media_box.height().into()
    }

    pub fn add_span(&mut self, span: SpanLayout) {
        self.contents.push(PageContents::Text(span));
    }

    pub fn add_rect(&mut self, rect: RectLayout) {
        self.contents.push(PageContents::Rect(rect));
    }

    pub fn add_line(&mut self, line: LineLayout) {
        self.contents.push(PageContents::Line(line));
    }

    pub fn add_image(&mut self, image: ImageLayout) {
        self.contents.push(PageContents::Image(image));
    }

    /// All text spans on the page, in painting order
    pub fn spans(&self) -> impl Iterator<Item = &SpanLayout> {
        self.contents.iter().filter_map(|item| match item {
            PageContents::Text(span) => Some(span),
            _ => None,
        })
    }

    /// Whether any span on the page contains `needle`
    pub fn contains_text(&self, needle: &str) -> bool {
        self.spans().any(|span| span.text.contains(needle))
    }
}
