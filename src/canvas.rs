//! A page-oriented drawing surface with a cursor.
//!
//! The canvas works in millimetres from the top-left corner of the current page, the way the
//! certificate layout is specified, and records everything it draws as [PageContents] in PDF
//! page space. Drawing never fails and never breaks pages on its own: deciding when a new page
//! is needed is the job of the [PaginationPolicy](crate::PaginationPolicy).

use crate::colour::Colour;
use crate::document::{Assets, Document};
use crate::image::Image;
use crate::info::Info;
use crate::layout::{wrap_text, Margins};
use crate::page::{ImageLayout, LineLayout, Page, RectLayout, SpanFont, SpanLayout, Stroke};
use crate::pagesize::{Orientation, PageSize};
use crate::rect::Rect;
use crate::style::{Align, Border, TextStyle};
use crate::units::{Mm, Pt};
use id_arena::Id;

/// Inner padding between a cell's edge and its text
const CELL_PADDING: Mm = Mm(1.0);

/// Page geometry every new page starts from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSetup {
    /// Portrait page size
    pub size: PageSize,
    pub orientation: Orientation,
    pub margins: Margins,
    /// Space kept free above the bottom margin for the page number line
    pub footer_height: Mm,
}

/// The drawing surface for one certificate. A canvas belongs to exactly one render call.
pub struct Canvas<'a> {
    document: Document<'a>,
    setup: PageSetup,
    x: Mm,
    y: Mm,
    stroke: Stroke,
}

impl<'a> Canvas<'a> {
    /// Create a canvas holding one empty page set up with the defaults
    pub fn new(assets: &'a Assets, setup: PageSetup, stroke: Stroke) -> Canvas<'a> {
        let mut canvas = Canvas {
            document: Document::new(assets),
            setup,
            x: setup.margins.left,
            y: setup.margins.top,
            stroke,
        };
        canvas.start_new_page(setup.orientation, setup.margins);
        canvas
    }

    pub fn setup(&self) -> &PageSetup {
        &self.setup
    }

    pub fn assets(&self) -> &'a Assets {
        self.document.assets
    }

    fn page(&self) -> &Page {
        // a canvas always holds at least the page it was created with
        &self.document.pages[self.document.pages.len() - 1]
    }

    fn page_mut(&mut self) -> &mut Page {
        let last = self.document.pages.len() - 1;
        &mut self.document.pages[last]
    }

    /// Vertical cursor position, measured down from the top edge of the page
    pub fn current_y(&self) -> Mm {
        self.y
    }

    pub fn x(&self) -> Mm {
        self.x
    }

    pub fn set_x(&mut self, x: Mm) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: Mm) {
        self.y = y;
    }

    /// Height of the current page in its orientation
    pub fn page_height(&self) -> Mm {
        self.page().height()
    }

    pub fn page_width(&self) -> Mm {
        self.page().width()
    }

    pub fn margins(&self) -> Margins {
        self.page().margins
    }

    /// Width between the left and right margins
    pub fn usable_width(&self) -> Mm {
        let margins = self.margins();
        self.page_width() - margins.left - margins.right
    }

    /// Lowest y content may reach before it runs into the page number line
    pub fn bottom_limit(&self) -> Mm {
        self.page_height() - self.margins().bottom - self.setup.footer_height
    }

    /// Whether something `height` tall, drawn at the cursor, would cross the bottom limit
    pub fn would_overflow(&self, height: Mm) -> bool {
        self.y + height > self.bottom_limit()
    }

    /// Number of pages started so far
    pub fn page_count(&self) -> usize {
        self.document.pages.len()
    }

    /// 0-based index of the page being drawn on
    pub fn page_index(&self) -> usize {
        self.document.pages.len() - 1
    }

    pub fn pages(&self) -> &[Page] {
        &self.document.pages
    }

    /// Begin a new page and move the cursor to its top-left margin corner
    pub fn start_new_page(&mut self, orientation: Orientation, margins: Margins) {
        self.document
            .add_page(Page::new(self.setup.size, orientation, margins));
        self.x = margins.left;
        self.y = margins.top;
    }

    /// Begin a new page with the document-wide orientation and margins
    pub fn start_default_page(&mut self) {
        let PageSetup {
            orientation,
            margins,
            ..
        } = self.setup;
        self.start_new_page(orientation, margins);
    }

    /// Move to the left margin and down by `amount`
    pub fn advance_vertical(&mut self, amount: Mm) {
        self.x = self.margins().left;
        self.y += amount;
    }

    /// Point in PDF page space for a canvas position
    fn to_page_space(&self, x: Mm, y: Mm) -> (Pt, Pt) {
        (x.into(), (self.page_height() - y).into())
    }

    fn font_for(&self, style: &TextStyle) -> SpanFont {
        SpanFont {
            id: self.document.assets.font_id(style.font),
            size: style.size,
        }
    }

    /// Width of `text` set in `style`
    pub fn text_width(&self, text: &str, style: &TextStyle) -> Mm {
        self.document
            .assets
            .font(style.font)
            .width_of(text, style.size)
            .into()
    }

    /// Break `text` into lines fitting a cell `width` wide, padding included
    pub fn wrap(&self, text: &str, style: &TextStyle, width: Mm) -> Vec<String> {
        let inner = (width - CELL_PADDING * 2.0).max(Mm(1.0));
        wrap_text(
            text,
            self.document.assets.font(style.font),
            style.size,
            inner.into(),
        )
    }

    /// Draw one cell at the cursor and move the cursor right past it. A zero width stretches
    /// the cell to the right margin.
    pub fn write_cell(
        &mut self,
        width: Mm,
        height: Mm,
        text: &str,
        style: &TextStyle,
        border: Border,
        fill: Option<Colour>,
    ) {
        let width = if width.0 <= 0.0 {
            self.page_width() - self.margins().right - self.x
        } else {
            width
        };
        let (x, y) = (self.x, self.y);

        self.draw_box(x, y, width, height, border, fill);

        if !text.is_empty() {
            let text_width = self.text_width(text, style);
            let text_x = match style.align {
                Align::Left => x + CELL_PADDING,
                Align::Center => x + (width - text_width) / 2.0,
                Align::Right => x + width - CELL_PADDING - text_width,
            };
            // centre the cap height of the font on the middle of the cell
            let size_mm: Mm = style.size.into();
            let baseline = y + height / 2.0 + size_mm * 0.3;
            let coords = self.to_page_space(text_x, baseline);
            let font = self.font_for(style);
            self.page_mut().add_span(SpanLayout {
                text: text.to_string(),
                font,
                colour: style.colour,
                coords,
            });
        }

        self.x = x + width;
    }

    /// Draw wrapped text `width` wide, one line every `line_height`, then move to the left
    /// margin below the block. Returns the height used. The block is drawn in full even when
    /// it runs past the bottom of the page.
    pub fn write_wrapped_block(
        &mut self,
        width: Mm,
        line_height: Mm,
        text: &str,
        style: &TextStyle,
        border: Border,
    ) -> Mm {
        let width = if width.0 <= 0.0 {
            self.page_width() - self.margins().right - self.x
        } else {
            width
        };
        let left = self.x;
        let top = self.y;
        let lines = self.wrap(text, style, width);
        for line in &lines {
            self.x = left;
            self.write_cell(width, line_height, line, style, Border::NONE, None);
            self.y += line_height;
        }
        let height = line_height * lines.len() as f32;
        if !border.is_none() {
            self.draw_box(left, top, width, height, border, None);
        }
        self.x = self.margins().left;
        height
    }

    /// Fill and/or outline a box given in canvas coordinates
    pub fn draw_box(
        &mut self,
        x: Mm,
        y: Mm,
        width: Mm,
        height: Mm,
        border: Border,
        fill: Option<Colour>,
    ) {
        let (x1, y2) = self.to_page_space(x, y);
        let (x2, y1) = self.to_page_space(x + width, y + height);
        let rect = Rect { x1, y1, x2, y2 };

        let stroke = border.is_all().then_some(self.stroke);
        if fill.is_some() || stroke.is_some() {
            self.page_mut().add_rect(RectLayout { rect, fill, stroke });
        }
        if border.is_all() || border.is_none() {
            return;
        }
        let edges = [
            (border.left, (x, y), (x, y + height)),
            (border.top, (x, y), (x + width, y)),
            (border.right, (x + width, y), (x + width, y + height)),
            (border.bottom, (x, y + height), (x + width, y + height)),
        ];
        for (enabled, from, to) in edges {
            if enabled {
                self.draw_line(from, to, self.stroke);
            }
        }
    }

    /// Draw a straight line between two canvas points
    pub fn draw_line(&mut self, from: (Mm, Mm), to: (Mm, Mm), stroke: Stroke) {
        let from = self.to_page_space(from.0, from.1);
        let to = self.to_page_space(to.0, to.1);
        self.page_mut().add_line(LineLayout { from, to, stroke });
    }

    /// Place an image with its top-left corner at (`x`, `y`)
    pub fn draw_image(&mut self, image_id: Id<Image>, x: Mm, y: Mm, width: Mm, height: Mm) {
        let (x1, y2) = self.to_page_space(x, y);
        let (x2, y1) = self.to_page_space(x + width, y + height);
        self.page_mut().add_image(ImageLayout {
            image_id,
            position: Rect { x1, y1, x2, y2 },
        });
    }

    /// Add an outline entry pointing at the current page
    pub fn bookmark<S: ToString>(&mut self, title: S) {
        let page_index = self.page_index();
        self.document.outline.add_bookmark(page_index, title);
    }

    /// Stamp `"{label} n / N"` at the bottom right of every page, inside the footer space,
    /// and hand back the finished document.
    pub fn finish(mut self, page_label: &str, style: &TextStyle, info: Info) -> Document<'a> {
        let total = self.document.pages.len();
        let font = self.font_for(style);
        let assets = self.document.assets;
        let font_ref = assets.font(style.font);
        for (index, page) in self.document.pages.iter_mut().enumerate() {
            let text = format!("{page_label} {} / {total}", index + 1);
            let width: Pt = font_ref.width_of(&text, style.size);
            let x = page.content_box.x2 - width;
            let y: Pt = Pt::from(page.margins.bottom) + Pt::from(Mm(1.0));
            page.add_span(SpanLayout {
                text,
                font,
                colour: style.colour,
                coords: (x, y),
            });
        }
        self.document.set_info(info);
        self.document
    }
}
