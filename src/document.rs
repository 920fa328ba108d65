use crate::{
    content::render_contents,
    font::{Font, StandardFont},
    image::Image,
    info::Info,
    outline::Outline,
    page::Page,
    refs::{ObjectReferences, RefType},
    style::FontRole,
    RenderError,
};
use id_arena::{Arena, Id};
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use pdf_writer::{Filter, Finish, Name, Pdf, Ref};
use std::{io::Write, path::Path};

/// Fonts and images loaded once and shared, read-only, by every document rendered with them.
pub struct Assets {
    pub fonts: Arena<Font>,
    pub images: Arena<Image>,
    regular: Id<Font>,
    bold: Id<Font>,
    logo: Option<Id<Image>>,
}

impl Assets {
    /// Built-in Helvetica fonts and no logo. Never fails.
    pub fn standard() -> Assets {
        let mut fonts = Arena::new();
        let regular = fonts.alloc(StandardFont::Helvetica.into());
        let bold = fonts.alloc(StandardFont::HelveticaBold.into());
        Assets {
            fonts,
            images: Arena::new(),
            regular,
            bold,
            logo: None,
        }
    }

    /// Load assets from disk. Each font path that is given replaces the corresponding
    /// built-in font; a bold path without a regular one is allowed and vice versa.
    pub fn load(
        regular: Option<&Path>,
        bold: Option<&Path>,
        logo: Option<&Path>,
    ) -> Result<Assets, RenderError> {
        let mut assets = Assets::standard();
        if let Some(path) = regular {
            tracing::debug!(path = %path.display(), "loading regular font");
            assets.regular = assets.fonts.alloc(Font::load(std::fs::read(path)?)?);
        }
        if let Some(path) = bold {
            tracing::debug!(path = %path.display(), "loading bold font");
            assets.bold = assets.fonts.alloc(Font::load(std::fs::read(path)?)?);
        }
        if let Some(path) = logo {
            tracing::debug!(path = %path.display(), "loading logo");
            let image = Image::load_from_disk(path)?;
            assets.logo = Some(assets.images.alloc(image));
        }
        Ok(assets)
    }

    /// Use an already decoded image as the company logo
    pub fn with_logo(mut self, image: Image) -> Assets {
        self.logo = Some(self.images.alloc(image));
        self
    }

    pub fn font_id(&self, role: FontRole) -> Id<Font> {
        match role {
            FontRole::Regular => self.regular,
            FontRole::Bold => self.bold,
        }
    }

    pub fn font(&self, role: FontRole) -> &Font {
        &self.fonts[self.font_id(role)]
    }

    pub fn logo(&self) -> Option<(Id<Image>, &Image)> {
        self.logo.map(|id| (id, &self.images[id]))
    }
}

/// A document is the laid out certificate: its pages, outline, and metadata, referring to
/// fonts and images held by shared [Assets]. It is rendered out with [Document::write].
pub struct Document<'a> {
    pub assets: &'a Assets,
    pub info: Option<Info>,
    pub pages: Vec<Page>,
    pub outline: Outline,
}

impl<'a> Document<'a> {
    pub fn new(assets: &'a Assets) -> Document<'a> {
        Document {
            assets,
            info: None,
            pages: Vec::new(),
            outline: Outline::default(),
        }
    }

    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// Add a page to the end of the document, returning its index
    pub fn add_page(&mut self, page: Page) -> usize {
        self.pages.push(page);
        self.pages.len() - 1
    }

    /// Render the document into a byte vector
    pub fn to_bytes(&self) -> Result<Vec<u8>, RenderError> {
        let mut bytes = Vec::new();
        self.write(&mut bytes)?;
        Ok(bytes)
    }

    /// Write the entire document to the writer. The whole PDF is assembled in memory first,
    /// so nothing reaches the writer if any page fails to render.
    pub fn write<W: Write>(&self, mut w: W) -> Result<(), RenderError> {
        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = &self.info {
            info.write(&mut refs, &mut writer);
        }

        let page_refs: Vec<Ref> = (0..self.pages.len())
            .map(|i| refs.gen(RefType::Page(i)))
            .collect();

        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs.iter().copied());

        for (id, font) in self.assets.fonts.iter() {
            font.write(&mut refs, id.index(), &mut writer);
        }

        for (id, image) in self.assets.images.iter() {
            image.write(&mut refs, id.index(), &mut writer);
        }

        for (page_index, page) in self.pages.iter().enumerate() {
            self.write_page(&mut refs, page_index, page, page_tree_id, &mut writer)?;
        }

        let outlines_id = self.outline.write(&mut refs, &mut writer);

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        if let Some(outlines_id) = outlines_id {
            catalog.outlines(outlines_id);
        }
        catalog.finish();

        w.write_all(writer.finish().as_slice()).map_err(Into::into)
    }

    fn write_page(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        page: &Page,
        page_tree_id: Ref,
        writer: &mut Pdf,
    ) -> Result<(), RenderError> {
        let id = refs.gen(RefType::Page(page_index));
        let content_id = refs.gen(RefType::ContentForPage(page_index));

        let mut pdf_page = writer.page(id);
        pdf_page.media_box(page.media_box.into());
        pdf_page.art_box(page.content_box.into());
        pdf_page.parent(page_tree_id);
        pdf_page.contents(content_id);

        let mut resources = pdf_page.resources();
        let mut resource_fonts = resources.fonts();
        for (font_id, _) in self.assets.fonts.iter() {
            let index = font_id.index();
            resource_fonts.pair(
                Name(format!("F{index}").as_bytes()),
                refs.get(RefType::Font(index))
                    .ok_or(RenderError::MissingFont(index))?,
            );
        }
        resource_fonts.finish();
        if self.assets.images.len() > 0 {
            let mut resource_xobjects = resources.x_objects();
            for (image_id, _) in self.assets.images.iter() {
                let index = image_id.index();
                if let Some(image_ref) = refs.get(RefType::Image(index)) {
                    resource_xobjects.pair(Name(format!("I{index}").as_bytes()), image_ref);
                }
            }
            resource_xobjects.finish();
        }
        resources.finish();
        pdf_page.finish();

        let rendered = render_contents(&page.contents, &self.assets.fonts)?;
        let compressed =
            compress_to_vec_zlib(rendered.as_slice(), CompressionLevel::DefaultLevel as u8);
        writer
            .stream(content_id, compressed.as_slice())
            .filter(Filter::FlateDecode);

        Ok(())
    }
}
