use crate::{
    refs::{ObjectReferences, RefType},
    RenderError,
};
use miniz_oxide::deflate::{compress_to_vec_zlib, CompressionLevel};
use owned_ttf_parser::{AsFaceRef, Face, GlyphId, OwnedFace};
use pdf_writer::{
    types::{CidFontType, FontFlags, SystemInfo},
    Filter, Finish, Name, Pdf, Ref, Str,
};
use std::collections::BTreeMap;

/// A parsed TrueType / OpenType font that gets embedded in its entirety, addressed by glyph id
/// through the Identity-H encoding.
pub struct TrueTypeFont {
    face: OwnedFace,
}

impl TrueTypeFont {
    /// Parse a font from raw bytes
    pub fn load(bytes: Vec<u8>) -> Result<TrueTypeFont, RenderError> {
        let face = OwnedFace::from_vec(bytes, 0)?;
        Ok(TrueTypeFont { face })
    }

    pub(crate) fn face(&self) -> &Face<'_> {
        self.face.as_face_ref()
    }

    /// PostScript-safe name of the font: its full name without spaces, or a generic name
    /// when the font carries none
    pub fn name(&self) -> String {
        self.name_entry(owned_ttf_parser::name_id::POST_SCRIPT_NAME)
            .or_else(|| self.name_entry(owned_ttf_parser::name_id::FULL_NAME))
            .map(|name| name.replace(' ', ""))
            .unwrap_or_else(|| "EmbeddedFont".to_string())
    }

    pub fn family(&self) -> String {
        self.name_entry(owned_ttf_parser::name_id::FAMILY)
            .unwrap_or_else(|| self.name())
    }

    fn name_entry(&self, id: u16) -> Option<String> {
        self.face()
            .names()
            .into_iter()
            .find(|name| name.name_id == id && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    pub fn units_per_em(&self) -> f32 {
        self.face().units_per_em() as f32
    }

    /// Glyph for a character, falling back to U+FFFD and then `?`. The flag reports whether
    /// a fallback was needed.
    pub fn glyph_for(&self, ch: char) -> (u16, bool) {
        let face = self.face();
        match face.glyph_index(ch) {
            Some(gid) => (gid.0, false),
            None => {
                let fallback = face
                    .glyph_index('\u{FFFD}')
                    .or_else(|| face.glyph_index('?'))
                    .map(|gid| gid.0)
                    .unwrap_or(0);
                (fallback, true)
            }
        }
    }

    /// Advance width of the glyph shown for `ch`, in font units
    pub fn advance(&self, ch: char) -> u16 {
        let (gid, _) = self.glyph_for(ch);
        self.face()
            .glyph_hor_advance(GlyphId(gid))
            .unwrap_or_default()
    }

    /// Unicode character for each glyph reachable through the font's unicode cmaps
    fn glyph_chars(&self) -> BTreeMap<u16, char> {
        let mut map: BTreeMap<u16, char> = BTreeMap::new();
        let Some(cmap) = self.face().tables().cmap else {
            return map;
        };

        for subtable in cmap.subtables.into_iter().filter(|table| table.is_unicode()) {
            subtable.codepoints(|codepoint: u32| {
                if let Ok(ch) = char::try_from(codepoint) {
                    if let Some(index) = subtable.glyph_index(codepoint).filter(|index| index.0 > 0)
                    {
                        map.entry(index.0).or_insert(ch);
                    }
                }
            });
        }

        map
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, font_index: usize, writer: &mut Pdf) {
        let font_id = refs.gen(RefType::Font(font_index));
        let cid_font_id = self.write_cid(refs, font_index, writer);
        let to_unicode_id = self.write_to_unicode(refs, font_index, writer);
        let base_font = self.name();

        let mut font = writer.type0_font(font_id);
        font.base_font(Name(base_font.as_bytes()));
        font.encoding_predefined(Name(b"Identity-H"));
        font.descendant_font(cid_font_id);
        font.to_unicode(to_unicode_id);
    }

    fn write_cid(&self, refs: &mut ObjectReferences, font_index: usize, writer: &mut Pdf) -> Ref {
        let descriptor_id = self.write_descriptor(refs, font_index, writer);
        let id = refs.gen(RefType::CidFont(font_index));
        let base_font = self.name();
        let scaling = 1000.0 / self.units_per_em();

        // CIDs are glyph ids, so the width array runs over every glyph in order
        let widths: Vec<f32> = (0..self.face().number_of_glyphs())
            .map(|gid| {
                self.face()
                    .glyph_hor_advance(GlyphId(gid))
                    .unwrap_or_default() as f32
                    * scaling
            })
            .collect();

        let mut cid_font = writer.cid_font(id);
        cid_font.subtype(CidFontType::Type2);
        cid_font.base_font(Name(base_font.as_bytes()));
        cid_font.system_info(SystemInfo {
            registry: Str(b"Adobe"),
            ordering: Str(b"Identity"),
            supplement: 0,
        });
        cid_font.font_descriptor(descriptor_id);
        cid_font.default_width(self.advance(' ') as f32 * scaling);
        if !widths.is_empty() {
            cid_font.widths().consecutive(0, widths);
        }
        cid_font.cid_to_gid_map_predefined(Name(b"Identity"));
        cid_font.finish();

        id
    }

    fn write_descriptor(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        writer: &mut Pdf,
    ) -> Ref {
        let data_id = refs.gen(RefType::FontData(font_index));
        let raw = self.face.as_slice();
        let compressed = compress_to_vec_zlib(raw, CompressionLevel::DefaultLevel as u8);
        let mut stream = writer.stream(data_id, compressed.as_slice());
        stream.filter(Filter::FlateDecode);
        stream.pair(Name(b"Length1"), raw.len() as i32);
        stream.finish();

        let face = self.face();
        let scaling = 1000.0 / self.units_per_em();
        let bbox = face.global_bounding_box();
        let base_font = self.name();
        let family = self.family();

        let mut flags = FontFlags::NON_SYMBOLIC;
        if face.is_monospaced() {
            flags.insert(FontFlags::FIXED_PITCH);
        }
        if face.is_italic() {
            flags.insert(FontFlags::ITALIC);
        }

        let id = refs.gen(RefType::FontDescriptor(font_index));
        let mut descriptor = writer.font_descriptor(id);
        descriptor.name(Name(base_font.as_bytes()));
        descriptor.family(Str(family.as_bytes()));
        descriptor.weight(face.weight().to_number());
        descriptor.flags(flags);
        descriptor.bbox(pdf_writer::Rect {
            x1: bbox.x_min as f32 * scaling,
            y1: bbox.y_min as f32 * scaling,
            x2: bbox.x_max as f32 * scaling,
            y2: bbox.y_max as f32 * scaling,
        });
        descriptor.italic_angle(face.italic_angle());
        descriptor.ascent(face.ascender() as f32 * scaling);
        descriptor.descent(face.descender() as f32 * scaling);
        descriptor.leading(face.line_gap() as f32 * scaling);
        let cap_height = face.capital_height().unwrap_or(face.ascender());
        descriptor.cap_height(cap_height as f32 * scaling);
        descriptor.x_height(face.x_height().unwrap_or(cap_height) as f32 * scaling);
        // not recorded in the font tables
        descriptor.stem_v(80.0);
        descriptor.font_file2(data_id);
        descriptor.finish();

        id
    }

    fn write_to_unicode(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        writer: &mut Pdf,
    ) -> Ref {
        let id = refs.gen(RefType::ToUnicode(font_index));

        let mut map = String::from(
            "/CIDInit /ProcSet findresource begin\n\
             12 dict begin\n\
             begincmap\n\
             /CIDSystemInfo\n\
             << /Registry (Adobe)\n\
             /Ordering (UCS) /Supplement 0 >> def\n\
             /CMapName /Adobe-Identity-UCS def\n\
             /CMapType 2 def\n\
             1 begincodespacerange\n\
             <0000> <FFFF>\n\
             endcodespacerange\n",
        );

        // bfchar blocks hold at most 100 entries
        let entries: Vec<(u16, char)> = self.glyph_chars().into_iter().collect();
        for block in entries.chunks(100) {
            map.push_str(&format!("{} beginbfchar\n", block.len()));
            for (gid, ch) in block {
                let mut units = [0u16; 2];
                let hex: String = ch
                    .encode_utf16(&mut units)
                    .iter()
                    .map(|unit| format!("{unit:04x}"))
                    .collect();
                map.push_str(&format!("<{gid:04x}> <{hex}>\n"));
            }
            map.push_str("endbfchar\n");
        }
        map.push_str("endcmap CMapName currentdict /CMap defineresource pop end end\n");

        let compressed =
            compress_to_vec_zlib(map.as_bytes(), CompressionLevel::DefaultLevel as u8);
        let mut stream = writer.stream(id, compressed.as_slice());
        stream.filter(Filter::FlateDecode);
        stream.finish();

        id
    }
}
