//! Fonts used to set certificate text.
//!
//! Certificates are set in two faces, a regular and a bold one. By default these are the
//! built-in Helvetica fonts, which need no font file and are measured from static width
//! tables. TrueType / OpenType files can be loaded instead when the text needs glyphs outside
//! the WinAnsi character set.

mod standard;
mod truetype;

pub use standard::*;
pub use truetype::*;

use crate::{
    refs::{ObjectReferences, RefType},
    units::Pt,
    RenderError,
};
use pdf_writer::{Name, Pdf};
use std::fmt::Write;

/// A font that text can be measured and set in
pub enum Font {
    Standard(StandardFont),
    TrueType(TrueTypeFont),
}

impl Font {
    /// Load a TrueType / OpenType font from raw bytes
    pub fn load(bytes: Vec<u8>) -> Result<Font, RenderError> {
        Ok(Font::TrueType(TrueTypeFont::load(bytes)?))
    }

    fn units_per_em(&self) -> f32 {
        match self {
            Font::Standard(_) => StandardFont::UNITS_PER_EM,
            Font::TrueType(font) => font.units_per_em(),
        }
    }

    /// Calculate the ascent (distance from the baseline to the top of the font) for the given
    /// font size
    pub fn ascent(&self, size: Pt) -> Pt {
        let ascender = match self {
            Font::Standard(_) => StandardFont::ASCENDER,
            Font::TrueType(font) => font.face().ascender(),
        };
        size * (ascender as f32 / self.units_per_em())
    }

    /// Calculate the descent (distance from the baseline to the bottom of the font) for the
    /// given font size. Note: this is usually negative
    pub fn descent(&self, size: Pt) -> Pt {
        let descender = match self {
            Font::Standard(_) => StandardFont::DESCENDER,
            Font::TrueType(font) => font.face().descender(),
        };
        size * (descender as f32 / self.units_per_em())
    }

    /// Calculate the width of a string of text at the given font size. Newlines are ignored.
    pub fn width_of(&self, text: &str, size: Pt) -> Pt {
        let units: u32 = text
            .chars()
            .filter(|ch| *ch != '\n' && *ch != '\r')
            .map(|ch| match self {
                Font::Standard(font) => font.advance(ch) as u32,
                Font::TrueType(font) => font.advance(ch) as u32,
            })
            .sum();
        size * (units as f32 / self.units_per_em())
    }

    /// Encode text as the hex payload of a `<...> Tj` string operand
    pub(crate) fn encode_hex(&self, text: &str) -> String {
        let mut hex = String::with_capacity(text.len() * 4);
        let mut replaced: Vec<char> = Vec::new();
        for ch in text.chars() {
            match self {
                Font::Standard(_) => {
                    let (byte, lossy) = encode_winansi(ch);
                    if lossy {
                        replaced.push(ch);
                    }
                    let _ = write!(hex, "{byte:02x}");
                }
                Font::TrueType(font) => {
                    let (gid, lossy) = font.glyph_for(ch);
                    if lossy {
                        replaced.push(ch);
                    }
                    let _ = write!(hex, "{gid:04x}");
                }
            }
        }
        if !replaced.is_empty() {
            tracing::warn!(?replaced, "characters missing from font were replaced");
        }
        hex
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, font_index: usize, writer: &mut Pdf) {
        match self {
            Font::Standard(font) => {
                let id = refs.gen(RefType::Font(font_index));
                writer
                    .type1_font(id)
                    .base_font(Name(font.base_name()))
                    .encoding_predefined(Name(b"WinAnsiEncoding"));
            }
            Font::TrueType(font) => font.write(refs, font_index, writer),
        }
    }
}

impl From<StandardFont> for Font {
    fn from(font: StandardFont) -> Self {
        Font::Standard(font)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measures_standard_text() {
        let font = Font::from(StandardFont::Helvetica);
        // "Hi" = 722 + 222 units
        let width = font.width_of("Hi", Pt(10.0));
        assert!((width.0 - 9.44).abs() < 1e-4);
        assert_eq!(font.width_of("", Pt(10.0)), Pt(0.0));
        assert_eq!(font.width_of("a\nb", Pt(10.0)), font.width_of("ab", Pt(10.0)));
    }

    #[test]
    fn vertical_metrics_scale_with_size() {
        let font = Font::from(StandardFont::HelveticaBold);
        assert!((font.ascent(Pt(10.0)).0 - 7.18).abs() < 1e-4);
        assert!((font.descent(Pt(10.0)).0 + 2.07).abs() < 1e-4);
    }

    #[test]
    fn encodes_winansi_hex() {
        let font = Font::from(StandardFont::Helvetica);
        assert_eq!(font.encode_hex("A ü"), "4120fc");
        assert_eq!(font.encode_hex("ğ"), "67");
    }

    #[test]
    fn rejects_garbage_font_data() {
        assert!(matches!(
            Font::load(vec![0, 1, 2, 3]),
            Err(RenderError::FontParsing(_))
        ));
    }
}
