//! Metrics and encoding for the PDF base-14 Helvetica family, which every PDF reader provides
//! without embedding.

/// Advance widths (1/1000 em) of Helvetica for the printable ASCII range `' '..='~'`
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // digits
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, 667, 778, 722,
    667, 611, 722, 667, 944, 667, 667, 611, // 'A'..'Z'
    278, 278, 278, 469, 556, 333, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, 556, 556, 333,
    500, 278, 556, 500, 722, 500, 500, 500, // 'a'..'z'
    334, 260, 334, 584, // '{'..'~'
];

/// Advance widths (1/1000 em) of Helvetica-Bold for the printable ASCII range `' '..='~'`
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // digits
    333, 333, 584, 584, 584, 611, 975, // ':'..'@'
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, 667, 778, 722,
    667, 611, 722, 667, 944, 667, 667, 611, // 'A'..'Z'
    333, 278, 333, 584, 556, 333, // '['..'`'
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, 611, 611, 389,
    556, 333, 611, 556, 778, 556, 556, 500, // 'a'..'z'
    389, 280, 389, 584, // '{'..'~'
];

/// One of the built-in fonts
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
}

impl StandardFont {
    pub const UNITS_PER_EM: f32 = 1000.0;
    pub const ASCENDER: i16 = 718;
    pub const DESCENDER: i16 = -207;

    /// The PostScript name readers know this font by
    pub fn base_name(&self) -> &'static [u8] {
        match self {
            StandardFont::Helvetica => b"Helvetica",
            StandardFont::HelveticaBold => b"Helvetica-Bold",
        }
    }

    /// Advance width of a character in 1/1000 em, measured on the glyph that will actually be
    /// shown once the character is encoded
    pub fn advance(&self, ch: char) -> u16 {
        let bold = matches!(self, StandardFont::HelveticaBold);
        if let Some(width) = punctuation_width(ch, bold) {
            return width;
        }
        let ascii = if ch.is_ascii_graphic() || ch == ' ' {
            ch
        } else {
            match ch {
                '\u{a0}' => ' ',
                'ß' => return 611,
                'Æ' => return 1000,
                'æ' => return 889,
                _ => fold_to_ascii(ch).unwrap_or('?'),
            }
        };
        let table = if bold {
            &HELVETICA_BOLD_WIDTHS
        } else {
            &HELVETICA_WIDTHS
        };
        table[(ascii as usize) - 0x20]
    }
}

fn punctuation_width(ch: char, bold: bool) -> Option<u16> {
    let width = match ch {
        '°' => 400,
        '±' | '×' | '÷' | '¬' => 584,
        'µ' | '€' | '§' | '£' | '¥' => 556,
        '·' => 278,
        '©' | '®' => 737,
        '²' | '³' | '¹' => 333,
        '¼' | '½' | '¾' => 834,
        '–' => 556,
        '—' | '…' | '‰' | '™' => 1000,
        '•' => 350,
        '‘' | '’' | '‚' => {
            if bold {
                278
            } else {
                222
            }
        }
        '“' | '”' | '„' => {
            if bold {
                500
            } else {
                333
            }
        }
        _ => return None,
    };
    Some(width)
}

/// Map a character to its byte in the WinAnsi encoding. Characters the encoding lacks are
/// folded to a close ASCII letter where one exists (Turkish `ğ ş ı` and friends), otherwise
/// they become `?`. Returns the byte and whether the character had to be replaced.
pub fn encode_winansi(ch: char) -> (u8, bool) {
    let code = ch as u32;
    if (0x20..=0x7e).contains(&code) || (0xa0..=0xff).contains(&code) {
        return (code as u8, false);
    }
    let byte = match ch {
        '€' => 0x80,
        '‚' => 0x82,
        'ƒ' => 0x83,
        '„' => 0x84,
        '…' => 0x85,
        '†' => 0x86,
        '‡' => 0x87,
        '‰' => 0x89,
        'Š' => 0x8a,
        'Œ' => 0x8c,
        'Ž' => 0x8e,
        '‘' => 0x91,
        '’' => 0x92,
        '“' => 0x93,
        '”' => 0x94,
        '•' => 0x95,
        '–' => 0x96,
        '—' => 0x97,
        '™' => 0x99,
        'š' => 0x9a,
        'œ' => 0x9c,
        'ž' => 0x9e,
        'Ÿ' => 0x9f,
        _ => {
            return match fold_to_ascii(ch) {
                Some(folded) => (folded as u8, false),
                None => (b'?', true),
            }
        }
    };
    (byte, false)
}

/// Closest ASCII letter for accented Latin characters
fn fold_to_ascii(ch: char) -> Option<char> {
    let folded = match ch {
        'ğ' => 'g',
        'Ğ' => 'G',
        'ş' | 'ș' | 'ś' => 's',
        'Ş' | 'Ș' | 'Ś' => 'S',
        'ı' => 'i',
        'İ' => 'I',
        'ł' => 'l',
        'Ł' => 'L',
        'ő' => 'o',
        'Ő' => 'O',
        'ű' => 'u',
        'Ű' => 'U',
        'č' | 'ć' => 'c',
        'Č' | 'Ć' => 'C',
        'ř' => 'r',
        'Ř' => 'R',
        'ě' | 'ę' => 'e',
        'Ě' | 'Ę' => 'E',
        'ą' => 'a',
        'Ą' => 'A',
        'À'..='Å' => 'A',
        'Ç' => 'C',
        'È'..='Ë' => 'E',
        'Ì'..='Ï' => 'I',
        'Ñ' => 'N',
        'Ò'..='Ö' | 'Ø' => 'O',
        'Ù'..='Ü' => 'U',
        'Ý' => 'Y',
        'à'..='å' => 'a',
        'ç' => 'c',
        'è'..='ë' => 'e',
        'ì'..='ï' => 'i',
        'ñ' => 'n',
        'ò'..='ö' | 'ø' => 'o',
        'ù'..='ü' => 'u',
        'ý' | 'ÿ' => 'y',
        _ => return None,
    };
    Some(folded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_widths_come_from_the_tables() {
        assert_eq!(StandardFont::Helvetica.advance(' '), 278);
        assert_eq!(StandardFont::Helvetica.advance('W'), 944);
        assert_eq!(StandardFont::Helvetica.advance('~'), 584);
        assert_eq!(StandardFont::HelveticaBold.advance('m'), 889);
        assert_eq!(StandardFont::HelveticaBold.advance('?'), 611);
    }

    #[test]
    fn latin1_passes_through_winansi() {
        assert_eq!(encode_winansi('A'), (b'A', false));
        assert_eq!(encode_winansi('ü'), (0xfc, false));
        assert_eq!(encode_winansi('°'), (0xb0, false));
        assert_eq!(encode_winansi('±'), (0xb1, false));
        assert_eq!(encode_winansi('–'), (0x96, false));
    }

    #[test]
    fn turkish_letters_fold_to_ascii() {
        assert_eq!(encode_winansi('ğ'), (b'g', false));
        assert_eq!(encode_winansi('Ş'), (b'S', false));
        assert_eq!(encode_winansi('ı'), (b'i', false));
        assert_eq!(encode_winansi('İ'), (b'I', false));
        assert_eq!(StandardFont::Helvetica.advance('ş'), StandardFont::Helvetica.advance('s'));
    }

    #[test]
    fn unknown_characters_become_question_marks() {
        assert_eq!(encode_winansi('漢'), (b'?', true));
        assert_eq!(
            StandardFont::Helvetica.advance('漢'),
            StandardFont::Helvetica.advance('?')
        );
    }
}
