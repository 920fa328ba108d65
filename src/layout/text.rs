use crate::font::Font;
use crate::units::Pt;

const TABSIZE: usize = 4;

/// Break text into lines no wider than `max_width`.
///
/// Explicit newlines always start a new line. Within a paragraph, lines are broken at the
/// last whitespace that fits; a word wider than the whole line is broken between characters
/// so nothing is ever truncated. Leading whitespace on wrapped lines is dropped.
///
/// Always returns at least one (possibly empty) line.
pub fn wrap_text(text: &str, font: &Font, size: Pt, max_width: Pt) -> Vec<String> {
    // replace tabs with spaces and normalize newlines
    let text = text
        .replace('\t', &" ".repeat(TABSIZE))
        .replace("\r\n", "\n")
        .replace('\r', "\n");

    let mut lines: Vec<String> = Vec::new();
    for paragraph in text.split('\n') {
        wrap_paragraph(paragraph, font, size, max_width, &mut lines);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

fn wrap_paragraph(paragraph: &str, font: &Font, size: Pt, max_width: Pt, lines: &mut Vec<String>) {
    let mut line = String::new();
    let mut line_width = Pt(0.0);

    for word in paragraph.split(' ') {
        let word_width = font.width_of(word, size);
        let space_width = if line.is_empty() {
            Pt(0.0)
        } else {
            font.width_of(" ", size)
        };

        if line_width + space_width + word_width <= max_width {
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(word);
            line_width += space_width + word_width;
            continue;
        }

        // the word doesn't fit on this line; start a new one
        if !line.is_empty() {
            lines.push(std::mem::take(&mut line));
            line_width = Pt(0.0);
        }

        if word_width <= max_width {
            line.push_str(word);
            line_width = word_width;
            continue;
        }

        // no break point - force character breaks
        for ch in word.chars() {
            let char_width = font.width_of(ch.encode_utf8(&mut [0; 4]), size);
            if !line.is_empty() && line_width + char_width > max_width {
                lines.push(std::mem::take(&mut line));
                line_width = Pt(0.0);
            }
            line.push(ch);
            line_width += char_width;
        }
    }

    lines.push(line);
}
