//! Explicit style values passed to every canvas primitive. The canvas keeps no current font
//! or colour, so a primitive always draws exactly what its style says.

use crate::colour::{colours, Colour};
use crate::units::{Mm, Pt};

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum FontRole {
    #[default]
    Regular,
    Bold,
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

/// Which edges of a cell get a border line
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Border {
    pub left: bool,
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
}

impl Border {
    pub const NONE: Border = Border {
        left: false,
        top: false,
        right: false,
        bottom: false,
    };
    pub const ALL: Border = Border {
        left: true,
        top: true,
        right: true,
        bottom: true,
    };
    pub const BOTTOM: Border = Border {
        left: false,
        top: false,
        right: false,
        bottom: true,
    };

    pub fn is_all(&self) -> bool {
        *self == Border::ALL
    }

    pub fn is_none(&self) -> bool {
        *self == Border::NONE
    }
}

/// How text is set: face, size, colour, and alignment inside its cell
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TextStyle {
    pub font: FontRole,
    pub size: Pt,
    pub colour: Colour,
    pub align: Align,
}

impl TextStyle {
    pub fn new(font: FontRole, size: Pt) -> TextStyle {
        TextStyle {
            font,
            size,
            colour: colours::BLACK,
            align: Align::Left,
        }
    }

    pub fn colour(mut self, colour: Colour) -> TextStyle {
        self.colour = colour;
        self
    }

    pub fn align(mut self, align: Align) -> TextStyle {
        self.align = align;
        self
    }

    pub fn bold(mut self) -> TextStyle {
        self.font = FontRole::Bold;
        self
    }
}

/// Colours and sizes of the whole certificate
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub body: TextStyle,
    pub label: TextStyle,
    pub small: TextStyle,
    pub band: TextStyle,
    pub band_fill: Colour,
    pub title: TextStyle,
    pub company: TextStyle,
    pub table_header: TextStyle,
    pub table_header_fill: Colour,
    pub table_body: TextStyle,
    pub label_fill: Colour,
    pub border: Colour,
    pub border_width: Pt,
    pub pass: Colour,
    pub fail: Colour,
    /// Height of a section header band
    pub band_height: Mm,
    /// Height of one label/value or table row
    pub row_height: Mm,
    /// Line height inside wrapped blocks
    pub line_height: Mm,
    /// Width of the label column of label/value rows
    pub label_width: Mm,
    /// Space left after each section
    pub section_gap: Mm,
}

impl Default for Theme {
    fn default() -> Self {
        let body = TextStyle::new(FontRole::Regular, Pt(9.0));
        Theme {
            body,
            label: body.bold(),
            small: TextStyle::new(FontRole::Regular, Pt(7.5)).colour(colours::MID_GREY),
            band: TextStyle::new(FontRole::Bold, Pt(10.0)).colour(colours::NAVY),
            band_fill: colours::PALE_BLUE,
            title: TextStyle::new(FontRole::Bold, Pt(16.0))
                .colour(colours::NAVY)
                .align(Align::Center),
            company: TextStyle::new(FontRole::Bold, Pt(13.0)).colour(colours::NAVY),
            table_header: TextStyle::new(FontRole::Bold, Pt(8.5))
                .colour(colours::WHITE)
                .align(Align::Center),
            table_header_fill: colours::NAVY,
            table_body: TextStyle::new(FontRole::Regular, Pt(8.5)).align(Align::Center),
            label_fill: colours::LIGHT_GREY,
            border: colours::MID_GREY,
            border_width: Pt(0.5),
            pass: colours::PASS_GREEN,
            fail: colours::FAIL_RED,
            band_height: Mm(7.0),
            row_height: Mm(6.0),
            line_height: Mm(5.0),
            label_width: Mm(60.0),
            section_gap: Mm(3.0),
        }
    }
}
