/// A colour, expressed in the RGB or grey colour spaces
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// DeviceRGB colour; r, g, b, range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceGray colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Colour {
    /// The PDF fill-colour operator for this colour
    pub(crate) fn fill_operator(&self) -> String {
        match self {
            Colour::RGB { r, g, b } => format!("{r} {g} {b} rg"),
            Colour::Grey { g } => format!("{g} g"),
        }
    }

    /// The PDF stroke-colour operator for this colour
    pub(crate) fn stroke_operator(&self) -> String {
        match self {
            Colour::RGB { r, g, b } => format!("{r} {g} {b} RG"),
            Colour::Grey { g } => format!("{g} G"),
        }
    }
}

/// Colours used by the certificate theme
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const WHITE: Colour = Colour::Grey { g: 1.0 };
    pub const MID_GREY: Colour = Colour::Grey { g: 0.5 };
    pub const LIGHT_GREY: Colour = Colour::Grey { g: 0.94 };
    pub const NAVY: Colour = Colour::RGB {
        r: 0.122,
        g: 0.220,
        b: 0.392,
    };
    pub const PALE_BLUE: Colour = Colour::RGB {
        r: 0.867,
        g: 0.902,
        b: 0.945,
    };
    pub const PASS_GREEN: Colour = Colour::RGB {
        r: 0.0,
        g: 0.5,
        b: 0.0,
    };
    pub const FAIL_RED: Colour = Colour::RGB {
        r: 0.75,
        g: 0.0,
        b: 0.0,
    };
}
