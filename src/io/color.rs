use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;

/// RGB colour with 16 bits per component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u16,
    pub g: u16,
    pub b: u16,
}

impl Color {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(0xffff, 0xffff, 0xffff);
    pub const RED: Self = Self::new(0xffff, 0, 0);
    pub const GREEN: Self = Self::new(0, 0xffff, 0);
    pub const BLUE: Self = Self::new(0, 0, 0xffff);

    #[must_use]
    pub const fn new(r: u16, g: u16, b: u16) -> Self {
        Self { r, g, b }
    }

    /// Components scaled to `[0, 1]`.
    #[must_use]
    pub fn normalized(&self) -> [f64; 3] {
        let max = f64::from(u16::MAX);
        [
            f64::from(self.r) / max,
            f64::from(self.g) / max,
            f64::from(self.b) / max,
        ]
    }

    /// Number of hex digits per component needed to write this colour exactly.
    fn digits(&self) -> usize {
        let all = |mask: u16| [self.r, self.g, self.b].iter().all(|c| c & mask == 0);
        if all(0x0fff) {
            1
        } else if all(0x00ff) {
            2
        } else {
            4
        }
    }
}

/// Parses `#RGB`, `#RRGGBB` or `#RRRRGGGGBBBB`.
///
/// Short forms are scaled to 16 bits by shifting, so `#f00` is
/// `Color { r: 0xf000, .. }`.
impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidColor {
            token: s.to_string(),
        };
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if !matches!(hex.len(), 3 | 6 | 12) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let width = hex.len() / 3;
        let shift = (4 - width) * 4;
        let mut components = [0u16; 3];
        for (i, c) in components.iter_mut().enumerate() {
            let digits = &hex[i * width..(i + 1) * width];
            *c = u16::from_str_radix(digits, 16).map_err(|_| invalid())? << shift;
        }
        let [r, g, b] = components;
        Ok(Self { r, g, b })
    }
}

/// Writes the shortest of the three forms that keeps every bit.
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.digits();
        let shift = (4 - width) * 4;
        write!(f, "#")?;
        for c in [self.r, self.g, self.b] {
            write!(f, "{:0width$x}", c >> shift, width = width)?;
        }
        Ok(())
    }
}
