use std::fmt;
use std::str::FromStr;

use serde_derive::{Deserialize, Serialize};

use crate::error::PlatformError;

pub const BLACK: Colour = Colour(0x00, 0x00, 0x00);
pub const RED: Colour = Colour(0xff, 0x00, 0x00);
pub const GREEN: Colour = Colour(0x00, 0xff, 0x00);
pub const BLUE: Colour = Colour(0x00, 0x00, 0xff);
pub const YELLOW: Colour = Colour(0xff, 0xff, 0x00);
pub const MAGENTA: Colour = Colour(0xff, 0x00, 0xff);
pub const CYAN: Colour = Colour(0x00, 0xff, 0xff);
pub const WHITE: Colour = Colour(0xff, 0xff, 0xff);

/// The colours the driver cycles through on the colour hotkey
pub const NAMED: [(&str, Colour); 8] = [
    ("black", BLACK),
    ("red", RED),
    ("green", GREEN),
    ("blue", BLUE),
    ("yellow", YELLOW),
    ("magenta", MAGENTA),
    ("cyan", CYAN),
    ("white", WHITE),
];

/// One zone colour, 8 bits per channel.
///
/// Other representations found along the way:
/// - packed `0xRRGGBB` integer, which is what the driver stores
/// - hex text, `RRGGBB` when read from sysfs and `0xRRGGBB` when written
/// - float channels in `0.0..=1.0` from colour pickers
/// - 16 bit channels from older picker widgets
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Colour(pub u8, pub u8, pub u8);

impl Colour {
    /// Anything above the low 24 bits is dropped
    pub const fn from_packed(packed: u32) -> Self {
        Colour((packed >> 16) as u8, (packed >> 8) as u8, packed as u8)
    }

    pub const fn packed(&self) -> u32 {
        (self.0 as u32) << 16 | (self.1 as u32) << 8 | self.2 as u32
    }

    /// Six uppercase digits with no prefix
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }

    pub fn from_rgba(red: f64, green: f64, blue: f64) -> Self {
        let chan = |c: f64| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Colour(chan(red), chan(green), chan(blue))
    }

    pub fn to_rgba(&self) -> (f64, f64, f64) {
        (
            self.0 as f64 / 255.0,
            self.1 as f64 / 255.0,
            self.2 as f64 / 255.0,
        )
    }

    pub fn from_rgb16(red: u16, green: u16, blue: u16) -> Self {
        let chan = |c: u16| (c as f64 * 255.0 / 65535.0).round() as u8;
        Colour(chan(red), chan(green), chan(blue))
    }

    /// Exact, `0xff` maps to `0xffff`
    pub fn to_rgb16(&self) -> (u16, u16, u16) {
        (
            self.0 as u16 * 257,
            self.1 as u16 * 257,
            self.2 as u16 * 257,
        )
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.to_lowercase();
        NAMED
            .iter()
            .find(|(n, _)| *n == name.as_str())
            .map(|(_, c)| *c)
    }
}

impl From<(u8, u8, u8)> for Colour {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Colour(r, g, b)
    }
}

impl From<Colour> for (u8, u8, u8) {
    fn from(c: Colour) -> Self {
        (c.0, c.1, c.2)
    }
}

/// Parses `RRGGBB`, `0xRRGGBB` or `#RRGGBB`, either case. Only the first six
/// digits after the prefix are looked at.
impl FromStr for Colour {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .or_else(|| s.strip_prefix('#'))
            .unwrap_or(s);
        let chan = |range: std::ops::Range<usize>| {
            digits
                .get(range)
                .and_then(|d| u8::from_str_radix(d, 16).ok())
                .ok_or_else(|| PlatformError::ParseColour(s.to_owned()))
        };
        Ok(Colour(chan(0..2)?, chan(2..4)?, chan(4..6)?))
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}
