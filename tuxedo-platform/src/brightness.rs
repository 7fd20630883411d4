use serde_derive::{Deserialize, Serialize};

/// Keyboard brightness as the driver stores it, `0..=255`.
///
/// Front-ends work in percent; the conversion rounds in both directions so a
/// percentage survives a trip through the device within one unit.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
pub struct Brightness(pub u8);

impl Brightness {
    pub const MAX: u8 = u8::MAX;

    /// Clamps to `0.0..=100.0` first. NaN is treated as zero.
    pub fn from_percent(percent: f64) -> Self {
        let percent = if percent.is_nan() {
            0.0
        } else {
            percent.clamp(0.0, 100.0)
        };
        Self((percent * Self::MAX as f64 / 100.0).round() as u8)
    }

    pub fn percent(&self) -> u8 {
        (self.0 as f64 * 100.0 / Self::MAX as f64).round() as u8
    }

    pub fn raw(&self) -> u8 {
        self.0
    }
}

impl From<u8> for Brightness {
    fn from(raw: u8) -> Self {
        Self(raw)
    }
}
