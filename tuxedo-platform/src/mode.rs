use std::fmt;
use std::str::FromStr;

use serde_derive::{Deserialize, Serialize};

use crate::error::PlatformError;

/// Lighting effects known to the driver, in the order of its pattern table.
/// The discriminant is what the `mode` attribute holds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum KeyboardMode {
    /// Static per-zone colours
    #[default]
    Custom = 0,
    Breathe = 1,
    Cycle = 2,
    Dance = 3,
    Flash = 4,
    RandomColour = 5,
    Tempo = 6,
    Wave = 7,
}

impl KeyboardMode {
    pub const COUNT: u8 = 8;

    pub const ALL: [KeyboardMode; 8] = [
        KeyboardMode::Custom,
        KeyboardMode::Breathe,
        KeyboardMode::Cycle,
        KeyboardMode::Dance,
        KeyboardMode::Flash,
        KeyboardMode::RandomColour,
        KeyboardMode::Tempo,
        KeyboardMode::Wave,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            KeyboardMode::Custom => "Custom",
            KeyboardMode::Breathe => "Breathe",
            KeyboardMode::Cycle => "Cycle",
            KeyboardMode::Dance => "Dance",
            KeyboardMode::Flash => "Flash",
            KeyboardMode::RandomColour => "Random colour",
            KeyboardMode::Tempo => "Tempo",
            KeyboardMode::Wave => "Wave",
        }
    }
}

impl TryFrom<u8> for KeyboardMode {
    type Error = PlatformError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        KeyboardMode::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| PlatformError::ParseMode(value.to_string()))
    }
}

impl From<KeyboardMode> for u8 {
    fn from(mode: KeyboardMode) -> Self {
        mode as u8
    }
}

/// Accepts the table index or the effect name in any case, with `-`, `_` or
/// a space allowed between words.
impl FromStr for KeyboardMode {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(index) = s.parse::<u8>() {
            return KeyboardMode::try_from(index);
        }
        let wanted: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_lowercase();
        let wanted = wanted.replace("color", "colour");
        KeyboardMode::ALL
            .into_iter()
            .find(|m| m.name().replace(' ', "").to_lowercase() == wanted)
            .ok_or_else(|| PlatformError::ParseMode(s.to_owned()))
    }
}

impl fmt::Display for KeyboardMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::KeyboardMode;

    #[test]
    fn table_order() {
        for (i, mode) in KeyboardMode::ALL.iter().enumerate() {
            assert_eq!(u8::from(*mode) as usize, i);
            assert_eq!(KeyboardMode::try_from(i as u8).unwrap(), *mode);
        }
        assert!(KeyboardMode::try_from(KeyboardMode::COUNT).is_err());
    }

    #[test]
    fn parse() {
        assert_eq!("wave".parse::<KeyboardMode>().unwrap(), KeyboardMode::Wave);
        assert_eq!("3".parse::<KeyboardMode>().unwrap(), KeyboardMode::Dance);
        assert_eq!(
            "random-color".parse::<KeyboardMode>().unwrap(),
            KeyboardMode::RandomColour
        );
        assert_eq!(
            "Random Colour".parse::<KeyboardMode>().unwrap(),
            KeyboardMode::RandomColour
        );
        assert!("8".parse::<KeyboardMode>().is_err());
        assert!("disco".parse::<KeyboardMode>().is_err());
    }
}
