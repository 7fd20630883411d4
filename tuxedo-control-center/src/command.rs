//! Line commands standing in for widget gestures, one event per line.
//!
//! ```text
//! zone <left|center|right|extra>
//! colour <RRGGBB|0xRRGGBB|#RRGGBB|name>
//! mode <0-7|name>
//! brightness <0-100>
//! toggle
//! save
//! quit
//! ```

use std::str::FromStr;

use tuxedo_platform::colour::Colour;
use tuxedo_platform::keyboard::Zone;
use tuxedo_platform::mode::KeyboardMode;

use crate::error::Error;
use crate::panel::PanelEvent;

pub const HELP: &str = "Commands: zone <left|center|right|extra>, colour <hex|name>, \
                        mode <0-7|name>, brightness <0-100>, toggle, save, quit";

fn parse_colour(arg: &str) -> Result<Colour, Error> {
    if let Some(colour) = Colour::from_name(arg) {
        return Ok(colour);
    }
    Ok(Colour::from_str(arg)?)
}

impl FromStr for PanelEvent {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let cmd = words
            .next()
            .ok_or_else(|| Error::ParseCommand(line.to_owned()))?
            .to_lowercase();
        let arg = words.collect::<Vec<_>>().join(" ");
        let need_arg = || {
            if arg.is_empty() {
                Err(Error::ParseCommand(line.to_owned()))
            } else {
                Ok(arg.as_str())
            }
        };

        let event = match cmd.as_str() {
            "zone" => PanelEvent::ZoneChanged(need_arg()?.parse::<Zone>()?),
            "colour" | "color" => PanelEvent::ColourChanged(parse_colour(need_arg()?)?),
            "mode" => {
                PanelEvent::ModeChanged(u8::from(need_arg()?.parse::<KeyboardMode>()?))
            }
            "brightness" => PanelEvent::BrightnessChanged(
                need_arg()?
                    .parse::<f64>()
                    .map_err(|_| Error::ParseCommand(line.to_owned()))?,
            ),
            "toggle" => PanelEvent::StateToggled,
            "save" => PanelEvent::SavePressed,
            "quit" | "exit" => PanelEvent::WindowClosed,
            _ => return Err(Error::ParseCommand(line.to_owned())),
        };
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_commands() {
        assert_eq!(
            "zone centre".parse::<PanelEvent>().unwrap(),
            PanelEvent::ZoneChanged(Zone::Center)
        );
        assert_eq!(
            "colour 0x112233".parse::<PanelEvent>().unwrap(),
            PanelEvent::ColourChanged(Colour(0x11, 0x22, 0x33))
        );
        assert_eq!(
            "color #aabbcc".parse::<PanelEvent>().unwrap(),
            PanelEvent::ColourChanged(Colour(0xaa, 0xbb, 0xcc))
        );
        assert_eq!(
            "colour Magenta".parse::<PanelEvent>().unwrap(),
            PanelEvent::ColourChanged(Colour(0xff, 0x00, 0xff))
        );
        assert_eq!(
            "mode 4".parse::<PanelEvent>().unwrap(),
            PanelEvent::ModeChanged(4)
        );
        assert_eq!(
            "mode random color".parse::<PanelEvent>().unwrap(),
            PanelEvent::ModeChanged(5)
        );
        assert_eq!(
            "  brightness 42.5 ".parse::<PanelEvent>().unwrap(),
            PanelEvent::BrightnessChanged(42.5)
        );
        assert_eq!(
            "TOGGLE".parse::<PanelEvent>().unwrap(),
            PanelEvent::StateToggled
        );
        assert_eq!("save".parse::<PanelEvent>().unwrap(), PanelEvent::SavePressed);
        assert_eq!("quit".parse::<PanelEvent>().unwrap(), PanelEvent::WindowClosed);
    }

    #[test]
    fn reject_bad_commands() {
        assert!(matches!(
            "".parse::<PanelEvent>(),
            Err(Error::ParseCommand(_))
        ));
        assert!(matches!(
            "dance".parse::<PanelEvent>(),
            Err(Error::ParseCommand(_))
        ));
        assert!(matches!(
            "zone".parse::<PanelEvent>(),
            Err(Error::ParseCommand(_))
        ));
        assert!(matches!(
            "brightness lots".parse::<PanelEvent>(),
            Err(Error::ParseCommand(_))
        ));
        assert!(matches!(
            "mode 8".parse::<PanelEvent>(),
            Err(Error::Platform(_))
        ));
        assert!(matches!(
            "colour 12345".parse::<PanelEvent>(),
            Err(Error::Platform(_))
        ));
        assert!(matches!(
            "zone middle".parse::<PanelEvent>(),
            Err(Error::Platform(_))
        ));
    }
}
