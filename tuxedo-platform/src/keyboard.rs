use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::{info, warn};
use serde_derive::{Deserialize, Serialize};

use crate::brightness::Brightness;
use crate::colour::Colour;
use crate::error::{PlatformError, Result};
use crate::mode::KeyboardMode;
use crate::{attr_bool, attr_u8, get_attr_u8, has_attr, MODULE_NAME};

/// Where the platform device lives when the module is loaded
pub const SYSFS_DIR: &str = "/sys/devices/platform/tuxedo_keyboard";

/// The independently coloured backlight regions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Zone {
    Left,
    Center,
    Right,
    /// Not every keyboard has it, see `TuxedoKeyboard::has_extra_zone()`
    Extra,
}

impl Zone {
    pub const ALL: [Zone; 4] = [Zone::Left, Zone::Center, Zone::Right, Zone::Extra];

    /// The sysfs attribute holding this zone's colour
    pub fn attr_name(&self) -> &'static str {
        match self {
            Zone::Left => "color_left",
            Zone::Center => "color_center",
            Zone::Right => "color_right",
            Zone::Extra => "color_extra",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Zone::Left => "Left",
            Zone::Center => "Center",
            Zone::Right => "Right",
            Zone::Extra => "Extra",
        }
    }
}

impl FromStr for Zone {
    type Err = PlatformError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" => Ok(Zone::Left),
            "center" | "centre" => Ok(Zone::Center),
            "right" => Ok(Zone::Right),
            "extra" => Ok(Zone::Extra),
            _ => Err(PlatformError::ParseZone(s.to_owned())),
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The full set of attribute files the gateway touches. Normally built from
/// the platform device directory, tests point it at a temp dir.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardAttrs {
    pub brightness: PathBuf,
    pub mode: PathBuf,
    pub state: PathBuf,
    /// Read only, `1` if the extra zone exists
    pub extra: PathBuf,
    pub color_left: PathBuf,
    pub color_center: PathBuf,
    pub color_right: PathBuf,
    pub color_extra: PathBuf,
}

impl KeyboardAttrs {
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            brightness: dir.join("brightness"),
            mode: dir.join("mode"),
            state: dir.join("state"),
            extra: dir.join("extra"),
            color_left: dir.join(Zone::Left.attr_name()),
            color_center: dir.join(Zone::Center.attr_name()),
            color_right: dir.join(Zone::Right.attr_name()),
            color_extra: dir.join(Zone::Extra.attr_name()),
        }
    }

    /// Look up the `tuxedo_keyboard` platform device through udev
    pub fn discover() -> Result<Self> {
        let mut enumerator = udev::Enumerator::new().map_err(|err| {
            warn!("{}", err);
            PlatformError::Udev("enumerator failed".into(), err)
        })?;
        enumerator.match_subsystem("platform").map_err(|err| {
            warn!("{}", err);
            PlatformError::Udev("match_subsystem failed".into(), err)
        })?;
        enumerator.match_sysname(MODULE_NAME).map_err(|err| {
            warn!("{}", err);
            PlatformError::Udev("match_sysname failed".into(), err)
        })?;

        if let Some(device) = (enumerator.scan_devices().map_err(|err| {
            warn!("{}", err);
            PlatformError::Udev("scan_devices failed".into(), err)
        })?)
        .next()
        {
            info!("Found keyboard device at {:?}", device.syspath());
            return Ok(Self::from_dir(device.syspath()));
        }
        Err(PlatformError::MissingDevice(format!(
            "platform device {MODULE_NAME}"
        )))
    }

    pub fn colour(&self, zone: Zone) -> &Path {
        match zone {
            Zone::Left => &self.color_left,
            Zone::Center => &self.color_center,
            Zone::Right => &self.color_right,
            Zone::Extra => &self.color_extra,
        }
    }
}

impl Default for KeyboardAttrs {
    fn default() -> Self {
        Self::from_dir(SYSFS_DIR)
    }
}

/// Typed get/set over the keyboard attributes.
///
/// Getters return `Ok(None)` when the attribute file is absent. Content that
/// can't be parsed is an error for that call only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TuxedoKeyboard {
    attrs: KeyboardAttrs,
}

impl TuxedoKeyboard {
    pub fn new(attrs: KeyboardAttrs) -> Self {
        Self { attrs }
    }

    pub fn attrs(&self) -> &KeyboardAttrs {
        &self.attrs
    }

    // Raw `0..=255` value, as the D-Bus interface carries it
    attr_u8!("brightness", brightness);

    attr_bool!("state", state);

    has_attr!("mode" mode);
    get_attr_u8!("mode" mode);

    /// Values past the last effect are ignored, not truncated
    pub fn set_mode(&self, mode: u8) -> Result<()> {
        if mode >= KeyboardMode::COUNT {
            warn!("Ignoring out of range keyboard mode {mode}");
            return Ok(());
        }
        crate::write_attr_u8(&self.attrs.mode, mode)
    }

    pub fn get_brightness_percent(&self) -> Result<Option<u8>> {
        Ok(self.get_brightness()?.map(|b| Brightness(b).percent()))
    }

    pub fn set_brightness_percent(&self, percent: f64) -> Result<()> {
        self.set_brightness(Brightness::from_percent(percent).raw())
    }

    pub fn has_zone(&self, zone: Zone) -> bool {
        self.attrs.colour(zone).is_file()
    }

    pub fn get_zone_colour(&self, zone: Zone) -> Result<Option<Colour>> {
        crate::read_attr_colour(self.attrs.colour(zone))
    }

    pub fn set_zone_colour(&self, zone: Zone, colour: Colour) -> Result<()> {
        crate::write_attr_colour(self.attrs.colour(zone), colour)
    }

    /// Reads the driver's `extra` flag, absent counts as no extra zone
    pub fn has_extra_zone(&self) -> Result<bool> {
        Ok(crate::read_attr_bool(&self.attrs.extra)?.unwrap_or(false))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::colour::{BLUE, GREEN, RED};

    /// Attribute files as the driver shows them right after loading
    fn fake_keyboard() -> (TempDir, TuxedoKeyboard) {
        let dir = tempfile::tempdir().unwrap();
        for (name, value) in [
            ("brightness", "75\n"),
            ("mode", "0\n"),
            ("state", "1\n"),
            ("extra", "0\n"),
            ("color_left", "ffffff\n"),
            ("color_center", "ffffff\n"),
            ("color_right", "ffffff\n"),
            ("color_extra", "ffffff\n"),
        ] {
            fs::write(dir.path().join(name), value).unwrap();
        }
        let kbd = TuxedoKeyboard::new(KeyboardAttrs::from_dir(dir.path()));
        (dir, kbd)
    }

    #[test]
    fn brightness_percent() {
        let (_dir, kbd) = fake_keyboard();
        assert_eq!(kbd.get_brightness().unwrap(), Some(75));
        assert_eq!(kbd.get_brightness_percent().unwrap(), Some(29));
        for p in 0..=100u8 {
            kbd.set_brightness_percent(p as f64).unwrap();
            let back = kbd.get_brightness_percent().unwrap().unwrap();
            assert!((back as i16 - p as i16).abs() <= 1);
        }
    }

    #[test]
    fn brightness_clamped() {
        let (dir, kbd) = fake_keyboard();
        kbd.set_brightness_percent(-3.0).unwrap();
        assert_eq!(kbd.get_brightness().unwrap(), Some(0));
        kbd.set_brightness_percent(250.0).unwrap();
        assert_eq!(
            fs::read_to_string(dir.path().join("brightness")).unwrap(),
            "255"
        );
    }

    #[test]
    fn zone_colours() {
        let (dir, kbd) = fake_keyboard();
        kbd.set_zone_colour(Zone::Left, RED).unwrap();
        kbd.set_zone_colour(Zone::Center, GREEN).unwrap();
        kbd.set_zone_colour(Zone::Right, BLUE).unwrap();
        kbd.set_zone_colour(Zone::Extra, Colour(0x11, 0x22, 0x33))
            .unwrap();
        assert_eq!(
            fs::read_to_string(dir.path().join("color_extra")).unwrap(),
            "0x112233"
        );
        assert_eq!(kbd.get_zone_colour(Zone::Left).unwrap(), Some(RED));
        assert_eq!(kbd.get_zone_colour(Zone::Center).unwrap(), Some(GREEN));
        assert_eq!(kbd.get_zone_colour(Zone::Right).unwrap(), Some(BLUE));
        assert_eq!(
            kbd.get_zone_colour(Zone::Extra).unwrap(),
            Some(Colour(0x11, 0x22, 0x33))
        );

        for v in (0..=255u8).step_by(5) {
            let c = Colour(v, v.wrapping_mul(7), 255 - v);
            kbd.set_zone_colour(Zone::Center, c).unwrap();
            assert_eq!(kbd.get_zone_colour(Zone::Center).unwrap(), Some(c));
        }
    }

    #[test]
    fn colour_as_driver_prints_it() {
        let (dir, kbd) = fake_keyboard();
        fs::write(dir.path().join("color_right"), "a0b1c2\n").unwrap();
        assert_eq!(
            kbd.get_zone_colour(Zone::Right).unwrap(),
            Some(Colour(0xa0, 0xb1, 0xc2))
        );
    }

    #[test]
    fn malformed_colour() {
        let (dir, kbd) = fake_keyboard();
        fs::write(dir.path().join("color_left"), "f0\n").unwrap();
        assert!(matches!(
            kbd.get_zone_colour(Zone::Left),
            Err(PlatformError::ParseColour(_))
        ));
        fs::write(dir.path().join("color_left"), "gghhii\n").unwrap();
        assert!(kbd.get_zone_colour(Zone::Left).is_err());
        // the other zones are unaffected
        assert!(kbd.get_zone_colour(Zone::Center).is_ok());
    }

    #[test]
    fn mode_range() {
        let (_dir, kbd) = fake_keyboard();
        for m in 0..KeyboardMode::COUNT {
            kbd.set_mode(m).unwrap();
            assert_eq!(kbd.get_mode().unwrap(), Some(m));
        }
        kbd.set_mode(4).unwrap();
        for m in [8, 9, 200, 255] {
            kbd.set_mode(m).unwrap();
            assert_eq!(kbd.get_mode().unwrap(), Some(4));
        }
    }

    #[test]
    fn state() {
        let (dir, kbd) = fake_keyboard();
        kbd.set_state(false).unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("state")).unwrap(), "0");
        assert_eq!(kbd.get_state().unwrap(), Some(false));
        kbd.set_state(true).unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("state")).unwrap(), "1");
        assert_eq!(kbd.get_state().unwrap(), Some(true));
        for other in ["2", "on", ""] {
            fs::write(dir.path().join("state"), other).unwrap();
            assert_eq!(kbd.get_state().unwrap(), Some(true));
        }
    }

    #[test]
    fn nothing_there() {
        let dir = tempfile::tempdir().unwrap();
        let kbd = TuxedoKeyboard::new(KeyboardAttrs::from_dir(dir.path()));
        assert_eq!(kbd.get_brightness().unwrap(), None);
        assert_eq!(kbd.get_brightness_percent().unwrap(), None);
        assert_eq!(kbd.get_mode().unwrap(), None);
        assert_eq!(kbd.get_state().unwrap(), None);
        for zone in Zone::ALL {
            assert!(!kbd.has_zone(zone));
            assert_eq!(kbd.get_zone_colour(zone).unwrap(), None);
        }
        assert!(!kbd.has_extra_zone().unwrap());

        kbd.set_brightness_percent(50.0).unwrap();
        kbd.set_mode(1).unwrap();
        kbd.set_state(true).unwrap();
        kbd.set_zone_colour(Zone::Left, RED).unwrap();
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn extra_zone_flag() {
        let (dir, kbd) = fake_keyboard();
        assert!(kbd.has_zone(Zone::Extra));
        assert!(!kbd.has_extra_zone().unwrap());
        fs::write(dir.path().join("extra"), "1\n").unwrap();
        assert!(kbd.has_extra_zone().unwrap());
        assert!(kbd.has_brightness());
        assert!(kbd.has_state());
        assert!(kbd.has_mode());
    }

    #[test]
    fn zone_names() {
        assert_eq!("Centre".parse::<Zone>().unwrap(), Zone::Center);
        assert_eq!("left".parse::<Zone>().unwrap(), Zone::Left);
        assert!("middle".parse::<Zone>().is_err());
        assert_eq!(
            KeyboardAttrs::default().colour(Zone::Right),
            Path::new("/sys/devices/platform/tuxedo_keyboard/color_right")
        );
    }
}
