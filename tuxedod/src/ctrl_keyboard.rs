//! One D-Bus interface per attribute group, all served at `DBUS_PATH`.
//!
//! Every method is a straight pass-through to `TuxedoKeyboard`. Getters reply
//! `FileNotFound` when the attribute is missing, since a D-Bus reply can't
//! carry "nothing".

use log::{debug, warn};
use tuxedo_platform::colour::Colour;
use tuxedo_platform::error::PlatformError;
use tuxedo_platform::keyboard::{TuxedoKeyboard, Zone};
use zbus::fdo::Error as FdoErr;
use zbus::{interface, Connection};

use crate::error::DaemonError;
use crate::{ZbusRun, DBUS_PATH};

fn present<T>(value: Result<Option<T>, PlatformError>, attr: &str) -> Result<T, FdoErr> {
    match value {
        Ok(Some(v)) => Ok(v),
        Ok(None) => Err(DaemonError::NotPresent(attr.to_owned()).into()),
        Err(err) => {
            warn!("{attr}: {err}");
            Err(DaemonError::from(err).into())
        }
    }
}

fn written(value: Result<(), PlatformError>, attr: &str) -> Result<(), FdoErr> {
    value.map_err(|err| {
        warn!("{attr}: {err}");
        DaemonError::from(err).into()
    })
}

#[derive(Debug, Clone)]
pub struct CtrlState {
    keyboard: TuxedoKeyboard,
}

#[interface(name = "org.tuxedo.keyboard.state")]
impl CtrlState {
    /// Switch the backlight on or off
    #[zbus(name = "setState")]
    fn set_state(&self, state: bool) -> Result<(), FdoErr> {
        debug!("setState({state})");
        written(self.keyboard.set_state(state), "state")
    }

    #[zbus(name = "getState")]
    fn get_state(&self) -> Result<bool, FdoErr> {
        present(self.keyboard.get_state(), "state")
    }
}

#[derive(Debug, Clone)]
pub struct CtrlBrightness {
    keyboard: TuxedoKeyboard,
}

#[interface(name = "org.tuxedo.keyboard.brightness")]
impl CtrlBrightness {
    /// Device range, `0..=255`
    #[zbus(name = "setBrightness")]
    fn set_brightness(&self, brightness: u8) -> Result<(), FdoErr> {
        debug!("setBrightness({brightness})");
        written(self.keyboard.set_brightness(brightness), "brightness")
    }

    #[zbus(name = "getBrightness")]
    fn get_brightness(&self) -> Result<u8, FdoErr> {
        present(self.keyboard.get_brightness(), "brightness")
    }
}

#[derive(Debug, Clone)]
pub struct CtrlMode {
    keyboard: TuxedoKeyboard,
}

#[interface(name = "org.tuxedo.keyboard.mode")]
impl CtrlMode {
    /// `0..=7`, anything larger is ignored
    #[zbus(name = "setMode")]
    fn set_mode(&self, mode: u8) -> Result<(), FdoErr> {
        debug!("setMode({mode})");
        written(self.keyboard.set_mode(mode), "mode")
    }

    #[zbus(name = "getMode")]
    fn get_mode(&self) -> Result<u8, FdoErr> {
        present(self.keyboard.get_mode(), "mode")
    }
}

macro_rules! zone_colour_iface {
    ($name:ident, $zone:expr, $iface:tt, $get:tt, $set:tt) => {
        #[derive(Debug, Clone)]
        pub struct $name {
            keyboard: TuxedoKeyboard,
        }

        #[interface(name = $iface)]
        impl $name {
            #[zbus(name = $set)]
            fn set_colour(&self, red: u8, green: u8, blue: u8) -> Result<(), FdoErr> {
                let zone: Zone = $zone;
                debug!("{} colour ({red}, {green}, {blue})", zone);
                written(
                    self.keyboard
                        .set_zone_colour(zone, Colour(red, green, blue)),
                    zone.attr_name(),
                )
            }

            #[zbus(name = $get)]
            fn colour(&self) -> Result<(u8, u8, u8), FdoErr> {
                let zone: Zone = $zone;
                present(self.keyboard.get_zone_colour(zone), zone.attr_name()).map(Into::into)
            }
        }
    };
}

zone_colour_iface!(
    CtrlLeftColour,
    Zone::Left,
    "org.tuxedo.keyboard.left_color",
    "getLeftColor",
    "setLeftColor"
);
zone_colour_iface!(
    CtrlCenterColour,
    Zone::Center,
    "org.tuxedo.keyboard.center_color",
    "getCenterColor",
    "setCenterColor"
);
zone_colour_iface!(
    CtrlRightColour,
    Zone::Right,
    "org.tuxedo.keyboard.right_color",
    "getRightColor",
    "setRightColor"
);

/// Bundles the per-attribute interfaces so they are registered together. The
/// extra zone is left off the bus.
#[derive(Debug, Clone)]
pub struct CtrlKeyboard {
    keyboard: TuxedoKeyboard,
}

impl CtrlKeyboard {
    pub fn new(keyboard: TuxedoKeyboard) -> Self {
        Self { keyboard }
    }
}

impl ZbusRun for CtrlKeyboard {
    async fn add_to_server(self, server: &mut Connection) {
        let keyboard = self.keyboard;
        Self::add_to_server_helper(
            CtrlState {
                keyboard: keyboard.clone(),
            },
            DBUS_PATH,
            server,
        )
        .await;
        Self::add_to_server_helper(
            CtrlBrightness {
                keyboard: keyboard.clone(),
            },
            DBUS_PATH,
            server,
        )
        .await;
        Self::add_to_server_helper(
            CtrlMode {
                keyboard: keyboard.clone(),
            },
            DBUS_PATH,
            server,
        )
        .await;
        Self::add_to_server_helper(
            CtrlLeftColour {
                keyboard: keyboard.clone(),
            },
            DBUS_PATH,
            server,
        )
        .await;
        Self::add_to_server_helper(
            CtrlCenterColour {
                keyboard: keyboard.clone(),
            },
            DBUS_PATH,
            server,
        )
        .await;
        Self::add_to_server_helper(CtrlRightColour { keyboard }, DBUS_PATH, server).await;
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;
    use tuxedo_platform::keyboard::KeyboardAttrs;

    use super::*;

    fn fake_keyboard() -> (TempDir, TuxedoKeyboard) {
        let dir = tempfile::tempdir().unwrap();
        for (name, value) in [
            ("brightness", "200\n"),
            ("mode", "2\n"),
            ("state", "1\n"),
            ("color_left", "ff0000\n"),
            ("color_center", "00ff00\n"),
            ("color_right", "0000ff\n"),
        ] {
            fs::write(dir.path().join(name), value).unwrap();
        }
        let kbd = TuxedoKeyboard::new(KeyboardAttrs::from_dir(dir.path()));
        (dir, kbd)
    }

    #[test]
    fn pass_through() {
        let (_dir, keyboard) = fake_keyboard();
        let state = CtrlState {
            keyboard: keyboard.clone(),
        };
        let brightness = CtrlBrightness {
            keyboard: keyboard.clone(),
        };
        let mode = CtrlMode {
            keyboard: keyboard.clone(),
        };

        assert!(state.get_state().unwrap());
        state.set_state(false).unwrap();
        assert!(!state.get_state().unwrap());

        assert_eq!(brightness.get_brightness().unwrap(), 200);
        brightness.set_brightness(17).unwrap();
        assert_eq!(keyboard.get_brightness().unwrap(), Some(17));

        assert_eq!(mode.get_mode().unwrap(), 2);
        mode.set_mode(7).unwrap();
        mode.set_mode(8).unwrap();
        assert_eq!(mode.get_mode().unwrap(), 7);
    }

    #[test]
    fn zone_colours() {
        let (dir, keyboard) = fake_keyboard();
        let left = CtrlLeftColour {
            keyboard: keyboard.clone(),
        };
        let center = CtrlCenterColour {
            keyboard: keyboard.clone(),
        };
        let right = CtrlRightColour {
            keyboard: keyboard.clone(),
        };

        assert_eq!(left.colour().unwrap(), (0xff, 0, 0));
        assert_eq!(center.colour().unwrap(), (0, 0xff, 0));
        assert_eq!(right.colour().unwrap(), (0, 0, 0xff));

        center.set_colour(0x11, 0x22, 0x33).unwrap();
        assert_eq!(
            fs::read_to_string(dir.path().join("color_center")).unwrap(),
            "0x112233"
        );
        assert_eq!(center.colour().unwrap(), (0x11, 0x22, 0x33));
        assert_eq!(left.colour().unwrap(), (0xff, 0, 0));
    }

    #[test]
    fn missing_attribute() {
        let dir = tempfile::tempdir().unwrap();
        let keyboard = TuxedoKeyboard::new(KeyboardAttrs::from_dir(dir.path()));
        let state = CtrlState {
            keyboard: keyboard.clone(),
        };
        let left = CtrlLeftColour { keyboard };
        assert!(matches!(state.get_state(), Err(FdoErr::FileNotFound(_))));
        assert!(matches!(left.colour(), Err(FdoErr::FileNotFound(_))));
        // writes to a missing attribute are dropped quietly
        state.set_state(true).unwrap();
        left.set_colour(1, 2, 3).unwrap();
    }

    #[test]
    fn malformed_content() {
        let (dir, keyboard) = fake_keyboard();
        fs::write(dir.path().join("color_right"), "nonsense\n").unwrap();
        let right = CtrlRightColour { keyboard };
        assert!(matches!(right.colour(), Err(FdoErr::Failed(_))));
    }
}
