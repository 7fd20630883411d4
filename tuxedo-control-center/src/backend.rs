//! Where the panel reads and writes keyboard state: straight to sysfs, or
//! through the `tuxedod` system service.

use log::info;
use tuxedo_dbus::{TuxedoDbusClientBlocking, DBUS_ZONES};
use tuxedo_platform::brightness::Brightness;
use tuxedo_platform::colour::Colour;
use tuxedo_platform::keyboard::{TuxedoKeyboard, Zone};

use crate::error::{Error, Result};

/// Getters return `Ok(None)` when the value is unavailable, the panel then
/// leaves the widget unset.
pub trait KeyboardBackend {
    /// Zones offered in the zone selector, in display order
    fn zones(&self) -> &[Zone];

    fn state(&self) -> Result<Option<bool>>;
    fn set_state(&self, on: bool) -> Result<()>;

    fn brightness_percent(&self) -> Result<Option<u8>>;
    fn set_brightness_percent(&self, percent: f64) -> Result<()>;

    fn mode(&self) -> Result<Option<u8>>;
    fn set_mode(&self, mode: u8) -> Result<()>;

    fn zone_colour(&self, zone: Zone) -> Result<Option<Colour>>;
    fn set_zone_colour(&self, zone: Zone, colour: Colour) -> Result<()>;
}

/// Direct sysfs access, no daemon required
pub struct SysfsBackend {
    keyboard: TuxedoKeyboard,
    zones: Vec<Zone>,
}

impl SysfsBackend {
    pub fn new(keyboard: TuxedoKeyboard) -> Self {
        let mut zones = vec![Zone::Left, Zone::Center, Zone::Right];
        if keyboard.has_extra_zone().unwrap_or(false) {
            info!("Keyboard has an extra zone");
            zones.push(Zone::Extra);
        }
        Self { keyboard, zones }
    }
}

impl KeyboardBackend for SysfsBackend {
    fn zones(&self) -> &[Zone] {
        &self.zones
    }

    fn state(&self) -> Result<Option<bool>> {
        Ok(self.keyboard.get_state()?)
    }

    fn set_state(&self, on: bool) -> Result<()> {
        Ok(self.keyboard.set_state(on)?)
    }

    fn brightness_percent(&self) -> Result<Option<u8>> {
        Ok(self.keyboard.get_brightness_percent()?)
    }

    fn set_brightness_percent(&self, percent: f64) -> Result<()> {
        Ok(self.keyboard.set_brightness_percent(percent)?)
    }

    fn mode(&self) -> Result<Option<u8>> {
        Ok(self.keyboard.get_mode()?)
    }

    fn set_mode(&self, mode: u8) -> Result<()> {
        Ok(self.keyboard.set_mode(mode)?)
    }

    fn zone_colour(&self, zone: Zone) -> Result<Option<Colour>> {
        if !self.zones.contains(&zone) {
            return Err(Error::ZoneNotAvailable(zone));
        }
        Ok(self.keyboard.get_zone_colour(zone)?)
    }

    fn set_zone_colour(&self, zone: Zone, colour: Colour) -> Result<()> {
        if !self.zones.contains(&zone) {
            return Err(Error::ZoneNotAvailable(zone));
        }
        Ok(self.keyboard.set_zone_colour(zone, colour)?)
    }
}

const FILE_NOT_FOUND: &str = "org.freedesktop.DBus.Error.FileNotFound";

/// `tuxedod` answers `FileNotFound` for an attribute the driver doesn't have,
/// which the panel treats the same as a missing sysfs file.
fn unset_if_missing<T>(reply: zbus::Result<T>) -> Result<Option<T>> {
    match reply {
        Ok(value) => Ok(Some(value)),
        Err(zbus::Error::MethodError(name, _, _)) if name.as_str() == FILE_NOT_FOUND => Ok(None),
        Err(zbus::Error::FDO(err)) if matches!(*err, zbus::fdo::Error::FileNotFound(_)) => {
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

/// Goes through `tuxedod`. The service carries brightness in device range,
/// the conversion to percent happens here.
pub struct DbusBackend {
    client: TuxedoDbusClientBlocking<'static>,
    _conn: zbus::blocking::Connection,
}

impl DbusBackend {
    pub fn new() -> Result<Self> {
        let (client, conn) = TuxedoDbusClientBlocking::new()?;
        Ok(Self {
            client,
            _conn: conn,
        })
    }
}

impl KeyboardBackend for DbusBackend {
    fn zones(&self) -> &[Zone] {
        &DBUS_ZONES
    }

    fn state(&self) -> Result<Option<bool>> {
        unset_if_missing(self.client.proxies().state().get_state())
    }

    fn set_state(&self, on: bool) -> Result<()> {
        Ok(self.client.proxies().state().set_state(on)?)
    }

    fn brightness_percent(&self) -> Result<Option<u8>> {
        let raw = unset_if_missing(self.client.proxies().brightness().get_brightness())?;
        Ok(raw.map(|raw| Brightness(raw).percent()))
    }

    fn set_brightness_percent(&self, percent: f64) -> Result<()> {
        let raw = Brightness::from_percent(percent).raw();
        Ok(self.client.proxies().brightness().set_brightness(raw)?)
    }

    fn mode(&self) -> Result<Option<u8>> {
        unset_if_missing(self.client.proxies().mode().get_mode())
    }

    fn set_mode(&self, mode: u8) -> Result<()> {
        Ok(self.client.proxies().mode().set_mode(mode)?)
    }

    fn zone_colour(&self, zone: Zone) -> Result<Option<Colour>> {
        match self.client.zone_colour(zone) {
            Some(reply) => unset_if_missing(reply),
            None => Err(Error::ZoneNotAvailable(zone)),
        }
    }

    fn set_zone_colour(&self, zone: Zone, colour: Colour) -> Result<()> {
        match self.client.set_zone_colour(zone, colour) {
            Some(res) => Ok(res?),
            None => Err(Error::ZoneNotAvailable(zone)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tuxedo_platform::keyboard::KeyboardAttrs;

    use super::*;

    #[test]
    fn extra_zone_offered_when_present() {
        let dir = tempfile::tempdir().unwrap();
        let kbd = || TuxedoKeyboard::new(KeyboardAttrs::from_dir(dir.path()));

        let backend = SysfsBackend::new(kbd());
        assert_eq!(backend.zones(), &[Zone::Left, Zone::Center, Zone::Right]);
        assert!(matches!(
            backend.zone_colour(Zone::Extra),
            Err(Error::ZoneNotAvailable(Zone::Extra))
        ));

        fs::write(dir.path().join("extra"), "1\n").unwrap();
        fs::write(dir.path().join("color_extra"), "0a0b0c\n").unwrap();
        let backend = SysfsBackend::new(kbd());
        assert_eq!(backend.zones().len(), 4);
        assert_eq!(
            backend.zone_colour(Zone::Extra).unwrap(),
            Some(Colour(0x0a, 0x0b, 0x0c))
        );
    }

    #[test]
    fn missing_on_the_bus_is_unset() {
        let missing = zbus::Error::FDO(Box::new(zbus::fdo::Error::FileNotFound(
            "Keyboard state is not present".to_owned(),
        )));
        assert_eq!(unset_if_missing::<bool>(Err(missing)).unwrap(), None);

        let reply = zbus::Message::method("/org/tuxedo/keyboard", "getMode")
            .unwrap()
            .build(&())
            .unwrap();
        let name = zbus::names::ErrorName::from_static_str_unchecked(FILE_NOT_FOUND);
        let missing = zbus::Error::MethodError(name.into(), None, reply);
        assert_eq!(unset_if_missing::<u8>(Err(missing)).unwrap(), None);

        assert_eq!(unset_if_missing(Ok(7u8)).unwrap(), Some(7));
    }

    #[test]
    fn other_bus_errors_kept() {
        let failed = zbus::Error::FDO(Box::new(zbus::fdo::Error::Failed(
            "Could not parse colour".to_owned(),
        )));
        assert!(matches!(
            unset_if_missing::<u8>(Err(failed)),
            Err(Error::Zbus(_))
        ));
        assert!(matches!(
            unset_if_missing::<u8>(Err(zbus::Error::Failure("gone".to_owned()))),
            Err(Error::Zbus(zbus::Error::Failure(_)))
        ));
    }

    #[test]
    fn percent_in_sysfs() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("brightness"), "255\n").unwrap();
        let backend = SysfsBackend::new(TuxedoKeyboard::new(KeyboardAttrs::from_dir(dir.path())));
        assert_eq!(backend.brightness_percent().unwrap(), Some(100));
        backend.set_brightness_percent(20.0).unwrap();
        assert_eq!(
            fs::read_to_string(dir.path().join("brightness")).unwrap(),
            "51"
        );
    }
}
