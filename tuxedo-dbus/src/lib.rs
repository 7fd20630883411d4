pub use tuxedod::{DBUS_NAME, DBUS_PATH, VERSION as DAEMON_VERSION};
use tuxedo_platform::colour::Colour;
use tuxedo_platform::keyboard::Zone;
use zbus::blocking::Connection;

pub mod zbus_keyboard;

use zbus_keyboard::{
    BrightnessProxyBlocking, CenterColourProxyBlocking, LeftColourProxyBlocking,
    ModeProxyBlocking, RightColourProxyBlocking, StateProxyBlocking,
};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Zones that have an interface on the bus
pub const DBUS_ZONES: [Zone; 3] = [Zone::Left, Zone::Center, Zone::Right];

pub struct DbusProxiesBlocking<'a> {
    state: StateProxyBlocking<'a>,
    brightness: BrightnessProxyBlocking<'a>,
    mode: ModeProxyBlocking<'a>,
    left_colour: LeftColourProxyBlocking<'a>,
    center_colour: CenterColourProxyBlocking<'a>,
    right_colour: RightColourProxyBlocking<'a>,
}

impl<'a> DbusProxiesBlocking<'a> {
    pub fn new(conn: &Connection) -> zbus::Result<(Self, Connection)> {
        let conn = conn.clone();
        Ok((
            DbusProxiesBlocking {
                state: StateProxyBlocking::new(&conn)?,
                brightness: BrightnessProxyBlocking::new(&conn)?,
                mode: ModeProxyBlocking::new(&conn)?,
                left_colour: LeftColourProxyBlocking::new(&conn)?,
                center_colour: CenterColourProxyBlocking::new(&conn)?,
                right_colour: RightColourProxyBlocking::new(&conn)?,
            },
            conn,
        ))
    }

    pub fn state(&self) -> &StateProxyBlocking<'a> {
        &self.state
    }

    pub fn brightness(&self) -> &BrightnessProxyBlocking<'a> {
        &self.brightness
    }

    pub fn mode(&self) -> &ModeProxyBlocking<'a> {
        &self.mode
    }

    pub fn left_colour(&self) -> &LeftColourProxyBlocking<'a> {
        &self.left_colour
    }

    pub fn center_colour(&self) -> &CenterColourProxyBlocking<'a> {
        &self.center_colour
    }

    pub fn right_colour(&self) -> &RightColourProxyBlocking<'a> {
        &self.right_colour
    }
}

/// Blocking client for the system service
pub struct TuxedoDbusClientBlocking<'a> {
    proxies: DbusProxiesBlocking<'a>,
}

impl<'a> TuxedoDbusClientBlocking<'a> {
    pub fn new() -> zbus::Result<(Self, Connection)> {
        let conn = Connection::system()?;
        let (proxies, conn) = DbusProxiesBlocking::new(&conn)?;
        Ok((TuxedoDbusClientBlocking { proxies }, conn))
    }

    pub fn proxies(&self) -> &DbusProxiesBlocking<'a> {
        &self.proxies
    }

    /// Returns `None` for zones the service doesn't expose
    pub fn zone_colour(&self, zone: Zone) -> Option<zbus::Result<Colour>> {
        let colour = match zone {
            Zone::Left => self.proxies.left_colour.get_colour(),
            Zone::Center => self.proxies.center_colour.get_colour(),
            Zone::Right => self.proxies.right_colour.get_colour(),
            Zone::Extra => return None,
        };
        Some(colour.map(Colour::from))
    }

    /// Returns `None` for zones the service doesn't expose
    pub fn set_zone_colour(&self, zone: Zone, colour: Colour) -> Option<zbus::Result<()>> {
        let Colour(r, g, b) = colour;
        Some(match zone {
            Zone::Left => self.proxies.left_colour.set_colour(r, g, b),
            Zone::Center => self.proxies.center_colour.set_colour(r, g, b),
            Zone::Right => self.proxies.right_colour.set_colour(r, g, b),
            Zone::Extra => return None,
        })
    }
}
