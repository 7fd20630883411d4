use std::fmt;

use tuxedo_platform::error::PlatformError;
use tuxedo_platform::keyboard::Zone;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Zbus(zbus::Error),
    Platform(PlatformError),
    ZoneNotAvailable(Zone),
    NotPresent(&'static str),
    ParseCommand(String),
}

impl fmt::Display for Error {
    // This trait requires `fmt` with this exact signature.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "Failed to open: {}", err),
            Error::Zbus(err) => write!(f, "Error: {}", err),
            Error::Platform(err) => write!(f, "Keyboard error: {}", err),
            Error::ZoneNotAvailable(zone) => write!(f, "{} zone is not available", zone),
            Error::NotPresent(what) => write!(f, "Keyboard {} is unknown", what),
            Error::ParseCommand(line) => write!(f, "Unknown command: {:?}", line),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<zbus::Error> for Error {
    fn from(err: zbus::Error) -> Self {
        Error::Zbus(err)
    }
}

impl From<PlatformError> for Error {
    fn from(err: PlatformError) -> Self {
        Error::Platform(err)
    }
}
