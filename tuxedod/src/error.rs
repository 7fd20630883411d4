use std::convert::From;
use std::fmt;

use tuxedo_platform::error::PlatformError;

#[derive(Debug)]
pub enum DaemonError {
    ModuleNotLoaded(String),
    NotPresent(String),
    Io(std::io::Error),
    Zbus(zbus::Error),
    Platform(PlatformError),
    ParseRon(ron::error::SpannedError),
    Ron(ron::Error),
}

impl fmt::Display for DaemonError {
    // This trait requires `fmt` with this exact signature.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DaemonError::ModuleNotLoaded(name) => write!(f, "no {} module loaded", name),
            DaemonError::NotPresent(attr) => write!(f, "Attribute not present: {}", attr),
            DaemonError::Io(detail) => write!(f, "std::io error: {}", detail),
            DaemonError::Zbus(detail) => write!(f, "Zbus error: {}", detail),
            DaemonError::Platform(deets) => write!(f, "Keyboard platform error: {}", deets),
            DaemonError::ParseRon(error) => write!(f, "Parse config error: {}", error),
            DaemonError::Ron(error) => write!(f, "Write config error: {}", error),
        }
    }
}

impl std::error::Error for DaemonError {}

impl From<PlatformError> for DaemonError {
    fn from(err: PlatformError) -> Self {
        DaemonError::Platform(err)
    }
}

impl From<zbus::Error> for DaemonError {
    fn from(err: zbus::Error) -> Self {
        DaemonError::Zbus(err)
    }
}

impl From<std::io::Error> for DaemonError {
    fn from(err: std::io::Error) -> Self {
        DaemonError::Io(err)
    }
}

impl From<ron::error::SpannedError> for DaemonError {
    fn from(err: ron::error::SpannedError) -> Self {
        DaemonError::ParseRon(err)
    }
}

impl From<ron::Error> for DaemonError {
    fn from(err: ron::Error) -> Self {
        DaemonError::Ron(err)
    }
}

impl From<DaemonError> for zbus::fdo::Error {
    #[inline]
    fn from(err: DaemonError) -> Self {
        match err {
            DaemonError::NotPresent(_) => zbus::fdo::Error::FileNotFound(format!("{}", err)),
            _ => zbus::fdo::Error::Failed(format!("{}", err)),
        }
    }
}

impl From<DaemonError> for zbus::Error {
    #[inline]
    fn from(err: DaemonError) -> Self {
        zbus::Error::Failure(format!("{}", err))
    }
}
