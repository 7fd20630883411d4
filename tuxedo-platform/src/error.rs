use std::fmt;

pub type Result<T> = std::result::Result<T, PlatformError>;

#[derive(Debug)]
pub enum PlatformError {
    ParseNum(String),
    ParseColour(String),
    ParseMode(String),
    ParseZone(String),
    Udev(String, std::io::Error),
    MissingDevice(String),
    Read(String, std::io::Error),
    Write(String, std::io::Error),
    Io(std::io::Error),
}

impl fmt::Display for PlatformError {
    // This trait requires `fmt` with this exact signature.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PlatformError::ParseNum(value) => write!(f, "Parse number error: {:?}", value),
            PlatformError::ParseColour(value) => write!(f, "Could not parse colour: {:?}", value),
            PlatformError::ParseMode(value) => write!(f, "Could not parse mode: {:?}", value),
            PlatformError::ParseZone(value) => write!(f, "Could not parse zone: {:?}", value),
            PlatformError::Udev(deets, error) => write!(f, "udev {}: {}", deets, error),
            PlatformError::MissingDevice(deets) => write!(f, "Device not found: {}", deets),
            PlatformError::Read(path, error) => write!(f, "Read {}: {}", path, error),
            PlatformError::Write(path, error) => write!(f, "Write {}: {}", path, error),
            PlatformError::Io(deets) => write!(f, "std::io error: {}", deets),
        }
    }
}

impl std::error::Error for PlatformError {}

impl From<std::io::Error> for PlatformError {
    fn from(err: std::io::Error) -> Self {
        PlatformError::Io(err)
    }
}
