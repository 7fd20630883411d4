//! This crate is the only place that knows how the `tuxedo_keyboard` kernel
//! module encodes its sysfs attributes. Everything above it deals in typed
//! values: [`brightness::Brightness`], [`colour::Colour`], [`keyboard::Zone`]
//! and plain `u8`/`bool`.
//!
//! A missing attribute file is never an error here. Reads return `Ok(None)`
//! and writes are skipped, since the files only exist while the module is
//! loaded.

pub mod brightness;
pub mod colour;
pub mod error;
pub mod keyboard;
pub(crate) mod macros;
pub mod mode;
pub mod modprobe;

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use error::{PlatformError, Result};
use log::debug;

use crate::colour::Colour;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Name of the kernel module, also the name of its platform device
pub const MODULE_NAME: &str = "tuxedo_keyboard";
/// The running-module list that `lsmod` reads
pub const PROC_MODULES: &str = "/proc/modules";

/// Read the first line of an attribute file. Returns `Ok(None)` if the file
/// does not exist.
pub fn read_attr(path: &Path) -> Result<Option<String>> {
    if !path.is_file() {
        debug!("{:?} not present, nothing to read", path);
        return Ok(None);
    }
    let buf = fs::read_to_string(path)
        .map_err(|e| PlatformError::Read(path.to_string_lossy().to_string(), e))?;
    Ok(Some(buf.lines().next().unwrap_or_default().trim().to_owned()))
}

/// Write `value` to an attribute file. Skipped if the file does not exist.
pub fn write_attr(path: &Path, value: &str) -> Result<()> {
    if !path.is_file() {
        debug!("{:?} not present, skipping write of {value}", path);
        return Ok(());
    }
    let mut file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(|e| PlatformError::Write(path.to_string_lossy().to_string(), e))?;
    file.write_all(value.as_bytes())
        .map_err(|e| PlatformError::Write(path.to_string_lossy().to_string(), e))
}

pub fn read_attr_u8(path: &Path) -> Result<Option<u8>> {
    match read_attr(path)? {
        Some(value) => value
            .parse::<u8>()
            .map(Some)
            .map_err(|_| PlatformError::ParseNum(value)),
        None => Ok(None),
    }
}

pub fn write_attr_u8(path: &Path, value: u8) -> Result<()> {
    write_attr(path, &value.to_string())
}

/// The driver prints `0` for off, anything else is treated as on
pub fn read_attr_bool(path: &Path) -> Result<Option<bool>> {
    Ok(read_attr(path)?.map(|value| value != "0"))
}

pub fn write_attr_bool(path: &Path, value: bool) -> Result<()> {
    write_attr(path, if value { "1" } else { "0" })
}

pub fn read_attr_colour(path: &Path) -> Result<Option<Colour>> {
    match read_attr(path)? {
        Some(value) => value.parse::<Colour>().map(Some),
        None => Ok(None),
    }
}

/// The driver parses colours with `kstrtouint(.., 0, ..)`, so the value must
/// carry the `0x` prefix to be read as hex.
pub fn write_attr_colour(path: &Path, colour: Colour) -> Result<()> {
    write_attr(path, &colour.to_string())
}

/// Check the running-module list at `module_list` for `name`. The list is in
/// `/proc/modules` format, one module per line with its name first.
pub fn module_loaded(module_list: &Path, name: &str) -> Result<bool> {
    let list = fs::read_to_string(module_list)
        .map_err(|e| PlatformError::Read(module_list.to_string_lossy().to_string(), e))?;
    Ok(list
        .lines()
        .any(|line| line.split_whitespace().next() == Some(name)))
}
