use std::fs::{self, create_dir_all};
use std::path::{Path, PathBuf};

use log::{error, info, warn};
use ron::ser::PrettyConfig;
use serde_derive::{Deserialize, Serialize};
use tuxedo_platform::keyboard::SYSFS_DIR;
use tuxedo_platform::{MODULE_NAME, PROC_MODULES};

use crate::error::DaemonError;

const CONFIG_FILE: &str = "tuxedod.ron";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Directory holding the keyboard attributes, used when udev lookup is
    /// off or finds nothing
    pub sysfs_dir: PathBuf,
    /// Ask udev for the platform device before falling back to `sysfs_dir`
    pub discover_device: bool,
    /// Kernel module that must be loaded before the daemon starts
    pub module_name: String,
    /// Running-module list to check, in `/proc/modules` format
    pub module_list: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sysfs_dir: PathBuf::from(SYSFS_DIR),
            discover_device: true,
            module_name: MODULE_NAME.to_owned(),
            module_list: PathBuf::from(PROC_MODULES),
        }
    }
}

impl Config {
    pub fn file_path() -> PathBuf {
        PathBuf::from(crate::CONFIG_PATH_BASE).join(CONFIG_FILE)
    }

    /// Load from the default location, see `load_from()`
    pub fn load() -> Self {
        Self::load_from(&Self::file_path())
    }

    /// A missing file is created with defaults. A file that fails to parse is
    /// moved to `<file>-old` and replaced with defaults.
    pub fn load_from(path: &Path) -> Self {
        let buf = match fs::read_to_string(path) {
            Ok(buf) => buf,
            Err(err) => {
                info!("No config at {:?} ({err}), writing defaults", path);
                let config = Self::default();
                config
                    .write_to(path)
                    .unwrap_or_else(|err| error!("Could not write config: {}", err));
                return config;
            }
        };

        match ron::from_str::<Config>(&buf) {
            Ok(config) => config,
            Err(err) => {
                warn!("Could not deserialise {:?}: {}", path, err);
                let old = format!("{}-old", path.to_string_lossy());
                warn!("Renaming {:?} to {} and recreating config", path, old);
                fs::rename(path, &old).unwrap_or_else(|err| {
                    error!("Could not rename {:?}: {}", path, err);
                });
                let config = Self::default();
                config
                    .write_to(path)
                    .unwrap_or_else(|err| error!("Could not write config: {}", err));
                config
            }
        }
    }

    pub fn write_to(&self, path: &Path) -> Result<(), DaemonError> {
        if let Some(dir) = path.parent() {
            create_dir_all(dir)?;
        }
        let ron = ron::ser::to_string_pretty(self, PrettyConfig::new().depth_limit(4))?;
        fs::write(path, ron)?;
        Ok(())
    }
}
