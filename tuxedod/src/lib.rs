#![deny(unused_must_use)]
/// Configuration loading, saving
pub mod config;
/// Keyboard brightness, mode, power state and zone colours over D-Bus
pub mod ctrl_keyboard;

pub mod error;

use log::{info, warn};
use tuxedo_platform::module_loaded;
use zbus::zvariant::ObjectPath;
use zbus::Connection;

use crate::config::Config;
use crate::error::DaemonError;

const CONFIG_PATH_BASE: &str = "/etc/tuxedod/";
pub static DBUS_NAME: &str = "org.tuxedo.keyboard";
pub static DBUS_PATH: &str = "/org/tuxedo/keyboard";

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The attribute files only exist while the kernel module is loaded, so
/// refuse to start without it.
pub fn check_module(config: &Config) -> Result<(), DaemonError> {
    if module_loaded(&config.module_list, &config.module_name)? {
        info!("Found {} in {:?}", config.module_name, config.module_list);
        Ok(())
    } else {
        Err(DaemonError::ModuleNotLoaded(config.module_name.clone()))
    }
}

pub trait ZbusRun {
    fn add_to_server(self, server: &mut Connection)
        -> impl std::future::Future<Output = ()> + Send;

    fn add_to_server_helper(
        iface: impl zbus::Interface,
        path: &str,
        server: &mut Connection,
    ) -> impl std::future::Future<Output = ()> + Send {
        async move {
            server
                .object_server()
                .at(&ObjectPath::from_str_unchecked(path), iface)
                .await
                .map_err(|err| {
                    warn!("{}: add_to_server {}", path, err);
                    err
                })
                .ok();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn module_check() {
        let dir = tempfile::tempdir().unwrap();
        let list = dir.path().join("modules");
        let config = Config {
            module_list: list.clone(),
            ..Default::default()
        };

        fs::write(&list, "i915 3936256 42 - Live 0x0000000000000000\n").unwrap();
        let err = check_module(&config).unwrap_err();
        assert!(matches!(err, DaemonError::ModuleNotLoaded(_)));
        assert_eq!(err.to_string(), "no tuxedo_keyboard module loaded");

        fs::write(
            &list,
            "i915 3936256 42 - Live 0x0000000000000000\n\
             tuxedo_keyboard 45056 0 - Live 0x0000000000000000\n",
        )
        .unwrap();
        assert!(check_module(&config).is_ok());
    }
}
