pub mod backend;
pub mod cli_options;
pub mod command;
pub mod error;
pub mod panel;

pub use backend::{DbusBackend, KeyboardBackend, SysfsBackend};
pub use panel::{Panel, PanelEvent};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_versions() {
    println!("App and daemon versions:");
    println!("  tuxedo-control-center v{}", VERSION);
    println!("                tuxedod v{}", tuxedo_dbus::DAEMON_VERSION);
    println!("\nComponent crate versions:");
    println!("        tuxedo-platform v{}", tuxedo_platform::VERSION);
    println!("            tuxedo-dbus v{}", tuxedo_dbus::VERSION);
}
