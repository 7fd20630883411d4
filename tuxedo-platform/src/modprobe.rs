use std::fmt;
use std::fs;
use std::path::Path;

use serde_derive::{Deserialize, Serialize};

use crate::colour::Colour;
use crate::error::{PlatformError, Result};
use crate::MODULE_NAME;

/// Options file read by modprobe when the module is loaded at boot
pub const MODPROBE_CONF: &str = "/etc/modprobe.d/tuxedo_keyboard.conf";

/// Module parameters restoring the current keyboard setup on next boot.
/// Written out as a single `options` line, never read back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ModuleOptions {
    pub state: bool,
    pub mode: u8,
    pub color_left: Colour,
    pub color_center: Colour,
    pub color_right: Colour,
}

impl ModuleOptions {
    /// Overwrites whatever is at `path`
    pub fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_string())
            .map_err(|e| PlatformError::Write(path.to_string_lossy().to_string(), e))
    }
}

impl fmt::Display for ModuleOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "options {MODULE_NAME} state={} mode={} color_left={} color_center={} color_right={}",
            self.state as u8, self.mode, self.color_left, self.color_center, self.color_right
        )
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::ModuleOptions;
    use crate::colour::{Colour, BLUE, GREEN, RED};

    #[test]
    fn options_line() {
        let opts = ModuleOptions {
            state: true,
            mode: 0,
            color_left: RED,
            color_center: GREEN,
            color_right: BLUE,
        };
        assert_eq!(
            opts.to_string(),
            "options tuxedo_keyboard state=1 mode=0 color_left=0xFF0000 color_center=0x00FF00 \
             color_right=0x0000FF"
        );
    }

    #[test]
    fn overwrites_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tuxedo_keyboard.conf");
        fs::write(&path, "options tuxedo_keyboard mode=5\n# old\n").unwrap();
        let opts = ModuleOptions {
            state: false,
            mode: 7,
            color_left: Colour(0x0a, 0x0b, 0x0c),
            color_center: Colour(0, 0, 0),
            color_right: Colour(0xff, 0xff, 0xff),
        };
        opts.write_to(&path).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "options tuxedo_keyboard state=0 mode=7 color_left=0x0A0B0C color_center=0x000000 \
             color_right=0xFFFFFF"
        );
    }
}
