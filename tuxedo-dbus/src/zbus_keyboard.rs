use zbus::proxy;

#[proxy(
    interface = "org.tuxedo.keyboard.state",
    default_service = "org.tuxedo.keyboard",
    default_path = "/org/tuxedo/keyboard"
)]
pub trait State {
    #[zbus(name = "getState")]
    fn get_state(&self) -> zbus::Result<bool>;

    #[zbus(name = "setState")]
    fn set_state(&self, state: bool) -> zbus::Result<()>;
}

#[proxy(
    interface = "org.tuxedo.keyboard.brightness",
    default_service = "org.tuxedo.keyboard",
    default_path = "/org/tuxedo/keyboard"
)]
pub trait Brightness {
    /// Device range, `0..=255`
    #[zbus(name = "getBrightness")]
    fn get_brightness(&self) -> zbus::Result<u8>;

    #[zbus(name = "setBrightness")]
    fn set_brightness(&self, brightness: u8) -> zbus::Result<()>;
}

#[proxy(
    interface = "org.tuxedo.keyboard.mode",
    default_service = "org.tuxedo.keyboard",
    default_path = "/org/tuxedo/keyboard"
)]
pub trait Mode {
    #[zbus(name = "getMode")]
    fn get_mode(&self) -> zbus::Result<u8>;

    #[zbus(name = "setMode")]
    fn set_mode(&self, mode: u8) -> zbus::Result<()>;
}

#[proxy(
    interface = "org.tuxedo.keyboard.left_color",
    default_service = "org.tuxedo.keyboard",
    default_path = "/org/tuxedo/keyboard"
)]
pub trait LeftColour {
    #[zbus(name = "getLeftColor")]
    fn get_colour(&self) -> zbus::Result<(u8, u8, u8)>;

    #[zbus(name = "setLeftColor")]
    fn set_colour(&self, red: u8, green: u8, blue: u8) -> zbus::Result<()>;
}

#[proxy(
    interface = "org.tuxedo.keyboard.center_color",
    default_service = "org.tuxedo.keyboard",
    default_path = "/org/tuxedo/keyboard"
)]
pub trait CenterColour {
    #[zbus(name = "getCenterColor")]
    fn get_colour(&self) -> zbus::Result<(u8, u8, u8)>;

    #[zbus(name = "setCenterColor")]
    fn set_colour(&self, red: u8, green: u8, blue: u8) -> zbus::Result<()>;
}

#[proxy(
    interface = "org.tuxedo.keyboard.right_color",
    default_service = "org.tuxedo.keyboard",
    default_path = "/org/tuxedo/keyboard"
)]
pub trait RightColour {
    #[zbus(name = "getRightColor")]
    fn get_colour(&self) -> zbus::Result<(u8, u8, u8)>;

    #[zbus(name = "setRightColor")]
    fn set_colour(&self, red: u8, green: u8, blue: u8) -> zbus::Result<()>;
}
