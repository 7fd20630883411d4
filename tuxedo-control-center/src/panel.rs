use std::fmt;
use std::ops::ControlFlow;
use std::path::PathBuf;

use log::{debug, error, info, warn};
use tuxedo_platform::colour::Colour;
use tuxedo_platform::keyboard::Zone;
use tuxedo_platform::mode::KeyboardMode;
use tuxedo_platform::modprobe::{ModuleOptions, MODPROBE_CONF};

use crate::backend::KeyboardBackend;
use crate::error::{Error, Result};

const SAVE_LABEL: &str = "Save";
const SAVE_NEED_ROOT: &str = "Need to be run as root";

/// Colour picker state, held in the 16 bit per channel form colour widgets use
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ColourPicker {
    current: Option<(u16, u16, u16)>,
    previous: Option<(u16, u16, u16)>,
}

impl ColourPicker {
    pub fn colour(&self) -> Option<Colour> {
        self.current.map(|(r, g, b)| Colour::from_rgb16(r, g, b))
    }

    pub fn previous_colour(&self) -> Option<Colour> {
        self.previous.map(|(r, g, b)| Colour::from_rgb16(r, g, b))
    }

    /// Sets current and previous together, as when the zone changes
    fn reset(&mut self, colour: Option<Colour>) {
        self.current = colour.map(|c| c.to_rgb16());
        self.previous = self.current;
    }

    fn set_current(&mut self, colour: Colour) {
        self.current = Some(colour.to_rgb16());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveButton {
    pub sensitive: bool,
    pub label: &'static str,
}

impl SaveButton {
    fn new(can_save: bool) -> Self {
        if can_save {
            Self {
                sensitive: true,
                label: SAVE_LABEL,
            }
        } else {
            Self {
                sensitive: false,
                label: SAVE_NEED_ROOT,
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelEvent {
    ZoneChanged(Zone),
    ColourChanged(Colour),
    ModeChanged(u8),
    /// Percent, `0.0..=100.0`
    BrightnessChanged(f64),
    StateToggled,
    SavePressed,
    WindowClosed,
}

pub struct Panel<B: KeyboardBackend> {
    backend: B,
    brightness: Option<f64>,
    zone: Zone,
    picker: ColourPicker,
    mode: Option<u8>,
    state: Option<bool>,
    save: SaveButton,
    conf_path: PathBuf,
}

impl<B: KeyboardBackend> Panel<B> {
    /// Reads everything the backend offers. Unavailable values leave the
    /// widget unset.
    pub fn new(backend: B, can_save: bool, conf_path: Option<PathBuf>) -> Result<Self> {
        let zone = backend
            .zones()
            .first()
            .copied()
            .ok_or(Error::NotPresent("zone"))?;

        let mut panel = Self {
            brightness: backend.brightness_percent()?.map(f64::from),
            mode: backend.mode()?,
            state: backend.state()?,
            zone,
            picker: ColourPicker::default(),
            save: SaveButton::new(can_save),
            conf_path: conf_path.unwrap_or_else(|| PathBuf::from(MODPROBE_CONF)),
            backend,
        };
        panel.load_zone_colour()?;
        if !can_save {
            warn!("Not running as root, saving is disabled");
        }
        Ok(panel)
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn brightness(&self) -> Option<f64> {
        self.brightness
    }

    pub fn zone(&self) -> Zone {
        self.zone
    }

    pub fn picker(&self) -> &ColourPicker {
        &self.picker
    }

    pub fn mode(&self) -> Option<u8> {
        self.mode
    }

    pub fn state(&self) -> Option<bool> {
        self.state
    }

    pub fn save_button(&self) -> &SaveButton {
        &self.save
    }

    fn load_zone_colour(&mut self) -> Result<()> {
        let colour = self.backend.zone_colour(self.zone)?;
        self.picker.reset(colour);
        Ok(())
    }

    pub fn handle(&mut self, event: PanelEvent) -> Result<ControlFlow<()>> {
        debug!("Panel event: {event:?}");
        match event {
            PanelEvent::ZoneChanged(zone) => {
                if !self.backend.zones().contains(&zone) {
                    return Err(Error::ZoneNotAvailable(zone));
                }
                self.zone = zone;
                self.load_zone_colour()?;
            }
            PanelEvent::ColourChanged(colour) => {
                self.backend.set_zone_colour(self.zone, colour)?;
                self.picker.set_current(colour);
                // Colour only shows in the custom effect
                let custom = u8::from(KeyboardMode::Custom);
                if self.backend.mode()? != Some(custom) {
                    self.backend.set_mode(custom)?;
                }
                self.mode = Some(custom);
            }
            PanelEvent::ModeChanged(mode) => {
                if KeyboardMode::try_from(mode).is_err() {
                    warn!("Ignoring out of range mode {mode}");
                    return Ok(ControlFlow::Continue(()));
                }
                self.backend.set_mode(mode)?;
                self.mode = Some(mode);
            }
            PanelEvent::BrightnessChanged(percent) => {
                let percent = if percent.is_nan() {
                    0.0
                } else {
                    percent.clamp(0.0, 100.0)
                };
                self.brightness = Some(percent);
                self.backend.set_brightness_percent(percent)?;
            }
            PanelEvent::StateToggled => {
                let on = self
                    .backend
                    .state()?
                    .ok_or(Error::NotPresent("state"))?;
                self.backend.set_state(!on)?;
                self.state = Some(!on);
            }
            PanelEvent::SavePressed => {
                if !self.save.sensitive {
                    warn!("Save is disabled: {}", self.save.label);
                    return Ok(ControlFlow::Continue(()));
                }
                self.save()?;
            }
            PanelEvent::WindowClosed => return Ok(ControlFlow::Break(())),
        }
        Ok(ControlFlow::Continue(()))
    }

    fn save(&self) -> Result<()> {
        let colour = |zone: Zone| -> Result<Colour> {
            self.backend
                .zone_colour(zone)?
                .ok_or(Error::NotPresent(zone_what(zone)))
        };
        let options = ModuleOptions {
            state: self
                .backend
                .state()?
                .ok_or(Error::NotPresent("state"))?,
            mode: self.mode.ok_or(Error::NotPresent("mode"))?,
            color_left: colour(Zone::Left)?,
            color_center: colour(Zone::Center)?,
            color_right: colour(Zone::Right)?,
        };
        options.write_to(&self.conf_path)?;
        info!("Saved module options to {}", self.conf_path.display());
        Ok(())
    }

    /// Dispatches events until `WindowClosed` or the source runs dry. Errors
    /// from a single event are logged and the loop carries on.
    pub fn run<I, F>(&mut self, events: I, mut on_update: F)
    where
        I: IntoIterator<Item = PanelEvent>,
        F: FnMut(&Self),
    {
        for event in events {
            match self.handle(event) {
                Ok(ControlFlow::Break(())) => return,
                Ok(ControlFlow::Continue(())) => {}
                Err(err) => error!("{event:?} failed: {err}"),
            }
            on_update(self);
        }
    }
}

fn zone_what(zone: Zone) -> &'static str {
    match zone {
        Zone::Left => "left colour",
        Zone::Center => "center colour",
        Zone::Right => "right colour",
        Zone::Extra => "extra colour",
    }
}

fn unset<T: fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

impl<B: KeyboardBackend> fmt::Display for Panel<B> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let state = self.state.map(|on| if on { "on" } else { "off" });
        let mode = self.mode.map(|m| match KeyboardMode::try_from(m) {
            Ok(mode) => format!("{m} ({})", mode.name()),
            Err(_) => m.to_string(),
        });
        let zones: Vec<&str> = self.backend.zones().iter().map(|z| z.name()).collect();
        writeln!(f, "State:      {}", unset(state))?;
        writeln!(
            f,
            "Brightness: {}",
            unset(self.brightness.map(|b| format!("{b:.0}%")))
        )?;
        writeln!(f, "Mode:       {}", unset(mode))?;
        writeln!(f, "Zone:       {} [{}]", self.zone, zones.join(", "))?;
        writeln!(f, "Colour:     {}", unset(self.picker.colour()))?;
        write!(
            f,
            "Save:       {}{}",
            self.save.label,
            if self.save.sensitive { "" } else { " (disabled)" }
        )
    }
}
