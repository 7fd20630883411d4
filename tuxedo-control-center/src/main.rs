use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use gumdrop::Options;
use log::{error, info, LevelFilter};
use nix::unistd::Uid;
use tuxedo_control_center::cli_options::CliStart;
use tuxedo_control_center::command::HELP;
use tuxedo_control_center::error::Result;
use tuxedo_control_center::{
    print_versions, DbusBackend, KeyboardBackend, Panel, PanelEvent, SysfsBackend,
};
use tuxedo_platform::keyboard::{KeyboardAttrs, TuxedoKeyboard};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let parsed = match CliStart::parse_args_default(&args) {
        Ok(p) => p,
        Err(err) => {
            println!("Error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    if parsed.help {
        println!("{}", CliStart::usage());
        return ExitCode::SUCCESS;
    }
    if parsed.version {
        print_versions();
        return ExitCode::SUCCESS;
    }

    let mut logger = env_logger::Builder::new();
    logger
        .target(env_logger::Target::Stdout)
        .format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()))
        .filter(None, LevelFilter::Info)
        .init();

    let can_save = Uid::effective().is_root();
    let conf_path = parsed.conf_path.as_ref().map(PathBuf::from);

    let res = if parsed.direct {
        let attrs = match &parsed.sysfs_dir {
            Some(dir) => KeyboardAttrs::from_dir(dir),
            None => KeyboardAttrs::discover().unwrap_or_else(|err| {
                info!("{}, using the default attribute directory", err);
                KeyboardAttrs::default()
            }),
        };
        run_panel(SysfsBackend::new(TuxedoKeyboard::new(attrs)), can_save, conf_path)
    } else {
        match DbusBackend::new() {
            Ok(backend) => run_panel(backend, can_save, conf_path),
            Err(err) => {
                error!("Could not connect to tuxedod: {}", err);
                return ExitCode::FAILURE;
            }
        }
    };

    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

/// Feed stdin to the panel one command per line, end of input closes it
fn run_panel<B: KeyboardBackend>(
    backend: B,
    can_save: bool,
    conf_path: Option<PathBuf>,
) -> Result<()> {
    let mut panel = Panel::new(backend, can_save, conf_path)?;
    println!("{}\n{}", panel, HELP);

    let stdin = io::stdin();
    let events = stdin
        .lock()
        .lines()
        .map_while(|line| line.ok())
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| match line.parse::<PanelEvent>() {
            Ok(event) => Some(event),
            Err(err) => {
                error!("{}", err);
                println!("{}", HELP);
                None
            }
        });
    panel.run(events, |panel| println!("{}", panel));
    Ok(())
}
