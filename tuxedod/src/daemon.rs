use std::error::Error;
use std::io::Write;
use std::process::ExitCode;

use ::zbus::Connection;
use log::{error, info};
use tokio::signal::unix::{signal, SignalKind};
use tuxedo_platform::keyboard::{KeyboardAttrs, TuxedoKeyboard};
use tuxedod::config::Config;
use tuxedod::ctrl_keyboard::CtrlKeyboard;
use tuxedod::{check_module, ZbusRun, DBUS_NAME, DBUS_PATH};

#[tokio::main]
async fn main() -> ExitCode {
    let mut logger = env_logger::Builder::new();
    logger
        .parse_default_env()
        .target(env_logger::Target::Stdout)
        .format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args()))
        .init();

    info!("        daemon v{}", tuxedod::VERSION);
    info!("tuxedo-platform v{}", tuxedo_platform::VERSION);

    let config = Config::load();
    if let Err(err) = check_module(&config) {
        error!("{}", err);
        eprintln!("Error: {}.", err);
        return ExitCode::FAILURE;
    }

    match start_daemon(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

/// Serve the keyboard interfaces until SIGINT or SIGTERM
async fn start_daemon(config: Config) -> Result<(), Box<dyn Error>> {
    let attrs = if config.discover_device {
        KeyboardAttrs::discover().unwrap_or_else(|err| {
            info!("{}, using {:?}", err, config.sysfs_dir);
            KeyboardAttrs::from_dir(&config.sysfs_dir)
        })
    } else {
        KeyboardAttrs::from_dir(&config.sysfs_dir)
    };
    let keyboard = TuxedoKeyboard::new(attrs);
    if keyboard.has_extra_zone().unwrap_or(false) {
        info!("Keyboard has an extra zone, it is not exposed over dbus");
    }

    let mut connection = Connection::system().await?;
    CtrlKeyboard::new(keyboard)
        .add_to_server(&mut connection)
        .await;

    // Request dbus name after all interfaces are in place
    connection.request_name(DBUS_NAME).await?;
    info!("Serving {} at {}", DBUS_NAME, DBUS_PATH);

    let mut terminate = signal(SignalKind::terminate())?;
    tokio::select! {
        _ = tokio::signal::ctrl_c() => info!("Got SIGINT"),
        _ = terminate.recv() => info!("Got SIGTERM"),
    }
    info!("Shutting down");
    Ok(())
}
