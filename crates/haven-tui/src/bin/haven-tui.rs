use std::io::IsTerminal;

use haven_tui::app::{App, AppOptions};
use haven_tui::config::{process_env, HavenConfig};
use haven_tui::logging::Logger;
use haven_tui::runtime;
use haven_tui::telephony::LoggedDialer;

const SNAPSHOT_WIDTH: usize = 80;
const SNAPSHOT_HEIGHT: usize = 24;

fn main() {
    if let Err(err) = run() {
        eprintln!("haven-tui: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let (config, source) = HavenConfig::load(&process_env).map_err(|err| err.to_string())?;
    let logger = Logger::new(&config.log.to_logging_config());
    logger.info_with(
        "starting",
        &[
            ("config", source.describe().as_str()),
            ("theme", config.theme.as_str()),
        ],
    );

    let options = AppOptions::from_config(&config, logger.clone()).map_err(|err| err.to_string())?;
    let mut app = App::new(options);

    let interactive = std::io::stdin().is_terminal() && std::io::stdout().is_terminal();
    if interactive {
        let mut dialer = LoggedDialer::new(&logger);
        runtime::run(&mut app, &mut dialer, &logger)?;
        logger.info("shutdown");
    } else {
        app.set_size(SNAPSHOT_WIDTH, SNAPSHOT_HEIGHT);
        println!("{}", app.render().snapshot());
    }
    Ok(())
}
