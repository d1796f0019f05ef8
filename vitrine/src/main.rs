mod demo;
mod error;
mod runtime;
mod scenario;

use std::fs::File;
use std::path::PathBuf;

use log::info;
use simplelog::{
    ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger,
};

use crate::error::SiteError;
use crate::runtime::Runtime;
use crate::scenario::Scenario;

fn init_logging() -> Result<(), SiteError> {
    let log_file = File::create("vitrine.log").map_err(SiteError::LogFile)?;
    CombinedLogger::init(vec![
        TermLogger::new(
            LevelFilter::Info,
            Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ),
        WriteLogger::new(LevelFilter::Debug, Config::default(), log_file),
    ])?;
    Ok(())
}

async fn run() -> Result<(), SiteError> {
    init_logging()?;

    let (mut runtime, actions) = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => {
            info!("Loading scenario {}", path.display());
            let scenario = Scenario::load(&path)?;
            let runtime = Runtime::new(scenario.document(), scenario.carousel_configs());
            (runtime, scenario.actions)
        }
        None => {
            info!("No scenario given, running the built-in demo page");
            let runtime = Runtime::new(demo::page(), carousel::CarouselConfig::site_defaults());
            (runtime, demo::actions())
        }
    };

    runtime.run(&actions).await;

    let viewport = runtime.document().viewport();
    info!(
        "Finished {} actions on {} carousels ({}x{} viewport)",
        actions.len(),
        runtime.registry().len(),
        viewport.width,
        viewport.height
    );

    for entry in runtime.report() {
        let active = entry
            .active
            .map(|i| (i + 1).to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "#{:<22} active {}/{}  scroll {:.0}px",
            entry.container_id, active, entry.item_count, entry.scroll_left
        );
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
