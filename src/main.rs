use std::fs::File;

use clap::Parser;
use lol_task::cli::Cli;
use lol_task::io::DataDir;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

fn main() {
    let cli = Cli::parse();

    let data_dir = match DataDir::resolve(cli.data_dir.as_deref()) {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };
    if let Err(e) = data_dir.ensure_exists() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    // Log to a file; the TUI owns stdout
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(data_dir.log_file()) {
        let _ = WriteLogger::init(LevelFilter::Info, log_config, log_file);
    }
    log::info!("lol task starting in {}", data_dir.root().display());

    if let Err(e) = lol_task::tui::run(&data_dir) {
        log::error!("fatal: {}", e);
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
