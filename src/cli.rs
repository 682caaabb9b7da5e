use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "lol-task",
    about = concat!("lol task v", env!("CARGO_PKG_VERSION"), " - a tiny to-do list for your terminal"),
    version
)]
pub struct Cli {
    /// Keep tasks, settings, and the log somewhere other than ~/.lol_task
    #[arg(long, env = "LOL_TASK_DIR", value_name = "PATH")]
    pub data_dir: Option<PathBuf>,
}
