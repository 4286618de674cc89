use std::path::PathBuf;

use anyhow::{Context, Result};
use ribbon::{app::App, config::Config, logging};

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    logging::init_logging().context("initialize logging failed")?;
    let config = Config::load().context("load configuration failed")?;
    let file_paths = std::env::args().skip(1).map(PathBuf::from).collect::<Vec<_>>();
    let mut app = App::new(config);
    app.open_files(file_paths).context("open files failed")?;
    app.run().context("run app failed")
}
