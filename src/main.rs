use clap::Parser;
use intake::Screen;
use intake::core::config;
use intake::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "intake", about = "Terminal form intake and administration")]
struct Args {
    /// Screen to open on startup
    #[arg(short, long, value_enum)]
    screen: Option<Screen>,

    /// Override the data directory (default: ~/.intake)
    #[arg(long)]
    data_dir: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to intake.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("intake.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidData, e));
        }
    };
    let resolved = config::resolve(&config, args.screen, args.data_dir.as_deref());

    log::info!("Intake starting up on screen: {:?}", resolved.screen);

    tui::run(resolved)
}
