use std::sync::Arc;

use anyhow::Result;
use media_post_process::{
    actions::{Action, Toolchain},
    app::{self, Outcome},
    config::Config,
    gather::{self, ListOptions},
    ui::TerminalSession,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_cli()?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let files = gather::list_media_files(
        &config.dir,
        &ListOptions {
            recursive: config.recursive,
            exclude: config.exclude.clone(),
        },
    )?;
    let tools = Arc::new(Toolchain::from_config(&config));

    let announce = |action: Action| println!("\nSelected option: {}", action.label());
    match app::run(files, tools, TerminalSession::enter, announce)? {
        Outcome::NoMediaFiles => {
            println!("No media files found in {}.", config.dir.display());
        }
        Outcome::Quit => {}
        Outcome::NothingSelected => {
            println!("No files selected. Exiting...");
        }
        Outcome::Dispatched { batch, .. } => {
            let report = batch.wait();
            for (input, output) in &report.completed {
                println!("✔ {} -> {}", input.display(), output.display());
            }
            for (input, reason) in &report.failed {
                println!("✘ {}: {}", input.display(), reason);
            }
            println!(
                "{} done, {} failed.",
                report.completed.len(),
                report.failed.len()
            );
        }
    }

    Ok(())
}
