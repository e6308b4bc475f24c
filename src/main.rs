use anyhow::Context;
use clap::Parser;
use school::cli::Cli;
use school::settings::Settings;
use school::{logging, menu};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = cli.apply(Settings::load(cli.config.as_deref())?);

    let _logger = logging::init_logging(&settings.log_level, settings.log_dir.as_deref())?;
    log::info!(
        "event=app_start version={} validation={:?}",
        env!("CARGO_PKG_VERSION"),
        settings.validation
    );

    let mut manager = school::create_manager(&settings, cli.roster.as_deref())?;

    menu::run_console(&mut manager, &settings.export_path).context("console session failed")?;

    log::info!("event=app_exit students={}", manager.num_students());
    Ok(())
}
