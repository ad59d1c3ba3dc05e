use std::io;

use anyhow::Context;
use clap::Parser;

use sortviz::cli::Cli;
use sortviz::{dataset, headless, logging, ui};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.load_config()?;
    let settings = cli.resolve(&config);

    if settings.headless {
        logging::init_stderr(&config.logging);
    } else {
        logging::init_file(&config.logging, &config.log_path())?;
    }

    let seed = settings.seed.unwrap_or_else(dataset::random_seed);
    let data = dataset::shuffled(settings.count, seed);
    tracing::info!(
        algorithm = %settings.algorithm,
        count = settings.count,
        seed,
        "starting sort"
    );

    if settings.headless {
        let stdout = io::stdout();
        let summary = headless::run(
            settings.algorithm,
            data,
            seed,
            settings.format,
            &mut stdout.lock(),
        )
        .context("writing steps to stdout")?;
        tracing::info!(steps = summary.steps, sorted = summary.sorted, "sort finished");
        return Ok(());
    }

    ui::run(&settings, data)?;
    Ok(())
}
