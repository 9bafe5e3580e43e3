use std::fs::OpenOptions;

use anyhow::Context;
use fern::colors::ColoredLevelConfig;
use rankcompare_core::random::{DeterministicRandomProvider, RandomProvider, TrueRandomProvider};
use strum::IntoEnumIterator;

use cases::{Case, CaseKind};
use checks::check_case;
use results::{HarnessResults, HarnessResultsBuilder};
use settings::HarnessSettings;

mod cases;
mod checks;
mod results;
mod settings;

fn main() -> anyhow::Result<()> {
    setup_logging()?;

    // Usage: rankcompare-testing [seed] [rounds]
    let mut args = std::env::args().skip(1);
    let seed = match args.next() {
        Some(seed) => seed
            .parse()
            .with_context(|| format!("invalid seed {:?}", seed))?,
        None => TrueRandomProvider::new().random_u64(),
    };
    let mut settings = HarnessSettings::default();
    if let Some(rounds) = args.next() {
        settings.rounds = rounds
            .parse()
            .with_context(|| format!("invalid round count {:?}", rounds))?;
    }

    let results = run(seed, settings)?;
    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}

fn setup_logging() -> anyhow::Result<()> {
    let colors = ColoredLevelConfig::new()
        .debug(fern::colors::Color::Cyan)
        .info(fern::colors::Color::Green)
        .warn(fern::colors::Color::Yellow)
        .error(fern::colors::Color::Red);

    let file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open("output.log")
        .context("could not open output.log")?;

    fern::Dispatch::new()
        .format(move |out, message, record| {
            let start_length = record.target().len();
            let max_len = 30;
            let (target, target_padding) = if start_length > max_len {
                (&record.target()[start_length - max_len..], "".to_string())
            } else {
                (record.target(), " ".repeat(max_len - start_length))
            };
            out.finish(format_args!(
                "[{}{}][{}] {}",
                target,
                target_padding,
                colors.color(record.level()),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .level_for("rankcompare_testing", log::LevelFilter::Debug)
        .chain(std::io::stdout())
        .chain(file)
        .apply()?;
    Ok(())
}

fn run(seed: u64, settings: HarnessSettings) -> anyhow::Result<HarnessResults> {
    log::info!("Seed: {}", seed);
    let random_provider = DeterministicRandomProvider::new(seed);
    let mut results = HarnessResultsBuilder::new();

    for round in 0..settings.rounds {
        for kind in CaseKind::iter() {
            let case = Case::generate(kind, &random_provider, &settings);
            check_case(&case, &mut results)
                .with_context(|| format!("round {} failed (seed {})", round, seed))?;
        }
        if (round + 1) % 10 == 0 {
            log::info!("Finished round {}/{}", round + 1, settings.rounds);
        }
    }

    let results = results.build(seed, settings);
    log::info!(
        "Checked {} cases, {} coefficients evaluated",
        results.cases_checked,
        results.coefficients_evaluated
    );
    Ok(results)
}
