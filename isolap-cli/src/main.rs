mod bench;
mod complexity;
mod detect;
mod generate;
mod selfcheck;

use anyhow::Result;
use clap::Command;
use env_logger::Env;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "isolap";
    pub const DEFAULT_LOG_LEVEL: &str = "info";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Find an interval that doesn't overlap with any other interval in a set.")
        .subcommand_required(true)
        .subcommand(detect::cli::create_detect_cli())
        .subcommand(bench::cli::create_bench_cli())
        .subcommand(generate::cli::create_generate_cli())
        .subcommand(selfcheck::cli::create_selfcheck_cli())
        .subcommand(complexity::cli::create_complexity_cli())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or(consts::DEFAULT_LOG_LEVEL))
        .format_target(false)
        .format_timestamp(None)
        .init();

    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // DETECT
        //
        Some((detect::cli::DETECT_CMD, matches)) => {
            detect::handlers::run_detect(matches)?;
        }

        //
        // BENCH
        //
        Some((bench::cli::BENCH_CMD, matches)) => {
            bench::handlers::run_bench(matches)?;
        }

        //
        // GENERATE
        //
        Some((generate::cli::GENERATE_CMD, matches)) => {
            generate::handlers::run_generate(matches)?;
        }

        //
        // SELFCHECK
        //
        Some((selfcheck::cli::SELFCHECK_CMD, _)) => {
            selfcheck::handlers::run_selfcheck()?;
        }

        //
        // COMPLEXITY CURVES
        //
        Some((complexity::cli::COMPLEXITY_CMD, matches)) => {
            complexity::handlers::run_complexity(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
