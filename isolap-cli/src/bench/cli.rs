use clap::{Arg, ArgAction, Command, arg, value_parser};

pub const BENCH_CMD: &str = "bench";

pub fn create_bench_cli() -> Command {
    Command::new(BENCH_CMD)
        .about("Time every detector on CSV files and random data, and check that they agree.")
        .arg(arg!(-c --config <TOML> "Bench settings file; flags below override it").required(false))
        .arg(
            Arg::new("input")
                .short('i')
                .long("input")
                .value_name("CSV")
                .action(ArgAction::Append)
                .help("CSV file to benchmark (repeatable)"),
        )
        .arg(
            arg!(-n --runs <RUNS> "Number of random datasets to run")
                .required(false)
                .value_parser(value_parser!(usize)),
        )
        .arg(
            arg!(--count <COUNT> "Intervals per random dataset")
                .required(false)
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("max-span")
                .long("max-span")
                .value_name("SPAN")
                .value_parser(value_parser!(i64))
                .help("Longest span of a random interval"),
        )
        .arg(
            arg!(--seed <SEED> "Seed for reproducible random datasets")
                .required(false)
                .value_parser(value_parser!(u64)),
        )
        .arg(
            arg!(-d --detectors <LIST> "Comma separated detectors to compare (naive,sweep,bsearch)")
                .required(false),
        )
        .arg(arg!(-r --report <CSV> "Write one timing row per detector call to this file").required(false))
}
