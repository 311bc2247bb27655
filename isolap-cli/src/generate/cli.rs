use clap::{Arg, Command, arg, value_parser};

pub const GENERATE_CMD: &str = "generate";

pub fn create_generate_cli() -> Command {
    Command::new(GENERATE_CMD)
        .about("Write a CSV file of random intervals.")
        .arg_required_else_help(true)
        .arg(arg!(-o --output <CSV> "Where to write the intervals (.gz to compress)").required(true))
        .arg(
            arg!(-n --count <COUNT> "Number of intervals [default: 1000000]")
                .required(false)
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("upper-bound")
                .long("upper-bound")
                .value_name("BOUND")
                .value_parser(value_parser!(i64))
                .help("Endpoints are drawn from [0, BOUND) [default: 2^32]"),
        )
        .arg(
            Arg::new("max-span")
                .long("max-span")
                .value_name("SPAN")
                .value_parser(value_parser!(i64))
                .help("Longest span of an interval [default: 2^20]"),
        )
        .arg(
            arg!(--seed <SEED> "Seed for reproducible output")
                .required(false)
                .value_parser(value_parser!(u64)),
        )
}
