use clap::{Command, arg, value_parser};

pub const COMPLEXITY_CMD: &str = "complexity";

pub fn create_complexity_cli() -> Command {
    Command::new(COMPLEXITY_CMD)
        .about("Write the n² and 2·n·ln(n) reference curves to a CSV file.")
        .arg_required_else_help(true)
        .arg(arg!(-o --output <CSV> "Where to write the curves").required(true))
        .arg(
            arg!(--"max-n" <N> "Curves cover n in [1, N)")
                .required(false)
                .value_parser(value_parser!(u64))
                .default_value("100000"),
        )
        .arg(
            arg!(--step <STEP> "Distance between consecutive n")
                .required(false)
                .value_parser(value_parser!(u64))
                .default_value("1"),
        )
}
