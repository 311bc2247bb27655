use clap::{Arg, ArgAction, Command, arg};

use isolap_detect::consts::DEFAULT_DETECTOR;

pub const DETECT_CMD: &str = "detect";

pub fn create_detect_cli() -> Command {
    Command::new(DETECT_CMD)
        .about("Report an interval that overlaps no other interval in a CSV file.")
        .arg_required_else_help(true)
        .arg(arg!(-i --input <CSV> "Two-column CSV file with a header row (.gz ok, '-' for stdin)").required(true))
        .arg(
            arg!(-d --detector <DETECTOR> "Which detector to use (naive, sweep or bsearch)")
                .required(false)
                .default_value(DEFAULT_DETECTOR),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Print the result as JSON"),
        )
}
