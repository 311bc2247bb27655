use clap::Command;

pub const SELFCHECK_CMD: &str = "selfcheck";

pub fn create_selfcheck_cli() -> Command {
    Command::new(SELFCHECK_CMD)
        .about("Run the built-in sanity scenarios against every detector.")
}
