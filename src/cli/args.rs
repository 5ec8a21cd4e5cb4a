//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use clap_complete::Shell;

/// Manage contacts stored in a local JSON file
#[derive(Parser, Debug)]
#[command(name = "contacts")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Operation to run: list, get, add, remove
    #[arg(short, long)]
    pub action: Option<String>,

    /// Contact id (get, remove)
    #[arg(short, long)]
    pub id: Option<String>,

    /// Contact name (add)
    #[arg(short, long)]
    pub name: Option<String>,

    /// Contact email (add)
    #[arg(short, long)]
    pub email: Option<String>,

    /// Contact phone (add)
    #[arg(short, long)]
    pub phone: Option<String>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Contact store file (overrides config and CONTACTS_STORE_PATH)
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub store: Option<PathBuf>,

    /// Debug level (repeat for more: -d, -dd, -ddd)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Print shell completions and exit
    #[arg(long = "completions", value_enum, value_name = "SHELL")]
    pub generator: Option<Shell>,

    /// Print the effective settings as TOML and exit
    #[arg(long)]
    pub show_config: bool,
}

/// Store operation selected with `--action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    Get,
    Add,
    Remove,
}

impl Action {
    /// Exact, lowercase match; anything else is not an action.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "list" => Some(Self::List),
            "get" => Some(Self::Get),
            "add" => Some(Self::Add),
            "remove" => Some(Self::Remove),
            _ => None,
        }
    }
}

impl Cli {
    /// The requested action, or `None` when missing or unknown.
    pub fn requested_action(&self) -> Option<Action> {
        self.action.as_deref().and_then(Action::parse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use rstest::rstest;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[rstest]
    #[case("list", Some(Action::List))]
    #[case("get", Some(Action::Get))]
    #[case("add", Some(Action::Add))]
    #[case("remove", Some(Action::Remove))]
    #[case("delete", None)]
    #[case("LIST", None)]
    #[case("", None)]
    fn given_action_string_when_parsing_then_matches_exactly(
        #[case] input: &str,
        #[case] expected: Option<Action>,
    ) {
        assert_eq!(Action::parse(input), expected);
    }

    #[test]
    fn given_short_flags_when_parsing_then_fills_add_fields() {
        let cli = Cli::try_parse_from([
            "contacts", "-a", "add", "-n", "Ada", "-e", "ada@x.com", "-p", "555-0100",
        ])
        .unwrap();

        assert_eq!(cli.requested_action(), Some(Action::Add));
        assert_eq!(cli.name.as_deref(), Some("Ada"));
        assert_eq!(cli.email.as_deref(), Some("ada@x.com"));
        assert_eq!(cli.phone.as_deref(), Some("555-0100"));
    }

    #[test]
    fn given_repeated_debug_flag_when_parsing_then_counts() {
        let cli = Cli::try_parse_from(["contacts", "-ddd", "--action", "list"]).unwrap();
        assert_eq!(cli.debug, 3);
    }
}
