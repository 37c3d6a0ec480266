mod shell;

use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;

pub use shell::{HistoryMode, Input, LineReader, Painter, Session, ShellOptions};

#[derive(Parser)]
#[command(
    name = "schemascope",
    version,
    about = "Interactive explorer for GraphQL schema definitions",
    long_about = "Schemascope loads a GraphQL SDL file and opens a prompt where you can look up \
                  the fields of a type or the signature of a query or mutation by name. \
                  Use .types, .queries and .mutations to list what the schema declares."
)]
pub struct Cli {
    /// Path to the GraphQL schema definition file
    #[arg(value_name = "SCHEMA")]
    pub schema: PathBuf,

    /// Print output without bold/italic styling
    #[arg(long)]
    pub plain: bool,

    /// Also write logs to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// History file location. Defaults to ~/.schemascope/shell/history
    #[arg(long, value_name = "PATH", conflicts_with = "no_history")]
    pub history: Option<PathBuf>,

    /// Keep command history in memory only
    #[arg(long)]
    pub no_history: bool,
}

impl Cli {
    pub fn shell_options(&self) -> ShellOptions {
        let painter = if self.plain || !std::io::stdout().is_terminal() {
            Painter::plain()
        } else {
            Painter::styled()
        };

        let history = if self.no_history {
            HistoryMode::Memory
        } else if let Some(path) = &self.history {
            HistoryMode::File(path.clone())
        } else {
            HistoryMode::default_file()
        };

        ShellOptions {
            schema: self.schema.clone(),
            painter,
            history,
        }
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let _guard = schemascope_core::logging::init_logging("cli", cli.verbose);

    shell::run(cli.shell_options())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_path_is_required() {
        assert!(Cli::try_parse_from(["schemascope"]).is_err());
    }

    #[test]
    fn history_flags() {
        let cli = Cli::try_parse_from(["schemascope", "api.graphql", "--no-history"]).unwrap();
        assert!(matches!(cli.shell_options().history, HistoryMode::Memory));

        let cli =
            Cli::try_parse_from(["schemascope", "api.graphql", "--history", "/tmp/h"]).unwrap();
        match cli.shell_options().history {
            HistoryMode::File(path) => assert_eq!(path, PathBuf::from("/tmp/h")),
            HistoryMode::Memory => panic!("expected file history"),
        }

        assert!(
            Cli::try_parse_from([
                "schemascope",
                "api.graphql",
                "--history",
                "/tmp/h",
                "--no-history"
            ])
            .is_err()
        );
    }

    #[test]
    fn plain_flag_disables_styling() {
        let cli = Cli::try_parse_from(["schemascope", "api.graphql", "--plain"]).unwrap();
        assert!(!cli.shell_options().painter.is_styled());
        assert_eq!(cli.schema, PathBuf::from("api.graphql"));
    }
}
