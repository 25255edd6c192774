use crate::demo::{run_demo, run_score, DemoArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use el_matador::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "El Matador",
    about = "Score financial health from the command line or serve the scoring API",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a financial profile stored as JSON
    Score(ScoreArgs),
    /// Score the built-in reference households
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve_without_subcommand() {
        let cli = Cli::try_parse_from(["el-matador-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn score_accepts_profile_and_flags() {
        let cli = Cli::try_parse_from([
            "el-matador-api",
            "score",
            "--profile",
            "profile.json",
            "--as-of",
            "2025-01-15",
            "--insights",
            "--json",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Score(args)) => {
                assert!(args.insights);
                assert!(args.json);
                assert!(args.expenses_csv.is_none());
                assert_eq!(args.as_of.map(|d| d.to_string()).as_deref(), Some("2025-01-15"));
            }
            other => panic!("expected score command, got {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(Cli::try_parse_from(["el-matador-api", "demo", "--as-of", "Jan 5"]).is_err());
    }
}
