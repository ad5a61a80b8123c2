use crate::demo::{run_demo, run_score, DemoArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use esg_analyzer::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "ESG Report Analyzer",
    about = "Score sustainability report metrics and serve the ESG portfolio API",
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
    /// Score a metrics record or raw extraction output from disk
    Score(ScoreArgs),
    /// Print a scoring report and portfolio comparison for sample reports
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
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["esg-analyzer-api"]).expect("parses without args");
        assert!(cli.command.is_none());
    }

    #[test]
    fn score_accepts_json_flag() {
        let cli = Cli::try_parse_from([
            "esg-analyzer-api",
            "score",
            "--metrics",
            "report.json",
            "--json",
        ])
        .expect("score args parse");

        match cli.command {
            Some(Command::Score(args)) => {
                assert!(args.json);
                assert_eq!(args.metrics, std::path::PathBuf::from("report.json"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
