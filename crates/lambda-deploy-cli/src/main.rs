//! lambda-deploy CLI tool.

use clap::Parser;
use clap::builder::NonEmptyStringValueParser;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "lambda-deploy")]
#[command(about = "Zip a function project and push it to AWS Lambda", long_about = None)]
struct Cli {
    /// Path to the function's base directory, containing deploy.json and src/
    #[arg(long, env = "LAMBDA_DEPLOY_DIRECTORY", value_parser = NonEmptyStringValueParser::new())]
    directory: String,

    /// Environment to deploy to: dev, qa or prod
    #[arg(long, env = "LAMBDA_DEPLOY_ENV", value_parser = NonEmptyStringValueParser::new())]
    env: String,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    // Every stage error ends up here; the artifact guard has already run.
    match commands::deploy::deploy(&cli.directory, &cli.env).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
