use clap::Parser;
use prompt_sweep::errors::ErrorHandler;
use prompt_sweep::structs::cli::Cli;
use prompt_sweep::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() {
    // Credentials may live in a .env file next to where the tool is run.
    let _ = dotenvy::dotenv();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    if let Err(error) = CommandRunner::new().run_command(cli.command).await {
        ErrorHandler::handle_error(&error);
        std::process::exit(1);
    }
}
