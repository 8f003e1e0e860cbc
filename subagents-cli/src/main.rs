use clap::Parser;
use subagents_cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let exit_code = subagents_cli::run(cli).await;
    std::process::exit(exit_code);
}
