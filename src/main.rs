use clap::Parser;
use hello_greeter::utils::logger;
use hello_greeter::{run, CliConfig, Greeter};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    if let Err(e) = logger::init_cli_logger(config.verbose) {
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    tracing::info!("Starting hello-greeter");
    tracing::debug!("CLI config: {:?}", config);

    let greeter = Greeter::new();
    let stdout = std::io::stdout();

    if let Err(e) = run(&greeter, stdout.lock()) {
        tracing::error!("❌ Failed to print greeting: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    tracing::info!("✅ Greeting printed");
}
