//! Parley binary entry point.

use parley::agent::ConversationAgent;
use parley::config::ChatConfig;

#[tokio::main]
async fn main() {
    parley::logging::init_logging();

    let config = ChatConfig::from_env();
    let mut agent = match ConversationAgent::from_config(&config) {
        Ok(agent) => agent,
        Err(e) => {
            eprintln!("Error initializing chatbot: {e}");
            std::process::exit(1);
        }
    };

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    if let Err(e) = parley::cli::run_repl(&mut agent, stdin.lock(), &mut stdout).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
