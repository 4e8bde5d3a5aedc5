use dotenv::dotenv;
use tokio::io::BufReader;

use notes_frontend::api::NotesClient;
use notes_frontend::config::Config;
use notes_frontend::session;
use notes_frontend::state::AppState;

#[tokio::main]
async fn main() {
    dotenv().ok();
    env_logger::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };

    let client = match NotesClient::from_config(&config) {
        Ok(client) => client,
        Err(e) => {
            log::error!("Failed to build HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    log::info!("Using notes API at {}", client.base_url());
    if let Some(timeout) = config.request_timeout {
        log::info!("Request timeout: {}s", timeout.as_secs());
    }

    let mut state = AppState::new(client);
    state.refresh_notes().await;

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    if let Err(e) = session::run(&mut state, stdin, &mut stdout).await {
        log::error!("Session aborted: {}", e);
        std::process::exit(1);
    }
}
