use std::sync::Arc;

use admin_file_storage::{
    adapters::{
        command::{Command, USAGE},
        confirmer::{AssumeYes, ConsoleConfirmer},
        controllers::{
            home_controller::HomeController, search_controller::SearchController,
            user_controller::UserController,
        },
        screen::ScreenOutput,
        state::AppState,
    },
    domain::config::client::ClientConfig,
    services,
};
use tracing_subscriber::EnvFilter;

async fn dispatch(state: &AppState, command: Command) -> ScreenOutput {
    match command {
        Command::Home => HomeController::home(state),
        Command::Users => UserController::list_users(state).await,
        Command::Show { user_id, file } => UserController::show_user(state, user_id, file).await,
        Command::Delete {
            user_id,
            assume_yes,
        } => {
            if assume_yes {
                UserController::delete_user(state, user_id, &AssumeYes).await
            } else {
                UserController::delete_user(state, user_id, &ConsoleConfirmer).await
            }
        }
        Command::Update {
            user_id,
            assignments,
        } => UserController::update_user(state, user_id, &assignments).await,
        Command::SearchUser { query, select } => {
            SearchController::search_users(state, &query, select).await
        }
        Command::SearchFile { query } => SearchController::search_files(state, &query).await,
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = match Command::parse(&args) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    let config = ClientConfig::from_env().expect("ERROR: failed to load client configuration");
    tracing::info!("Using API at {}", config.base_url);

    let session = Arc::new(config.session());
    let api = services::create_api_client(&config, session.clone())
        .expect("ERROR: failed to build HTTP client");

    let state = AppState { session, api };

    let output = dispatch(&state, command).await;
    print!("{}", output);

    if output.is_error() {
        std::process::exit(1);
    }
}
