mod bot;
mod commands;
mod config;
mod embeds;
mod error;
mod library;
mod player;
mod reactions;
mod state;
mod storage;

use songbird::Songbird;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::Config;
use crate::error::AppError;
use crate::library::SongLibrary;
use crate::player::Player;
use crate::reactions::ReactionPolicy;
use crate::state::AppState;
use crate::storage::StorageClient;

fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    // The sentry guard must outlive the async runtime so events buffered by
    // worker threads are flushed on shutdown.
    let _sentry = sentry::init((
        config.sentry_dsn.clone(),
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    ));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(config))
}

async fn run(config: Config) -> Result<(), AppError> {
    let storage = StorageClient::new(
        reqwest::Client::new(),
        config.supabase_url.clone(),
        config.supabase_key.clone(),
    );
    let icons = storage::icons::publish_icons(&storage, &config.icons_dir).await?;

    let library = SongLibrary::scan(&config.music_dir);
    tracing::info!(
        "Loaded {} songs from {}",
        library.len(),
        config.music_dir.display()
    );

    let manager = Songbird::serenity();
    let state = AppState::new(
        library,
        icons,
        ReactionPolicy::default(),
        Player::new(manager.clone()),
    );

    bot::start::start_bot(&config, state, manager).await
}
