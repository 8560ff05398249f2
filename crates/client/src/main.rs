//! Demo client entry point.
//!
//! Runs one sync cycle against canned fixture payloads and prints the
//! resulting profile generation.

mod config;
mod fixtures;

use anyhow::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use config::ClientConfig;
use pogo_sync::SyncController;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();

    setup_logging();

    let controller = SyncController::new(fixtures::demo_dispatcher()?);
    controller.set_location(config.latitude, config.longitude, config.altitude);

    let Some(state) = controller.profile(config.force_refresh).await else {
        anyhow::bail!("no profile available");
    };

    println!("{}", serde_json::to_string_pretty(&state.profile)?);

    println!("\npokemon ({}):", state.pokebank.len());
    for pokemon in state.pokebank.iter() {
        println!("  {} cp={}", pokemon.species, pokemon.cp);
    }

    println!("items ({} stacks, {} total):", state.bag.len(), state.bag.total_items());
    for item in state.bag.iter() {
        println!("  {} x{}", item.id, item.count);
    }

    println!("candy:");
    for (family, count) in state.candyjar.iter() {
        println!("  {family} x{count}");
    }

    Ok(())
}

/// Stderr logging with env-filter control, INFO by default.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
