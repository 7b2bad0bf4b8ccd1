//! Person Sample Application Entry Point
//!
//! Replays the functor and lens walkthrough on the configured person
//! fixture, logging every intermediate result.

use functors_lenses::optics::{PathLens, view};
use person::demo;
use person::fixture;
use person::{SampleConfig, SampleError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), SampleError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,person=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Person Sample Application...");

    let config = SampleConfig::from_env()?;
    tracing::info!(
        fixture = ?config.fixture_path,
        manager_path = %config.manager_path,
        friend_index = config.friend_index,
        "Configuration loaded"
    );

    let person = fixture::load(&config)?;

    // Functors
    tracing::info!(name = %demo::shout("Bobo").value(), "Identity map");
    tracing::info!(name = %demo::not_my_name("Bobo"), "Identity chain");
    tracing::info!(result = demo::overridden(10), "Overridden map");

    // Record primitives
    let (name, with_age) = demo::name_and_age("Bobo", 25);
    tracing::info!(name = ?name, record = %with_age, "prop / assoc");

    // Key lens
    let (first_name, renamed) = demo::rename(&person, "Bobo Jr.");
    tracing::info!(first_name = ?first_name, "View firstName");
    tracing::info!(original = %person, updated = %renamed, "Set firstName");

    // Nested update, by hand and through a path lens
    let manager = PathLens::new(config.manager_path.clone());
    let updated = demo::nested_update(&person, &manager, &config.manager_last_name);
    tracing::info!(
        updated = ?view(&manager, &updated),
        original = ?view(&manager, &person),
        "Nested update"
    );

    // Index lens
    match demo::friend(&person, config.friend_index) {
        Some(friend) => {
            tracing::info!(index = config.friend_index, friend = %friend, "View friend");
        }
        None => tracing::warn!(index = config.friend_index, "No friend at index"),
    }

    tracing::info!("Person Sample Application finished");
    Ok(())
}
