//! Store locator entry-point: loads settings, wires adapters and serves the
//! REST API.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

mod server;

use std::io;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};
use url::Url;

use server::{LookupConfig, ServerConfig, create_server};
use store_locator::config::StoreLocatorSettings;
use store_locator::inbound::http::health::HealthState;
use store_locator::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};

fn parse_url(value: &str, name: &str) -> io::Result<Url> {
    Url::parse(value).map_err(|err| io::Error::other(format!("invalid {name} URL {value}: {err}")))
}

fn lookup_config(settings: &StoreLocatorSettings) -> io::Result<LookupConfig> {
    let lookup = LookupConfig::new(
        parse_url(settings.viacep_url(), "ViaCEP")?,
        parse_url(settings.opencage_url(), "OpenCage")?,
        settings.lookup_timeout(),
    );
    Ok(match settings.opencage_api_key() {
        Some(key) => lookup.with_opencage_api_key(key),
        None => lookup,
    })
}

async fn connect_database(database_url: &str, max_connections: u32) -> io::Result<DbPool> {
    run_pending_migrations(database_url)
        .await
        .map_err(io::Error::other)?;
    let pool_config = PoolConfig::new(database_url)
        .with_max_size(max_connections)
        .with_min_idle(Some(max_connections.min(2)));
    DbPool::new(pool_config)
        .await
        .map_err(|err| io::Error::other(format!("create database pool: {err}")))
}

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = StoreLocatorSettings::load()
        .map_err(|err| io::Error::other(format!("load settings: {err}")))?;

    let nearby_radius_km = settings
        .nearby_radius_km()
        .map_err(|err| io::Error::other(format!("invalid nearby_radius_km setting: {err}")))?;
    let mut config = ServerConfig::new(settings.bind_addr(), lookup_config(&settings)?)
        .with_nearby_radius_km(nearby_radius_km);
    if let Some(database_url) = settings.database_url.as_deref() {
        config = config.with_db_pool(
            connect_database(database_url, settings.db_max_connections()).await?,
        );
    }

    info!(addr = %settings.bind_addr(), "starting store locator");
    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}
