//! Instagram Graph API gateway.
//!
//! Proxies a handful of Instagram/Facebook Graph API lookups and republishes
//! them as a simplified JSON API. A caller-supplied user access token is
//! resolved to a linked Instagram business account through the chained
//! pages → linkage → profile lookups, then one page of media is fetched and
//! projected into the gateway's response shape.

use std::sync::Arc;

pub mod clients;
pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod services;
pub mod validation;

use clients::graph::GraphTransport;
use config::Config;

/// Shared application state.
///
/// Handlers see the transport as a trait object; tests substitute a
/// scripted double.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub graph: Arc<dyn GraphTransport>,
}

impl AppState {
    pub fn new(config: Config, graph: Arc<dyn GraphTransport>) -> Self {
        Self {
            config: Arc::new(config),
            graph,
        }
    }
}
