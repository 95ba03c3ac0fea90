use std::sync::Arc;

use zbesh_delivery::{DeliveryError, ResendClient};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the config is behind `Arc` and the client shares its
/// connection pool.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Resend client used to relay contact submissions.
    pub mailer: ResendClient,
}

impl AppState {
    /// Build the state, constructing the Resend client from `config.resend`.
    pub fn new(config: ServerConfig) -> Result<Self, DeliveryError> {
        let mailer = ResendClient::new(config.resend.clone())?;
        Ok(Self {
            config: Arc::new(config),
            mailer,
        })
    }
}
