//! HTTP server configuration object.

use std::net::SocketAddr;

use camply_backend::inbound::http::state::HttpStatePorts;

/// Everything [`super::create_server`] needs to start listening.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) allowed_origins: Vec<String>,
    pub(crate) ports: HttpStatePorts,
}

impl ServerConfig {
    /// Construct a configuration serving `ports` on `bind_addr`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, ports: HttpStatePorts) -> Self {
        Self {
            bind_addr,
            allowed_origins: Vec::new(),
            ports,
        }
    }

    /// Origins allowed to call the API from a browser.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.allowed_origins = origins;
        self
    }
}
