use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

// Explicit bind configuration for one service process. Constructed by the
// service entry point and passed to the serve step; never stored globally.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub service: &'static str,
    pub host: IpAddr,
    pub port: u16,
}

impl ServiceConfig {
    // Listen on all interfaces at a fixed port.
    pub fn new(service: &'static str, port: u16) -> Self {
        Self {
            service,
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port,
        }
    }

    // Same, with the port overridable through an environment variable.
    // Unset or unparsable values fall back to the default port.
    pub fn from_env(service: &'static str, port_var: &str, default_port: u16) -> Self {
        let port = env::var(port_var)
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(default_port);
        Self::new(service, port)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
