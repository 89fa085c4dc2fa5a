//! Viewer configuration, populated from the command line and environment.

use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use clap::Parser;

/// Default HTTP listen address, as given to the CLI.
pub const DEFAULT_BIND: &str = "0.0.0.0:8090";

/// Port of [`DEFAULT_BIND`].
pub const DEFAULT_HTTP_PORT: u16 = 8090;

/// Default NATS host.
pub const DEFAULT_NATS_HOST: &str = "127.0.0.1";

/// Default NATS port, used when no `Cli` is involved.
pub const DEFAULT_NATS_PORT: u16 = 4222;

/// Default deadline for the schema request, in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 500;

/// render-asyncapi — browse a NATS service's AsyncAPI schema
///
/// Fetches the schema from `<ROOT_PATH>.schema.RETRIEVE` on every page load
/// and renders it in the browser.
///
/// Example:
///   render-asyncapi 4222 master.service-staging
#[derive(Debug, Clone, Parser)]
#[command(name = "render-asyncapi", version, about, long_about = None)]
pub struct Cli {
    /// Port of the NATS server.
    #[arg(value_name = "NATS_PORT")]
    pub nats_port: u16,

    /// Subject prefix of the service, e.g. `master.service-staging`.
    #[arg(value_name = "ROOT_PATH")]
    pub root_path: String,

    /// Host of the NATS server.
    #[arg(long, env = "ASYNCAPI_NATS_HOST", default_value = DEFAULT_NATS_HOST)]
    pub nats_host: String,

    /// Socket address the HTTP server binds to.
    #[arg(long, env = "ASYNCAPI_BIND", default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,

    /// How long to wait for the schema reply, in milliseconds.
    #[arg(long, env = "ASYNCAPI_TIMEOUT_MS", default_value_t = DEFAULT_TIMEOUT_MS)]
    pub timeout_ms: u64,
}

/// Runtime configuration for the viewer.
///
/// Built once at startup and never mutated; the bridge and router receive it
/// by value.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Subject prefix the schema address is derived from.
    pub root_path: String,

    /// NATS server URL, e.g. `nats://127.0.0.1:4222`.
    pub nats_url: String,

    /// Socket address the server binds to.
    pub bind_addr: SocketAddr,

    /// Deadline for one schema request.
    pub request_timeout: Duration,
}

impl ViewerConfig {
    /// A config for `root_path` with every other field at its default.
    pub fn new(root_path: impl Into<String>) -> Self {
        Self {
            root_path: root_path.into(),
            nats_url: nats_url(DEFAULT_NATS_HOST, DEFAULT_NATS_PORT),
            bind_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_HTTP_PORT)),
            request_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl From<Cli> for ViewerConfig {
    fn from(cli: Cli) -> Self {
        Self {
            root_path: cli.root_path,
            nats_url: nats_url(&cli.nats_host, cli.nats_port),
            bind_addr: cli.bind,
            request_timeout: Duration::from_millis(cli.timeout_ms),
        }
    }
}

fn nats_url(host: &str, port: u16) -> String {
    format!("nats://{host}:{port}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_arguments_build_config_with_defaults() {
        let cli = Cli::try_parse_from(["render-asyncapi", "4222", "master.service-staging"]).unwrap();
        let config = ViewerConfig::from(cli);
        assert_eq!(config.root_path, "master.service-staging");
        assert_eq!(config.nats_url, "nats://127.0.0.1:4222");
        assert_eq!(config.bind_addr, "0.0.0.0:8090".parse::<SocketAddr>().unwrap());
        assert_eq!(config.request_timeout, Duration::from_millis(500));
    }

    #[test]
    fn programmatic_defaults_match_cli_defaults() {
        let cli = Cli::try_parse_from(["render-asyncapi", "4222", "svc"]).unwrap();
        let from_cli = ViewerConfig::from(cli);
        let direct = ViewerConfig::new("svc");
        assert_eq!(direct.root_path, from_cli.root_path);
        assert_eq!(direct.nats_url, from_cli.nats_url);
        assert_eq!(direct.bind_addr, from_cli.bind_addr);
        assert_eq!(direct.request_timeout, from_cli.request_timeout);
    }

    #[test]
    fn missing_root_path_is_rejected() {
        assert!(Cli::try_parse_from(["render-asyncapi", "4222"]).is_err());
    }

    #[test]
    fn missing_all_arguments_is_rejected() {
        assert!(Cli::try_parse_from(["render-asyncapi"]).is_err());
    }

    #[test]
    fn non_numeric_port_is_rejected() {
        assert!(Cli::try_parse_from(["render-asyncapi", "nats", "svc"]).is_err());
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "render-asyncapi",
            "4223",
            "svc",
            "--nats-host",
            "10.0.0.5",
            "--bind",
            "127.0.0.1:9000",
            "--timeout-ms",
            "1500",
        ])
        .unwrap();
        let config = ViewerConfig::from(cli);
        assert_eq!(config.nats_url, "nats://10.0.0.5:4223");
        assert_eq!(config.bind_addr, "127.0.0.1:9000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.request_timeout, Duration::from_millis(1500));
    }
}
