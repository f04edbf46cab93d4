use clap::Parser;
use std::net::SocketAddr;

pub const LISTEN_ADDR_ENV: &str = "HOPLINK_GATEWAY_LISTEN_ADDR";
pub const REDIS_URL_ENV: &str = "HOPLINK_GATEWAY_REDIS_URL";
pub const PUBLIC_BASE_URL_ENV: &str = "HOPLINK_GATEWAY_PUBLIC_BASE_URL";

pub const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379";
pub const DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:8080";

#[derive(Debug, Parser)]
#[command(name = "hoplink-gateway")]
pub struct CLI {
    #[arg(long, env = LISTEN_ADDR_ENV, default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    #[arg(long, env = REDIS_URL_ENV, default_value = DEFAULT_REDIS_URL)]
    pub redis_url: String,

    /// Base URL advertised in shorten responses.
    #[arg(
        long,
        env = PUBLIC_BASE_URL_ENV,
        default_value = DEFAULT_PUBLIC_BASE_URL
    )]
    pub public_base_url: String,
}
