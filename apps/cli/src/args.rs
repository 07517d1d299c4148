//! Command-line parsing, validation, and host resolution.

use std::net::{Ipv4Addr, SocketAddr, ToSocketAddrs};
use std::path::PathBuf;

use filebeam_connection::Endpoint;

pub const USAGE: &str = "USAGE: filebeam <HOSTNAME-OR-IP> <PORT> <FILENAME>";

/// Ports below 1024 are reserved for well-known services.
const MIN_PORT: u16 = 1024;

/// Invalid invocations, reported on stderr together with [`USAGE`].
#[derive(Debug, thiserror::Error)]
pub enum ArgsError {
    #[error("incorrect number of arguments")]
    WrongArgCount,

    #[error("port must be an integer between {MIN_PORT} and 65535, got '{0}'")]
    InvalidPort(String),

    #[error("cannot resolve '{0}' to an IPv4 address")]
    UnresolvableHost(String),

    #[error("cannot read file '{0}'")]
    UnreadableFile(String),
}

/// Parsed and validated invocation.
#[derive(Debug)]
pub struct Args {
    pub endpoint: Endpoint,
    pub file: PathBuf,
}

/// Parses `<host> <port> <file>` from raw arguments (program name
/// excluded) and resolves the host to a concrete IPv4 address.
pub fn parse(argv: &[String]) -> Result<Args, ArgsError> {
    let [host, port, file] = argv else {
        return Err(ArgsError::WrongArgCount);
    };

    let port: u16 = port
        .parse()
        .ok()
        .filter(|p| *p >= MIN_PORT)
        .ok_or_else(|| ArgsError::InvalidPort(port.clone()))?;

    let addr = resolve_ipv4(host, port)?;

    let file = PathBuf::from(file);
    if !file.is_file() {
        return Err(ArgsError::UnreadableFile(file.display().to_string()));
    }

    Ok(Args {
        endpoint: Endpoint::new(addr, port),
        file,
    })
}

/// Resolves `host` (a hostname or numeric address) to its first IPv4
/// result. IPv6 addresses are skipped; the transfer core is IPv4-only.
fn resolve_ipv4(host: &str, port: u16) -> Result<Ipv4Addr, ArgsError> {
    let addrs = (host, port)
        .to_socket_addrs()
        .map_err(|_| ArgsError::UnresolvableHost(host.to_string()))?;

    addrs
        .filter_map(|addr| match addr {
            SocketAddr::V4(v4) => Some(*v4.ip()),
            SocketAddr::V6(_) => None,
        })
        .next()
        .ok_or_else(|| ArgsError::UnresolvableHost(host.to_string()))
}
