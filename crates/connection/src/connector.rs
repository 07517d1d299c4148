//! Deadline-bounded connection establishment.

use std::fmt;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

use tokio::net::{TcpSocket, TcpStream};
use tracing::debug;

use crate::{ConnectionError, TransferConfig};

/// The remote peer: a resolved IPv4 address and a port.
///
/// Resolution and port validation happen upstream; by the time an
/// `Endpoint` exists it is concrete and well-formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub addr: Ipv4Addr,
    pub port: u16,
}

impl Endpoint {
    pub fn new(addr: Ipv4Addr, port: u16) -> Self {
        Self { addr, port }
    }

    pub fn socket_addr(&self) -> SocketAddrV4 {
        SocketAddrV4::new(self.addr, self.port)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.addr, self.port)
    }
}

/// Opens a TCP connection to `endpoint`, bounded by
/// `config.connect_timeout`.
///
/// A peer that neither accepts nor refuses within the deadline yields
/// [`ConnectionError::ConnectTimeout`] instead of an indefinite wait. An
/// attempt the peer rejects outright (refused, unreachable, handshake
/// failure) yields [`ConnectionError::Connect`] as soon as the failure is
/// known.
pub async fn connect(
    endpoint: Endpoint,
    config: &TransferConfig,
) -> Result<TcpStream, ConnectionError> {
    let addr = endpoint.socket_addr();
    let socket = TcpSocket::new_v4().map_err(ConnectionError::Setup)?;

    match tokio::time::timeout(config.connect_timeout, socket.connect(SocketAddr::V4(addr))).await {
        Ok(Ok(stream)) => {
            debug!(%addr, "connected");
            Ok(stream)
        }
        Ok(Err(source)) => Err(ConnectionError::Connect { addr, source }),
        Err(_) => Err(ConnectionError::ConnectTimeout {
            addr,
            timeout: config.connect_timeout,
        }),
    }
}
