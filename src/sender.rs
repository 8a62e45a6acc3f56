use std::io;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

use serde::Deserialize;
use thiserror::Error;
use tokio::net::UdpSocket;

use crate::packet::MagicPacket;

/// Discard port, the conventional Wake-on-LAN destination.
pub const WOL_PORT: u16 = 9;

#[derive(Debug, Error)]
pub enum SendError {
    #[error("cannot resolve '{host}' to an IPv4 address")]
    ResolutionFailed {
        host: String,
        #[source]
        source: Option<io::Error>,
    },
    #[error("failed to transmit to {target}: {source}")]
    TransmitFailed {
        target: SocketAddrV4,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SenderConfig {
    pub bind_addr: Ipv4Addr,
    pub broadcast: bool,
}

impl Default for SenderConfig {
    fn default() -> Self {
        Self {
            bind_addr: Ipv4Addr::UNSPECIFIED,
            broadcast: true,
        }
    }
}

/// Stateless apart from its config; every send opens and drops its own socket.
#[derive(Debug, Clone, Default)]
pub struct PacketSender {
    cfg: SenderConfig,
}

impl PacketSender {
    pub fn new(cfg: SenderConfig) -> Self {
        Self { cfg }
    }

    pub fn config(&self) -> &SenderConfig {
        &self.cfg
    }

    pub async fn send(&self, packet: &MagicPacket, target: Ipv4Addr, port: u16) -> Result<(), SendError> {
        let target = SocketAddrV4::new(target, port);
        let transmit_failed = |source| SendError::TransmitFailed { target, source };

        let socket = UdpSocket::bind((self.cfg.bind_addr, 0)).await.map_err(transmit_failed)?;
        if self.cfg.broadcast {
            socket.set_broadcast(true).map_err(transmit_failed)?;
        }
        log::trace!("[sender] bound {:?} for {}", socket.local_addr().ok(), target);

        let sent = socket.send_to(packet.as_ref(), target).await.map_err(transmit_failed)?;
        if sent != packet.as_ref().len() {
            return Err(transmit_failed(io::Error::new(
                io::ErrorKind::WriteZero,
                format!("only {sent} of {} bytes accepted", packet.as_ref().len()),
            )));
        }

        log::debug!("[sender] magic packet for {} sent to {}", packet.target(), target);
        Ok(())
    }

    /// Like [`PacketSender::send`], but `host` may be a name; the first IPv4 result is used.
    pub async fn send_to_host(&self, packet: &MagicPacket, host: &str, port: u16) -> Result<(), SendError> {
        let target = resolve_ipv4(host, port).await?;
        self.send(packet, target, port).await
    }
}

pub async fn resolve_ipv4(host: &str, port: u16) -> Result<Ipv4Addr, SendError> {
    if let Ok(ip) = host.parse::<Ipv4Addr>() {
        return Ok(ip);
    }

    let addrs = tokio::net::lookup_host((host, port)).await.map_err(|e| {
        SendError::ResolutionFailed { host: host.to_owned(), source: Some(e) }
    })?;

    let mut found = None;
    for addr in addrs {
        if let SocketAddr::V4(v4) = addr {
            found = Some(*v4.ip());
            break;
        }
    }

    found.ok_or_else(|| SendError::ResolutionFailed { host: host.to_owned(), source: None })
}
