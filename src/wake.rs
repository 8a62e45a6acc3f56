use std::fmt;
use std::net::Ipv4Addr;

use tokio::sync::oneshot;

use crate::addr::{self, MacAddress};
use crate::packet::MagicPacket;
use crate::sender::{PacketSender, SendError};

/// Result of a single wake request, as reported back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Sent { mac: MacAddress, target: Ipv4Addr },
    InvalidInput(String),
    ResolutionFailed(String),
    TransmitFailed(String),
}

impl Outcome {
    pub fn is_sent(&self) -> bool {
        matches!(self, Outcome::Sent { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Sent { mac, target } => write!(f, "Wake-on-LAN packet for {mac} sent to {target}"),
            Outcome::InvalidInput(detail) => write!(f, "Invalid input: {detail}"),
            Outcome::ResolutionFailed(detail) | Outcome::TransmitFailed(detail) => {
                write!(f, "Failed to send Wake-on-LAN packet: {detail}")
            }
        }
    }
}

impl From<SendError> for Outcome {
    fn from(err: SendError) -> Self {
        match err {
            SendError::ResolutionFailed { .. } => Outcome::ResolutionFailed(err.to_string()),
            SendError::TransmitFailed { .. } => Outcome::TransmitFailed(err.to_string()),
        }
    }
}

/// Validates both strings before touching the network, then sends one magic packet.
pub async fn wake(sender: &PacketSender, mac: &str, target: &str, port: u16) -> Outcome {
    if mac.is_empty() || target.is_empty() {
        return Outcome::InvalidInput("Please enter MAC and IP addresses".to_owned());
    }

    let parsed = addr::parse_mac(mac).and_then(|mac| Ok((mac, addr::parse_ip(target)?)));
    let (mac, target) = match parsed {
        Ok(v) => v,
        Err(e) => {
            log::debug!("[wake] rejected input: {e}");
            return Outcome::InvalidInput(e.to_string());
        }
    };

    let packet = MagicPacket::build(mac);
    log::info!("[wake] sending magic packet for {} to {}:{}", mac, target, port);
    match sender.send(&packet, target, port).await {
        Ok(()) => {
            log::info!("[wake] magic packet for {} sent", mac);
            Outcome::Sent { mac, target }
        }
        Err(e) => {
            log::warn!("[wake] {e}");
            e.into()
        }
    }
}

/// Runs [`wake`] on its own task. The receiver yields exactly one outcome.
pub fn dispatch(sender: PacketSender, mac: String, target: String, port: u16) -> oneshot::Receiver<Outcome> {
    let (tx, rx) = oneshot::channel();
    tokio::spawn(async move {
        let outcome = wake(&sender, &mac, &target, port).await;
        // caller may have stopped listening
        tx.send(outcome).ok();
    });
    rx
}
