//! Wake-on-LAN magic packet construction and sending.
//!
//! ```no_run
//! # async fn run() {
//! use wakemup::{wake, PacketSender, WOL_PORT};
//!
//! let outcome = wake(&PacketSender::default(), "e0:73:e7:bc:9c:82", "192.168.1.255", WOL_PORT).await;
//! println!("{outcome}");
//! # }
//! ```

pub mod addr;
pub mod config;
pub mod packet;
pub mod sender;
pub mod wake;

pub use addr::{parse_ip, parse_mac, validate_ip, validate_mac, MacAddress, ParseError};
pub use packet::{MagicPacket, MAGIC_PACKET_LEN};
pub use sender::{PacketSender, SendError, SenderConfig, WOL_PORT};
pub use wake::{dispatch, wake, Outcome};
