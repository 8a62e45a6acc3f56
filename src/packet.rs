use crate::addr::{MacAddress, MAC_LEN};

pub const SYNC_STREAM: [u8; 6] = [ 0xff, 0xff, 0xff, 0xff, 0xff, 0xff ];
pub const MAC_REPEAT: usize = 16;
pub const MAGIC_PACKET_LEN: usize = SYNC_STREAM.len() + MAC_REPEAT * MAC_LEN;

/// Wake-on-LAN payload: the sync stream followed by the target MAC sixteen times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MagicPacket([u8; MAGIC_PACKET_LEN]);

impl MagicPacket {
    pub fn build(mac: MacAddress) -> Self {
        let mut buf = [0u8; MAGIC_PACKET_LEN];
        buf[..SYNC_STREAM.len()].copy_from_slice(&SYNC_STREAM);
        for block in buf[SYNC_STREAM.len()..].chunks_exact_mut(MAC_LEN) {
            block.copy_from_slice(mac.as_bytes());
        }
        Self(buf)
    }

    pub fn as_bytes(&self) -> &[u8; MAGIC_PACKET_LEN] {
        &self.0
    }

    pub fn target(&self) -> MacAddress {
        // a built packet always carries its MAC at offset 6
        let mut mac = [0u8; MAC_LEN];
        mac.copy_from_slice(&self.0[SYNC_STREAM.len()..SYNC_STREAM.len() + MAC_LEN]);
        MacAddress::new(mac)
    }
}

impl AsRef<[u8]> for MagicPacket {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addr::parse_mac;
    use proptest::prelude::*;

    #[test]
    fn builds_packet_for_sample_mac() {
        let mac = parse_mac("e0:73:e7:bc:9c:82").unwrap();
        let pkt = MagicPacket::build(mac);
        let bytes = pkt.as_bytes();

        assert_eq!(bytes.len(), 102);
        assert_eq!(&bytes[..6], &[0xff; 6]);
        for block in bytes[6..].chunks(6) {
            assert_eq!(block, &[0xe0, 0x73, 0xe7, 0xbc, 0x9c, 0x82]);
        }
        assert_eq!(bytes[6..].chunks(6).count(), 16);
    }

    #[test]
    fn byte_layout_follows_index_formula() {
        let mac = MacAddress::new([1, 2, 3, 4, 5, 6]);
        let bytes = MagicPacket::build(mac).as_bytes().to_vec();
        for i in 6..102 {
            assert_eq!(bytes[i], mac.as_bytes()[(i - 6) % 6], "index {i}");
        }
    }

    #[test]
    fn build_is_deterministic() {
        let mac = MacAddress::new([0xde, 0xad, 0xbe, 0xef, 0x00, 0x01]);
        assert_eq!(MagicPacket::build(mac), MagicPacket::build(mac));
        assert_eq!(MagicPacket::build(mac).target(), mac);
    }

    proptest! {
        #[test]
        fn any_parsed_mac_builds_sync_stream_then_sixteen_copies(bytes in any::<[u8; 6]>()) {
            let text = bytes.iter().map(|b| format!("{b:02x}")).collect::<Vec<_>>().join(":");
            let mac = parse_mac(&text).unwrap();
            let pkt = MagicPacket::build(mac);
            let out = pkt.as_bytes();

            prop_assert_eq!(out.len(), MAGIC_PACKET_LEN);
            prop_assert_eq!(&out[..6], &SYNC_STREAM[..]);
            for i in 6..MAGIC_PACKET_LEN {
                prop_assert_eq!(out[i], bytes[(i - 6) % 6]);
            }
            prop_assert_eq!(&pkt, &MagicPacket::build(mac));
            prop_assert_eq!(pkt.target(), mac);
        }
    }
}
