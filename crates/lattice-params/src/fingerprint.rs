use crate::hash::sha3_256;
use crate::name::ProtocolParam;
use crate::protocol::ProtocolConstants;
use crate::value::ParamValue;

pub const PROTOCOL_FINGERPRINT_DST: &[u8] = b"LATTICEv1-protocol-params/";

/// Canonical digest of the protocol tier.
///
/// Two nodes agree on every protocol constant iff their fingerprints match.
/// Node-tier settings are excluded; the profile name is included so that a
/// test registry never reports a production fingerprint.
pub fn protocol_fingerprint(profile: &str, protocol: &ProtocolConstants) -> [u8; 32] {
    let mut buf: Vec<u8> = Vec::with_capacity(1024);
    buf.extend_from_slice(PROTOCOL_FINGERPRINT_DST);
    encode_bytes(profile.as_bytes(), &mut buf);
    encode_compact_size(ProtocolParam::ALL.len() as u64, &mut buf);

    for param in ProtocolParam::ALL {
        encode_bytes(param.as_str().as_bytes(), &mut buf);
        encode_value(&protocol.value(param), &mut buf);
    }

    sha3_256(&buf)
}

pub(crate) fn encode_compact_size(n: u64, out: &mut Vec<u8>) {
    match n {
        0x00..=0xfc => out.push(n as u8),
        0xfd..=0xffff => {
            out.push(0xfd);
            out.extend_from_slice(&(n as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            out.push(0xfe);
            out.extend_from_slice(&(n as u32).to_le_bytes());
        }
        _ => {
            out.push(0xff);
            out.extend_from_slice(&n.to_le_bytes());
        }
    }
}

fn encode_bytes(b: &[u8], out: &mut Vec<u8>) {
    encode_compact_size(b.len() as u64, out);
    out.extend_from_slice(b);
}

fn encode_value(v: &ParamValue, out: &mut Vec<u8>) {
    match v {
        ParamValue::Integer(n) => {
            out.push(0x01);
            out.extend_from_slice(&n.to_le_bytes());
        }
        ParamValue::ByteSize(n) => {
            out.push(0x02);
            out.extend_from_slice(&n.to_le_bytes());
        }
        ParamValue::Duration(ms) => {
            out.push(0x03);
            out.extend_from_slice(&ms.as_millis().to_le_bytes());
        }
        ParamValue::Timestamp(ms) => {
            out.push(0x04);
            out.extend_from_slice(&ms.as_millis().to_le_bytes());
        }
        ParamValue::OptionalTimestamp(None) => out.push(0x05),
        ParamValue::OptionalTimestamp(Some(ms)) => {
            out.push(0x06);
            out.extend_from_slice(&ms.as_millis().to_le_bytes());
        }
        ParamValue::Amount(a) => {
            out.push(0x07);
            out.extend_from_slice(&a.to_raw().to_le_bytes());
        }
        ParamValue::Bytes(b) => {
            out.push(0x08);
            encode_bytes(b.as_slice(), out);
        }
        ParamValue::GenesisKeys(keys) => {
            out.push(0x09);
            encode_bytes(keys.genesis_public_key.as_slice(), out);
            encode_compact_size(keys.initial_stakers.len() as u64, out);
            for staker in &keys.initial_stakers {
                encode_bytes(staker.as_slice(), out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{encode_compact_size, protocol_fingerprint};
    use crate::protocol::ProtocolConstants;
    use crate::time::Millis;

    #[test]
    fn compact_size_boundaries() {
        let cases: &[(u64, &[u8])] = &[
            (0, &[0x00]),
            (0xfc, &[0xfc]),
            (0xfd, &[0xfd, 0xfd, 0x00]),
            (0xffff, &[0xfd, 0xff, 0xff]),
            (0x1_0000, &[0xfe, 0x00, 0x00, 0x01, 0x00]),
            (
                0x1_0000_0000,
                &[0xff, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00],
            ),
        ];
        for (n, want) in cases {
            let mut out = Vec::new();
            encode_compact_size(*n, &mut out);
            assert_eq!(out.as_slice(), *want, "n={n:#x}");
        }
    }

    #[test]
    fn fingerprint_is_deterministic() {
        let p = ProtocolConstants::production();
        assert_eq!(
            protocol_fingerprint("production", &p),
            protocol_fingerprint("production", &p.clone())
        );
    }

    #[test]
    fn fingerprint_tracks_every_protocol_change() {
        let base = ProtocolConstants::production();
        let fp = protocol_fingerprint("production", &base);

        let mut changed = base.clone();
        changed.max_block_size -= 1;
        assert_ne!(protocol_fingerprint("production", &changed), fp);

        let mut changed = base.clone();
        changed.end_timestamp = Some(Millis::from_millis(u64::MAX));
        assert_ne!(protocol_fingerprint("production", &changed), fp);

        let mut changed = base.clone();
        changed.genesis_keys.initial_stakers.pop();
        assert_ne!(protocol_fingerprint("production", &changed), fp);

        assert_ne!(protocol_fingerprint("test", &base), fp);
    }
}
