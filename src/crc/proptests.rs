use proptest::prelude::*;

use super::*;

/// Bit-at-a-time MSB-first CRC with polynomial 0x1021.
fn bitwise(mut crc: u16, data: &[u8]) -> u16 {
    for &byte in data {
        crc ^= (byte as u16) << 8;
        for _ in 0..8 {
            let msb_set = (crc & 0x8000) != 0;
            crc <<= 1;
            if msb_set {
                crc ^= 0x1021;
            }
        }
    }
    crc
}

proptest! {
    #[test]
    fn matches_bitwise_reference(data in proptest::collection::vec(any::<u8>(), 0..=1024)) {
        prop_assert_eq!(crc16(&data), bitwise(SEED, &data));
    }

    #[test]
    fn matches_bitwise_from_any_seed(
        seed in any::<u16>(),
        data in proptest::collection::vec(any::<u8>(), 0..=256)
    ) {
        prop_assert_eq!(update(seed, &data), bitwise(seed, &data));
    }

    #[test]
    fn deterministic(data in proptest::collection::vec(any::<u8>(), 0..=255)) {
        let len = data.len() as u8;
        prop_assert_eq!(compute_crc(&data, len).unwrap(), compute_crc(&data, len).unwrap());
    }

    #[test]
    fn trailing_bytes_are_ignored(
        data in proptest::collection::vec(any::<u8>(), 0..=255),
        tail in proptest::collection::vec(any::<u8>(), 1..=64),
        cut in any::<u8>()
    ) {
        let length = ((cut as usize) % (data.len() + 1)) as u8;
        let mut extended = data.clone();
        extended.extend_from_slice(&tail);
        prop_assert_eq!(compute_crc(&data, length).unwrap(), compute_crc(&extended, length).unwrap());
        prop_assert_eq!(compute_crc(&data, length).unwrap(), crc16(&data[..length as usize]));
    }

    #[test]
    fn chunked_streaming_matches_one_shot(
        data in proptest::collection::vec(any::<u8>(), 0..=2048),
        chunk in 1usize..=97
    ) {
        let mut hasher = Crc16::new();
        for part in data.chunks(chunk) {
            hasher.update(part);
        }
        prop_assert_eq!(hasher.finalize(), crc16(&data));
    }

    #[test]
    fn resume_from_partial(
        data in proptest::collection::vec(any::<u8>(), 0..=1024),
        split in any::<usize>()
    ) {
        let split = split % (data.len() + 1);
        let (head, tail) = data.split_at(split);
        prop_assert_eq!(update(crc16(head), tail), crc16(&data));
    }

    #[test]
    fn appended_checksum_leaves_residue(data in proptest::collection::vec(any::<u8>(), 0..=512)) {
        let mut framed = data.clone();
        framed.extend_from_slice(&crc16(&data).to_be_bytes());
        prop_assert_eq!(crc16(&framed), RESIDUE);
    }
}
