use rand::Rng;

use group_varint::{
    best_decoder, encode_quad, encoded_len, Decoder, Scalar, DECODE_PAD_LEN, MAX_ENCODED_LEN,
    MIN_ENCODED_LEN,
};

// Evenly distributed random numbers end up biased heavily towards longer encoded byte lengths:
// there are a lot more large numbers than there are small. For exercising serialization code
// paths we want many at all byte lengths, so pick the length class uniformly first.
fn random_num<R: Rng>(rng: &mut R) -> u32 {
    match rng.gen_range(0..4) {
        0 => rng.gen_range(0_u32..1 << 8),
        1 => rng.gen_range(1_u32 << 8..1 << 16),
        2 => rng.gen_range(1_u32 << 16..1 << 24),
        _ => rng.gen_range(1_u32 << 24..=u32::MAX),
    }
}

fn random_quad<R: Rng>(rng: &mut R) -> [u32; 4] {
    [
        random_num(rng),
        random_num(rng),
        random_num(rng),
        random_num(rng),
    ]
}

#[test]
fn exact_layout_all_zeros() {
    let mut encoded = Vec::new();

    encode_quad(&mut encoded, [0, 0, 0, 0]);

    assert_eq!(&[0x00, 0x00, 0x00, 0x00, 0x00], &encoded[..]);
}

#[test]
fn exact_layout_all_one_byte() {
    let mut encoded = Vec::new();

    encode_quad(&mut encoded, [1, 2, 3, 254]);

    assert_eq!(&[0x00, 0x01, 0x02, 0x03, 0xFE], &encoded[..]);
}

#[test]
fn exact_layout_mixed_one_and_two_byte() {
    let mut encoded = Vec::new();

    encode_quad(&mut encoded, [256, 2, 3, 65535]);

    // selector 0b01_00_00_01, then 2-byte LE 256, 1-byte 2, 1-byte 3, 2-byte LE 65535
    assert_eq!(&[0x41, 0x00, 0x01, 0x02, 0x03, 0xFF, 0xFF], &encoded[..]);
}

#[test]
fn selector_fields_minimal_at_length_boundaries() {
    let boundaries: &[(u32, u8)] = &[
        (0, 0),
        (0xFF, 0),
        (0x100, 1),
        (0xFFFF, 1),
        (0x1_0000, 2),
        (0xFF_FFFF, 2),
        (0x100_0000, 3),
        (u32::MAX, 3),
    ];

    for &(num, field) in boundaries {
        let mut encoded = Vec::new();
        encode_quad(&mut encoded, [num, 0, 0, 0]);

        // first number's field in the two most significant bits
        assert_eq!(field, encoded[0] >> 6, "num {:#x}", num);
        assert_eq!(1 + (field as usize + 1) + 3, encoded.len());
    }
}

#[test]
fn scalar_random_roundtrip() {
    let mut rng = rand::thread_rng();

    for _ in 0..10_000 {
        let quad = random_quad(&mut rng);
        let mut encoded = Vec::new();
        encode_quad(&mut encoded, quad);

        assert!(encoded.len() >= MIN_ENCODED_LEN);
        assert!(encoded.len() <= MAX_ENCODED_LEN);
        assert_eq!(encoded_len(encoded[0]), encoded.len());

        let (decoded, consumed) = Scalar.decode_quad(&encoded);

        assert_eq!(quad, decoded);
        assert_eq!(encoded.len(), consumed);
    }
}

#[test]
fn scalar_decodes_contiguous_stream_without_padding() {
    let mut rng = rand::thread_rng();
    let quads: Vec<[u32; 4]> = (0..1_000).map(|_| random_quad(&mut rng)).collect();

    let mut encoded = Vec::new();
    for quad in &quads {
        encode_quad(&mut encoded, *quad);
    }

    let mut offset = 0;
    for quad in &quads {
        let (decoded, consumed) = Scalar.decode_quad(&encoded[offset..]);
        assert_eq!(*quad, decoded);
        offset += consumed;
    }
    assert_eq!(encoded.len(), offset);
}

#[test]
fn best_decoder_decodes_padded_stream() {
    let mut rng = rand::thread_rng();
    let quads: Vec<[u32; 4]> = (0..1_000).map(|_| random_quad(&mut rng)).collect();

    let mut encoded = Vec::new();
    for quad in &quads {
        encode_quad(&mut encoded, *quad);
    }
    let meaningful_len = encoded.len();
    encoded.resize(meaningful_len + DECODE_PAD_LEN, 0);

    let decoder = best_decoder();
    let mut offset = 0;
    for quad in &quads {
        let (decoded, consumed) = decoder.decode_quad(&encoded[offset..]);
        assert_eq!(*quad, decoded);
        offset += consumed;
    }
    assert_eq!(meaningful_len, offset);
}

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
mod simd {
    use super::*;
    use group_varint::x86::Ssse3;

    #[test]
    fn ssse3_random_roundtrip_matches_scalar() {
        let Some(simd) = Ssse3::new() else { return };
        let mut rng = rand::thread_rng();

        for _ in 0..10_000 {
            let quad = random_quad(&mut rng);
            let mut encoded = Vec::new();
            encode_quad(&mut encoded, quad);
            encoded.resize(encoded.len() + DECODE_PAD_LEN, 0);

            let (scalar_quad, scalar_consumed) = Scalar.decode_quad(&encoded);
            let (simd_quad, simd_consumed) = simd.decode_quad(&encoded);

            assert_eq!(quad, simd_quad);
            assert_eq!(scalar_quad, simd_quad);
            assert_eq!(scalar_consumed, simd_consumed);
        }
    }

    #[test]
    fn ssse3_matches_scalar_on_arbitrary_bytes() {
        // decoders must agree even on input no encoder produced
        let Some(simd) = Ssse3::new() else { return };
        let mut rng = rand::thread_rng();

        for _ in 0..10_000 {
            let mut input = [0_u8; MAX_ENCODED_LEN];
            rng.fill(&mut input[..]);

            let (scalar_quad, scalar_consumed) = Scalar.decode_quad(&input);
            let (simd_quad, simd_consumed) = simd.decode_quad(&input);

            assert_eq!(scalar_quad, simd_quad, "selector {:#04x}", input[0]);
            assert_eq!(scalar_consumed, simd_consumed);
        }
    }

    #[test]
    fn ssse3_unchecked_over_padded_stream() {
        let Some(simd) = Ssse3::new() else { return };
        let mut rng = rand::thread_rng();
        let quads: Vec<[u32; 4]> = (0..1_000).map(|_| random_quad(&mut rng)).collect();

        let mut encoded = Vec::new();
        for quad in &quads {
            encode_quad(&mut encoded, *quad);
        }
        let meaningful_len = encoded.len();
        encoded.resize(meaningful_len + DECODE_PAD_LEN, 0);

        let mut offset = 0;
        for quad in &quads {
            // padding guarantees a full window is readable at every block
            let (decoded, consumed) = unsafe { simd.decode_quad_unchecked(&encoded[offset..]) };
            assert_eq!(*quad, decoded);
            offset += consumed;
        }
        assert_eq!(meaningful_len, offset);
    }
}
