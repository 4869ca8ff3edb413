use crate::decode::{decode_num, Decoder};
use crate::selector_lengths;

/// Decoder that works on every platform, at the cost of speed compared to the SIMD accelerated
/// version.
///
/// This is also the reference implementation: it reads only the bytes the block actually
/// occupies, so it needs no trailing padding and is the fallback near buffer boundaries.
pub struct Scalar;

impl Decoder for Scalar {
    fn decode_quad(&self, input: &[u8]) -> ([u32; 4], usize) {
        let [len0, len1, len2, len3] = selector_lengths(input[0]);
        let payload = &input[1..];

        let quad = [
            decode_num(len0, payload),
            decode_num(len1, &payload[len0..]),
            decode_num(len2, &payload[len0 + len1..]),
            decode_num(len3, &payload[len0 + len1 + len2..]),
        ];

        (quad, 1 + len0 + len1 + len2 + len3)
    }
}
