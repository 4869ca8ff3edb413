//! Encode quads of `u32`s to bytes and decode them back again with the group varint format.
//!
//! Group varint packs four unsigned 32-bit numbers into one selector byte followed by a
//! variable-length payload. The selector byte holds four 2-bit fields, one per number, ordered
//! with the first number's field in the two most significant bits. Each field stores
//! `byte_length - 1`, where `byte_length` is the minimal number of little-endian bytes needed for
//! that number (zero still takes one byte). The payload is the four minimal little-endian
//! encodings concatenated in order, so a whole block is 5 to 17 bytes.
//!
//! A terminology note - the four numbers encoded behind one selector byte are referred to as a
//! "quad" in this project.
//!
//! # The simple, portable way
//!
//! Use `Scalar` for your `Decoder`. It works on all hardware and decodes a quad with plain byte
//! arithmetic.
//!
//! # The really fast way
//!
//! On x86 with SSSE3 (Woodcrest and above, 2006), `x86::Ssse3` decodes a whole quad with a single
//! table lookup and byte shuffle. `Ssse3::new()` probes the CPU at runtime, so no special build
//! flags are needed. `best_decoder()` does the probe once and hands back whichever decoder is
//! fastest on the host.
//!
//! The shuffle-driven decoder always loads a full 16-byte window starting at the payload, even
//! when the block is shorter. Buffers that hold many blocks back to back should therefore reserve
//! [`DECODE_PAD_LEN`] readable bytes past the last meaningful byte; see the Safety section below.
//!
//! # Examples
//!
//! Encode some quads to bytes, then decode them with the best decoder for the host.
//!
//! ```
//! use group_varint::{best_decoder, encode_quad, DECODE_PAD_LEN};
//!
//! let quads = [[1_u32, 2, 3, 254], [256, 2, 3, 65535], [0, 0, 0, u32::MAX]];
//!
//! let mut encoded = Vec::new();
//! for quad in &quads {
//!     encode_quad(&mut encoded, *quad);
//! }
//! let encoded_len = encoded.len();
//! // trailing padding so the SIMD decoder's 16-byte window stays in bounds
//! encoded.resize(encoded_len + DECODE_PAD_LEN, 0);
//!
//! let decoder = best_decoder();
//! let mut decoded = Vec::new();
//! let mut offset = 0;
//! while offset < encoded_len {
//!     let (quad, consumed) = decoder.decode_quad(&encoded[offset..]);
//!     decoded.push(quad);
//!     offset += consumed;
//! }
//!
//! assert_eq!(&quads[..], &decoded[..]);
//! assert_eq!(encoded_len, offset);
//! ```
//!
//! # Panics
//!
//! `Scalar` reads only the bytes a block actually occupies, so an undersized slice produces a
//! normal slice bounds check panic. The safe `Ssse3` decode copies short slices into a padded
//! buffer instead of panicking; only the `unsafe` unchecked entry point leaves the bounds
//! contract entirely to the caller.
//!
//! # Safety
//!
//! The SSSE3 decoder structurally reads 16 bytes starting one past the selector byte, regardless
//! of how long the block really is. The shuffle mask discards the bytes past the true payload,
//! but they must still be readable memory. `Ssse3::decode_quad_unchecked` makes that an explicit
//! precondition (at least [`MAX_ENCODED_LEN`] readable bytes from the selector); the safe
//! `Decoder` impl on `Ssse3` checks the slice length and pads when necessary. The `Scalar` codec
//! does not use unsafe.

mod tables;
pub use crate::tables::{build_shuffle_table, shuffle_table, ShuffleTable, ZERO_FILL};

mod encode;
pub use crate::encode::encode_quad;

mod decode;
pub use crate::decode::{best_decoder, Decoder};

mod scalar;
pub use crate::scalar::Scalar;

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub mod x86;

/// Smallest possible encoded block: selector byte plus one byte per number.
pub const MIN_ENCODED_LEN: usize = 5;

/// Largest possible encoded block: selector byte plus four bytes per number.
pub const MAX_ENCODED_LEN: usize = 17;

/// Readable bytes to reserve past the last meaningful byte of a buffer that will be decoded with
/// the SIMD decoder.
///
/// The shuffle always loads a 16-byte window starting at a block's payload, so the window can
/// extend past the end of the final block. Callers typically append this many zero bytes when
/// building a buffer of encoded blocks.
pub const DECODE_PAD_LEN: usize = 16;

/// Byte lengths of the four encoded numbers, extracted from a selector byte.
///
/// The first number's field is in the two most significant bits.
pub(crate) fn selector_lengths(selector: u8) -> [usize; 4] {
    [
        ((selector >> 6) & 0x03) as usize + 1,
        ((selector >> 4) & 0x03) as usize + 1,
        ((selector >> 2) & 0x03) as usize + 1,
        (selector & 0x03) as usize + 1,
    ]
}

/// Total length of an encoded block, including the selector byte, computed from the selector byte
/// alone.
///
/// Useful for skipping over blocks without decoding them.
pub fn encoded_len(selector: u8) -> usize {
    let [len0, len1, len2, len3] = selector_lengths(selector);
    1 + len0 + len1 + len2 + len3
}
