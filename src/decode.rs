use std::sync::OnceLock;

use byteorder::{ByteOrder, LittleEndian};

use crate::scalar::Scalar;

/// Decode one encoded block at a time.
///
/// Implementations must agree exactly: for any slice holding a block produced by
/// [`encode_quad`](crate::encode_quad), every `Decoder` returns the same quad and the same
/// consumed length. Input that was not produced by the encoder still decodes to *some* quad
/// (every byte is a legal selector), with no guarantee beyond determinism; no validation is
/// performed.
pub trait Decoder {
    /// Decode the block starting at the first byte of `input`.
    ///
    /// Returns the four decoded numbers and the number of bytes the block occupied, including
    /// the selector byte (5 to 17).
    fn decode_quad(&self, input: &[u8]) -> ([u32; 4], usize);
}

/// Read `len` bytes from the front of `input`, zero-extended to a `u32`.
#[inline]
pub(crate) fn decode_num(len: usize, input: &[u8]) -> u32 {
    let mut buf = [0_u8; 4];
    buf[0..len].copy_from_slice(&input[0..len]);

    LittleEndian::read_u32(&buf)
}

static BEST: OnceLock<Box<dyn Decoder + Send + Sync>> = OnceLock::new();

/// The fastest decoder available on the host, selected once.
///
/// The first call probes CPU features; every later call returns the cached selection, so the
/// decode loop itself stays free of capability checks. On x86 with SSSE3 this is
/// [`x86::Ssse3`](crate::x86::Ssse3), otherwise [`Scalar`].
///
/// Callers feeding this decoder a contiguous buffer of blocks must reserve
/// [`DECODE_PAD_LEN`](crate::DECODE_PAD_LEN) readable bytes of trailing padding, since the SIMD
/// decoder may be selected.
pub fn best_decoder() -> &'static (dyn Decoder + Send + Sync) {
    &**BEST.get_or_init(|| {
        #[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
        if let Some(simd) = crate::x86::Ssse3::new() {
            return Box::new(simd);
        }

        Box::new(Scalar)
    })
}
