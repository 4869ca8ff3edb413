#[cfg(target_arch = "x86")]
use std::arch::x86::{__m128i, _mm_loadu_si128, _mm_shuffle_epi8, _mm_storeu_si128};
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::{__m128i, _mm_loadu_si128, _mm_shuffle_epi8, _mm_storeu_si128};

use crate::decode::Decoder;
use crate::tables::shuffle_table;
use crate::MAX_ENCODED_LEN;

/// Decoder using SSSE3 instructions.
///
/// One `pshufb` against the precomputed shuffle table replaces the scalar decoder's
/// byte-at-a-time loop. The results are bit-identical to [`Scalar`](crate::Scalar) for every
/// input.
///
/// Holding a value proves the host supports SSSE3: the only constructor, [`Ssse3::new`], probes
/// the CPU at runtime.
#[derive(Clone, Copy)]
pub struct Ssse3 {
    _feature_checked: (),
}

impl Ssse3 {
    /// Probe the host CPU, returning a decoder only if SSSE3 is available.
    pub fn new() -> Option<Ssse3> {
        if is_x86_feature_detected!("ssse3") {
            Some(Ssse3 {
                _feature_checked: (),
            })
        } else {
            None
        }
    }

    /// Decode the block starting at the first byte of `input`, with no bounds checks on the hot
    /// path.
    ///
    /// # Safety
    ///
    /// `input` must contain at least [`MAX_ENCODED_LEN`] (17) readable bytes. The shuffle loads a
    /// full 16-byte window starting one past the selector byte even when the true block is
    /// shorter; the mask's zero-fill entries discard the excess, but the bytes must reside in
    /// addressable memory. Callers satisfy this by reserving
    /// [`DECODE_PAD_LEN`](crate::DECODE_PAD_LEN) bytes of trailing padding in their buffers. The
    /// precondition is `debug_assert!`ed in test builds and unchecked in release builds.
    #[inline]
    pub unsafe fn decode_quad_unchecked(&self, input: &[u8]) -> ([u32; 4], usize) {
        debug_assert!(
            input.len() >= MAX_ENCODED_LEN,
            "need {} readable bytes, got {}",
            MAX_ENCODED_LEN,
            input.len()
        );
        // self proves ssse3 is available
        unsafe { self.shuffle(input) }
    }

    #[target_feature(enable = "ssse3")]
    unsafe fn shuffle(&self, input: &[u8]) -> ([u32; 4], usize) {
        let table = shuffle_table();
        let selector = unsafe { *input.get_unchecked(0) };
        let mask_bytes = table.mask(selector);

        let quad = unsafe {
            let data = _mm_loadu_si128(input.as_ptr().add(1) as *const __m128i);
            let mask = _mm_loadu_si128(mask_bytes.as_ptr() as *const __m128i);
            let shuffled = _mm_shuffle_epi8(data, mask);

            let mut out = [0_u32; 4];
            _mm_storeu_si128(out.as_mut_ptr() as *mut __m128i, shuffled);
            out
        };

        (quad, table.encoded_len(selector))
    }
}

impl Decoder for Ssse3 {
    /// Decode one block.
    ///
    /// Slices shorter than [`MAX_ENCODED_LEN`] are staged through a zero-padded copy so the
    /// 16-byte window stays in bounds; the slice must still hold the complete block for the
    /// decoded values to be meaningful.
    fn decode_quad(&self, input: &[u8]) -> ([u32; 4], usize) {
        if input.len() >= MAX_ENCODED_LEN {
            unsafe { self.decode_quad_unchecked(input) }
        } else {
            let mut padded = [0_u8; MAX_ENCODED_LEN];
            padded[0..input.len()].copy_from_slice(input);
            unsafe { self.decode_quad_unchecked(&padded) }
        }
    }
}
