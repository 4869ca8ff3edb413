use std::fmt;
use std::sync::OnceLock;

use crate::selector_lengths;

/// Mask byte for output positions with no source byte. `pshufb` zeroes an output byte whenever
/// the high bit of its mask byte is set.
pub const ZERO_FILL: u8 = 0xFF;

/// Per-selector gather patterns for the SIMD decoder.
///
/// Entry `s` describes, for selector byte `s`, where each of the 16 output bytes (4 lanes of 4
/// little-endian bytes) is sourced from in the 16-byte payload window, with [`ZERO_FILL`] in the
/// positions past each number's encoded length. The table also records each selector's total
/// encoded block length so the SIMD path derives bytes consumed with the same lookup.
///
/// Built once, never mutated; see [`shuffle_table`] for the process-wide copy.
pub struct ShuffleTable {
    masks: [[u8; 16]; 256],
    lengths: [u8; 256],
}

impl ShuffleTable {
    /// The 16-byte shuffle mask for `selector`.
    #[inline]
    pub fn mask(&self, selector: u8) -> &[u8; 16] {
        &self.masks[selector as usize]
    }

    /// Total encoded block length for `selector`, including the selector byte.
    #[inline]
    pub fn encoded_len(&self, selector: u8) -> usize {
        self.lengths[selector as usize] as usize
    }
}

/// One line per selector, mostly useful for eyeballing the generated masks.
impl fmt::Debug for ShuffleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (selector, mask) in self.masks.iter().enumerate() {
            write!(f, "{:#04x} (len {:2}): [", selector, self.lengths[selector])?;
            for (i, &b) in mask.iter().enumerate() {
                let sep = if i == 15 { "" } else { " " };
                if b == ZERO_FILL {
                    write!(f, "  .{}", sep)?;
                } else {
                    write!(f, "{:3}{}", b, sep)?;
                }
            }
            writeln!(f, "]")?;
        }
        Ok(())
    }
}

/// Build the 256-entry shuffle table.
///
/// Pure and deterministic with no failure mode. Most callers want [`shuffle_table`] instead,
/// which builds once and caches for the rest of the process.
pub fn build_shuffle_table() -> ShuffleTable {
    let mut masks = [[ZERO_FILL; 16]; 256];
    let mut lengths = [0_u8; 256];

    for selector in 0..=255_u8 {
        let field_lengths = selector_lengths(selector);
        let mask = &mut masks[selector as usize];

        let mut src_offset = 0;
        for (lane, &len) in field_lengths.iter().enumerate() {
            for b in 0..len {
                mask[lane * 4 + b] = (src_offset + b) as u8;
            }
            src_offset += len;
        }

        lengths[selector as usize] = (1 + src_offset) as u8;
    }

    ShuffleTable { masks, lengths }
}

static TABLE: OnceLock<ShuffleTable> = OnceLock::new();

/// The process-wide shuffle table.
///
/// Built on first use behind a one-time initialization barrier, so no thread can observe a
/// partially built table; afterwards it is read-only for the life of the process.
pub fn shuffle_table() -> &'static ShuffleTable {
    TABLE.get_or_init(build_shuffle_table)
}
