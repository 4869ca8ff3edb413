use std::cmp;

use byteorder::{ByteOrder, LittleEndian};

/// Append one encoded block for `quad` to `output`.
///
/// The block is the selector byte followed by the minimal little-endian encodings of the four
/// numbers in order. Any `u32` values are legal, including zero, so this never fails; `output`
/// grows by the block's encoded length (5 to 17 bytes) and nothing else is modified.
pub fn encode_quad(output: &mut Vec<u8>, quad: [u32; 4]) {
    let mut payload = [0_u8; 16];
    let mut selector = 0_u8;
    let mut payload_len = 0;

    for (i, &num) in quad.iter().enumerate() {
        let len = encode_num(num, &mut payload[payload_len..]);
        // first number's field in the most significant bits
        selector |= ((len - 1) as u8) << (6 - i * 2);
        payload_len += len;
    }

    output.push(selector);
    output.extend_from_slice(&payload[0..payload_len]);
}

/// Write the minimal little-endian encoding of `num` into `output`, returning the number of bytes
/// written (1 to 4).
#[inline]
pub(crate) fn encode_num(num: u32, output: &mut [u8]) -> usize {
    // this would calculate 0_u32 as taking 0 bytes, so ensure at least 1 byte
    let len = cmp::max(1_usize, 4 - num.leading_zeros() as usize / 8);
    let mut buf = [0_u8; 4];
    LittleEndian::write_u32(&mut buf, num);

    output[0..len].copy_from_slice(&buf[0..len]);

    len
}
