//! Bounded UTF-8 encoding of raw code points.
//!
//! Works on `u32` code points rather than `char` so any value the glyph
//! source produces can be encoded without a validity check. Never writes
//! a terminator byte.

/// Encoded width of `cp` in bytes (1-4).
#[inline]
pub fn encoded_len(cp: u32) -> usize {
    if cp < 0x80 {
        1
    } else if cp < 0x800 {
        2
    } else if cp < 0x10000 {
        3
    } else {
        4
    }
}

/// Encode `code_points` into `out`, stopping before the first sequence that
/// would not fit. Returns the number of bytes written.
pub fn encode(code_points: &[u32], out: &mut [u8]) -> usize {
    let mut written = 0;

    for &cp in code_points {
        let n = encoded_len(cp);
        if written + n > out.len() {
            return written;
        }
        let dst = &mut out[written..written + n];
        match n {
            1 => {
                dst[0] = cp as u8;
            }
            2 => {
                dst[0] = ((cp >> 6) & 0x1F) as u8 | 0xC0;
                dst[1] = (cp & 0x3F) as u8 | 0x80;
            }
            3 => {
                dst[0] = ((cp >> 12) & 0x0F) as u8 | 0xE0;
                dst[1] = ((cp >> 6) & 0x3F) as u8 | 0x80;
                dst[2] = (cp & 0x3F) as u8 | 0x80;
            }
            _ => {
                dst[0] = ((cp >> 18) & 0x07) as u8 | 0xF0;
                dst[1] = ((cp >> 12) & 0x3F) as u8 | 0x80;
                dst[2] = ((cp >> 6) & 0x3F) as u8 | 0x80;
                dst[3] = (cp & 0x3F) as u8 | 0x80;
            }
        }
        written += n;
    }

    written
}
