//! DCS-style complement-sum checksum.

/// Compute the trailing checksum byte for a frame: the two's-complement byte
/// such that length bytes + payload bytes + checksum sum to zero mod 256.
pub fn dcs(length: u16, payload: &[u8]) -> u8 {
    let [lo, hi] = length.to_le_bytes();
    let sum = payload
        .iter()
        .fold(lo.wrapping_add(hi), |acc, &b| acc.wrapping_add(b));
    0u8.wrapping_sub(sum)
}
