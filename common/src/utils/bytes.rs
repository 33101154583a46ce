/// Left-pads a big-endian byte string with zeros to exactly `N` bytes.
///
/// Returns `None` when `bytes` has significant content beyond `N` bytes.
/// Leading zero bytes do not count as significant.
pub fn left_pad<const N: usize>(bytes: &[u8]) -> Option<[u8; N]> {
    let first = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    let significant = &bytes[first..];
    if significant.len() > N {
        return None;
    }

    let mut out = [0u8; N];
    out[N - significant.len()..].copy_from_slice(significant);
    Some(out)
}
