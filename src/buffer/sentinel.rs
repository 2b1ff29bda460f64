/// Marker appended to a buffer to flag where its payload stops.
pub const END_MARKER: [u8; 4] = *b"#END";

/// Whether `buf` already ends with `#END`.
pub fn has_end(buf: &[u8]) -> bool {
    buf.ends_with(&END_MARKER)
}

/// Append `#END` unless the buffer already ends with it.
///
/// Calling this twice gives the same bytes as calling it once. An absent
/// buffer should be passed as `&[]`, which yields just the marker.
pub fn add_end(buf: &[u8]) -> Vec<u8> {
    if has_end(buf) {
        return buf.to_vec();
    }
    let mut out = Vec::with_capacity(buf.len() + END_MARKER.len());
    out.extend_from_slice(buf);
    out.extend_from_slice(&END_MARKER);
    out
}

/// Everything before the first `#END`, or a full copy when there is none.
pub fn trim_buf(buf: &[u8]) -> Vec<u8> {
    let end = buf
        .windows(END_MARKER.len())
        .position(|window| window == END_MARKER.as_slice())
        .unwrap_or(buf.len());
    buf[..end].to_vec()
}
