/// Return a reversed copy of `data`. The input is left as it was.
pub fn reverse(data: &[u8]) -> Vec<u8> {
    data.iter().rev().copied().collect()
}
