use crate::error::{ByteError, Result};
use log::debug;

/// Copy `size` bytes of `buf` starting at `start`.
///
/// Returns `ByteError::OutOfBounds` when the range runs past the end of the
/// buffer, including when `start + size` overflows.
pub fn sub_buf(buf: &[u8], start: usize, size: usize) -> Result<Vec<u8>> {
    let len = buf.len();
    match start.checked_add(size) {
        Some(end) if end <= len => Ok(buf[start..end].to_vec()),
        _ => {
            debug!("Sub-buffer request {start}+{size} outside buffer of {len} bytes");
            Err(ByteError::OutOfBounds { start, size, len })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sub_buf_middle() {
        let buf = b"0123456789";
        assert_eq!(sub_buf(buf, 3, 4).unwrap(), b"3456".to_vec());
    }

    #[test]
    fn test_sub_buf_whole_buffer() {
        let buf = vec![9, 8, 7];
        assert_eq!(sub_buf(&buf, 0, buf.len()).unwrap(), buf);
    }

    #[test]
    fn test_sub_buf_zero_size() {
        assert_eq!(sub_buf(&[1, 2, 3], 3, 0).unwrap(), Vec::<u8>::new());
        assert_eq!(sub_buf(&[], 0, 0).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_sub_buf_past_end() {
        let buf = vec![1, 2, 3];
        let err = sub_buf(&buf, 0, buf.len() + 1).unwrap_err();
        assert_eq!(
            err,
            ByteError::OutOfBounds {
                start: 0,
                size: 4,
                len: 3
            }
        );
        assert!(sub_buf(&buf, 4, 0).is_err());
    }

    #[test]
    fn test_sub_buf_overflow() {
        assert!(sub_buf(&[1, 2, 3], usize::MAX, 2).is_err());
    }

    #[test]
    fn test_absent_input_passes_through() {
        let absent: Option<&[u8]> = None;
        let result = absent.map(|buf| sub_buf(buf, 0, 1));
        assert!(result.is_none());
    }
}
