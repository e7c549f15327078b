use core::mem;
use core::ptr;

use crate::dhcp::DhcpHdr;

/// Header types that may be materialized from raw packet bytes.
///
/// # Safety
///
/// Implementors must be `#[repr(C)]`, free of padding, and built entirely
/// from plain integers and byte arrays so that every bit pattern found on the
/// wire is a valid value. Enum-bearing header structs do not qualify.
pub unsafe trait Pod: Copy {}

unsafe impl Pod for DhcpHdr {}

/// Reads a `T` out of `frame` at `offset`, or `None` if the frame ends before
/// `offset + size_of::<T>()`. The bounds check is the only guard between the
/// caller and the end of the buffer, so every header access goes through here.
#[inline(always)]
pub fn view_at<T: Pod>(frame: &[u8], offset: usize) -> Option<T> {
    let end = offset.checked_add(mem::size_of::<T>())?;
    if end > frame.len() {
        return None;
    }
    // In bounds per the check above; read_unaligned because header offsets
    // within a frame carry no alignment guarantee.
    Some(unsafe { ptr::read_unaligned(frame.as_ptr().add(offset) as *const T) })
}

/// Copies `N` bytes out of `frame` at `offset`, or `None` if the frame ends
/// before `offset + N`. Used for raw field reads where materializing the
/// surrounding header would be unsound.
#[inline(always)]
pub fn array_at<const N: usize>(frame: &[u8], offset: usize) -> Option<[u8; N]> {
    let end = offset.checked_add(N)?;
    let bytes = frame.get(offset..end)?;
    let mut out = [0u8; N];
    out.copy_from_slice(bytes);
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_requires_full_header() {
        let buf = [0u8; DhcpHdr::LEN + 4];
        assert!(view_at::<DhcpHdr>(&buf, 0).is_some());
        assert!(view_at::<DhcpHdr>(&buf, 4).is_some());
        assert!(view_at::<DhcpHdr>(&buf, 5).is_none());
        assert!(view_at::<DhcpHdr>(&buf, usize::MAX).is_none());
    }

    #[test]
    fn array_requires_full_range() {
        let buf = [1u8, 2, 3, 4];
        assert_eq!(array_at::<2>(&buf, 1), Some([2, 3]));
        assert_eq!(array_at::<4>(&buf, 0), Some([1, 2, 3, 4]));
        assert!(array_at::<2>(&buf, 3).is_none());
        assert!(array_at::<1>(&buf, usize::MAX).is_none());
    }
}
