//! Native layout contract shared by every descriptor.
//!
//! Each descriptor is a `#[repr(C)]` plain-old-data struct whose bytes are
//! exactly the bytes of the matching D3D11 header structure. [`NativeLayout`]
//! exposes that byte view together with the value semantics callers rely on
//! when the type itself is not statically known.

use std::any::Any;
use std::fmt;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::mem;

use bytemuck::Pod;

use crate::error::{DescriptorError, DescriptorResult};

/// A value type with the exact binary layout of a native D3D11 structure.
///
/// Implemented through [`native_layout!`], which also asserts the size and
/// alignment at compile time.
pub trait NativeLayout: Pod + Eq + Hash + fmt::Debug {
    /// Name of the mirrored structure in the D3D11 headers.
    const NATIVE_NAME: &'static str;

    /// Size in bytes of the native structure.
    const SIZE: usize = mem::size_of::<Self>();

    /// Borrow the descriptor as the native byte sequence.
    fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Reconstruct a descriptor from exactly [`Self::SIZE`] bytes.
    ///
    /// The slice does not need to be aligned.
    fn from_bytes(bytes: &[u8]) -> DescriptorResult<Self> {
        if bytes.len() != Self::SIZE {
            log::debug!(
                "{}: rejecting {} bytes, expected {}",
                Self::NATIVE_NAME,
                bytes.len(),
                Self::SIZE
            );
            return Err(DescriptorError::SizeMismatch {
                native: Self::NATIVE_NAME,
                expected: Self::SIZE,
                actual: bytes.len(),
            });
        }
        Ok(bytemuck::pod_read_unaligned(bytes))
    }

    /// Read a descriptor from the front of a larger memory block.
    ///
    /// Returns the descriptor and the bytes following it.
    fn read_prefix(bytes: &[u8]) -> DescriptorResult<(Self, &[u8])> {
        if bytes.len() < Self::SIZE {
            log::debug!(
                "{}: block of {} bytes is shorter than {}",
                Self::NATIVE_NAME,
                bytes.len(),
                Self::SIZE
            );
            return Err(DescriptorError::BufferTooSmall {
                native: Self::NATIVE_NAME,
                required: Self::SIZE,
                available: bytes.len(),
            });
        }
        let (head, rest) = bytes.split_at(Self::SIZE);
        Ok((bytemuck::pod_read_unaligned(head), rest))
    }

    /// Copy the native bytes into the front of `out`.
    ///
    /// Returns the number of bytes written.
    fn write_to(&self, out: &mut [u8]) -> DescriptorResult<usize> {
        let available = out.len();
        let Some(dst) = out.get_mut(..Self::SIZE) else {
            return Err(DescriptorError::BufferTooSmall {
                native: Self::NATIVE_NAME,
                required: Self::SIZE,
                available,
            });
        };
        dst.copy_from_slice(self.as_bytes());
        Ok(Self::SIZE)
    }

    /// Compare against a value of any type.
    ///
    /// A value of a different type is never equal.
    fn equals(&self, other: &dyn Any) -> bool {
        other
            .downcast_ref::<Self>()
            .is_some_and(|other| self == other)
    }

    /// Negation of [`NativeLayout::equals`].
    fn not_equals(&self, other: &dyn Any) -> bool {
        !self.equals(other)
    }

    /// Deterministic hash over every field, placeholders included.
    fn hash_code(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

/// Implement [`NativeLayout`] and pin the native size, 4-byte alignment and
/// `Send + Sync`.
macro_rules! native_layout {
    ($($ty:ty => $native:literal, $size:literal;)+) => {
        $(
            static_assertions::assert_eq_size!($ty, [u8; $size]);
            static_assertions::const_assert_eq!(::core::mem::align_of::<$ty>(), 4);
            static_assertions::assert_impl_all!($ty: Send, Sync);

            impl $crate::layout::NativeLayout for $ty {
                const NATIVE_NAME: &'static str = $native;
            }
        )+
    };
}

/// Assert that every listed descriptor fits inside a native union payload.
macro_rules! assert_fits_payload {
    ($payload:ty; $($ty:ty),+ $(,)?) => {
        $(
            static_assertions::const_assert!(
                ::core::mem::size_of::<$ty>() <= ::core::mem::size_of::<$payload>()
            );
        )+
    };
}

pub(crate) use assert_fits_payload;
pub(crate) use native_layout;

/// Pack a sub-descriptor into the words of a native union, zeroing the rest.
///
/// Callers guarantee the fit with [`assert_fits_payload!`].
pub(crate) fn pack_payload<T: NativeLayout, const N: usize>(desc: &T) -> [u32; N] {
    let mut words = [0u32; N];
    let bytes: &mut [u8] = bytemuck::cast_slice_mut(&mut words);
    bytes[..T::SIZE].copy_from_slice(desc.as_bytes());
    words
}

/// Read the active sub-descriptor out of the words of a native union.
pub(crate) fn unpack_payload<T: NativeLayout, const N: usize>(
    words: &[u32; N],
) -> DescriptorResult<T> {
    T::read_prefix(bytemuck::cast_slice(words)).map(|(desc, _)| desc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytemuck::Zeroable;

    #[repr(C)]
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
    struct Pair {
        a: u32,
        b: u32,
    }

    native_layout! {
        Pair => "PAIR", 8;
    }

    #[test]
    fn test_from_bytes_rejects_wrong_length() {
        let err = Pair::from_bytes(&[0u8; 7]).unwrap_err();
        assert_eq!(
            err,
            DescriptorError::SizeMismatch {
                native: "PAIR",
                expected: 8,
                actual: 7,
            }
        );
        assert!(Pair::from_bytes(&[0u8; 9]).is_err());
    }

    #[test]
    fn test_read_prefix_returns_remainder() {
        let pair = Pair { a: 1, b: 2 };
        let mut block = pair.as_bytes().to_vec();
        block.extend_from_slice(&[0xAA, 0xBB]);

        let (read, rest) = Pair::read_prefix(&block).unwrap();
        assert_eq!(read, pair);
        assert_eq!(rest, &[0xAA, 0xBB]);
    }

    #[test]
    fn test_read_prefix_unaligned() {
        let pair = Pair { a: 7, b: 9 };
        let mut block = vec![0u8];
        block.extend_from_slice(pair.as_bytes());

        let (read, rest) = Pair::read_prefix(&block[1..]).unwrap();
        assert_eq!(read, pair);
        assert!(rest.is_empty());
    }

    #[test]
    fn test_read_prefix_short_block() {
        assert_eq!(
            Pair::read_prefix(&[0u8; 7]).unwrap_err(),
            DescriptorError::BufferTooSmall {
                native: "PAIR",
                required: 8,
                available: 7,
            }
        );
        assert!(Pair::read_prefix(&[]).is_err());
    }

    #[test]
    fn test_write_to() {
        let pair = Pair { a: 0x0102_0304, b: 0 };
        let mut out = [0xFFu8; 10];
        assert_eq!(pair.write_to(&mut out).unwrap(), 8);
        assert_eq!(&out[..4], &0x0102_0304u32.to_ne_bytes());
        assert_eq!(&out[8..], &[0xFF, 0xFF]);

        let mut short = [0u8; 4];
        assert_eq!(
            pair.write_to(&mut short).unwrap_err(),
            DescriptorError::BufferTooSmall {
                native: "PAIR",
                required: 8,
                available: 4,
            }
        );
    }

    #[test]
    fn test_equals_other_type_is_false() {
        let pair = Pair::zeroed();
        assert!(pair.equals(&Pair::default()));
        assert!(!pair.equals(&0u64));
        assert!(pair.not_equals(&"PAIR"));
    }

    #[test]
    fn test_payload_roundtrip_zeroes_tail() {
        let words: [u32; 4] = pack_payload(&Pair { a: 5, b: 6 });
        assert_eq!(words, [5, 6, 0, 0]);
        assert_eq!(unpack_payload::<Pair, 4>(&words).unwrap(), Pair { a: 5, b: 6 });
    }
}
