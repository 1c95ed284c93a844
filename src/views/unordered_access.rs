//! Unordered-access view descriptors (`D3D11_UNORDERED_ACCESS_VIEW_DESC` family).

use bitflags::bitflags;
use bytemuck::{Pod, Zeroable};

use super::shapes::{depth_slice_view, mip_slice_array_view, mip_slice_view, view_variants};
use crate::error::{DescriptorError, DescriptorResult};
use crate::format::DxgiFormat;
use crate::layout::{assert_fits_payload, native_layout, pack_payload, unpack_payload, NativeLayout};

bitflags! {
    /// `D3D11_BUFFER_UAV_FLAG`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BufferUavFlags: u32 {
        /// Raw (byte-address) buffer view.
        const RAW = 0x1;
        /// Append/consume buffer.
        const APPEND = 0x2;
        /// Structured buffer with a hidden counter.
        const COUNTER = 0x4;
    }
}

impl Default for BufferUavFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// Elements of a buffer bound for unordered access (`D3D11_BUFFER_UAV`).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct BufferUav {
    /// Index of the first element to access.
    pub first_element: u32,
    /// Number of elements in the view.
    pub num_elements: u32,
    /// Raw `D3D11_BUFFER_UAV_FLAG` bits.
    pub flags: u32,
}

impl BufferUav {
    /// Create a view of `num_elements` elements starting at `first_element`.
    pub const fn new(first_element: u32, num_elements: u32, flags: BufferUavFlags) -> Self {
        Self {
            first_element,
            num_elements,
            flags: flags.bits(),
        }
    }

    /// Typed view of [`flags`](Self::flags). Unknown bits are retained.
    pub const fn buffer_flags(&self) -> BufferUavFlags {
        BufferUavFlags::from_bits_retain(self.flags)
    }

    /// Replace the buffer flags.
    pub fn with_buffer_flags(mut self, flags: BufferUavFlags) -> Self {
        self.flags = flags.bits();
        self
    }
}

native_layout! {
    BufferUav => "D3D11_BUFFER_UAV", 12;
}

mip_slice_view! {
    /// One mip level of a 1D texture (`D3D11_TEX1D_UAV`).
    Tex1dUav => "D3D11_TEX1D_UAV"
}

mip_slice_array_view! {
    /// One mip level of a range of 1D texture array slices (`D3D11_TEX1D_ARRAY_UAV`).
    Tex1dArrayUav => "D3D11_TEX1D_ARRAY_UAV"
}

mip_slice_view! {
    /// One mip level of a 2D texture (`D3D11_TEX2D_UAV`).
    Tex2dUav => "D3D11_TEX2D_UAV"
}

mip_slice_array_view! {
    /// One mip level of a range of 2D texture array slices (`D3D11_TEX2D_ARRAY_UAV`).
    Tex2dArrayUav => "D3D11_TEX2D_ARRAY_UAV"
}

depth_slice_view! {
    /// Depth slices of one mip level of a 3D texture (`D3D11_TEX3D_UAV`).
    Tex3dUav => "D3D11_TEX3D_UAV"
}

/// `D3D11_UAV_DIMENSION`. Values 6 and 7 are not used by the native enum.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UavDimension {
    Unknown = 0,
    Buffer = 1,
    Texture1d = 2,
    Texture1dArray = 3,
    Texture2d = 4,
    Texture2dArray = 5,
    Texture3d = 8,
}

impl TryFrom<u32> for UavDimension {
    type Error = DescriptorError;

    fn try_from(value: u32) -> DescriptorResult<Self> {
        Ok(match value {
            0 => Self::Unknown,
            1 => Self::Buffer,
            2 => Self::Texture1d,
            3 => Self::Texture1dArray,
            4 => Self::Texture2d,
            5 => Self::Texture2dArray,
            8 => Self::Texture3d,
            _ => {
                return Err(DescriptorError::UnknownDimension {
                    native: "D3D11_UAV_DIMENSION",
                    value,
                })
            }
        })
    }
}

/// Native `D3D11_UNORDERED_ACCESS_VIEW_DESC`, union kept as raw words.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct RawUnorderedAccessViewDesc {
    pub format: DxgiFormat,
    pub view_dimension: u32,
    pub payload: [u32; 3],
}

native_layout! {
    RawUnorderedAccessViewDesc => "D3D11_UNORDERED_ACCESS_VIEW_DESC", 20;
}

assert_fits_payload!([u32; 3];
    BufferUav, Tex1dUav, Tex1dArrayUav, Tex2dUav, Tex2dArrayUav, Tex3dUav,
);

/// The subresource selection of an unordered-access view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnorderedAccessView {
    Buffer(BufferUav),
    Texture1d(Tex1dUav),
    Texture1dArray(Tex1dArrayUav),
    Texture2d(Tex2dUav),
    Texture2dArray(Tex2dArrayUav),
    Texture3d(Tex3dUav),
}

view_variants!(UnorderedAccessView {
    Buffer(BufferUav),
    Texture1d(Tex1dUav),
    Texture1dArray(Tex1dArrayUav),
    Texture2d(Tex2dUav),
    Texture2dArray(Tex2dArrayUav),
    Texture3d(Tex3dUav),
});

impl UnorderedAccessView {
    /// The native dimension tag for this variant.
    pub fn dimension(&self) -> UavDimension {
        match self {
            Self::Buffer(_) => UavDimension::Buffer,
            Self::Texture1d(_) => UavDimension::Texture1d,
            Self::Texture1dArray(_) => UavDimension::Texture1dArray,
            Self::Texture2d(_) => UavDimension::Texture2d,
            Self::Texture2dArray(_) => UavDimension::Texture2dArray,
            Self::Texture3d(_) => UavDimension::Texture3d,
        }
    }
}

/// Typed `D3D11_UNORDERED_ACCESS_VIEW_DESC`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnorderedAccessViewDesc {
    /// Format the resource is interpreted as.
    pub format: DxgiFormat,
    /// Which subresources the view covers.
    pub view: UnorderedAccessView,
}

static_assertions::assert_impl_all!(UnorderedAccessView: Send, Sync);
static_assertions::assert_impl_all!(UnorderedAccessViewDesc: Send, Sync);

impl UnorderedAccessViewDesc {
    /// Create a new unordered-access view description.
    pub fn new(format: DxgiFormat, view: impl Into<UnorderedAccessView>) -> Self {
        Self {
            format,
            view: view.into(),
        }
    }

    /// Pack into the native layout.
    ///
    /// Union words past the active variant are written as zero.
    pub fn to_raw(&self) -> RawUnorderedAccessViewDesc {
        let payload = match &self.view {
            UnorderedAccessView::Buffer(desc) => pack_payload(desc),
            UnorderedAccessView::Texture1d(desc) => pack_payload(desc),
            UnorderedAccessView::Texture1dArray(desc) => pack_payload(desc),
            UnorderedAccessView::Texture2d(desc) => pack_payload(desc),
            UnorderedAccessView::Texture2dArray(desc) => pack_payload(desc),
            UnorderedAccessView::Texture3d(desc) => pack_payload(desc),
        };
        RawUnorderedAccessViewDesc {
            format: self.format,
            view_dimension: self.view.dimension() as u32,
            payload,
        }
    }

    /// Decode from the native byte layout.
    pub fn from_native_bytes(bytes: &[u8]) -> DescriptorResult<Self> {
        RawUnorderedAccessViewDesc::from_bytes(bytes)?.try_into()
    }
}

impl From<UnorderedAccessViewDesc> for RawUnorderedAccessViewDesc {
    fn from(desc: UnorderedAccessViewDesc) -> Self {
        desc.to_raw()
    }
}

/// Decoding reads only the words of the variant selected by `view_dimension`.
/// Trailing union words are ignored, so memory filled outside this crate may not
/// survive `try_from` followed by [`UnorderedAccessViewDesc::to_raw`] byte for byte.
impl TryFrom<RawUnorderedAccessViewDesc> for UnorderedAccessViewDesc {
    type Error = DescriptorError;

    fn try_from(raw: RawUnorderedAccessViewDesc) -> DescriptorResult<Self> {
        let words = &raw.payload;
        let dimension =
            UavDimension::try_from(raw.view_dimension).inspect_err(|err| log::debug!("{err}"))?;
        let view = match dimension {
            UavDimension::Unknown => {
                log::debug!(
                    "{}: view dimension is UNKNOWN",
                    RawUnorderedAccessViewDesc::NATIVE_NAME
                );
                return Err(DescriptorError::UnknownDimension {
                    native: RawUnorderedAccessViewDesc::NATIVE_NAME,
                    value: raw.view_dimension,
                });
            }
            UavDimension::Buffer => UnorderedAccessView::Buffer(unpack_payload(words)?),
            UavDimension::Texture1d => UnorderedAccessView::Texture1d(unpack_payload(words)?),
            UavDimension::Texture1dArray => {
                UnorderedAccessView::Texture1dArray(unpack_payload(words)?)
            }
            UavDimension::Texture2d => UnorderedAccessView::Texture2d(unpack_payload(words)?),
            UavDimension::Texture2dArray => {
                UnorderedAccessView::Texture2dArray(unpack_payload(words)?)
            }
            UavDimension::Texture3d => UnorderedAccessView::Texture3d(unpack_payload(words)?),
        };
        Ok(Self {
            format: raw.format,
            view,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_flags() {
        let desc = BufferUav::new(0, 64, BufferUavFlags::APPEND | BufferUavFlags::COUNTER);
        assert_eq!(desc.flags, 0x6);
        assert!(desc.buffer_flags().contains(BufferUavFlags::COUNTER));
        assert!(!desc.buffer_flags().contains(BufferUavFlags::RAW));
        assert_eq!(
            desc.with_buffer_flags(BufferUavFlags::RAW),
            BufferUav::new(0, 64, BufferUavFlags::RAW)
        );
    }

    #[test]
    fn test_foreign_flag_bits_kept() {
        let desc = BufferUav {
            first_element: 0,
            num_elements: 1,
            flags: 0x81,
        };
        assert_eq!(desc.buffer_flags().bits(), 0x81);
    }

    #[test]
    fn test_tex3d_roundtrip() {
        let desc = UnorderedAccessViewDesc::new(
            DxgiFormat::R32_FLOAT,
            Tex3dUav::new(0, 0, u32::MAX),
        );
        let raw = desc.to_raw();
        assert_eq!(raw.view_dimension, 8);
        assert_eq!(
            UnorderedAccessViewDesc::from_native_bytes(raw.as_bytes()).unwrap(),
            desc
        );
    }

    #[test]
    fn test_depth_slice_builders() {
        let desc = Tex3dUav::default().with_mip_slice(2).with_w_slices(4, 8);
        assert_eq!(desc, Tex3dUav::new(2, 4, 8));
    }

    #[test]
    fn test_gap_dimensions_rejected() {
        for value in [6, 7, 9] {
            assert!(UavDimension::try_from(value).is_err());
        }
    }

    #[test]
    fn test_tex2d_uav_differs_from_tex2d_rtv() {
        use crate::views::render_target::Tex2dRtv;

        let uav = Tex2dUav::new(1);
        let rtv = Tex2dRtv::new(1);
        assert_eq!(uav.as_bytes(), rtv.as_bytes());
        assert!(!uav.equals(&rtv));
    }
}
