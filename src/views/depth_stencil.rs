//! Depth-stencil view descriptors (`D3D11_DEPTH_STENCIL_VIEW_DESC` family).

use bitflags::bitflags;
use bytemuck::{Pod, Zeroable};

use super::shapes::{
    mip_slice_array_view, mip_slice_view, multisample_array_view, multisample_view, view_variants,
};
use crate::error::{DescriptorError, DescriptorResult};
use crate::format::DxgiFormat;
use crate::layout::{assert_fits_payload, native_layout, pack_payload, unpack_payload, NativeLayout};

mip_slice_view! {
    /// One mip level of a 1D depth texture (`D3D11_TEX1D_DSV`).
    Tex1dDsv => "D3D11_TEX1D_DSV"
}

mip_slice_array_view! {
    /// One mip level of a range of 1D depth array slices (`D3D11_TEX1D_ARRAY_DSV`).
    Tex1dArrayDsv => "D3D11_TEX1D_ARRAY_DSV"
}

mip_slice_view! {
    /// One mip level of a 2D depth texture (`D3D11_TEX2D_DSV`).
    Tex2dDsv => "D3D11_TEX2D_DSV"
}

mip_slice_array_view! {
    /// One mip level of a range of 2D depth array slices (`D3D11_TEX2D_ARRAY_DSV`).
    Tex2dArrayDsv => "D3D11_TEX2D_ARRAY_DSV"
}

multisample_view! {
    /// A multisampled 2D depth texture (`D3D11_TEX2DMS_DSV`).
    Tex2dMsDsv => "D3D11_TEX2DMS_DSV"
}

multisample_array_view! {
    /// A range of multisampled 2D depth array slices (`D3D11_TEX2DMS_ARRAY_DSV`).
    Tex2dMsArrayDsv => "D3D11_TEX2DMS_ARRAY_DSV"
}

bitflags! {
    /// `D3D11_DSV_FLAG`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct DsvFlags: u32 {
        /// Depth is bound read-only.
        const READ_ONLY_DEPTH = 0x1;
        /// Stencil is bound read-only.
        const READ_ONLY_STENCIL = 0x2;
    }
}

impl Default for DsvFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// `D3D11_DSV_DIMENSION`.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DsvDimension {
    Unknown = 0,
    Texture1d = 1,
    Texture1dArray = 2,
    Texture2d = 3,
    Texture2dArray = 4,
    Texture2dMs = 5,
    Texture2dMsArray = 6,
}

impl TryFrom<u32> for DsvDimension {
    type Error = DescriptorError;

    fn try_from(value: u32) -> DescriptorResult<Self> {
        Ok(match value {
            0 => Self::Unknown,
            1 => Self::Texture1d,
            2 => Self::Texture1dArray,
            3 => Self::Texture2d,
            4 => Self::Texture2dArray,
            5 => Self::Texture2dMs,
            6 => Self::Texture2dMsArray,
            _ => {
                return Err(DescriptorError::UnknownDimension {
                    native: "D3D11_DSV_DIMENSION",
                    value,
                })
            }
        })
    }
}

/// Native `D3D11_DEPTH_STENCIL_VIEW_DESC`, union kept as raw words.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct RawDepthStencilViewDesc {
    pub format: DxgiFormat,
    pub view_dimension: u32,
    pub flags: u32,
    pub payload: [u32; 3],
}

native_layout! {
    RawDepthStencilViewDesc => "D3D11_DEPTH_STENCIL_VIEW_DESC", 24;
}

assert_fits_payload!([u32; 3];
    Tex1dDsv, Tex1dArrayDsv, Tex2dDsv, Tex2dArrayDsv, Tex2dMsDsv, Tex2dMsArrayDsv,
);

/// The subresource selection of a depth-stencil view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DepthStencilView {
    Texture1d(Tex1dDsv),
    Texture1dArray(Tex1dArrayDsv),
    Texture2d(Tex2dDsv),
    Texture2dArray(Tex2dArrayDsv),
    Texture2dMs(Tex2dMsDsv),
    Texture2dMsArray(Tex2dMsArrayDsv),
}

view_variants!(DepthStencilView {
    Texture1d(Tex1dDsv),
    Texture1dArray(Tex1dArrayDsv),
    Texture2d(Tex2dDsv),
    Texture2dArray(Tex2dArrayDsv),
    Texture2dMs(Tex2dMsDsv),
    Texture2dMsArray(Tex2dMsArrayDsv),
});

impl DepthStencilView {
    /// The native dimension tag for this variant.
    pub fn dimension(&self) -> DsvDimension {
        match self {
            Self::Texture1d(_) => DsvDimension::Texture1d,
            Self::Texture1dArray(_) => DsvDimension::Texture1dArray,
            Self::Texture2d(_) => DsvDimension::Texture2d,
            Self::Texture2dArray(_) => DsvDimension::Texture2dArray,
            Self::Texture2dMs(_) => DsvDimension::Texture2dMs,
            Self::Texture2dMsArray(_) => DsvDimension::Texture2dMsArray,
        }
    }
}

/// Typed `D3D11_DEPTH_STENCIL_VIEW_DESC`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DepthStencilViewDesc {
    /// Format the resource is interpreted as.
    pub format: DxgiFormat,
    /// Read-only flags. Unknown bits are kept as-is.
    pub flags: DsvFlags,
    /// Which subresources the view covers.
    pub view: DepthStencilView,
}

static_assertions::assert_impl_all!(DepthStencilView: Send, Sync);
static_assertions::assert_impl_all!(DepthStencilViewDesc: Send, Sync);

impl DepthStencilViewDesc {
    /// Create a new depth-stencil view description with no flags.
    pub fn new(format: DxgiFormat, view: impl Into<DepthStencilView>) -> Self {
        Self {
            format,
            flags: DsvFlags::empty(),
            view: view.into(),
        }
    }

    /// Set the read-only flags.
    pub fn with_flags(mut self, flags: DsvFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Pack into the native layout.
    ///
    /// Union words past the active variant are written as zero.
    pub fn to_raw(&self) -> RawDepthStencilViewDesc {
        let payload = match &self.view {
            DepthStencilView::Texture1d(desc) => pack_payload(desc),
            DepthStencilView::Texture1dArray(desc) => pack_payload(desc),
            DepthStencilView::Texture2d(desc) => pack_payload(desc),
            DepthStencilView::Texture2dArray(desc) => pack_payload(desc),
            DepthStencilView::Texture2dMs(desc) => pack_payload(desc),
            DepthStencilView::Texture2dMsArray(desc) => pack_payload(desc),
        };
        RawDepthStencilViewDesc {
            format: self.format,
            view_dimension: self.view.dimension() as u32,
            flags: self.flags.bits(),
            payload,
        }
    }

    /// Decode from the native byte layout.
    pub fn from_native_bytes(bytes: &[u8]) -> DescriptorResult<Self> {
        RawDepthStencilViewDesc::from_bytes(bytes)?.try_into()
    }
}

impl From<DepthStencilViewDesc> for RawDepthStencilViewDesc {
    fn from(desc: DepthStencilViewDesc) -> Self {
        desc.to_raw()
    }
}

/// Decoding reads only the words of the variant selected by `view_dimension`.
/// Trailing union words are ignored, so memory filled outside this crate may not
/// survive `try_from` followed by [`DepthStencilViewDesc::to_raw`] byte for byte.
impl TryFrom<RawDepthStencilViewDesc> for DepthStencilViewDesc {
    type Error = DescriptorError;

    fn try_from(raw: RawDepthStencilViewDesc) -> DescriptorResult<Self> {
        let words = &raw.payload;
        let dimension =
            DsvDimension::try_from(raw.view_dimension).inspect_err(|err| log::debug!("{err}"))?;
        let view = match dimension {
            DsvDimension::Unknown => {
                log::debug!(
                    "{}: view dimension is UNKNOWN",
                    RawDepthStencilViewDesc::NATIVE_NAME
                );
                return Err(DescriptorError::UnknownDimension {
                    native: RawDepthStencilViewDesc::NATIVE_NAME,
                    value: raw.view_dimension,
                });
            }
            DsvDimension::Texture1d => DepthStencilView::Texture1d(unpack_payload(words)?),
            DsvDimension::Texture1dArray => DepthStencilView::Texture1dArray(unpack_payload(words)?),
            DsvDimension::Texture2d => DepthStencilView::Texture2d(unpack_payload(words)?),
            DsvDimension::Texture2dArray => DepthStencilView::Texture2dArray(unpack_payload(words)?),
            DsvDimension::Texture2dMs => DepthStencilView::Texture2dMs(unpack_payload(words)?),
            DsvDimension::Texture2dMsArray => {
                DepthStencilView::Texture2dMsArray(unpack_payload(words)?)
            }
        };
        Ok(Self {
            format: raw.format,
            flags: DsvFlags::from_bits_retain(raw.flags),
            view,
        })
    }
}
