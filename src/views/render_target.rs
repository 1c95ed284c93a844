//! Render-target view descriptors (`D3D11_RENDER_TARGET_VIEW_DESC` family).

use bytemuck::{Pod, Zeroable};

use super::shapes::{
    depth_slice_view, element_range_view, mip_slice_array_view, mip_slice_view,
    multisample_array_view, multisample_view, view_variants,
};
use crate::error::{DescriptorError, DescriptorResult};
use crate::format::DxgiFormat;
use crate::layout::{assert_fits_payload, native_layout, pack_payload, unpack_payload, NativeLayout};

element_range_view! {
    /// Elements of a buffer bound as a render target (`D3D11_BUFFER_RTV`).
    BufferRtv => "D3D11_BUFFER_RTV"
}

mip_slice_view! {
    /// One mip level of a 1D texture (`D3D11_TEX1D_RTV`).
    Tex1dRtv => "D3D11_TEX1D_RTV"
}

mip_slice_array_view! {
    /// One mip level of a range of 1D texture array slices (`D3D11_TEX1D_ARRAY_RTV`).
    Tex1dArrayRtv => "D3D11_TEX1D_ARRAY_RTV"
}

mip_slice_view! {
    /// One mip level of a 2D texture (`D3D11_TEX2D_RTV`).
    Tex2dRtv => "D3D11_TEX2D_RTV"
}

mip_slice_array_view! {
    /// One mip level of a range of 2D texture array slices (`D3D11_TEX2D_ARRAY_RTV`).
    Tex2dArrayRtv => "D3D11_TEX2D_ARRAY_RTV"
}

multisample_view! {
    /// A multisampled 2D texture (`D3D11_TEX2DMS_RTV`).
    Tex2dMsRtv => "D3D11_TEX2DMS_RTV"
}

multisample_array_view! {
    /// A range of multisampled 2D texture array slices (`D3D11_TEX2DMS_ARRAY_RTV`).
    Tex2dMsArrayRtv => "D3D11_TEX2DMS_ARRAY_RTV"
}

depth_slice_view! {
    /// Depth slices of one mip level of a 3D texture (`D3D11_TEX3D_RTV`).
    Tex3dRtv => "D3D11_TEX3D_RTV"
}

/// `D3D11_RTV_DIMENSION`.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RtvDimension {
    Unknown = 0,
    Buffer = 1,
    Texture1d = 2,
    Texture1dArray = 3,
    Texture2d = 4,
    Texture2dArray = 5,
    Texture2dMs = 6,
    Texture2dMsArray = 7,
    Texture3d = 8,
}

impl TryFrom<u32> for RtvDimension {
    type Error = DescriptorError;

    fn try_from(value: u32) -> DescriptorResult<Self> {
        Ok(match value {
            0 => Self::Unknown,
            1 => Self::Buffer,
            2 => Self::Texture1d,
            3 => Self::Texture1dArray,
            4 => Self::Texture2d,
            5 => Self::Texture2dArray,
            6 => Self::Texture2dMs,
            7 => Self::Texture2dMsArray,
            8 => Self::Texture3d,
            _ => {
                return Err(DescriptorError::UnknownDimension {
                    native: "D3D11_RTV_DIMENSION",
                    value,
                })
            }
        })
    }
}

/// Native `D3D11_RENDER_TARGET_VIEW_DESC`, union kept as raw words.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct RawRenderTargetViewDesc {
    pub format: DxgiFormat,
    pub view_dimension: u32,
    pub payload: [u32; 3],
}

native_layout! {
    RawRenderTargetViewDesc => "D3D11_RENDER_TARGET_VIEW_DESC", 20;
}

assert_fits_payload!([u32; 3];
    BufferRtv, Tex1dRtv, Tex1dArrayRtv, Tex2dRtv, Tex2dArrayRtv, Tex2dMsRtv, Tex2dMsArrayRtv, Tex3dRtv,
);

/// The subresource selection of a render-target view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderTargetView {
    Buffer(BufferRtv),
    Texture1d(Tex1dRtv),
    Texture1dArray(Tex1dArrayRtv),
    Texture2d(Tex2dRtv),
    Texture2dArray(Tex2dArrayRtv),
    Texture2dMs(Tex2dMsRtv),
    Texture2dMsArray(Tex2dMsArrayRtv),
    Texture3d(Tex3dRtv),
}

view_variants!(RenderTargetView {
    Buffer(BufferRtv),
    Texture1d(Tex1dRtv),
    Texture1dArray(Tex1dArrayRtv),
    Texture2d(Tex2dRtv),
    Texture2dArray(Tex2dArrayRtv),
    Texture2dMs(Tex2dMsRtv),
    Texture2dMsArray(Tex2dMsArrayRtv),
    Texture3d(Tex3dRtv),
});

impl RenderTargetView {
    /// The native dimension tag for this variant.
    pub fn dimension(&self) -> RtvDimension {
        match self {
            Self::Buffer(_) => RtvDimension::Buffer,
            Self::Texture1d(_) => RtvDimension::Texture1d,
            Self::Texture1dArray(_) => RtvDimension::Texture1dArray,
            Self::Texture2d(_) => RtvDimension::Texture2d,
            Self::Texture2dArray(_) => RtvDimension::Texture2dArray,
            Self::Texture2dMs(_) => RtvDimension::Texture2dMs,
            Self::Texture2dMsArray(_) => RtvDimension::Texture2dMsArray,
            Self::Texture3d(_) => RtvDimension::Texture3d,
        }
    }
}

/// Typed `D3D11_RENDER_TARGET_VIEW_DESC`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderTargetViewDesc {
    /// Format the resource is interpreted as.
    pub format: DxgiFormat,
    /// Which subresources the view covers.
    pub view: RenderTargetView,
}

static_assertions::assert_impl_all!(RenderTargetView: Send, Sync);
static_assertions::assert_impl_all!(RenderTargetViewDesc: Send, Sync);

impl RenderTargetViewDesc {
    /// Create a new render-target view description.
    pub fn new(format: DxgiFormat, view: impl Into<RenderTargetView>) -> Self {
        Self {
            format,
            view: view.into(),
        }
    }

    /// Pack into the native layout.
    ///
    /// Union words past the active variant are written as zero.
    pub fn to_raw(&self) -> RawRenderTargetViewDesc {
        let payload = match &self.view {
            RenderTargetView::Buffer(desc) => pack_payload(desc),
            RenderTargetView::Texture1d(desc) => pack_payload(desc),
            RenderTargetView::Texture1dArray(desc) => pack_payload(desc),
            RenderTargetView::Texture2d(desc) => pack_payload(desc),
            RenderTargetView::Texture2dArray(desc) => pack_payload(desc),
            RenderTargetView::Texture2dMs(desc) => pack_payload(desc),
            RenderTargetView::Texture2dMsArray(desc) => pack_payload(desc),
            RenderTargetView::Texture3d(desc) => pack_payload(desc),
        };
        RawRenderTargetViewDesc {
            format: self.format,
            view_dimension: self.view.dimension() as u32,
            payload,
        }
    }

    /// Decode from the native byte layout.
    pub fn from_native_bytes(bytes: &[u8]) -> DescriptorResult<Self> {
        RawRenderTargetViewDesc::from_bytes(bytes)?.try_into()
    }
}

impl From<RenderTargetViewDesc> for RawRenderTargetViewDesc {
    fn from(desc: RenderTargetViewDesc) -> Self {
        desc.to_raw()
    }
}

/// Decoding reads only the words of the variant selected by `view_dimension`.
/// Trailing union words are ignored, so memory filled outside this crate may not
/// survive `try_from` followed by [`RenderTargetViewDesc::to_raw`] byte for byte.
impl TryFrom<RawRenderTargetViewDesc> for RenderTargetViewDesc {
    type Error = DescriptorError;

    fn try_from(raw: RawRenderTargetViewDesc) -> DescriptorResult<Self> {
        let words = &raw.payload;
        let dimension =
            RtvDimension::try_from(raw.view_dimension).inspect_err(|err| log::debug!("{err}"))?;
        let view = match dimension {
            RtvDimension::Unknown => {
                log::debug!(
                    "{}: view dimension is UNKNOWN",
                    RawRenderTargetViewDesc::NATIVE_NAME
                );
                return Err(DescriptorError::UnknownDimension {
                    native: RawRenderTargetViewDesc::NATIVE_NAME,
                    value: raw.view_dimension,
                });
            }
            RtvDimension::Buffer => RenderTargetView::Buffer(unpack_payload(words)?),
            RtvDimension::Texture1d => RenderTargetView::Texture1d(unpack_payload(words)?),
            RtvDimension::Texture1dArray => RenderTargetView::Texture1dArray(unpack_payload(words)?),
            RtvDimension::Texture2d => RenderTargetView::Texture2d(unpack_payload(words)?),
            RtvDimension::Texture2dArray => RenderTargetView::Texture2dArray(unpack_payload(words)?),
            RtvDimension::Texture2dMs => RenderTargetView::Texture2dMs(unpack_payload(words)?),
            RtvDimension::Texture2dMsArray => {
                RenderTargetView::Texture2dMsArray(unpack_payload(words)?)
            }
            RtvDimension::Texture3d => RenderTargetView::Texture3d(unpack_payload(words)?),
        };
        Ok(Self {
            format: raw.format,
            view,
        })
    }
}
