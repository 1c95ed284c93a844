//! Shader-resource view descriptors (`D3D11_SHADER_RESOURCE_VIEW_DESC` family).

use bitflags::bitflags;
use bytemuck::{Pod, Zeroable};

use super::shapes::{
    element_range_view, mip_range_array_view, mip_range_view, multisample_array_view,
    multisample_view, view_variants,
};
use crate::error::{DescriptorError, DescriptorResult};
use crate::format::DxgiFormat;
use crate::layout::{assert_fits_payload, native_layout, pack_payload, unpack_payload, NativeLayout};

element_range_view! {
    /// Elements of a buffer read by a shader (`D3D11_BUFFER_SRV`).
    BufferSrv => "D3D11_BUFFER_SRV"
}

mip_range_view! {
    /// A mip range of a 1D texture (`D3D11_TEX1D_SRV`).
    Tex1dSrv => "D3D11_TEX1D_SRV"
}

mip_range_array_view! {
    /// A mip range of a range of 1D texture array slices (`D3D11_TEX1D_ARRAY_SRV`).
    Tex1dArraySrv => "D3D11_TEX1D_ARRAY_SRV"
}

mip_range_view! {
    /// A mip range of a 2D texture (`D3D11_TEX2D_SRV`).
    Tex2dSrv => "D3D11_TEX2D_SRV"
}

mip_range_array_view! {
    /// A mip range of a range of 2D texture array slices (`D3D11_TEX2D_ARRAY_SRV`).
    Tex2dArraySrv => "D3D11_TEX2D_ARRAY_SRV"
}

multisample_view! {
    /// A multisampled 2D texture (`D3D11_TEX2DMS_SRV`).
    Tex2dMsSrv => "D3D11_TEX2DMS_SRV"
}

multisample_array_view! {
    /// A range of multisampled 2D texture array slices (`D3D11_TEX2DMS_ARRAY_SRV`).
    Tex2dMsArraySrv => "D3D11_TEX2DMS_ARRAY_SRV"
}

mip_range_view! {
    /// A mip range of a 3D texture (`D3D11_TEX3D_SRV`).
    Tex3dSrv => "D3D11_TEX3D_SRV"
}

mip_range_view! {
    /// A mip range of a cube texture (`D3D11_TEXCUBE_SRV`).
    TexCubeSrv => "D3D11_TEXCUBE_SRV"
}

/// A mip range of a range of cubes in a cube array (`D3D11_TEXCUBE_ARRAY_SRV`).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct TexCubeArraySrv {
    /// Index of the most detailed mip level to use.
    pub most_detailed_mip: u32,
    /// Number of mip levels, or [`ALL_MIPS`](super::ALL_MIPS).
    pub mip_levels: u32,
    /// Index of the first 2D face in the array. Six faces make a cube.
    pub first_2d_array_face: u32,
    /// Number of cubes.
    pub num_cubes: u32,
}

impl TexCubeArraySrv {
    /// Create a descriptor selecting a mip range of `num_cubes` cubes.
    pub const fn new(
        most_detailed_mip: u32,
        mip_levels: u32,
        first_2d_array_face: u32,
        num_cubes: u32,
    ) -> Self {
        Self {
            most_detailed_mip,
            mip_levels,
            first_2d_array_face,
            num_cubes,
        }
    }

    /// Set the mip range.
    pub fn with_mips(mut self, most_detailed_mip: u32, mip_levels: u32) -> Self {
        self.most_detailed_mip = most_detailed_mip;
        self.mip_levels = mip_levels;
        self
    }

    /// Set the cube range.
    pub fn with_cubes(mut self, first_2d_array_face: u32, num_cubes: u32) -> Self {
        self.first_2d_array_face = first_2d_array_face;
        self.num_cubes = num_cubes;
        self
    }
}

bitflags! {
    /// `D3D11_BUFFEREX_SRV_FLAG`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BufferExSrvFlags: u32 {
        /// Raw (byte-address) buffer view.
        const RAW = 0x1;
    }
}

impl Default for BufferExSrvFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// Elements of a buffer with extended flags (`D3D11_BUFFEREX_SRV`).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct BufferExSrv {
    /// Index of the first element to access.
    pub first_element: u32,
    /// Number of elements in the view.
    pub num_elements: u32,
    /// Raw `D3D11_BUFFEREX_SRV_FLAG` bits.
    pub flags: u32,
}

impl BufferExSrv {
    /// Create a view of `num_elements` elements starting at `first_element`.
    pub const fn new(first_element: u32, num_elements: u32, flags: BufferExSrvFlags) -> Self {
        Self {
            first_element,
            num_elements,
            flags: flags.bits(),
        }
    }

    /// Typed view of [`flags`](Self::flags). Unknown bits are retained.
    pub const fn buffer_flags(&self) -> BufferExSrvFlags {
        BufferExSrvFlags::from_bits_retain(self.flags)
    }

    /// Replace the buffer flags.
    pub fn with_buffer_flags(mut self, flags: BufferExSrvFlags) -> Self {
        self.flags = flags.bits();
        self
    }
}

native_layout! {
    TexCubeArraySrv => "D3D11_TEXCUBE_ARRAY_SRV", 16;
    BufferExSrv => "D3D11_BUFFEREX_SRV", 12;
}

/// `D3D11_SRV_DIMENSION` (`D3D_SRV_DIMENSION`).
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SrvDimension {
    Unknown = 0,
    Buffer = 1,
    Texture1d = 2,
    Texture1dArray = 3,
    Texture2d = 4,
    Texture2dArray = 5,
    Texture2dMs = 6,
    Texture2dMsArray = 7,
    Texture3d = 8,
    TextureCube = 9,
    TextureCubeArray = 10,
    BufferEx = 11,
}

impl TryFrom<u32> for SrvDimension {
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
            9 => Self::TextureCube,
            10 => Self::TextureCubeArray,
            11 => Self::BufferEx,
            _ => {
                return Err(DescriptorError::UnknownDimension {
                    native: "D3D11_SRV_DIMENSION",
                    value,
                })
            }
        })
    }
}

/// Native `D3D11_SHADER_RESOURCE_VIEW_DESC`, union kept as raw words.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct RawShaderResourceViewDesc {
    pub format: DxgiFormat,
    pub view_dimension: u32,
    pub payload: [u32; 4],
}

native_layout! {
    RawShaderResourceViewDesc => "D3D11_SHADER_RESOURCE_VIEW_DESC", 24;
}

assert_fits_payload!([u32; 4];
    BufferSrv, Tex1dSrv, Tex1dArraySrv, Tex2dSrv, Tex2dArraySrv, Tex2dMsSrv, Tex2dMsArraySrv,
    Tex3dSrv, TexCubeSrv, TexCubeArraySrv, BufferExSrv,
);

/// The subresource selection of a shader-resource view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderResourceView {
    Buffer(BufferSrv),
    Texture1d(Tex1dSrv),
    Texture1dArray(Tex1dArraySrv),
    Texture2d(Tex2dSrv),
    Texture2dArray(Tex2dArraySrv),
    Texture2dMs(Tex2dMsSrv),
    Texture2dMsArray(Tex2dMsArraySrv),
    Texture3d(Tex3dSrv),
    TextureCube(TexCubeSrv),
    TextureCubeArray(TexCubeArraySrv),
    BufferEx(BufferExSrv),
}

view_variants!(ShaderResourceView {
    Buffer(BufferSrv),
    Texture1d(Tex1dSrv),
    Texture1dArray(Tex1dArraySrv),
    Texture2d(Tex2dSrv),
    Texture2dArray(Tex2dArraySrv),
    Texture2dMs(Tex2dMsSrv),
    Texture2dMsArray(Tex2dMsArraySrv),
    Texture3d(Tex3dSrv),
    TextureCube(TexCubeSrv),
    TextureCubeArray(TexCubeArraySrv),
    BufferEx(BufferExSrv),
});

impl ShaderResourceView {
    /// The native dimension tag for this variant.
    pub fn dimension(&self) -> SrvDimension {
        match self {
            Self::Buffer(_) => SrvDimension::Buffer,
            Self::Texture1d(_) => SrvDimension::Texture1d,
            Self::Texture1dArray(_) => SrvDimension::Texture1dArray,
            Self::Texture2d(_) => SrvDimension::Texture2d,
            Self::Texture2dArray(_) => SrvDimension::Texture2dArray,
            Self::Texture2dMs(_) => SrvDimension::Texture2dMs,
            Self::Texture2dMsArray(_) => SrvDimension::Texture2dMsArray,
            Self::Texture3d(_) => SrvDimension::Texture3d,
            Self::TextureCube(_) => SrvDimension::TextureCube,
            Self::TextureCubeArray(_) => SrvDimension::TextureCubeArray,
            Self::BufferEx(_) => SrvDimension::BufferEx,
        }
    }
}

/// Typed `D3D11_SHADER_RESOURCE_VIEW_DESC`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderResourceViewDesc {
    /// Format the resource is interpreted as.
    pub format: DxgiFormat,
    /// Which subresources the view covers.
    pub view: ShaderResourceView,
}

static_assertions::assert_impl_all!(ShaderResourceView: Send, Sync);
static_assertions::assert_impl_all!(ShaderResourceViewDesc: Send, Sync);

impl ShaderResourceViewDesc {
    /// Create a new shader-resource view description.
    pub fn new(format: DxgiFormat, view: impl Into<ShaderResourceView>) -> Self {
        Self {
            format,
            view: view.into(),
        }
    }

    /// Pack into the native layout.
    ///
    /// Union words past the active variant are written as zero.
    pub fn to_raw(&self) -> RawShaderResourceViewDesc {
        let payload = match &self.view {
            ShaderResourceView::Buffer(desc) => pack_payload(desc),
            ShaderResourceView::Texture1d(desc) => pack_payload(desc),
            ShaderResourceView::Texture1dArray(desc) => pack_payload(desc),
            ShaderResourceView::Texture2d(desc) => pack_payload(desc),
            ShaderResourceView::Texture2dArray(desc) => pack_payload(desc),
            ShaderResourceView::Texture2dMs(desc) => pack_payload(desc),
            ShaderResourceView::Texture2dMsArray(desc) => pack_payload(desc),
            ShaderResourceView::Texture3d(desc) => pack_payload(desc),
            ShaderResourceView::TextureCube(desc) => pack_payload(desc),
            ShaderResourceView::TextureCubeArray(desc) => pack_payload(desc),
            ShaderResourceView::BufferEx(desc) => pack_payload(desc),
        };
        RawShaderResourceViewDesc {
            format: self.format,
            view_dimension: self.view.dimension() as u32,
            payload,
        }
    }

    /// Decode from the native byte layout.
    pub fn from_native_bytes(bytes: &[u8]) -> DescriptorResult<Self> {
        RawShaderResourceViewDesc::from_bytes(bytes)?.try_into()
    }
}

impl From<ShaderResourceViewDesc> for RawShaderResourceViewDesc {
    fn from(desc: ShaderResourceViewDesc) -> Self {
        desc.to_raw()
    }
}

/// Decoding reads only the words of the variant selected by `view_dimension`.
/// Trailing union words are ignored, so memory filled outside this crate may not
/// survive `try_from` followed by [`ShaderResourceViewDesc::to_raw`] byte for byte.
impl TryFrom<RawShaderResourceViewDesc> for ShaderResourceViewDesc {
    type Error = DescriptorError;

    fn try_from(raw: RawShaderResourceViewDesc) -> DescriptorResult<Self> {
        let words = &raw.payload;
        let dimension =
            SrvDimension::try_from(raw.view_dimension).inspect_err(|err| log::debug!("{err}"))?;
        let view = match dimension {
            SrvDimension::Unknown => {
                log::debug!(
                    "{}: view dimension is UNKNOWN",
                    RawShaderResourceViewDesc::NATIVE_NAME
                );
                return Err(DescriptorError::UnknownDimension {
                    native: RawShaderResourceViewDesc::NATIVE_NAME,
                    value: raw.view_dimension,
                });
            }
            SrvDimension::Buffer => ShaderResourceView::Buffer(unpack_payload(words)?),
            SrvDimension::Texture1d => ShaderResourceView::Texture1d(unpack_payload(words)?),
            SrvDimension::Texture1dArray => {
                ShaderResourceView::Texture1dArray(unpack_payload(words)?)
            }
            SrvDimension::Texture2d => ShaderResourceView::Texture2d(unpack_payload(words)?),
            SrvDimension::Texture2dArray => {
                ShaderResourceView::Texture2dArray(unpack_payload(words)?)
            }
            SrvDimension::Texture2dMs => ShaderResourceView::Texture2dMs(unpack_payload(words)?),
            SrvDimension::Texture2dMsArray => {
                ShaderResourceView::Texture2dMsArray(unpack_payload(words)?)
            }
            SrvDimension::Texture3d => ShaderResourceView::Texture3d(unpack_payload(words)?),
            SrvDimension::TextureCube => ShaderResourceView::TextureCube(unpack_payload(words)?),
            SrvDimension::TextureCubeArray => {
                ShaderResourceView::TextureCubeArray(unpack_payload(words)?)
            }
            SrvDimension::BufferEx => ShaderResourceView::BufferEx(unpack_payload(words)?),
        };
        Ok(Self {
            format: raw.format,
            view,
        })
    }
}
