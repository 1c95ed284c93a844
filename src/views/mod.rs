//! D3D11 view descriptors.
//!
//! Each submodule covers one view family. A family has one fixed-layout
//! sub-descriptor per resource dimension, a dimension enum with the native
//! discriminants, a raw mirror of the full native description, and a typed
//! description that replaces the native union with an enum.

mod shapes;

pub mod depth_stencil;
pub mod render_target;
pub mod shader_resource;
pub mod unordered_access;

/// `MipLevels` value selecting every mip level from `MostDetailedMip` down (native `-1`).
pub const ALL_MIPS: u32 = u32::MAX;

pub use depth_stencil::{
    DepthStencilView, DepthStencilViewDesc, DsvDimension, DsvFlags, RawDepthStencilViewDesc,
    Tex1dArrayDsv, Tex1dDsv, Tex2dArrayDsv, Tex2dDsv, Tex2dMsArrayDsv, Tex2dMsDsv,
};
pub use render_target::{
    BufferRtv, RawRenderTargetViewDesc, RenderTargetView, RenderTargetViewDesc, RtvDimension,
    Tex1dArrayRtv, Tex1dRtv, Tex2dArrayRtv, Tex2dMsArrayRtv, Tex2dMsRtv, Tex2dRtv, Tex3dRtv,
};
pub use shader_resource::{
    BufferExSrv, BufferExSrvFlags, BufferSrv, RawShaderResourceViewDesc, ShaderResourceView,
    ShaderResourceViewDesc, SrvDimension, Tex1dArraySrv, Tex1dSrv, Tex2dArraySrv, Tex2dMsArraySrv,
    Tex2dMsSrv, Tex2dSrv, Tex3dSrv, TexCubeArraySrv, TexCubeSrv,
};
pub use unordered_access::{
    BufferUav, BufferUavFlags, RawUnorderedAccessViewDesc, Tex1dArrayUav, Tex1dUav, Tex2dArrayUav,
    Tex2dUav, Tex3dUav, UavDimension, UnorderedAccessView, UnorderedAccessViewDesc,
};
