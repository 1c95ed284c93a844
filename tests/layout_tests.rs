//! Binary layout tests.
//!
//! Expected sizes and offsets come from the D3D11 headers (`d3d11.h`). Every
//! field is a `UINT`, so offsets advance in steps of four bytes.

use std::mem::{align_of, offset_of, size_of};

use rstest::rstest;

use d3d11_views::*;

// ============================================================================
// Sizes
// ============================================================================

#[rstest]
#[case::buffer_rtv(BufferRtv::NATIVE_NAME, BufferRtv::SIZE, 8)]
#[case::tex1d_rtv(Tex1dRtv::NATIVE_NAME, Tex1dRtv::SIZE, 4)]
#[case::tex1d_array_rtv(Tex1dArrayRtv::NATIVE_NAME, Tex1dArrayRtv::SIZE, 12)]
#[case::tex2d_rtv(Tex2dRtv::NATIVE_NAME, Tex2dRtv::SIZE, 4)]
#[case::tex2d_array_rtv(Tex2dArrayRtv::NATIVE_NAME, Tex2dArrayRtv::SIZE, 12)]
#[case::tex2dms_rtv(Tex2dMsRtv::NATIVE_NAME, Tex2dMsRtv::SIZE, 4)]
#[case::tex2dms_array_rtv(Tex2dMsArrayRtv::NATIVE_NAME, Tex2dMsArrayRtv::SIZE, 8)]
#[case::tex3d_rtv(Tex3dRtv::NATIVE_NAME, Tex3dRtv::SIZE, 12)]
#[case::tex1d_dsv(Tex1dDsv::NATIVE_NAME, Tex1dDsv::SIZE, 4)]
#[case::tex1d_array_dsv(Tex1dArrayDsv::NATIVE_NAME, Tex1dArrayDsv::SIZE, 12)]
#[case::tex2d_dsv(Tex2dDsv::NATIVE_NAME, Tex2dDsv::SIZE, 4)]
#[case::tex2d_array_dsv(Tex2dArrayDsv::NATIVE_NAME, Tex2dArrayDsv::SIZE, 12)]
#[case::tex2dms_dsv(Tex2dMsDsv::NATIVE_NAME, Tex2dMsDsv::SIZE, 4)]
#[case::tex2dms_array_dsv(Tex2dMsArrayDsv::NATIVE_NAME, Tex2dMsArrayDsv::SIZE, 8)]
#[case::buffer_srv(BufferSrv::NATIVE_NAME, BufferSrv::SIZE, 8)]
#[case::tex1d_srv(Tex1dSrv::NATIVE_NAME, Tex1dSrv::SIZE, 8)]
#[case::tex1d_array_srv(Tex1dArraySrv::NATIVE_NAME, Tex1dArraySrv::SIZE, 16)]
#[case::tex2d_srv(Tex2dSrv::NATIVE_NAME, Tex2dSrv::SIZE, 8)]
#[case::tex2d_array_srv(Tex2dArraySrv::NATIVE_NAME, Tex2dArraySrv::SIZE, 16)]
#[case::tex2dms_srv(Tex2dMsSrv::NATIVE_NAME, Tex2dMsSrv::SIZE, 4)]
#[case::tex2dms_array_srv(Tex2dMsArraySrv::NATIVE_NAME, Tex2dMsArraySrv::SIZE, 8)]
#[case::tex3d_srv(Tex3dSrv::NATIVE_NAME, Tex3dSrv::SIZE, 8)]
#[case::texcube_srv(TexCubeSrv::NATIVE_NAME, TexCubeSrv::SIZE, 8)]
#[case::texcube_array_srv(TexCubeArraySrv::NATIVE_NAME, TexCubeArraySrv::SIZE, 16)]
#[case::bufferex_srv(BufferExSrv::NATIVE_NAME, BufferExSrv::SIZE, 12)]
#[case::buffer_uav(BufferUav::NATIVE_NAME, BufferUav::SIZE, 12)]
#[case::tex1d_uav(Tex1dUav::NATIVE_NAME, Tex1dUav::SIZE, 4)]
#[case::tex1d_array_uav(Tex1dArrayUav::NATIVE_NAME, Tex1dArrayUav::SIZE, 12)]
#[case::tex2d_uav(Tex2dUav::NATIVE_NAME, Tex2dUav::SIZE, 4)]
#[case::tex2d_array_uav(Tex2dArrayUav::NATIVE_NAME, Tex2dArrayUav::SIZE, 12)]
#[case::tex3d_uav(Tex3dUav::NATIVE_NAME, Tex3dUav::SIZE, 12)]
#[case::rtv_desc(RawRenderTargetViewDesc::NATIVE_NAME, RawRenderTargetViewDesc::SIZE, 20)]
#[case::dsv_desc(RawDepthStencilViewDesc::NATIVE_NAME, RawDepthStencilViewDesc::SIZE, 24)]
#[case::srv_desc(RawShaderResourceViewDesc::NATIVE_NAME, RawShaderResourceViewDesc::SIZE, 24)]
#[case::uav_desc(RawUnorderedAccessViewDesc::NATIVE_NAME, RawUnorderedAccessViewDesc::SIZE, 20)]
fn test_native_size(#[case] name: &str, #[case] size: usize, #[case] expected: usize) {
    assert!(name.starts_with("D3D11_"), "unexpected native name {name}");
    assert_eq!(size, expected, "{name} size mismatch");
}

#[test]
fn test_size_constant_matches_size_of() {
    assert_eq!(Tex3dRtv::SIZE, size_of::<Tex3dRtv>());
    assert_eq!(TexCubeArraySrv::SIZE, size_of::<TexCubeArraySrv>());
    assert_eq!(RawDepthStencilViewDesc::SIZE, size_of::<RawDepthStencilViewDesc>());
}

#[test]
fn test_alignment_is_four() {
    assert_eq!(align_of::<Tex2dMsRtv>(), 4);
    assert_eq!(align_of::<BufferExSrv>(), 4);
    assert_eq!(align_of::<RawShaderResourceViewDesc>(), 4);
}

// ============================================================================
// Field offsets
// ============================================================================

#[test]
fn test_mip_slice_array_offsets() {
    assert_eq!(offset_of!(Tex2dArrayRtv, mip_slice), 0);
    assert_eq!(offset_of!(Tex2dArrayRtv, first_array_slice), 4);
    assert_eq!(offset_of!(Tex2dArrayRtv, array_size), 8);

    assert_eq!(offset_of!(Tex1dArrayDsv, mip_slice), 0);
    assert_eq!(offset_of!(Tex1dArrayDsv, first_array_slice), 4);
    assert_eq!(offset_of!(Tex1dArrayDsv, array_size), 8);
}

#[test]
fn test_depth_slice_offsets() {
    assert_eq!(offset_of!(Tex3dUav, mip_slice), 0);
    assert_eq!(offset_of!(Tex3dUav, first_w_slice), 4);
    assert_eq!(offset_of!(Tex3dUav, w_size), 8);
}

#[test]
fn test_shader_resource_offsets() {
    assert_eq!(offset_of!(Tex2dArraySrv, most_detailed_mip), 0);
    assert_eq!(offset_of!(Tex2dArraySrv, mip_levels), 4);
    assert_eq!(offset_of!(Tex2dArraySrv, first_array_slice), 8);
    assert_eq!(offset_of!(Tex2dArraySrv, array_size), 12);

    assert_eq!(offset_of!(TexCubeArraySrv, first_2d_array_face), 8);
    assert_eq!(offset_of!(TexCubeArraySrv, num_cubes), 12);

    assert_eq!(offset_of!(BufferExSrv, first_element), 0);
    assert_eq!(offset_of!(BufferExSrv, num_elements), 4);
    assert_eq!(offset_of!(BufferExSrv, flags), 8);
}

#[test]
fn test_full_desc_offsets() {
    assert_eq!(offset_of!(RawRenderTargetViewDesc, format), 0);
    assert_eq!(offset_of!(RawRenderTargetViewDesc, view_dimension), 4);
    assert_eq!(offset_of!(RawRenderTargetViewDesc, payload), 8);

    assert_eq!(offset_of!(RawDepthStencilViewDesc, flags), 8);
    assert_eq!(offset_of!(RawDepthStencilViewDesc, payload), 12);

    assert_eq!(offset_of!(RawShaderResourceViewDesc, payload), 8);
    assert_eq!(offset_of!(RawUnorderedAccessViewDesc, payload), 8);
}

// ============================================================================
// Byte order
// ============================================================================

/// Fields are laid out in declaration order using native endianness.
#[test]
fn test_bytes_follow_field_order() {
    let desc = Tex1dArraySrv::new(1, 2, 3, 4);
    let expected: Vec<u8> = [1u32, 2, 3, 4]
        .iter()
        .flat_map(|v| v.to_ne_bytes())
        .collect();
    assert_eq!(desc.as_bytes(), expected.as_slice());
}

#[test]
fn test_full_desc_bytes() {
    let desc = DepthStencilViewDesc::new(DxgiFormat::D32_FLOAT, Tex2dArrayDsv::new(0, 2, 4))
        .with_flags(DsvFlags::READ_ONLY_STENCIL);
    let expected: Vec<u8> = [40u32, 4, 2, 0, 2, 4]
        .iter()
        .flat_map(|v| v.to_ne_bytes())
        .collect();
    assert_eq!(desc.to_raw().as_bytes(), expected.as_slice());
}
