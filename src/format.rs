//! DXGI format values carried by view descriptions.

use bytemuck::{Pod, Zeroable};

/// A raw `DXGI_FORMAT` value.
///
/// Any value is accepted; the native API decides whether a format is valid
/// for a given view. A few common formats are provided as constants.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Pod, Zeroable)]
pub struct DxgiFormat(pub u32);

impl DxgiFormat {
    pub const UNKNOWN: Self = Self(0);
    pub const R32G32B32A32_FLOAT: Self = Self(2);
    pub const R16G16B16A16_FLOAT: Self = Self(10);
    pub const R10G10B10A2_UNORM: Self = Self(24);
    pub const R11G11B10_FLOAT: Self = Self(26);
    pub const R8G8B8A8_TYPELESS: Self = Self(27);
    pub const R8G8B8A8_UNORM: Self = Self(28);
    pub const R8G8B8A8_UNORM_SRGB: Self = Self(29);
    pub const R32_TYPELESS: Self = Self(39);
    pub const D32_FLOAT: Self = Self(40);
    pub const R32_FLOAT: Self = Self(41);
    pub const R32_UINT: Self = Self(42);
    pub const R24G8_TYPELESS: Self = Self(44);
    pub const D24_UNORM_S8_UINT: Self = Self(45);
    pub const R24_UNORM_X8_TYPELESS: Self = Self(46);
    pub const D16_UNORM: Self = Self(55);
    pub const B8G8R8A8_UNORM: Self = Self(87);
    pub const B8G8R8A8_UNORM_SRGB: Self = Self(91);

    /// Returns the raw `DXGI_FORMAT` value.
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for DxgiFormat {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<DxgiFormat> for u32 {
    fn from(format: DxgiFormat) -> Self {
        format.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_values() {
        assert_eq!(DxgiFormat::default(), DxgiFormat::UNKNOWN);
        assert_eq!(DxgiFormat::R8G8B8A8_UNORM.raw(), 28);
        assert_eq!(u32::from(DxgiFormat::D24_UNORM_S8_UINT), 45);
        assert_eq!(DxgiFormat::from(87), DxgiFormat::B8G8R8A8_UNORM);
    }

    #[test]
    fn test_size() {
        assert_eq!(std::mem::size_of::<DxgiFormat>(), 4);
    }
}
