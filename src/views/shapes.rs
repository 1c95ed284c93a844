//! Field shapes shared by several view families.
//!
//! The D3D11 headers declare a separate struct per view family even when the
//! fields are identical (`D3D11_TEX2D_RTV`, `D3D11_TEX2D_DSV` and
//! `D3D11_TEX2D_UAV` all hold one `MipSlice`). These macros stamp out one
//! independent Rust type per native struct.

/// `{ MipSlice }`
macro_rules! mip_slice_view {
    ($(#[$meta:meta])* $name:ident => $native:literal) => {
        $(#[$meta])*
        #[repr(C)]
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ::bytemuck::Pod, ::bytemuck::Zeroable,
        )]
        pub struct $name {
            /// Index of the mip level to use.
            pub mip_slice: u32,
        }

        impl $name {
            /// Create a descriptor selecting a single mip level.
            pub const fn new(mip_slice: u32) -> Self {
                Self { mip_slice }
            }

            /// Set the mip level.
            pub fn with_mip_slice(mut self, mip_slice: u32) -> Self {
                self.mip_slice = mip_slice;
                self
            }
        }

        $crate::layout::native_layout! {
            $name => $native, 4;
        }
    };
}

/// `{ MipSlice, FirstArraySlice, ArraySize }`
macro_rules! mip_slice_array_view {
    ($(#[$meta:meta])* $name:ident => $native:literal) => {
        $(#[$meta])*
        #[repr(C)]
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ::bytemuck::Pod, ::bytemuck::Zeroable,
        )]
        pub struct $name {
            /// Index of the mip level to use.
            pub mip_slice: u32,
            /// Index of the first texture in the array.
            pub first_array_slice: u32,
            /// Number of textures in the array.
            pub array_size: u32,
        }

        impl $name {
            /// Create a descriptor selecting one mip level of a range of array slices.
            pub const fn new(mip_slice: u32, first_array_slice: u32, array_size: u32) -> Self {
                Self {
                    mip_slice,
                    first_array_slice,
                    array_size,
                }
            }

            /// Set the mip level.
            pub fn with_mip_slice(mut self, mip_slice: u32) -> Self {
                self.mip_slice = mip_slice;
                self
            }

            /// Set the array slice range.
            pub fn with_array_slices(mut self, first_array_slice: u32, array_size: u32) -> Self {
                self.first_array_slice = first_array_slice;
                self.array_size = array_size;
                self
            }
        }

        $crate::layout::native_layout! {
            $name => $native, 12;
        }
    };
}

/// `{ UnusedField_NothingToDefine }`
///
/// A multisampled texture has a single subresource, so there is nothing to
/// select. The native struct still occupies four bytes. The placeholder is
/// private but takes part in equality and hashing.
macro_rules! multisample_view {
    ($(#[$meta:meta])* $name:ident => $native:literal) => {
        $(#[$meta])*
        #[repr(C)]
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ::bytemuck::Pod, ::bytemuck::Zeroable,
        )]
        pub struct $name {
            unused_field_nothing_to_define: u32,
        }

        impl $name {
            /// Create a descriptor with a zeroed placeholder.
            pub const fn new() -> Self {
                Self {
                    unused_field_nothing_to_define: 0,
                }
            }

            /// Raw placeholder value. Zero unless read back from foreign memory.
            pub const fn unused(&self) -> u32 {
                self.unused_field_nothing_to_define
            }
        }

        $crate::layout::native_layout! {
            $name => $native, 4;
        }
    };
}

/// `{ FirstArraySlice, ArraySize }`
macro_rules! multisample_array_view {
    ($(#[$meta:meta])* $name:ident => $native:literal) => {
        $(#[$meta])*
        #[repr(C)]
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ::bytemuck::Pod, ::bytemuck::Zeroable,
        )]
        pub struct $name {
            /// Index of the first texture in the array.
            pub first_array_slice: u32,
            /// Number of textures in the array.
            pub array_size: u32,
        }

        impl $name {
            /// Create a descriptor selecting a range of array slices.
            pub const fn new(first_array_slice: u32, array_size: u32) -> Self {
                Self {
                    first_array_slice,
                    array_size,
                }
            }

            /// Set the array slice range.
            pub fn with_array_slices(mut self, first_array_slice: u32, array_size: u32) -> Self {
                self.first_array_slice = first_array_slice;
                self.array_size = array_size;
                self
            }
        }

        $crate::layout::native_layout! {
            $name => $native, 8;
        }
    };
}

/// `{ MostDetailedMip, MipLevels }`
macro_rules! mip_range_view {
    ($(#[$meta:meta])* $name:ident => $native:literal) => {
        $(#[$meta])*
        #[repr(C)]
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ::bytemuck::Pod, ::bytemuck::Zeroable,
        )]
        pub struct $name {
            /// Index of the most detailed mip level to use.
            pub most_detailed_mip: u32,
            /// Number of mip levels, or [`ALL_MIPS`](crate::views::ALL_MIPS).
            pub mip_levels: u32,
        }

        impl $name {
            /// Create a descriptor selecting a range of mip levels.
            pub const fn new(most_detailed_mip: u32, mip_levels: u32) -> Self {
                Self {
                    most_detailed_mip,
                    mip_levels,
                }
            }

            /// Create a descriptor covering every mip level from `most_detailed_mip` down.
            pub const fn all_mips_from(most_detailed_mip: u32) -> Self {
                Self::new(most_detailed_mip, $crate::views::ALL_MIPS)
            }

            /// Set the mip range.
            pub fn with_mips(mut self, most_detailed_mip: u32, mip_levels: u32) -> Self {
                self.most_detailed_mip = most_detailed_mip;
                self.mip_levels = mip_levels;
                self
            }
        }

        $crate::layout::native_layout! {
            $name => $native, 8;
        }
    };
}

/// `{ MostDetailedMip, MipLevels, FirstArraySlice, ArraySize }`
macro_rules! mip_range_array_view {
    ($(#[$meta:meta])* $name:ident => $native:literal) => {
        $(#[$meta])*
        #[repr(C)]
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ::bytemuck::Pod, ::bytemuck::Zeroable,
        )]
        pub struct $name {
            /// Index of the most detailed mip level to use.
            pub most_detailed_mip: u32,
            /// Number of mip levels, or [`ALL_MIPS`](crate::views::ALL_MIPS).
            pub mip_levels: u32,
            /// Index of the first texture in the array.
            pub first_array_slice: u32,
            /// Number of textures in the array.
            pub array_size: u32,
        }

        impl $name {
            /// Create a descriptor selecting a mip range of a range of array slices.
            pub const fn new(
                most_detailed_mip: u32,
                mip_levels: u32,
                first_array_slice: u32,
                array_size: u32,
            ) -> Self {
                Self {
                    most_detailed_mip,
                    mip_levels,
                    first_array_slice,
                    array_size,
                }
            }

            /// Set the mip range.
            pub fn with_mips(mut self, most_detailed_mip: u32, mip_levels: u32) -> Self {
                self.most_detailed_mip = most_detailed_mip;
                self.mip_levels = mip_levels;
                self
            }

            /// Set the array slice range.
            pub fn with_array_slices(mut self, first_array_slice: u32, array_size: u32) -> Self {
                self.first_array_slice = first_array_slice;
                self.array_size = array_size;
                self
            }
        }

        $crate::layout::native_layout! {
            $name => $native, 16;
        }
    };
}

/// `{ MipSlice, FirstWSlice, WSize }`
macro_rules! depth_slice_view {
    ($(#[$meta:meta])* $name:ident => $native:literal) => {
        $(#[$meta])*
        #[repr(C)]
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ::bytemuck::Pod, ::bytemuck::Zeroable,
        )]
        pub struct $name {
            /// Index of the mip level to use.
            pub mip_slice: u32,
            /// First depth level to use.
            pub first_w_slice: u32,
            /// Number of depth levels. `u32::MAX` selects every level from `first_w_slice`.
            pub w_size: u32,
        }

        impl $name {
            /// Create a descriptor selecting depth slices of one mip level.
            pub const fn new(mip_slice: u32, first_w_slice: u32, w_size: u32) -> Self {
                Self {
                    mip_slice,
                    first_w_slice,
                    w_size,
                }
            }

            /// Set the mip level.
            pub fn with_mip_slice(mut self, mip_slice: u32) -> Self {
                self.mip_slice = mip_slice;
                self
            }

            /// Set the depth slice range.
            pub fn with_w_slices(mut self, first_w_slice: u32, w_size: u32) -> Self {
                self.first_w_slice = first_w_slice;
                self.w_size = w_size;
                self
            }
        }

        $crate::layout::native_layout! {
            $name => $native, 12;
        }
    };
}

/// `{ union { FirstElement, ElementOffset }, union { NumElements, ElementWidth } }`
macro_rules! element_range_view {
    ($(#[$meta:meta])* $name:ident => $native:literal) => {
        $(#[$meta])*
        #[repr(C)]
        #[derive(
            Debug, Clone, Copy, Default, PartialEq, Eq, Hash, ::bytemuck::Pod, ::bytemuck::Zeroable,
        )]
        pub struct $name {
            /// Index of the first element to access. Shares storage with `ElementOffset`.
            pub first_element: u32,
            /// Number of elements in the view. Shares storage with `ElementWidth`.
            pub num_elements: u32,
        }

        impl $name {
            /// Create a descriptor over `num_elements` elements starting at `first_element`.
            pub const fn new(first_element: u32, num_elements: u32) -> Self {
                Self {
                    first_element,
                    num_elements,
                }
            }

            /// `ElementOffset`, the union alias of `first_element`.
            pub const fn element_offset(&self) -> u32 {
                self.first_element
            }

            /// Set `ElementOffset`.
            pub fn set_element_offset(&mut self, element_offset: u32) {
                self.first_element = element_offset;
            }

            /// `ElementWidth`, the union alias of `num_elements`.
            pub const fn element_width(&self) -> u32 {
                self.num_elements
            }

            /// Set `ElementWidth`.
            pub fn set_element_width(&mut self, element_width: u32) {
                self.num_elements = element_width;
            }
        }

        $crate::layout::native_layout! {
            $name => $native, 8;
        }
    };
}

/// Implement `From<sub-descriptor>` for each variant of a view enum.
macro_rules! view_variants {
    ($view:ident { $($variant:ident($ty:ty)),+ $(,)? }) => {
        $(
            impl From<$ty> for $view {
                fn from(desc: $ty) -> Self {
                    Self::$variant(desc)
                }
            }
        )+
    };
}

pub(crate) use depth_slice_view;
pub(crate) use element_range_view;
pub(crate) use mip_range_array_view;
pub(crate) use mip_range_view;
pub(crate) use mip_slice_array_view;
pub(crate) use mip_slice_view;
pub(crate) use multisample_array_view;
pub(crate) use multisample_view;
pub(crate) use view_variants;
