//! # D3D11 Views
//!
//! Binary-layout-compatible value types for the Direct3D11 view descriptor
//! structures.
//!
//! ## Overview
//!
//! This crate provides:
//! - [`views`] - One `#[repr(C)]` type per native sub-descriptor
//!   (`D3D11_TEX2D_RTV`, `D3D11_TEX2DMS_DSV`, `D3D11_BUFFEREX_SRV`, ...)
//! - [`NativeLayout`] - Byte view, cross-type equality and hashing shared by
//!   every descriptor
//! - Typed full view descriptions that pack into and decode from the native
//!   `D3D11_*_VIEW_DESC` layout
//!
//! Values are never validated. The native API rejects what it does not accept.
//!
//! ## Example
//!
//! ```
//! use d3d11_views::{DxgiFormat, NativeLayout, RenderTargetViewDesc, Tex2dRtv};
//!
//! let desc = RenderTargetViewDesc::new(DxgiFormat::R8G8B8A8_UNORM, Tex2dRtv::new(3));
//! let raw = desc.to_raw();
//! assert_eq!(raw.as_bytes().len(), 20);
//! assert_eq!(RenderTargetViewDesc::from_native_bytes(raw.as_bytes()).unwrap(), desc);
//! ```

pub mod error;
pub mod format;
pub mod layout;
pub mod views;

pub use error::{DescriptorError, DescriptorResult};
pub use format::DxgiFormat;
pub use layout::NativeLayout;
pub use views::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log the crate version.
///
/// Nothing needs initializing; this only announces the crate through the
/// installed `log` backend.
pub fn init() {
    log::info!("D3D11 Views v{} initialized", VERSION);
}
