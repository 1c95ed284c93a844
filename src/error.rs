//! Descriptor error types.

use thiserror::Error;

/// Errors raised when moving descriptors across the native byte boundary.
///
/// Field access, equality and hashing never fail; only reinterpreting raw
/// memory can.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DescriptorError {
    #[error("{native}: expected {expected} bytes, got {actual}")]
    SizeMismatch {
        native: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("{native}: need {required} bytes, only {available} available")]
    BufferTooSmall {
        native: &'static str,
        required: usize,
        available: usize,
    },
    #[error("{native}: unknown view dimension {value}")]
    UnknownDimension { native: &'static str, value: u32 },
}

pub type DescriptorResult<T> = Result<T, DescriptorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DescriptorError::SizeMismatch {
            native: "D3D11_TEX2D_RTV",
            expected: 4,
            actual: 3,
        };
        assert_eq!(err.to_string(), "D3D11_TEX2D_RTV: expected 4 bytes, got 3");

        let err = DescriptorError::UnknownDimension {
            native: "D3D11_RENDER_TARGET_VIEW_DESC",
            value: 0,
        };
        assert_eq!(
            err.to_string(),
            "D3D11_RENDER_TARGET_VIEW_DESC: unknown view dimension 0"
        );
    }
}
