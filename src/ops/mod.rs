//! Image operations: decode, crop commit, resize commit, export encode.

pub mod crop;
pub mod export;
pub mod load;
pub mod resize;
