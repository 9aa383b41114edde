pub mod data;
pub mod encode;

pub use data::EncodedSample;
pub use encode::{resize_bilinear, split_tokens, to_unit_range, SampleEncoder};
