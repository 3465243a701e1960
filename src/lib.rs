mod error;
mod interop;
mod render;

pub use error::{ImageError, Result};

// Re-export modules for library users
pub mod types;
pub mod shape;
pub mod image;
pub mod converter;

pub mod processing {
    pub mod mode;
    pub(crate) mod downscale;
    pub(crate) mod region;
}

pub use converter::Downsampler;
pub use image::NDimImage;
pub use processing::mode::mode;
pub use shape::{Odometer, Shape};
pub use types::{DownsampleConfig, Sample};
