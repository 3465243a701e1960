use tracing::{debug, trace};

use crate::error::{ImageError, Result};
use crate::processing::downscale::block_modes;
use crate::processing::mode::mode;
use crate::processing::region::gather_region;
use crate::shape::Shape;
use crate::types::{DownsampleConfig, Sample};

/// Dense N-dimensional image whose axes are each `2^exponent` long.
///
/// Samples are stored row-major (last axis fastest). The image is never
/// mutated after construction; every operation returns a new, independently
/// owned image with its own mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NDimImage<T: Sample = u32> {
    samples: Vec<T>,
    shape: Shape,
    mode: T,
}

impl<T: Sample> NDimImage<T> {
    /// Build an image from row-major samples and per-axis exponents.
    ///
    /// `samples.len()` must equal the product of `2^exponents[i]`. An empty
    /// exponent list describes a single-sample image.
    pub fn new(samples: Vec<T>, exponents: &[u32]) -> Result<Self> {
        let shape = Shape::new(exponents)?;
        Self::with_shape(samples, shape)
    }

    pub fn from_slice(samples: &[T], exponents: &[u32]) -> Result<Self> {
        let shape = Shape::new(exponents)?;
        // checked here as well so a mismatch fails before the copy
        if samples.len() != shape.volume() {
            return Err(ImageError::ShapeMismatch {
                expected: shape.volume(),
                found: samples.len(),
            });
        }
        Self::with_shape(samples.to_vec(), shape)
    }

    fn with_shape(samples: Vec<T>, shape: Shape) -> Result<Self> {
        if samples.len() != shape.volume() {
            return Err(ImageError::ShapeMismatch {
                expected: shape.volume(),
                found: samples.len(),
            });
        }
        // volume is at least 1, so a mode always exists
        let mode = mode(&samples).unwrap_or_else(T::zero);
        Ok(NDimImage {
            samples,
            shape,
            mode,
        })
    }

    pub fn mode(&self) -> T {
        self.mode
    }

    pub fn rank(&self) -> usize {
        self.shape.rank()
    }

    pub fn volume(&self) -> usize {
        self.shape.volume()
    }

    pub fn axis_lengths(&self) -> &[usize] {
        self.shape.lengths()
    }

    pub fn axis_exponents(&self) -> &[u32] {
        self.shape.exponents()
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    pub fn samples(&self) -> &[T] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<T> {
        self.samples
    }

    /// Sample at `coords`, or None if the tuple does not address this image.
    pub fn get(&self, coords: &[usize]) -> Option<T> {
        self.shape.offset(coords).map(|offset| self.samples[offset])
    }

    /// Extract the hyper-cube of side `2^level` whose lowest corner is `start`.
    ///
    /// Fails with `Range` when the cube does not fit inside every axis and with
    /// `RankMismatch` when `start` has the wrong number of coordinates.
    pub fn sub_image(&self, start: &[usize], level: u32) -> Result<Self> {
        let side = self.shape.check_region(start, level)?;
        let shape = Shape::uniform(self.rank(), level)?;
        trace!(?start, level, volume = shape.volume(), "extracting sub-image");

        let mut samples = Vec::with_capacity(shape.volume());
        gather_region(&self.samples, &self.shape, start, side, &mut samples);
        Self::with_shape(samples, shape)
    }

    /// Downsample by `level` on every axis using the rayon global pool.
    pub fn downsampled(&self, level: u32) -> Result<Self> {
        self.downsampled_with(level, &DownsampleConfig::default())
    }

    /// Replace every disjoint `2^level` cube with its mode.
    ///
    /// `level` must not exceed any axis exponent. Level 0 returns a copy.
    pub fn downsampled_with(&self, level: u32, config: &DownsampleConfig) -> Result<Self> {
        let shape = self.shape.downsampled(level)?;
        if level == 0 || self.rank() == 0 {
            return Ok(self.clone());
        }

        let modes = block_modes(&self.samples, &self.shape, level, config)?;
        let image = Self::with_shape(modes, shape)?;
        debug!(
            level,
            volume = image.volume(),
            mode = %image.mode,
            "downsampled image"
        );
        Ok(image)
    }
}
