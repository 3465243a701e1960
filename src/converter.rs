use crate::error::Result;
use crate::image::NDimImage;
use crate::types::{DownsampleConfig, Sample};

pub struct Downsampler {
    config: DownsampleConfig,
}

impl Downsampler {
    pub fn new() -> Self {
        Downsampler {
            config: DownsampleConfig::default(),
        }
    }

    /// Reduce blocks on a dedicated pool of `threads` workers instead of the global pool.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.config.threads = Some(threads.max(1));
        self
    }

    pub fn with_min_blocks_per_task(mut self, blocks: usize) -> Self {
        self.config.min_blocks_per_task = blocks.max(1);
        self
    }

    pub fn config(&self) -> &DownsampleConfig {
        &self.config
    }

    pub fn downsample<T: Sample>(&self, image: &NDimImage<T>, level: u32) -> Result<NDimImage<T>> {
        image.downsampled_with(level, &self.config)
    }

    /// Every level from 0 up to the smallest axis exponent.
    ///
    /// Entry `k` is `image` downsampled by `k` directly, not by repeated
    /// halving, because a mode of modes is not the mode of the whole block.
    pub fn pyramid<T: Sample>(&self, image: &NDimImage<T>) -> Result<Vec<NDimImage<T>>> {
        let top = image.axis_exponents().iter().copied().min().unwrap_or(0);
        (0..=top).map(|level| self.downsample(image, level)).collect()
    }
}

impl Default for Downsampler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_config() {
        let downsampler = Downsampler::new().with_threads(0).with_min_blocks_per_task(0);
        assert_eq!(downsampler.config().threads, Some(1));
        assert_eq!(downsampler.config().min_blocks_per_task, 1);
        assert_eq!(Downsampler::default().config(), &DownsampleConfig::default());
    }

    #[test]
    fn test_pyramid_levels() {
        let image = NDimImage::new((0..32u32).map(|i| i / 4).collect(), &[2, 3]).unwrap();
        let levels = Downsampler::new().with_threads(2).pyramid(&image).unwrap();
        assert_eq!(levels.len(), 3);
        assert_eq!(levels[0], image);
        assert_eq!(levels[1].axis_exponents(), &[1, 2]);
        assert_eq!(levels[2].axis_exponents(), &[0, 1]);
        for (level, entry) in levels.iter().enumerate() {
            assert_eq!(entry, &image.downsampled(level as u32).unwrap());
        }
    }

    #[test]
    fn test_pyramid_rank_zero() {
        let image = NDimImage::new(vec![3u64], &[]).unwrap();
        let levels = Downsampler::new().pyramid(&image).unwrap();
        assert_eq!(levels, vec![image]);
    }
}
