use std::fmt::{Debug, Display};
use std::hash::Hash;

use num_traits::{PrimInt, Unsigned};

/// Unsigned integer sample stored in an image.
pub trait Sample: PrimInt + Unsigned + Hash + Send + Sync + Debug + Display {}

impl<T> Sample for T where T: PrimInt + Unsigned + Hash + Send + Sync + Debug + Display {}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownsampleConfig {
    /// Worker count for a dedicated pool (None = rayon global pool)
    pub threads: Option<usize>,

    /// Smallest number of blocks a single rayon task reduces
    pub min_blocks_per_task: usize,
}

impl Default for DownsampleConfig {
    fn default() -> Self {
        DownsampleConfig {
            threads: None,
            min_blocks_per_task: 16,
        }
    }
}
