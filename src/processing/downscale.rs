use rayon::prelude::*;
use tracing::debug;

use crate::error::Result;
use crate::processing::mode::ModeCounter;
use crate::processing::region::gather_region;
use crate::shape::{block_origin, Shape};
use crate::types::{DownsampleConfig, Sample};

/// Reduce every `2^level` cube of `samples` to its mode.
///
/// Output slot `i` holds the mode of the block with row-major rank `i`, so the
/// result is laid out for the shape returned by `shape.downsampled(level)`.
/// Each rayon task owns a disjoint run of slots and reads a disjoint set of
/// blocks; the only synchronisation is the join at the end of the iterator.
pub(crate) fn block_modes<T: Sample>(
    samples: &[T],
    shape: &Shape,
    level: u32,
    config: &DownsampleConfig,
) -> Result<Vec<T>> {
    let side = 1usize << level;
    let blocks_per_axis: Vec<usize> = shape.lengths().iter().map(|&len| len >> level).collect();
    let block_count: usize = blocks_per_axis.iter().product();
    let block_volume = shape.volume() / block_count;

    debug!(
        level,
        block_count,
        block_volume,
        threads = ?config.threads,
        "reducing blocks to modes"
    );

    let mut modes = vec![T::zero(); block_count];
    let reduce = |modes: &mut [T]| {
        modes
            .par_iter_mut()
            .enumerate()
            .with_min_len(config.min_blocks_per_task.max(1))
            .for_each_init(
                || {
                    (
                        vec![0usize; shape.rank()],
                        Vec::with_capacity(block_volume),
                        ModeCounter::with_capacity(block_volume.min(1024)),
                    )
                },
                |(origin, block, counter), (rank, slot)| {
                    block_origin(rank, &blocks_per_axis, side, origin);
                    gather_region(samples, shape, origin, side, block);
                    if let Some(mode) = counter.mode_of(block) {
                        *slot = mode;
                    }
                },
            );
    };

    match config.threads {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build()?;
            pool.install(|| reduce(&mut modes));
        }
        None => reduce(&mut modes),
    }

    Ok(modes)
}
