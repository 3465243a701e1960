use std::collections::HashMap;

use crate::types::Sample;

/// Most frequent value in `samples`, or None when empty.
///
/// Ties go to the value that reached the leading count first in a
/// left-to-right scan; a later value must strictly exceed it to win.
pub fn mode<T: Sample>(samples: &[T]) -> Option<T> {
    ModeCounter::new().mode_of(samples)
}

/// Reusable frequency table so each worker allocates its map once.
pub(crate) struct ModeCounter<T> {
    counts: HashMap<T, usize>,
}

impl<T: Sample> ModeCounter<T> {
    pub(crate) fn new() -> Self {
        ModeCounter {
            counts: HashMap::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        ModeCounter {
            counts: HashMap::with_capacity(capacity),
        }
    }

    pub(crate) fn mode_of(&mut self, samples: &[T]) -> Option<T> {
        self.counts.clear();

        let mut mode = None;
        let mut best = 0usize;
        for &value in samples {
            let count = self.counts.entry(value).or_insert(0);
            *count += 1;
            if *count > best {
                best = *count;
                mode = Some(value);
            }
        }
        mode
    }
}
