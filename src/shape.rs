use crate::error::{ImageError, Result};

/// Axis layout of an N-dimensional image whose sides are powers of two.
///
/// The last axis varies fastest: `strides[N-1] == 1` and
/// `strides[i] == strides[i+1] * lengths[i+1]`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shape {
    exponents: Vec<u32>,
    lengths: Vec<usize>,
    strides: Vec<usize>,
    volume: usize,
}

impl Shape {
    pub fn new(exponents: &[u32]) -> Result<Self> {
        let mut lengths = Vec::with_capacity(exponents.len());
        let mut volume = 1usize;

        for (axis, &exponent) in exponents.iter().enumerate() {
            let length = 1usize.checked_shl(exponent).ok_or_else(|| {
                ImageError::DegenerateInput(format!(
                    "axis {} exponent {} exceeds addressable length",
                    axis, exponent
                ))
            })?;
            volume = volume.checked_mul(length).ok_or_else(|| {
                ImageError::DegenerateInput(format!(
                    "volume of exponents {:?} overflows usize",
                    exponents
                ))
            })?;
            lengths.push(length);
        }

        let mut strides = vec![0usize; lengths.len()];
        let mut area = 1usize;
        for axis in (0..lengths.len()).rev() {
            strides[axis] = area;
            area *= lengths[axis];
        }

        Ok(Shape {
            exponents: exponents.to_vec(),
            lengths,
            strides,
            volume,
        })
    }

    /// Hyper-cube of side `2^level` on every one of `rank` axes.
    pub fn uniform(rank: usize, level: u32) -> Result<Self> {
        Self::new(&vec![level; rank])
    }

    pub fn rank(&self) -> usize {
        self.lengths.len()
    }

    pub fn volume(&self) -> usize {
        self.volume
    }

    pub fn exponents(&self) -> &[u32] {
        &self.exponents
    }

    pub fn lengths(&self) -> &[usize] {
        &self.lengths
    }

    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Linear offset of `coords`, or None if the tuple is the wrong length or out of bounds.
    pub fn offset(&self, coords: &[usize]) -> Option<usize> {
        if coords.len() != self.rank() {
            return None;
        }
        if coords.iter().zip(&self.lengths).any(|(&c, &len)| c >= len) {
            return None;
        }
        Some(self.linear_offset(coords))
    }

    pub(crate) fn linear_offset(&self, coords: &[usize]) -> usize {
        debug_assert_eq!(coords.len(), self.rank());
        coords
            .iter()
            .zip(&self.strides)
            .map(|(&c, &stride)| c * stride)
            .sum()
    }

    /// Validate a cube of side `2^level` anchored at `start`, returning its side length.
    pub fn check_region(&self, start: &[usize], level: u32) -> Result<usize> {
        if start.len() != self.rank() {
            return Err(ImageError::RankMismatch {
                expected: self.rank(),
                found: start.len(),
            });
        }

        let side = 1usize.checked_shl(level).ok_or_else(|| {
            ImageError::Range(format!("side exponent {} exceeds addressable length", level))
        })?;

        for (axis, (&s, &len)) in start.iter().zip(&self.lengths).enumerate() {
            let fits = s.checked_add(side).map_or(false, |end| end <= len);
            if !fits {
                return Err(ImageError::Range(format!(
                    "axis {}: start {} + side {} exceeds length {}",
                    axis, s, side, len
                )));
            }
        }

        Ok(side)
    }

    /// Shape left after collapsing every `2^level` cube into one sample.
    pub fn downsampled(&self, level: u32) -> Result<Self> {
        let mut exponents = Vec::with_capacity(self.rank());
        for (axis, &exponent) in self.exponents.iter().enumerate() {
            if level > exponent {
                return Err(ImageError::Range(format!(
                    "downsample level {} exceeds axis {} exponent {}",
                    level, axis, exponent
                )));
            }
            exponents.push(exponent - level);
        }
        Self::new(&exponents)
    }
}

/// Mixed-radix counter over the box `[origin_i, end_i)` stepping by `step`,
/// axis 0 outermost.
pub struct Odometer {
    origin: Vec<usize>,
    end: Vec<usize>,
    current: Vec<usize>,
    step: usize,
    done: bool,
}

impl Odometer {
    /// Fails with `RankMismatch` when `origin` and `end` differ in length.
    pub fn new(origin: &[usize], end: &[usize], step: usize) -> Result<Self> {
        if origin.len() != end.len() {
            return Err(ImageError::RankMismatch {
                expected: origin.len(),
                found: end.len(),
            });
        }
        Ok(Self::spanning(origin, end, step))
    }

    /// Callers guarantee `origin.len() == end.len()`.
    pub(crate) fn spanning(origin: &[usize], end: &[usize], step: usize) -> Self {
        debug_assert_eq!(origin.len(), end.len());
        let done = step == 0 || origin.iter().zip(end).any(|(&o, &e)| o >= e);
        Odometer {
            origin: origin.to_vec(),
            end: end.to_vec(),
            current: origin.to_vec(),
            step,
            done,
        }
    }

    pub fn current(&self) -> &[usize] {
        &self.current
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Step to the next position and return how many trailing axes wrapped.
    /// A return equal to the rank means the walk is finished.
    pub fn advance(&mut self) -> usize {
        if self.done {
            return self.current.len();
        }

        let mut wrapped = 0;
        for axis in (0..self.current.len()).rev() {
            // a step past usize::MAX counts as reaching the end
            match self.current[axis].checked_add(self.step) {
                Some(next) if next < self.end[axis] => {
                    self.current[axis] = next;
                    return wrapped;
                }
                _ => {}
            }
            self.current[axis] = self.origin[axis];
            wrapped += 1;
        }

        self.done = true;
        wrapped
    }
}

impl Iterator for Odometer {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.done {
            return None;
        }
        let position = self.current.clone();
        self.advance();
        Some(position)
    }
}

/// Decode the row-major `rank` of a block into its origin coordinates.
pub(crate) fn block_origin(mut rank: usize, blocks_per_axis: &[usize], side: usize, origin: &mut [usize]) {
    for axis in (0..blocks_per_axis.len()).rev() {
        origin[axis] = (rank % blocks_per_axis[axis]) * side;
        rank /= blocks_per_axis[axis];
    }
}
