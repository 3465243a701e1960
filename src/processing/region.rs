use crate::shape::{Odometer, Shape};

/// Copy the cube of side `side` at `start` into `out`, axis 0 outermost.
///
/// The innermost axis is contiguous in storage, so each row of the cube is
/// one slice copy. Bounds must already be checked with `Shape::check_region`.
pub(crate) fn gather_region<T: Copy>(
    samples: &[T],
    shape: &Shape,
    start: &[usize],
    side: usize,
    out: &mut Vec<T>,
) {
    out.clear();

    let rank = shape.rank();
    if rank == 0 {
        out.push(samples[0]);
        return;
    }

    let inner = rank - 1;
    let outer_end: Vec<usize> = start[..inner].iter().map(|&s| s + side).collect();
    let outer_strides = &shape.strides()[..inner];
    let mut rows = Odometer::spanning(&start[..inner], &outer_end, 1);

    loop {
        let base: usize = rows
            .current()
            .iter()
            .zip(outer_strides)
            .map(|(&c, &stride)| c * stride)
            .sum::<usize>()
            + start[inner];
        out.extend_from_slice(&samples[base..base + side]);

        if rows.advance() == inner {
            break;
        }
    }
}
