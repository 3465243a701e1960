use ndarray::{ArrayD, Dimension, IxDyn};

use crate::error::{ImageError, Result};
use crate::image::NDimImage;
use crate::types::Sample;

impl<T: Sample> NDimImage<T> {
    /// Copy into a dynamic-rank ndarray with the same axis order.
    pub fn to_ndarray(&self) -> ArrayD<T> {
        let shape = self.shape();
        ArrayD::from_shape_fn(IxDyn(shape.lengths()), |index| {
            self.samples()[shape.linear_offset(index.slice())]
        })
    }
}

impl<T: Sample> TryFrom<ArrayD<T>> for NDimImage<T> {
    type Error = ImageError;

    fn try_from(array: ArrayD<T>) -> Result<Self> {
        let exponents = array
            .shape()
            .iter()
            .enumerate()
            .map(|(axis, &len)| {
                if len.is_power_of_two() {
                    Ok(len.trailing_zeros())
                } else {
                    Err(ImageError::DegenerateInput(format!(
                        "axis {} has length {}, expected a power of two",
                        axis, len
                    )))
                }
            })
            .collect::<Result<Vec<u32>>>()?;

        // logical iteration order is row-major regardless of memory layout
        let samples = array.iter().copied().collect();
        NDimImage::new(samples, &exponents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, Array3};

    #[test]
    fn test_to_ndarray_axis_order() {
        let image = NDimImage::new((0..8u32).collect(), &[1, 2]).unwrap();
        let array = image.to_ndarray();
        assert_eq!(array.shape(), &[2, 4]);
        assert_eq!(array[[1, 2].as_slice()], 6);
        assert_eq!(array[[0, 3].as_slice()], 3);
    }

    #[test]
    fn test_from_ndarray_transposed_layout() {
        let data = Array2::from_shape_fn((2, 4), |(y, x)| (y * 4 + x) as u16);
        let transposed = data.t().to_owned().into_dyn();
        let image = NDimImage::try_from(transposed).unwrap();
        assert_eq!(image.axis_lengths(), &[4, 2]);
        assert_eq!(image.samples(), &[0, 4, 1, 5, 2, 6, 3, 7]);
    }

    #[test]
    fn test_from_ndarray_rejects_non_power_of_two() {
        let data = Array3::<u32>::zeros((2, 3, 4)).into_dyn();
        let err = NDimImage::try_from(data).unwrap_err();
        assert!(matches!(err, ImageError::DegenerateInput(_)));

        let empty = Array2::<u32>::zeros((0, 4)).into_dyn();
        assert!(NDimImage::try_from(empty).is_err());
    }

    #[test]
    fn test_ndarray_round_trip_keeps_mode() {
        let image = NDimImage::new(vec![3u8, 1, 3, 2], &[2]).unwrap();
        let back = NDimImage::try_from(image.to_ndarray()).unwrap();
        assert_eq!(back, image);
        assert_eq!(back.mode(), 3);
    }
}
