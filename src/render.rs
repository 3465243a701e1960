use std::fmt;
use std::io::{self, Write};

use crate::image::NDimImage;
use crate::shape::Odometer;
use crate::types::Sample;

/// Every sample followed by a space, and a line break after each completed
/// sweep of every axis. Deeper nesting shows up as more consecutive breaks.
impl<T: Sample> fmt::Display for NDimImage<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let origin = vec![0usize; self.rank()];
        let mut walk = Odometer::spanning(&origin, self.axis_lengths(), 1);

        // A full row-major walk visits storage in linear order
        for value in self.samples() {
            write!(f, "{} ", value)?;
            for _ in 0..walk.advance() {
                f.write_str("\n")?;
            }
        }
        Ok(())
    }
}

impl<T: Sample> NDimImage<T> {
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "{}", self)?;
        writer.flush()
    }

    /// Dump the image to stdout.
    pub fn print(&self) -> io::Result<()> {
        self.write_to(io::stdout().lock())
    }
}

#[cfg(test)]
mod tests {
    use crate::image::NDimImage;

    #[test]
    fn test_render_1d() {
        let image = NDimImage::new(vec![1u32, 2, 3, 4], &[2]).unwrap();
        assert_eq!(image.to_string(), "1 2 3 4 \n");
    }

    #[test]
    fn test_render_2d() {
        let image = NDimImage::new(vec![1u32, 1, 2, 3], &[1, 1]).unwrap();
        assert_eq!(image.to_string(), "1 1 \n2 3 \n\n");
    }

    #[test]
    fn test_render_3d_nesting() {
        let image = NDimImage::new((0..8u32).collect(), &[1, 1, 1]).unwrap();
        assert_eq!(
            image.to_string(),
            "0 1 \n2 3 \n\n4 5 \n6 7 \n\n\n"
        );
    }

    #[test]
    fn test_render_rank_zero() {
        let image = NDimImage::new(vec![5u16], &[]).unwrap();
        assert_eq!(image.to_string(), "5 ");
    }

    #[test]
    fn test_write_to_buffer() {
        let image = NDimImage::new(vec![9u8, 8], &[1]).unwrap();
        let mut out = Vec::new();
        image.write_to(&mut out).unwrap();
        assert_eq!(out, b"9 8 \n");
    }
}
