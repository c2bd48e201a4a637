use fast_image_resize::images::{Image, ImageRef};
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer};
use tg_core::error::ConvertError;
use tg_core::frame::FrameBuffer;

/// Redimensionne `src` en une nouvelle image `width × height` (bilinéaire).
///
/// A target equal to the source size is a plain copy.
///
/// # Errors
/// Returns [`ConvertError::Scale`] if a dimension is zero or the resize
/// operation fails.
///
/// # Example
/// ```
/// use tg_source::resize::resize_frame;
/// use tg_core::frame::FrameBuffer;
/// let src = FrameBuffer::new(100, 100);
/// let dst = resize_frame(&src, 50, 20).unwrap();
/// assert_eq!((dst.width, dst.height), (50, 20));
/// ```
pub fn resize_frame(
    src: &FrameBuffer,
    width: u32,
    height: u32,
) -> Result<FrameBuffer, ConvertError> {
    if width == 0 || height == 0 {
        return Err(ConvertError::Scale(format!(
            "dimensions cibles invalides : {width}×{height}"
        )));
    }
    if src.width == width && src.height == height {
        return Ok(src.clone());
    }
    log::debug!(
        "Redimensionnement {}×{} → {width}×{height}",
        src.width,
        src.height
    );

    let src_image = ImageRef::new(src.width, src.height, &src.data, PixelType::U8x4)
        .map_err(|e| ConvertError::Scale(format!("source {}×{} : {e}", src.width, src.height)))?;

    let mut dst = FrameBuffer::new(width, height);
    let mut dst_image = Image::from_slice_u8(width, height, &mut dst.data, PixelType::U8x4)
        .map_err(|e| ConvertError::Scale(format!("destination : {e}")))?;

    let options = ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Bilinear));
    Resizer::new()
        .resize(&src_image, &mut dst_image, &options)
        .map_err(|e| ConvertError::Scale(e.to_string()))?;

    Ok(dst)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_color_survives_downscale() {
        let src = FrameBuffer::filled(64, 32, [40, 80, 120, 255]);
        let dst = resize_frame(&src, 10, 5).unwrap();
        for y in 0..dst.height {
            for x in 0..dst.width {
                assert_eq!(dst.pixel(x, y), (40, 80, 120, 255));
            }
        }
    }

    #[test]
    fn same_size_is_identity() {
        let mut src = FrameBuffer::new(3, 3);
        src.data[0] = 99;
        src.data[3] = 255;
        let dst = resize_frame(&src, 3, 3).unwrap();
        assert_eq!(dst.data, src.data);
    }

    #[test]
    fn upscale_has_exact_dimensions() {
        let src = FrameBuffer::filled(2, 2, [255, 255, 255, 255]);
        let dst = resize_frame(&src, 7, 9).unwrap();
        assert_eq!((dst.width, dst.height), (7, 9));
        assert_eq!(dst.data.len(), 7 * 9 * 4);
        assert_eq!(dst.pixel(3, 4), (255, 255, 255, 255));
    }

    #[test]
    fn source_is_left_untouched() {
        let src = FrameBuffer::filled(6, 4, [9, 99, 199, 255]);
        let before = src.data.clone();
        let dst = resize_frame(&src, 3, 2).unwrap();
        assert_eq!(src.data, before);
        assert_eq!(dst.data.len(), 3 * 2 * 4);
    }

    #[test]
    fn zero_target_is_rejected() {
        let src = FrameBuffer::new(4, 4);
        assert!(matches!(
            resize_frame(&src, 0, 4),
            Err(ConvertError::Scale(_))
        ));
    }

    #[test]
    fn smooth_filter_blends_edges() {
        // Left half black, right half white: a downscale must produce an
        // intermediate gray somewhere instead of replicating blocks.
        let mut src = FrameBuffer::filled(8, 1, [0, 0, 0, 255]);
        for x in 4..8 {
            let idx = x * 4;
            src.data[idx..idx + 3].copy_from_slice(&[255, 255, 255]);
        }
        let dst = resize_frame(&src, 3, 1).unwrap();
        let (r, _, _, _) = dst.pixel(1, 0);
        assert!(r > 0 && r < 255, "middle pixel should blend, got {r}");
    }
}
