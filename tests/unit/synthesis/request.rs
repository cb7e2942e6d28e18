//! Tests for source image validation and request construction

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use tilepack::PackError;
    use tilepack::policy::{Category, LayoutKind};
    use tilepack::synthesis::{GenerationRequest, SourceImage};

    // Tests zero-sized images are rejected
    // Verified by accepting any buffer
    #[test]
    fn test_source_image_rejects_empty() {
        for (width, height) in [(0, 0), (0, 5), (5, 0)] {
            let result = SourceImage::new(RgbaImage::new(width, height));
            assert!(matches!(result, Err(PackError::InvalidSourceData { .. })));
        }
    }

    // Tests dimensions and pixels are exposed unchanged
    // Verified by swapping width and height accessors
    #[test]
    fn test_source_image_accessors() {
        let pixels = RgbaImage::from_pixel(3, 7, Rgba([1, 2, 3, 4]));
        let source = SourceImage::new(pixels.clone()).unwrap();
        assert_eq!(source.width(), 3);
        assert_eq!(source.height(), 7);
        assert_eq!(source.pixels(), &pixels);
    }

    // Tests the default-layout constructor follows the category policy
    // Verified by always defaulting to Atlas
    #[test]
    fn test_request_with_default_layout() {
        let source = SourceImage::new(RgbaImage::new(1, 1)).unwrap();

        let liquid = GenerationRequest::with_default_layout(&source, Category::Liquid);
        assert_eq!(liquid.layout, LayoutKind::Sheet);
        assert!(liquid.source.is_some());

        let explicit = GenerationRequest::new(&source, Category::Liquid, LayoutKind::Atlas);
        assert_eq!(explicit.layout, LayoutKind::Atlas);
        assert_eq!(explicit.category, Category::Liquid);
    }
}
