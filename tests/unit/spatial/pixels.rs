//! Tests for pixel-space points and rectangles

#[cfg(test)]
mod tests {
    use tilemerge::spatial::pixels::{cell_extent, cell_offset};
    use tilemerge::spatial::{PixelPoint, PixelRect};

    // Tests exclusive edges are offset by the extent
    // Verified by making right() inclusive
    #[test]
    fn test_rect_edges() {
        let rect = PixelRect::new(-4, 10, 8, 6);

        assert_eq!(rect.right(), 4);
        assert_eq!(rect.bottom(), 16);
    }

    // Tests containment is half-open
    // Verified by including the right edge
    #[test]
    fn test_rect_contains_is_half_open() {
        let rect = PixelRect::new(0, 0, 4, 4);

        assert!(rect.contains(0, 0));
        assert!(rect.contains(3, 3));
        assert!(!rect.contains(4, 0));
        assert!(!rect.contains(0, 4));
        assert!(!rect.contains(-1, 2));
    }

    #[test]
    fn test_point_default_is_origin() {
        assert_eq!(PixelPoint::default(), PixelPoint::new(0, 0));
    }

    // Tests cell scaling saturates instead of wrapping
    // Verified by casting the product straight to i32
    #[test]
    fn test_cell_scaling_saturates() {
        assert_eq!(cell_offset(3, 64), 192);
        assert_eq!(cell_offset(1, 3_000_000_000), i32::MAX);
        assert_eq!(cell_offset(usize::MAX, u32::MAX), i32::MAX);
        assert_eq!(cell_extent(2, 64), 128);
        assert_eq!(cell_extent(2, 3_000_000_000), u32::MAX);
    }

    // Tests edges clamp at the end of the pixel range
    #[test]
    fn test_rect_edges_saturate() {
        let rect = PixelRect::new(i32::MAX - 1, 0, u32::MAX, 4);

        assert_eq!(rect.right(), i32::MAX);
        assert_eq!(rect.bottom(), 4);
    }
}
