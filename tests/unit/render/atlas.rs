//! Tests for tileset atlas lookups

#[cfg(test)]
mod tests {
    use tilemerge::algorithm::decals::DecalSide;
    use tilemerge::render::TilesetAtlas;
    use tilemerge::spatial::{PixelRect, RectangleSize};

    // Tests tile variants map to scaled atlas cells with the tile's extent
    // Verified by ignoring the rectangle height in the source size
    #[test]
    fn test_tile_sources() {
        let atlas = TilesetAtlas::new(64);

        assert_eq!(
            atlas.tile_source(RectangleSize::OneByOne, 1),
            Some(PixelRect::new(64, 64, 64, 64))
        );
        assert_eq!(
            atlas.tile_source(RectangleSize::TwoByOne, 1),
            Some(PixelRect::new(128, 192, 128, 64))
        );
        assert_eq!(
            atlas.tile_source(RectangleSize::OneByTwo, 0),
            Some(PixelRect::new(128, 64, 64, 128))
        );
        assert_eq!(
            atlas.tile_source(RectangleSize::TwoByTwo, 3),
            Some(PixelRect::new(128, 384, 128, 128))
        );
    }

    // Tests variant counts and out-of-range lookups
    // Verified by wrapping variants modulo the count
    #[test]
    fn test_tile_variant_bounds() {
        let atlas = TilesetAtlas::new(16);

        for size in RectangleSize::ALL {
            let count = TilesetAtlas::tile_variant_count(size);
            assert!(count > 0);
            assert!(atlas.tile_source(size, count - 1).is_some());
            assert!(atlas.tile_source(size, count).is_none());
        }
        assert_eq!(TilesetAtlas::tile_variant_count(RectangleSize::OneByOne), 4);
        assert_eq!(TilesetAtlas::tile_variant_count(RectangleSize::TwoByTwo), 4);
    }

    // Tests decal variants line up with each side's variant count
    // Verified by dropping the third top variant
    #[test]
    fn test_decal_sources_cover_every_variant() {
        let atlas = TilesetAtlas::new(32);

        for side in DecalSide::ALL {
            for variant in 0..side.variant_count() {
                let source = atlas.decal_source(side, variant);
                assert!(source.is_some_and(|rect| rect.width == 32 && rect.height == 32));
            }
            assert!(atlas.decal_source(side, side.variant_count()).is_none());
        }
        assert_eq!(
            atlas.decal_source(DecalSide::Top, 2),
            Some(PixelRect::new(224, 0, 32, 32))
        );
    }

    // Tests draw origins per side
    // Verified by using the bottom ratio for top decals
    #[test]
    fn test_decal_origins() {
        let atlas = TilesetAtlas::new(64);
        let close = |a: [f32; 2], b: [f32; 2]| {
            a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-3)
        };

        assert!(close(atlas.decal_origin(DecalSide::Left), [32.0, 0.0]));
        assert!(close(atlas.decal_origin(DecalSide::Right), [32.0, 0.0]));
        assert!(close(atlas.decal_origin(DecalSide::Top), [0.0, 25.6]));
        assert!(close(atlas.decal_origin(DecalSide::Bottom), [0.0, 38.4]));
    }
}
