//! Tests for atlas, sheet and single layout procedures and their variation rules

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use tilepack::PackError;
    use tilepack::policy::{Category, LayoutKind};
    use tilepack::synthesis::synthesizer::{frame_brightness, wave_band_offset};
    use tilepack::synthesis::{
        GenerationRequest, LayoutSynthesizer, OutputRaster, SourceImage, synthesize,
    };

    const RED: [u8; 4] = [255, 0, 0, 255];

    fn solid_source(width: u32, height: u32, pixel: [u8; 4]) -> SourceImage {
        SourceImage::new(RgbaImage::from_pixel(width, height, Rgba(pixel))).unwrap()
    }

    fn render(source: &SourceImage, category: Category, layout: LayoutKind) -> OutputRaster {
        synthesize(&GenerationRequest::new(source, category, layout))
            .unwrap()
            .raster
    }

    fn cell_center(raster: &OutputRaster, row: u32, col: u32) -> [u8; 4] {
        raster.pixel(col * 64 + 32, row * 64 + 32).unwrap()
    }

    // Tests atlas output size and full opaque coverage of all nine cells
    // Verified by drawing only the first row of cells
    #[test]
    fn test_atlas_dimensions_and_coverage() {
        let source = solid_source(10, 30, RED);
        let raster = render(&source, Category::Structure, LayoutKind::Atlas);

        assert_eq!((raster.width(), raster.height()), (192, 192));
        for y in 0..192 {
            for x in 0..192 {
                let pixel = raster.pixel(x, y).unwrap();
                assert!(pixel[3] >= 254, "uncovered atlas pixel at ({x}, {y})");
            }
        }
    }

    // Tests terrain darkens exactly the cells where row + col is even
    // Verified by darkening odd cells instead
    #[test]
    fn test_atlas_terrain_checkerboard() {
        let source = solid_source(64, 64, RED);
        let raster = render(&source, Category::Terrain, LayoutKind::Atlas);

        for row in 0..3 {
            for col in 0..3 {
                let red = cell_center(&raster, row, col)[0];
                if (row + col) % 2 == 0 {
                    assert!((225..=232).contains(&red), "cell ({row}, {col}) red {red}");
                } else {
                    assert_eq!(red, 255, "cell ({row}, {col}) should be untouched");
                }
            }
        }

        // Shade covers the whole cell, edges included
        assert!(raster.pixel(0, 0).unwrap()[0] < 235);
        assert!(raster.pixel(63, 63).unwrap()[0] < 235);
        assert_eq!(raster.pixel(64, 0).unwrap()[0], 255);
    }

    // Tests non-terrain categories draw a plain atlas
    // Verified by shading for every category
    #[test]
    fn test_atlas_without_checkerboard() {
        let source = solid_source(64, 64, RED);
        for category in [Category::Structure, Category::Liquid, Category::NatureProp] {
            let raster = render(&source, category, LayoutKind::Atlas);
            for row in 0..3 {
                for col in 0..3 {
                    assert_eq!(cell_center(&raster, row, col), RED);
                }
            }
        }
    }

    // Tests sheet output size and progressive whitening across frames
    // Verified by using the same alpha for every frame
    #[test]
    fn test_sheet_brightening_increases() {
        let source = solid_source(64, 64, RED);
        let raster = render(&source, Category::Structure, LayoutKind::Sheet);
        assert_eq!((raster.width(), raster.height()), (256, 64));

        let greens: Vec<u8> = (0..4)
            .map(|frame| raster.pixel(frame * 64 + 32, 50).unwrap()[1])
            .collect();
        assert_eq!(greens.first(), Some(&0));
        assert!(greens.windows(2).all(|pair| pair[0] < pair[1]), "{greens:?}");
        assert!(greens[3].abs_diff(115) <= 1);
    }

    // Tests the whitening alpha schedule
    // Verified by starting the schedule at one step
    #[test]
    fn test_frame_brightness_schedule() {
        let expected = [0.0, 0.15, 0.30, 0.45];
        for (frame, alpha) in expected.into_iter().enumerate() {
            assert!((frame_brightness(frame as u32) - alpha).abs() < 1e-6);
        }
    }

    // Tests liquid sheets draw a descending wave band in every frame
    // Verified by drawing the band at a fixed offset
    #[test]
    fn test_sheet_liquid_wave_band() {
        let source = solid_source(64, 64, RED);
        let raster = render(&source, Category::Liquid, LayoutKind::Sheet);

        for frame in 0..4 {
            let top = wave_band_offset(frame);
            assert_eq!(top, 10 + frame * 5);
            let x = frame * 64 + 20;
            let above = raster.pixel(x, top - 1).unwrap()[1];
            let below = raster.pixel(x, top + 5).unwrap()[1];
            for y in top..top + 5 {
                let green = raster.pixel(x, y).unwrap()[1];
                assert!(green > above && green > below, "frame {frame} row {y}");
            }
        }
    }

    // Tests the band only appears for liquids
    // Verified by drawing the band for every category
    #[test]
    fn test_sheet_band_liquid_only() {
        let source = solid_source(64, 64, RED);
        let raster = render(&source, Category::Terrain, LayoutKind::Sheet);
        for frame in 0..4 {
            let x = frame * 64 + 20;
            let column: Vec<u8> = (0..64).map(|y| raster.pixel(x, y).unwrap()[1]).collect();
            assert!(column.iter().all(|&g| g == column[0]));
        }
    }

    // Tests single output keeps source dimensions and pixels for structures
    // Verified by scaling single output to the tile size
    #[test]
    fn test_single_structure_unmodified() {
        for (width, height) in [(1, 1), (13, 7), (64, 64), (100, 3)] {
            let mut pixels = RgbaImage::from_pixel(width, height, Rgba(RED));
            pixels.put_pixel(0, 0, Rgba([0, 0, 0, 0]));
            let source = SourceImage::new(pixels.clone()).unwrap();

            let raster = render(&source, Category::Structure, LayoutKind::Single);
            assert_eq!(raster.pixels(), &pixels);
        }
    }

    // Tests moss band is confined to the bottom rows and masked to opaque pixels
    // Verified by filling with source-over instead of source-atop
    #[test]
    fn test_single_nature_prop_moss() {
        let mut pixels = RgbaImage::from_pixel(10, 30, Rgba([0, 0, 0, 0]));
        for y in 0..30 {
            for x in 0..5 {
                pixels.put_pixel(x, y, Rgba(RED));
            }
        }
        let source = SourceImage::new(pixels).unwrap();
        let raster = render(&source, Category::NatureProp, LayoutKind::Single);

        assert_eq!((raster.width(), raster.height()), (10, 30));
        for y in 0..30 {
            for x in 0..10 {
                let pixel = raster.pixel(x, y).unwrap();
                if x >= 5 {
                    assert_eq!(pixel, [0, 0, 0, 0], "moss leaked at ({x}, {y})");
                } else if y < 10 {
                    assert_eq!(pixel, RED, "moss above band at ({x}, {y})");
                } else {
                    assert_eq!(pixel[3], 255);
                    assert!(pixel[1] > 50 && pixel[0] < 200, "no moss at ({x}, {y})");
                }
            }
        }
    }

    // Tests moss covers sources shorter than the band height
    // Verified by skipping the fill when the band starts above the image
    #[test]
    fn test_single_nature_prop_short_source() {
        let source = solid_source(4, 6, RED);
        let raster = render(&source, Category::NatureProp, LayoutKind::Single);
        for y in 0..6 {
            assert!(raster.pixel(2, y).unwrap()[1] > 50);
        }
    }

    // Tests missing sources fail without producing output
    // Verified by synthesizing a blank raster when the source is absent
    #[test]
    fn test_no_source_image() {
        let request = GenerationRequest {
            source: None,
            category: Category::Terrain,
            layout: LayoutKind::Atlas,
        };
        assert!(matches!(
            synthesize(&request),
            Err(PackError::NoSourceImage)
        ));
    }

    // Tests repeated runs on one synthesizer are byte-identical and independent
    // Verified by skipping the resize between runs
    #[test]
    fn test_synthesizer_reuse_is_deterministic() {
        let source = solid_source(32, 32, [40, 120, 200, 255]);
        let mut synthesizer = LayoutSynthesizer::new();

        let atlas = GenerationRequest::new(&source, Category::Terrain, LayoutKind::Atlas);
        let sheet = GenerationRequest::new(&source, Category::Liquid, LayoutKind::Sheet);

        let first = synthesizer.synthesize(&atlas).unwrap();
        synthesizer.synthesize(&sheet).unwrap();
        let second = synthesizer.synthesize(&atlas).unwrap();

        assert_eq!(first.raster.as_bytes(), second.raster.as_bytes());
        assert_eq!(first, second);
    }

    // Tests results carry the layout's export name and instructions
    // Verified by naming files after the category
    #[test]
    fn test_result_metadata() {
        let source = solid_source(8, 8, RED);
        let result =
            synthesize(&GenerationRequest::new(&source, Category::Terrain, LayoutKind::Sheet))
                .unwrap();
        assert_eq!(result.suggested_filename, "liquid_animation_sheet.png");
        assert_eq!(result.instructions_text, LayoutKind::Sheet.instructions());
        assert_eq!(result.category, Category::Terrain);
        assert_eq!(result.layout, LayoutKind::Sheet);
    }

    // Tests sources larger than a tile are scaled down to fill every atlas cell
    // Verified by blitting oversized sources without resampling
    #[test]
    fn test_atlas_covers_cells_with_oversized_source() {
        for (width, height) in [(300, 20), (65, 640), (200, 200)] {
            let source = solid_source(width, height, RED);
            let raster = render(&source, Category::Structure, LayoutKind::Atlas);

            assert_eq!((raster.width(), raster.height()), (192, 192));
            assert!(
                raster.pixels().pixels().all(|p| p.0 == RED),
                "{width}x{height} source left atlas pixels uncovered"
            );
        }
    }

    // Tests sources larger than a tile are scaled down to fill every sheet frame
    // Verified by drawing oversized sources at their own size
    #[test]
    fn test_sheet_covers_frames_with_oversized_source() {
        for (width, height) in [(300, 20), (65, 640), (200, 200)] {
            let source = solid_source(width, height, RED);
            let raster = render(&source, Category::Structure, LayoutKind::Sheet);

            assert_eq!((raster.width(), raster.height()), (256, 64));
            assert!(
                raster.pixels().pixels().all(|p| p.0[3] == 255),
                "{width}x{height} source left sheet pixels transparent"
            );
            assert_eq!(raster.pixel(0, 0), Some(RED));
        }
    }

    // Tests a category's rule is dropped under a layout that does not draw it
    // Verified by applying the wave band to the atlas
    #[test]
    fn test_rule_ignored_outside_its_layout() {
        let source = solid_source(64, 64, RED);
        let liquid_atlas = render(&source, Category::Liquid, LayoutKind::Atlas);
        let terrain_sheet = render(&source, Category::Terrain, LayoutKind::Sheet);

        assert_eq!(
            liquid_atlas.as_bytes(),
            render(&source, Category::Structure, LayoutKind::Atlas).as_bytes()
        );
        assert_eq!(
            terrain_sheet.as_bytes(),
            render(&source, Category::Structure, LayoutKind::Sheet).as_bytes()
        );
    }
}
