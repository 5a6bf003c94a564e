//! Tests for base map bootstrap, decoding and fatal load failures

#[cfg(test)]
mod tests {
    use image::{Rgb, RgbImage};
    use std::fs;
    use terrabrush::PaintError;
    use terrabrush::io::configuration::MAX_MAP_DIMENSION;
    use terrabrush::io::image::{
        BLANK_COLOR, bootstrap_base_image, ensure_base_image, load_base_image,
    };

    // Tests a missing map is synthesized as a white canvas
    // Verified by saving the canvas with the wrong size
    #[test]
    fn test_missing_map_is_created_blank() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("Temporary directory should be available");
        };
        let path = dir.path().join("map.png");

        let created = ensure_base_image(&path, 20, 15);
        assert!(matches!(created, Ok(true)));
        assert!(path.exists());

        let Ok(img) = load_base_image(&path) else {
            unreachable!("Synthesized map should load");
        };
        assert_eq!(img.dimensions(), (20, 15));
        assert!(img.pixels().all(|p| *p == BLANK_COLOR));
    }

    // Tests an existing map is never overwritten
    // Verified by removing the existence check
    #[test]
    fn test_existing_map_is_kept() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("Temporary directory should be available");
        };
        let path = dir.path().join("map.png");
        let existing = RgbImage::from_pixel(4, 3, Rgb([10, 20, 30]));
        assert!(existing.save(&path).is_ok());

        assert!(matches!(ensure_base_image(&path, 200, 150), Ok(false)));

        let Ok(img) = load_base_image(&path) else {
            unreachable!("Existing map should load");
        };
        assert_eq!(img.dimensions(), (4, 3));
        assert_eq!(*img.get_pixel(1, 1), Rgb([10, 20, 30]));
    }

    // Tests parent directories are created for a nested map path
    // Verified by skipping create_dir_all
    #[test]
    fn test_bootstrap_creates_parent_directories() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("Temporary directory should be available");
        };
        let path = dir.path().join("campaign").join("maps").join("world.png");

        let img = bootstrap_base_image(&path, 8, 6);

        assert!(img.is_ok_and(|img| img.dimensions() == (8, 6)));
    }

    // Tests an undecodable file is a load error, not a blank canvas
    // Verified by falling back to a blank image on decode failure
    #[test]
    fn test_corrupt_map_is_fatal() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("Temporary directory should be available");
        };
        let path = dir.path().join("map.png");
        assert!(fs::write(&path, b"definitely not a png").is_ok());

        match bootstrap_base_image(&path, 20, 15) {
            Err(PaintError::ImageLoad { path: failed, .. }) => assert_eq!(failed, path),
            other => unreachable!("Expected ImageLoad error, got {other:?}"),
        }
    }

    // Tests a decoded map larger than the dimension limit is refused
    // Verified by removing the dimension check from load_base_image
    #[test]
    fn test_oversized_map_is_rejected() {
        let Ok(dir) = tempfile::tempdir() else {
            unreachable!("Temporary directory should be available");
        };
        let wide = dir.path().join("wide.png");
        let tall = dir.path().join("tall.png");
        assert!(RgbImage::new(MAX_MAP_DIMENSION + 1, 1).save(&wide).is_ok());
        assert!(RgbImage::new(1, MAX_MAP_DIMENSION + 1).save(&tall).is_ok());

        match load_base_image(&wide) {
            Err(PaintError::InvalidParameter { parameter, value, .. }) => {
                assert_eq!(parameter, "width");
                assert_eq!(value, (MAX_MAP_DIMENSION + 1).to_string());
            }
            other => unreachable!("Expected InvalidParameter error, got {other:?}"),
        }
        assert!(matches!(
            load_base_image(&tall),
            Err(PaintError::InvalidParameter { parameter: "height", .. })
        ));
    }
}
