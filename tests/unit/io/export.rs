//! Tests for PNG and SVG artifact writers

#[cfg(test)]
mod tests {
    use image::RgbaImage;
    use wavyshapes::PatternError;
    use wavyshapes::io::export::{export_png, export_svg};

    // Tests PNG export creates parent directories and a readable file
    // Verified by disabling directory creation
    #[test]
    fn test_export_png_creates_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("out").join("pattern_result.png");
        let mut img = RgbaImage::new(4, 3);
        img.put_pixel(1, 1, image::Rgba([255, 0, 0, 255]));

        export_png(&img, &path).expect("png export");

        let decoded = image::open(&path).expect("readable png").to_rgba8();
        assert_eq!(decoded.dimensions(), (4, 3));
        assert_eq!(decoded.get_pixel(1, 1).0, [255, 0, 0, 255]);
    }

    // Tests SVG export writes the document verbatim
    // Verified by appending a newline on write
    #[test]
    fn test_export_svg_writes_text() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("pattern_result.svg");
        export_svg("<svg/>", &path).expect("svg export");
        assert_eq!(std::fs::read_to_string(&path).expect("read back"), "<svg/>");
    }

    // Tests writing into a path blocked by a file fails with a path error
    // Verified by swallowing directory errors
    #[test]
    fn test_export_svg_blocked_parent() {
        let dir = tempfile::tempdir().expect("temp dir");
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "x").expect("write blocker");

        let result = export_svg("<svg/>", &blocker.join("out.svg"));
        assert!(matches!(result, Err(PatternError::FileSystem { .. })));
    }
}
