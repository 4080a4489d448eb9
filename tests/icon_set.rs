//! End-to-end tests: source file on disk in, icon set on disk out.

use std::path::Path;

use image::{
    ColorType, DynamicImage, GenericImageView, GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage,
};

use exticon::{Advisory, Config, Error, IconResizer};

fn write_source(dir: &Path, img: &DynamicImage) -> std::path::PathBuf {
    let path = dir.join("logomain.png");
    img.save(&path).unwrap();
    path
}

fn resizer_for(dir: &Path, source: &Path) -> IconResizer {
    IconResizer::new(Config {
        source: source.to_path_buf(),
        output_dir: dir.join("images"),
        ..Config::default()
    })
    .unwrap()
}

fn logo(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |x, y| {
        if (x / 8 + y / 8) % 2 == 0 {
            Rgba([30, 144, 255, 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    }))
}

#[test]
fn writes_three_square_rgba_icons() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(dir.path(), &logo(256, 256));

    let report = resizer_for(dir.path(), &source).run().unwrap();

    let expected = [(16, "icon16.png"), (48, "icon48.png"), (128, "icon128.png")];
    assert_eq!(report.icons.len(), expected.len());
    for (icon, (size, name)) in report.icons.iter().zip(expected) {
        assert_eq!(icon.size, size);
        assert_eq!(icon.path, dir.path().join("images").join(name));

        let written = image::open(&icon.path).unwrap();
        assert_eq!(written.dimensions(), (size, size));
        assert_eq!(written.color(), ColorType::Rgba8);
        assert_eq!(icon.bytes, std::fs::metadata(&icon.path).unwrap().len());
    }
    assert!(report.advisories.is_empty());
}

#[test]
fn sources_without_alpha_gain_alpha() {
    let dir = tempfile::tempdir().unwrap();
    let rgb = DynamicImage::ImageRgb8(RgbImage::from_pixel(160, 160, Rgb([250, 200, 0])));
    let source = write_source(dir.path(), &rgb);

    let report = resizer_for(dir.path(), &source).run().unwrap();

    assert_eq!(
        report.advisories,
        [Advisory::NoAlpha {
            color: ColorType::Rgb8
        }]
    );
    for icon in &report.icons {
        let written = image::open(&icon.path).unwrap();
        assert!(written.color().has_alpha());
        assert!(written.to_rgba8().pixels().all(|p| p[3] == 255));
    }
}

#[test]
fn grayscale_source_is_supported() {
    let dir = tempfile::tempdir().unwrap();
    let gray = DynamicImage::ImageLuma8(GrayImage::from_pixel(128, 128, Luma([90])));
    let source = write_source(dir.path(), &gray);

    let report = resizer_for(dir.path(), &source).run().unwrap();
    for icon in &report.icons {
        assert_eq!(image::open(&icon.path).unwrap().color(), ColorType::Rgba8);
    }
}

#[test]
fn missing_source_produces_no_files() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("logomain.png");

    let result = resizer_for(dir.path(), &source).run();

    assert!(matches!(result, Err(Error::SourceNotFound { .. })));
    assert!(!dir.path().join("images").exists());
}

#[test]
fn undecodable_source_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("logomain.png");
    std::fs::write(&source, b"\x89PNG but truncated").unwrap();

    let result = resizer_for(dir.path(), &source).run();

    assert!(matches!(result, Err(Error::ImageLoad { .. })));
    assert!(!dir.path().join("images").exists());
}

#[test]
fn non_square_source_is_stretched_with_warning() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(dir.path(), &logo(200, 100));

    let report = resizer_for(dir.path(), &source).run().unwrap();

    assert!(report.advisories.contains(&Advisory::NotSquare {
        width: 200,
        height: 100
    }));
    for icon in &report.icons {
        let written = image::open(&icon.path).unwrap();
        assert_eq!(written.dimensions(), (icon.size, icon.size));
    }
}

#[test]
fn small_source_succeeds_with_warning() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(dir.path(), &logo(64, 64));

    let report = resizer_for(dir.path(), &source).run().unwrap();

    assert_eq!(
        report.advisories,
        [Advisory::LowResolution {
            min_edge: 64,
            recommended: 128
        }]
    );
    assert_eq!(report.icons.len(), 3);
    // Upscaled icon still has the exact requested size.
    let largest = image::open(&report.icons[2].path).unwrap();
    assert_eq!(largest.dimensions(), (128, 128));
}

#[test]
fn reruns_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(dir.path(), &logo(300, 300));
    let resizer = resizer_for(dir.path(), &source);

    let first = resizer.run().unwrap();
    let first_bytes: Vec<Vec<u8>> = first
        .icons
        .iter()
        .map(|icon| std::fs::read(&icon.path).unwrap())
        .collect();

    let second = resizer.run().unwrap();
    let second_bytes: Vec<Vec<u8>> = second
        .icons
        .iter()
        .map(|icon| std::fs::read(&icon.path).unwrap())
        .collect();

    assert_eq!(first_bytes, second_bytes);
}

#[test]
fn custom_target_table() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source(dir.path(), &logo(256, 256));
    let resizer = IconResizer::new(Config {
        source,
        output_dir: dir.path().join("out"),
        targets: vec![exticon::IconTarget::new(32), exticon::IconTarget::new(96)],
        ..Config::default()
    })
    .unwrap();

    let report = resizer.run().unwrap();

    let sizes: Vec<u32> = report.icons.iter().map(|icon| icon.size).collect();
    assert_eq!(sizes, [32, 96]);
    assert!(dir.path().join("out").join("icon32.png").exists());
    assert!(dir.path().join("out").join("icon96.png").exists());
}

#[test]
fn jpeg_with_png_extension_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("logomain.png");
    RgbImage::from_pixel(256, 256, Rgb([12, 34, 56]))
        .save_with_format(&source, image::ImageFormat::Jpeg)
        .unwrap();

    let report = resizer_for(dir.path(), &source).run().unwrap();

    assert_eq!(report.source_dimensions, (256, 256));
    assert_eq!(report.icons.len(), 3);
}
