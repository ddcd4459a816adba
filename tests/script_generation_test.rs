// Tests for the generated panel script: template shape, background
// filtering, emission order and determinism.
use std::path::PathBuf;

use image::{DynamicImage, ImageBuffer, Rgb};
use panel_painter::compiler::{Compiler, CompilerConfig};
use panel_painter::panel::PanelTarget;
use tempfile::TempDir;

fn write_png(dir: &TempDir, name: &str, image: ImageBuffer<Rgb<u8>, Vec<u8>>) -> PathBuf {
    let path = dir.path().join(name);
    DynamicImage::ImageRgb8(image)
        .save(&path)
        .expect("failed to write test image");
    path
}

fn compile(path: &PathBuf, name: &str) -> panel_painter::compiler::GeneratedScript {
    let compiler = Compiler::new(CompilerConfig::default()).expect("compiler init failed");
    let target = PanelTarget::parse("front", "white").expect("parse target");
    compiler
        .compile(path, name, &target)
        .expect("compile should succeed")
}

#[test]
fn background_only_image_emits_no_calls() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_png(&dir, "black.png", ImageBuffer::from_pixel(4, 4, Rgb([0, 0, 0])));

    let script = compile(&path, "demo");

    assert_eq!(script.call_count, 0);
    assert_eq!(script.skipped_pixels, 16);
    assert!(!script.text.contains("setColorRGB"));
    assert!(script.text.contains("function demo_on()"));
    assert!(script.text.contains("function demo_off()"));
}

#[test]
fn single_pixel_emits_exactly_one_call_with_its_five_values() {
    let dir = TempDir::new().expect("tempdir");
    let mut image = ImageBuffer::from_pixel(5, 3, Rgb([0, 0, 0]));
    image.put_pixel(2, 1, Rgb([10, 20, 30]));
    let path = write_png(&dir, "dot.png", image);

    let script = compile(&path, "demo");

    assert_eq!(script.call_count, 1);
    assert_eq!(script.skipped_pixels, 14);
    assert_eq!(script.text.matches("setColorRGB").count(), 1);
    assert!(
        script
            .text
            .contains("    demo_panel.setColorRGB(10, 20, 30, 2, 1)\n")
    );
}

#[test]
fn output_begins_with_wrap_line_and_ends_with_closed_off_function() {
    let dir = TempDir::new().expect("tempdir");
    let path = write_png(&dir, "any.png", ImageBuffer::from_pixel(2, 2, Rgb([5, 5, 5])));

    let script = compile(&path, "demo");

    assert!(
        script
            .text
            .starts_with("demo_panel = peripheral.wrap(\"front:white\")\n")
    );
    assert!(
        script
            .text
            .ends_with("function demo_off()\n    demo_panel.fill(0, 0, 0)\nend\n")
    );
}

#[test]
fn identical_inputs_produce_byte_identical_output() {
    let dir = TempDir::new().expect("tempdir");
    let image = ImageBuffer::from_fn(8, 8, |x, y| {
        Rgb([(x * 30) as u8, (y * 30) as u8, ((x + y) * 10) as u8])
    });
    let path = write_png(&dir, "pattern.png", image);

    let first = compile(&path, "demo");
    let second = compile(&path, "demo");

    assert_eq!(first.text, second.text);
    assert_eq!(first.call_count, second.call_count);
}

#[test]
fn emission_order_is_column_major() {
    let dir = TempDir::new().expect("tempdir");
    let mut image = ImageBuffer::from_pixel(2, 2, Rgb([0, 0, 0]));
    image.put_pixel(0, 0, Rgb([1, 1, 1]));
    image.put_pixel(0, 1, Rgb([2, 2, 2]));
    image.put_pixel(1, 0, Rgb([3, 3, 3]));
    image.put_pixel(1, 1, Rgb([4, 4, 4]));
    let path = write_png(&dir, "grid.png", image);

    let script = compile(&path, "demo");

    let coords: Vec<(u32, u32)> = script
        .text
        .lines()
        .filter(|line| line.contains("setColorRGB"))
        .map(|line| {
            let args = line
                .split_once('(')
                .and_then(|(_, rest)| rest.strip_suffix(')'))
                .expect("call line should have argument list");
            let parts: Vec<u32> = args
                .split(',')
                .map(|p| p.trim().parse().expect("numeric argument"))
                .collect();
            (parts[3], parts[4])
        })
        .collect();

    assert_eq!(coords, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
}

#[test]
fn call_count_matches_non_background_pixel_count() {
    let dir = TempDir::new().expect("tempdir");
    // 6x4 棋盘：一半背景、一半前景
    let image = ImageBuffer::from_fn(6, 4, |x, y| {
        if (x + y) % 2 == 0 {
            Rgb([0, 0, 0])
        } else {
            Rgb([200, 100, 50])
        }
    });
    let path = write_png(&dir, "checker.png", image);

    let script = compile(&path, "demo");

    assert_eq!(script.call_count, 12);
    assert_eq!(script.skipped_pixels, 12);
    assert_eq!(script.text.matches("setColorRGB").count(), 12);
}

#[test]
fn custom_background_keeps_black_pixels() {
    let dir = TempDir::new().expect("tempdir");
    let mut image = ImageBuffer::from_pixel(2, 1, Rgb([255, 255, 255]));
    image.put_pixel(1, 0, Rgb([0, 0, 0]));
    let path = write_png(&dir, "inverted.png", image);

    let compiler = Compiler::new(CompilerConfig {
        background: Rgb([255, 255, 255]),
        ..CompilerConfig::default()
    })
    .expect("compiler init failed");
    let target = PanelTarget::parse("back", "lime").expect("parse target");
    let script = compiler
        .compile(&path, "neg", &target)
        .expect("compile should succeed");

    assert_eq!(script.call_count, 1);
    assert!(script.text.contains("neg_panel.setColorRGB(0, 0, 0, 1, 0)"));
    assert!(script.text.contains("neg_panel.fill(255, 255, 255)"));
    assert!(script.text.starts_with("neg_panel = peripheral.wrap(\"back:lime\")\n"));
}
