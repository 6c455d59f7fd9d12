//! Test harness for visual tests
//!
//! Provides infrastructure for running visual tests, including:
//! - Software surfaces sized per test
//! - Pixmap export to PNG files
//! - Reference image comparison

use anyhow::{Context, Result};
use fixpaint::{Color, Graphics};
use image::{ImageBuffer, Rgba, RgbaImage};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Result of a visual test
#[derive(Debug)]
pub enum TestResult {
    /// Test passed
    Passed,
    /// Test passed but reference image was created
    PassedWithNewReference,
    /// Test failed with difference ratio
    Failed { difference: f32, diff_path: PathBuf },
    /// Test skipped
    Skipped { reason: String },
}

impl TestResult {
    pub fn is_passed(&self) -> bool {
        matches!(
            self,
            TestResult::Passed | TestResult::PassedWithNewReference
        )
    }
}

/// Context for a single test
pub struct TestContext {
    /// Surface the test draws on
    pub graphics: Graphics,
    /// Test name
    pub name: String,
    /// Output directory for rendered images
    pub output_dir: PathBuf,
}

impl TestContext {
    /// Create a context with a surface cleared to opaque white
    pub fn new(name: &str, width: u32, height: u32) -> Result<Self> {
        let graphics = Graphics::new(width, height)
            .with_context(|| format!("Failed to create {}x{} surface", width, height))?;
        graphics.clear(Color::WHITE);
        Ok(Self {
            graphics,
            name: name.to_string(),
            output_dir: PathBuf::from("test_output"),
        })
    }

    /// Get the surface to draw on
    pub fn graphics(&self) -> &Graphics {
        &self.graphics
    }

    pub fn width(&self) -> u32 {
        self.graphics.width()
    }

    pub fn height(&self) -> u32 {
        self.graphics.height()
    }

    /// Snapshot the surface as an RGBA image
    pub fn to_image(&self) -> Result<RgbaImage> {
        let pixmap = self.graphics.consume_pixmap();
        RgbaImage::from_raw(pixmap.width(), pixmap.height(), pixmap.into_data())
            .context("Pixmap size does not match its dimensions")
    }
}

/// Test harness for running visual tests
pub struct TestHarness {
    /// Output directory for test results
    output_dir: PathBuf,
    /// Reference image directory
    reference_dir: PathBuf,
    /// Default surface width
    default_width: u32,
    /// Default surface height
    default_height: u32,
    /// Difference threshold for visual comparison (0.0-1.0)
    threshold: f32,
}

impl TestHarness {
    /// Create a new test harness with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(TestHarnessConfig::default())
    }

    /// Create a new test harness with custom configuration
    pub fn with_config(config: TestHarnessConfig) -> Result<Self> {
        std::fs::create_dir_all(&config.output_dir).context("Failed to create output directory")?;
        std::fs::create_dir_all(&config.reference_dir)
            .context("Failed to create reference directory")?;

        Ok(Self {
            output_dir: config.output_dir,
            reference_dir: config.reference_dir,
            default_width: config.width,
            default_height: config.height,
            threshold: config.threshold,
        })
    }

    /// Create a test context with default size
    pub fn create_context(&self, name: &str) -> Result<TestContext> {
        self.create_context_with_size(name, self.default_width, self.default_height)
    }

    /// Create a test context with custom size
    pub fn create_context_with_size(
        &self,
        name: &str,
        width: u32,
        height: u32,
    ) -> Result<TestContext> {
        let mut ctx = TestContext::new(name, width, height)?;
        ctx.output_dir = self.output_dir.clone();
        Ok(ctx)
    }

    /// Compare two images and return the difference ratio (0.0 = identical, 1.0 = completely different)
    pub fn compare_images(img1: &RgbaImage, img2: &RgbaImage) -> f32 {
        if img1.dimensions() != img2.dimensions() {
            return 1.0;
        }

        let (width, height) = img1.dimensions();
        let total_pixels = (width * height) as f64;
        let mut diff_sum = 0.0;

        for (p1, p2) in img1.pixels().zip(img2.pixels()) {
            let channel_diff: f64 = (0..4)
                .map(|c| (p1[c] as f64 - p2[c] as f64).abs() / 255.0)
                .sum();
            diff_sum += channel_diff / 4.0;
        }

        (diff_sum / total_pixels) as f32
    }

    /// Generate a diff image highlighting differences between two images
    pub fn generate_diff_image(img1: &RgbaImage, img2: &RgbaImage) -> Option<RgbaImage> {
        if img1.dimensions() != img2.dimensions() {
            return None;
        }

        let (width, height) = img1.dimensions();
        let mut diff = ImageBuffer::new(width, height);

        for y in 0..height {
            for x in 0..width {
                let p1 = img1.get_pixel(x, y);
                let p2 = img2.get_pixel(x, y);

                let max_diff = (0..4)
                    .map(|c| (p1[c] as i32 - p2[c] as i32).abs())
                    .max()
                    .unwrap_or(0);

                // Rasterizer output is exact, so any difference is highlighted
                if max_diff > 0 {
                    diff.put_pixel(x, y, Rgba([255, 0, 0, 255]));
                } else {
                    diff.put_pixel(x, y, Rgba([p1[0] / 3, p1[1] / 3, p1[2] / 3, 128]));
                }
            }
        }

        Some(diff)
    }

    /// Run a test and save output as PNG
    pub fn run_test<F>(&self, name: &str, test_fn: F) -> Result<TestResult>
    where
        F: FnOnce(&mut TestContext),
    {
        self.run_test_with_size(name, self.default_width, self.default_height, test_fn)
    }

    /// Run a test with custom size and save output as PNG
    pub fn run_test_with_size<F>(
        &self,
        name: &str,
        width: u32,
        height: u32,
        test_fn: F,
    ) -> Result<TestResult>
    where
        F: FnOnce(&mut TestContext),
    {
        let mut ctx = self.create_context_with_size(name, width, height)?;
        test_fn(&mut ctx);

        let output_path = self.output_path(name);
        let output_img = ctx.to_image()?;
        output_img
            .save(&output_path)
            .with_context(|| format!("Failed to save {:?}", output_path))?;
        tracing::debug!("Rendered test '{}' to {:?}", name, output_path);

        let reference_path = self.reference_path(name);
        if !reference_path.exists() {
            std::fs::copy(&output_path, &reference_path)
                .context("Failed to create reference image")?;
            tracing::info!(
                "Test '{}' created new reference at {:?}",
                name,
                reference_path
            );
            return Ok(TestResult::PassedWithNewReference);
        }

        let reference_img = image::open(&reference_path)
            .context("Failed to open reference image")?
            .to_rgba8();
        let difference = Self::compare_images(&output_img, &reference_img);

        if difference <= self.threshold {
            tracing::debug!("Test '{}' PASSED (diff: {:.4}%)", name, difference * 100.0);
            return Ok(TestResult::Passed);
        }

        let diff_path = self.diff_path(name);
        if let Some(diff_img) = Self::generate_diff_image(&output_img, &reference_img) {
            if let Err(e) = diff_img.save(&diff_path) {
                tracing::warn!("Failed to save diff image for '{}': {}", name, e);
            }
        }
        tracing::warn!(
            "Test '{}' FAILED (diff: {:.4}%, threshold: {:.4}%)",
            name,
            difference * 100.0,
            self.threshold * 100.0
        );
        Ok(TestResult::Failed {
            difference,
            diff_path,
        })
    }

    /// Get the reference image path for a test
    pub fn reference_path(&self, name: &str) -> PathBuf {
        self.reference_dir.join(format!("{}.png", file_stem(name)))
    }

    /// Get the output image path for a test
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.output_dir.join(format!("{}.png", file_stem(name)))
    }

    /// Get the diff image path for a test
    pub fn diff_path(&self, name: &str) -> PathBuf {
        self.output_dir.join(format!("{}_diff.png", file_stem(name)))
    }
}

/// `category::name` with path-safe separators
fn file_stem(name: &str) -> String {
    name.replace("::", "__")
}

/// Configuration for test harness
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TestHarnessConfig {
    /// Output directory for test results
    pub output_dir: PathBuf,
    /// Reference image directory
    pub reference_dir: PathBuf,
    /// Default surface width
    pub width: u32,
    /// Default surface height
    pub height: u32,
    /// Difference threshold for visual comparison (0.0-1.0)
    pub threshold: f32,
}

impl Default for TestHarnessConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("test_output"),
            reference_dir: PathBuf::from("test_output/references"),
            width: 400,
            height: 300,
            threshold: 0.0,
        }
    }
}

impl TestHarnessConfig {
    /// Load from a TOML file; missing keys keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse harness config")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fixpaint::Brush;

    fn scratch_config(tag: &str) -> TestHarnessConfig {
        let root = std::env::temp_dir().join(format!("fixpaint_harness_{}_{}", tag, std::process::id()));
        TestHarnessConfig {
            output_dir: root.clone(),
            reference_dir: root.join("references"),
            width: 32,
            height: 16,
            threshold: 0.0,
        }
    }

    #[test]
    fn test_config_defaults_and_overrides() {
        let config = TestHarnessConfig::from_toml_str("threshold = 0.01\nwidth = 64\n").unwrap();
        assert_eq!(config.width, 64);
        assert_eq!(config.height, 300);
        assert_eq!(config.threshold, 0.01);
        assert_eq!(config.output_dir, PathBuf::from("test_output"));
        assert!(TestHarnessConfig::from_toml_str("width = \"wide\"").is_err());
    }

    #[test]
    fn test_compare_images() {
        let white = RgbaImage::from_pixel(4, 4, Rgba([255, 255, 255, 255]));
        let mut one_off = white.clone();
        one_off.put_pixel(0, 0, Rgba([0, 0, 0, 255]));

        assert_eq!(TestHarness::compare_images(&white, &white), 0.0);
        let diff = TestHarness::compare_images(&white, &one_off);
        assert!((diff - 0.75 / 16.0).abs() < 1e-6, "got {}", diff);
        assert_eq!(
            TestHarness::compare_images(&white, &RgbaImage::new(2, 2)),
            1.0
        );

        let diff_img = TestHarness::generate_diff_image(&white, &one_off).unwrap();
        assert_eq!(diff_img.get_pixel(0, 0), &Rgba([255, 0, 0, 255]));
        assert_eq!(diff_img.get_pixel(1, 0)[3], 128);
    }

    #[test]
    fn test_context_exports_rgba() {
        let ctx = TestContext::new("export", 4, 2).unwrap();
        ctx.graphics()
            .fill_rectangle(Some(&Brush::solid(Color::RED)), 0, 0, 2, 2);
        let img = ctx.to_image().unwrap();
        assert_eq!(img.dimensions(), (4, 2));
        assert_eq!(img.get_pixel(0, 0), &Rgba([255, 0, 0, 255]));
        assert_eq!(img.get_pixel(3, 1), &Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_run_creates_then_matches_reference() {
        let config = scratch_config("reference");
        let root = config.output_dir.clone();
        let harness = TestHarness::with_config(config).unwrap();
        let draw = |ctx: &mut TestContext| {
            ctx.graphics()
                .fill_rectangle(Some(&Brush::solid(Color::BLUE)), 4, 4, 8, 8);
        };

        let first = harness.run_test("shapes::square", draw).unwrap();
        assert!(matches!(first, TestResult::PassedWithNewReference));
        assert!(harness.reference_path("shapes::square").exists());

        let second = harness.run_test("shapes::square", draw).unwrap();
        assert!(matches!(second, TestResult::Passed));

        let third = harness
            .run_test("shapes::square", |ctx| {
                ctx.graphics()
                    .fill_rectangle(Some(&Brush::solid(Color::RED)), 4, 4, 8, 8);
            })
            .unwrap();
        assert!(!third.is_passed());
        assert!(harness.diff_path("shapes::square").exists());

        std::fs::remove_dir_all(root).ok();
    }
}
