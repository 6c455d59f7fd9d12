//! Graphics configuration
//!
//! A surface can be described in TOML:
//!
//! ```toml
//! width = 320
//! height = 240
//! background = 0x00FFFFFF
//! paint_mode = "zero"
//! fill_rule = "even_odd"
//! pen_color = 0xFF000000
//! pen_width = 2.5
//! pen_dash = "4, 2"
//! brush_color = 0xFFFFFFFF
//! transform = "translate(10 10) scale(2)"
//! ```
//!
//! Everything but `width` and `height` is optional.

use std::fs;
use std::path::Path;

use fixpaint_core::{Brush, Color, FillRule, Fixed, Matrix, PaintMode, Pen};
use fixpaint_parser::{parse_number_list, parse_transform_list};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Paint mode as written in configuration files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaintModeSetting {
    #[default]
    Zero,
    Xor,
}

impl From<PaintModeSetting> for PaintMode {
    fn from(setting: PaintModeSetting) -> Self {
        match setting {
            PaintModeSetting::Zero => PaintMode::Zero,
            PaintModeSetting::Xor => PaintMode::Xor,
        }
    }
}

/// Fill rule as written in configuration files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FillRuleSetting {
    #[default]
    NonZero,
    EvenOdd,
}

impl From<FillRuleSetting> for FillRule {
    fn from(setting: FillRuleSetting) -> Self {
        match setting {
            FillRuleSetting::NonZero => FillRule::NonZero,
            FillRuleSetting::EvenOdd => FillRule::EvenOdd,
        }
    }
}

/// Surface size and initial drawing attributes
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GraphicsConfig {
    pub width: u32,
    pub height: u32,
    /// ARGB color the surface starts cleared to
    #[serde(default = "default_background")]
    pub background: u32,
    #[serde(default)]
    pub paint_mode: PaintModeSetting,
    #[serde(default)]
    pub fill_rule: FillRuleSetting,
    #[serde(default = "default_pen_color")]
    pub pen_color: u32,
    #[serde(default = "default_pen_width")]
    pub pen_width: f32,
    /// Dash pattern as a number list, e.g. `"4, 2"`
    #[serde(default)]
    pub pen_dash: Option<String>,
    #[serde(default = "default_brush_color")]
    pub brush_color: u32,
    /// Initial canvas transform as a transform list
    #[serde(default)]
    pub transform: Option<String>,
}

fn default_background() -> u32 {
    0x00FF_FFFF
}

fn default_pen_color() -> u32 {
    Color::BLACK.0
}

fn default_pen_width() -> f32 {
    1.0
}

fn default_brush_color() -> u32 {
    Color::WHITE.0
}

impl GraphicsConfig {
    /// Defaults for a `width` x `height` surface
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: default_background(),
            paint_mode: PaintModeSetting::default(),
            fill_rule: FillRuleSetting::default(),
            pen_color: default_pen_color(),
            pen_width: default_pen_width(),
            pen_dash: None,
            brush_color: default_brush_color(),
            transform: None,
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "loading graphics config");
        Self::from_toml_str(&content)
    }

    /// Initial canvas matrix; identity when no transform is configured
    pub fn matrix(&self) -> Result<Matrix> {
        match &self.transform {
            Some(text) => Ok(parse_transform_list(text)?),
            None => Ok(Matrix::IDENTITY),
        }
    }

    /// Default pen described by the `pen_*` keys
    pub fn pen(&self) -> Result<Pen> {
        let pen = Pen::with_width(Color(self.pen_color), Fixed::from_f32(self.pen_width));
        match &self.pen_dash {
            Some(text) => Ok(pen.with_dash(&parse_number_list(text, ',')?, 0)),
            None => Ok(pen),
        }
    }

    pub fn brush(&self) -> Brush {
        Brush::solid(Color(self.brush_color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphicsError;

    #[test]
    fn test_minimal_config_defaults() {
        let config = GraphicsConfig::from_toml_str("width = 64\nheight = 32\n").unwrap();
        assert_eq!(config, GraphicsConfig::new(64, 32));
        assert_eq!(config.background, 0x00FF_FFFF);
        assert_eq!(PaintMode::from(config.paint_mode), PaintMode::Zero);
        assert_eq!(FillRule::from(config.fill_rule), FillRule::NonZero);
        assert_eq!(config.matrix().unwrap(), Matrix::IDENTITY);
        assert_eq!(config.brush().solid_color(), Some(Color::WHITE));
    }

    #[test]
    fn test_full_config() {
        let config = GraphicsConfig::from_toml_str(
            r#"
            width = 10
            height = 20
            background = 0xFF000000
            paint_mode = "xor"
            fill_rule = "even_odd"
            pen_color = 0xFFFF0000
            pen_width = 2.5
            pen_dash = "4, 2"
            transform = "translate(3 4)"
            "#,
        )
        .unwrap();
        assert_eq!(PaintMode::from(config.paint_mode), PaintMode::Xor);
        assert_eq!(FillRule::from(config.fill_rule), FillRule::EvenOdd);

        let pen = config.pen().unwrap();
        assert_eq!(pen.width, Fixed::from_f32(2.5));
        assert_eq!(
            pen.dash_array(),
            Some(&[Fixed::from_int(4), Fixed::from_int(2)][..])
        );
        assert_eq!(
            config.matrix().unwrap(),
            Matrix::translation(Fixed::from_int(3), Fixed::from_int(4))
        );
    }

    #[test]
    fn test_bad_config() {
        assert!(matches!(
            GraphicsConfig::from_toml_str("width = 1"),
            Err(GraphicsError::Config(_))
        ));
        assert!(matches!(
            GraphicsConfig::from_toml_str("width = 1\nheight = 1\npaint_mode = \"blend\""),
            Err(GraphicsError::Config(_))
        ));

        let mut config = GraphicsConfig::new(4, 4);
        config.transform = Some("rotate(".into());
        assert!(matches!(config.matrix(), Err(GraphicsError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = GraphicsConfig::from_file(Path::new("/nonexistent/fixpaint.toml"));
        assert!(matches!(result, Err(GraphicsError::Io(_))));
    }
}
