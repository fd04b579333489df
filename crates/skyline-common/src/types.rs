use serde::{Deserialize, Serialize};
use std::fmt;

/// Farthest background layer. Gradients sit here unless told otherwise.
pub const LAYER_BACKGROUND0: i32 = -300;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
}

impl Vector {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl std::ops::Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl std::ops::Add for Vector {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

/// Logical screen dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenSize {
    pub width: f32,
    pub height: f32,
}

impl ScreenSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rectf {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rectf {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle anchored at the origin covering the whole screen.
    pub fn from_size(size: ScreenSize) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    pub fn translated(&self, offset: Vector) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }
}

/// RGBA color with floating point channels, nominally in `0.0..=1.0`.
///
/// Values above 1.0 are representable; callers decide whether
/// to warn about them.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

impl Color {
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);

    pub const fn rgba(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub const fn rgb(red: f32, green: f32, blue: f32) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Build a color from a 3 (RGB) or 4 (RGBA) element slice.
    pub fn from_components(values: &[f32]) -> Option<Self> {
        match *values {
            [r, g, b] => Some(Self::rgb(r, g, b)),
            [r, g, b, a] => Some(Self::rgba(r, g, b, a)),
            _ => None,
        }
    }

    pub fn to_vec(&self) -> Vec<f32> {
        vec![self.red, self.green, self.blue, self.alpha]
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    /// Whether any channel, alpha included, is above 1.0.
    pub fn exceeds_unit_range(&self) -> bool {
        self.to_array().iter().any(|&c| c > 1.0)
    }
}

/// How a gradient blends its two colors and which rectangle it covers.
///
/// The plain variants cover the screen; the `*Sector` variants cover the
/// whole sector and scroll with the camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GradientDirection {
    #[default]
    Vertical,
    Horizontal,
    VerticalSector,
    HorizontalSector,
}

impl GradientDirection {
    /// Every variant in editor order.
    pub const ALL: [Self; 4] = [
        Self::Vertical,
        Self::Horizontal,
        Self::VerticalSector,
        Self::HorizontalSector,
    ];

    /// Name used in level files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
            Self::VerticalSector => "vertical_sector",
            Self::HorizontalSector => "horizontal_sector",
        }
    }

    /// Label shown in the editor's direction selector.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Vertical => "vertical",
            Self::Horizontal => "horizontal",
            Self::VerticalSector => "vertical sector",
            Self::HorizontalSector => "horizontal sector",
        }
    }

    /// Parse a level file name. Anything unrecognized is vertical.
    pub fn from_level_str(s: &str) -> Self {
        match s {
            "horizontal" => Self::Horizontal,
            "horizontal_sector" => Self::HorizontalSector,
            "vertical_sector" => Self::VerticalSector,
            _ => Self::Vertical,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Self::Vertical => 0,
            Self::Horizontal => 1,
            Self::VerticalSector => 2,
            Self::HorizontalSector => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Colors mean left/right instead of top/bottom.
    pub fn is_horizontal(&self) -> bool {
        match self {
            Self::Horizontal | Self::HorizontalSector => true,
            Self::Vertical | Self::VerticalSector => false,
        }
    }

    /// Region follows the sector and camera instead of the screen.
    pub fn is_sector(&self) -> bool {
        match self {
            Self::VerticalSector | Self::HorizontalSector => true,
            Self::Vertical | Self::Horizontal => false,
        }
    }
}

/// Strict parse: only the four level file names are accepted.
impl std::str::FromStr for GradientDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|dir| dir.as_str() == s)
            .ok_or_else(|| format!("unknown gradient direction: {s}"))
    }
}

impl fmt::Display for GradientDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
