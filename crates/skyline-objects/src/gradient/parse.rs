//! Reading gradient fields from a level mapping.
//!
//! Color parsing is two-stage: horizontal gradients first try their
//! `left_color`/`right_color` pair; when that pair is incomplete (or the
//! gradient is vertical) the shared `top_color`/`bottom_color` path runs.

use skyline_common::{Color, GradientDirection, LevelError};
use skyline_level::ReaderMapping;
use tracing::warn;

pub(crate) const DEFAULT_TOP_COLOR: Color = Color::rgb(0.3, 0.4, 0.75);
pub(crate) const DEFAULT_BOTTOM_COLOR: Color = Color::rgb(1.0, 1.0, 1.0);

/// Absent or unrecognized names are vertical.
pub(super) fn parse_direction(reader: &ReaderMapping) -> Result<GradientDirection, LevelError> {
    Ok(reader
        .get::<String>("direction")?
        .map(|s| GradientDirection::from_level_str(&s))
        .unwrap_or_default())
}

/// Both colors of a horizontal pair, or `None` if either is missing.
fn parse_horizontal_colors(reader: &ReaderMapping) -> Result<Option<(Color, Color)>, LevelError> {
    let Some(left) = reader.get_color("left_color")? else {
        return Ok(None);
    };
    Ok(reader.get_color("right_color")?.map(|right| (left, right)))
}

fn parse_vertical_colors(reader: &ReaderMapping) -> Result<(Color, Color), LevelError> {
    let top = reader.get_color("top_color")?.unwrap_or(DEFAULT_TOP_COLOR);
    let bottom = reader
        .get_color("bottom_color")?
        .unwrap_or(DEFAULT_BOTTOM_COLOR);
    Ok((top, bottom))
}

/// Level keys paired with the colors read from them, (top or left) first.
pub(super) type KeyedColors = [(&'static str, Color); 2];

/// Read the color pair for `direction`.
pub(super) fn parse_colors(
    reader: &ReaderMapping,
    direction: GradientDirection,
) -> Result<KeyedColors, LevelError> {
    if direction.is_horizontal() {
        match parse_horizontal_colors(reader)? {
            Some((left, right)) => return Ok([("left_color", left), ("right_color", right)]),
            None => warn!(
                "horizontal gradients should use left_color and right_color; \
                 trying top_color and bottom_color instead"
            ),
        }
    }
    let (top, bottom) = parse_vertical_colors(reader)?;
    Ok([("top_color", top), ("bottom_color", bottom)])
}
