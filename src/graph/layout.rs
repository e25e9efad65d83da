//! Fixed layout heuristics shared by both graph views.
//!
//! Activities are spread evenly across one horizontal band; object types
//! are stacked as legend rows. No crossing minimization is attempted.

use crate::raster::{Canvas, Rgb};
use std::collections::BTreeMap;

const LEGEND_X: i32 = 20;
const LEGEND_TOP: i32 = 80;
const LEGEND_ROW_HEIGHT: i32 = 22;
const LEGEND_SWATCH_WIDTH: i32 = 20;
const LEGEND_SWATCH_HEIGHT: i32 = 15;
const LEGEND_LABEL_GAP: i32 = 5;
const LEGEND_LABEL_DROP: i32 = 2;

/// Vertical distance between edge lanes of consecutive object types
pub const LANE_SPACING: i32 = 16;

/// Evenly spaced x-centers for `activities`, in the given order
///
/// With `margin` on both sides; a single activity sits on the left margin.
pub fn activity_positions<'a>(activities: &'a [String], width: u32, margin: i32) -> BTreeMap<&'a str, i32> {
    let span = f64::from(width as i32 - 2 * margin);
    let step = span / activities.len().saturating_sub(1).max(1) as f64;

    activities
        .iter()
        .enumerate()
        .map(|(i, activity)| (activity.as_str(), (f64::from(margin) + i as f64 * step) as i32))
        .collect()
}

/// Draw the legend row for the `index`-th object type
pub fn draw_legend_row(canvas: &mut Canvas, index: usize, object_type: &str, color: Rgb, ink: Rgb) {
    let (left, top) = legend_swatch_origin(index);
    canvas.rectangle(
        left,
        top,
        left + LEGEND_SWATCH_WIDTH,
        top + LEGEND_SWATCH_HEIGHT,
        color,
    );
    canvas.text_block(
        left + LEGEND_SWATCH_WIDTH + LEGEND_LABEL_GAP,
        top + LEGEND_LABEL_DROP,
        object_type,
        ink,
    );
}

/// Legend swatch origin of the `index`-th object type
pub fn legend_swatch_origin(index: usize) -> (i32, i32) {
    (LEGEND_X, LEGEND_TOP + index as i32 * LEGEND_ROW_HEIGHT)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_positions_span_the_band() {
        let activities = labels(&["A", "B", "C"]);
        let pos = activity_positions(&activities, 1200, 100);

        assert_eq!(pos["A"], 100);
        assert_eq!(pos["B"], 600);
        assert_eq!(pos["C"], 1100);
    }

    #[test]
    fn test_single_activity_sits_on_margin() {
        let activities = labels(&["Only"]);
        let pos = activity_positions(&activities, 1200, 110);
        assert_eq!(pos["Only"], 110);
    }

    #[test]
    fn test_legend_rows_stack() {
        assert_eq!(legend_swatch_origin(0), (20, 80));
        assert_eq!(legend_swatch_origin(2), (20, 124));
    }
}
