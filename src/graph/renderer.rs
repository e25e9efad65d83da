//! OC-DFG and OC-PN diagram rendering onto a raster canvas.
//!
//! Both views are visual aids. The OC-PN view places a small
//! "transition" circle between neighbouring activities to suggest a
//! place/transition net; it carries no Petri-net semantics.

use super::layout::{activity_positions, draw_legend_row, LANE_SPACING};
use crate::aggregator::ranking::collect_activities;
use crate::parser::schema::OcDfg;
use crate::raster::{encode_png, Canvas, Rgb};
use crate::utils::config::{
    BACKGROUND, DEFAULT_CANVAS_WIDTH, DEFAULT_PALETTE, LABEL_INK, OC_DFG_CANVAS_HEIGHT,
    OC_DFG_MARGIN, OC_PN_CANVAS_HEIGHT, OC_PN_MARGIN, TITLE_INK,
};
use crate::utils::error::EncodeError;
use log::{debug, info};

const TITLE_X: i32 = 20;
const TITLE_Y: i32 = 20;

// OC-DFG geometry
const DFG_BAND_Y: i32 = 330;
const DFG_NODE_RADIUS: i32 = 30;
const DFG_FIRST_LANE_OFFSET: i32 = 40;
const DFG_NODE_INK: Rgb = Rgb::new(45, 45, 45);

// OC-PN geometry
const PN_ACTIVITY_Y: i32 = 340;
const PN_PLACE_Y: i32 = 240;
const PN_BOX_HALF_WIDTH: i32 = 35;
const PN_BOX_HALF_HEIGHT: i32 = 20;
const PN_PLACE_RADIUS: i32 = 10;
const PN_FIRST_LANE_Y: i32 = 150;
const PN_BOX_FILL: Rgb = Rgb::new(245, 247, 250);
const PN_BOX_BORDER: Rgb = Rgb::new(40, 40, 40);
const PN_PLACE_INK: Rgb = Rgb::new(70, 70, 70);
const PN_FLOW_INK: Rgb = Rgb::new(90, 90, 90);

/// Used when the palette is empty
const FALLBACK_INK: Rgb = Rgb::new(90, 90, 90);

/// Rendering configuration for one graph view
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,

    /// Legend colors, cycled over the sorted object types
    pub palette: Vec<Rgb>,

    /// Left/right margin of the activity band
    pub margin: i32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::oc_dfg()
    }
}

impl RenderConfig {
    /// Defaults for the OC-DFG view (1200x520)
    pub fn oc_dfg() -> Self {
        Self {
            title: "OC-DFG".to_string(),
            width: DEFAULT_CANVAS_WIDTH,
            height: OC_DFG_CANVAS_HEIGHT,
            palette: DEFAULT_PALETTE.to_vec(),
            margin: OC_DFG_MARGIN,
        }
    }

    /// Defaults for the OC-PN view (1200x540)
    pub fn oc_pn() -> Self {
        Self {
            title: "OC-PN".to_string(),
            width: DEFAULT_CANVAS_WIDTH,
            height: OC_PN_CANVAS_HEIGHT,
            palette: DEFAULT_PALETTE.to_vec(),
            margin: OC_PN_MARGIN,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    pub fn with_palette(mut self, palette: Vec<Rgb>) -> Self {
        self.palette = palette;
        self
    }

    /// Color of the `index`-th object type
    pub fn color_for(&self, index: usize) -> Rgb {
        if self.palette.is_empty() {
            FALLBACK_INK
        } else {
            self.palette[index % self.palette.len()]
        }
    }
}

/// Render the OC-DFG view
///
/// **Public** - draws activity nodes on one band and one arrow lane per
/// object type above it
///
/// # Arguments
/// * `dfg` - Ranked edges per object type
/// * `config` - Canvas size, title and legend palette
///
/// # Returns
/// The finished canvas; only the title when the DFG has no activities
pub fn render_oc_dfg(dfg: &OcDfg, config: &RenderConfig) -> Canvas {
    let mut canvas = blank_with_title(config);

    let activities = collect_activities(dfg);
    if activities.is_empty() {
        debug!("OC-DFG has no activities; rendering title only");
        return canvas;
    }

    let pos = activity_positions(&activities, config.width, config.margin);
    for (activity, &x) in &pos {
        canvas.circle_outline(x, DFG_BAND_Y, DFG_NODE_RADIUS, DFG_NODE_INK);
        canvas.text_block(x - 20, DFG_BAND_Y - 6, activity, LABEL_INK);
    }

    for (i, (object_type, edges)) in dfg.iter().enumerate() {
        let color = config.color_for(i);
        draw_legend_row(&mut canvas, i, object_type, color, TITLE_INK);

        let lane_y = DFG_BAND_Y - (DFG_FIRST_LANE_OFFSET + i as i32 * LANE_SPACING);
        for edge in edges {
            canvas.arrow(pos[edge.from.as_str()], lane_y, pos[edge.to.as_str()], lane_y, color);
        }
    }

    debug!(
        "Rendered OC-DFG: {} activities, {} object types",
        activities.len(),
        dfg.len()
    );

    canvas
}

/// Render the simplified OC-PN view
///
/// **Public** - activities become boxes, each neighbouring pair in the
/// global activity order is joined through a transition circle, and
/// per-type edges run in lanes above
pub fn render_oc_pn(dfg: &OcDfg, config: &RenderConfig) -> Canvas {
    let mut canvas = blank_with_title(config);

    let activities = collect_activities(dfg);
    if activities.is_empty() {
        debug!("OC-PN has no activities; rendering title only");
        return canvas;
    }

    let pos = activity_positions(&activities, config.width, config.margin);
    for (i, activity) in activities.iter().enumerate() {
        let x = pos[activity.as_str()];
        draw_activity_box(&mut canvas, x, activity);

        if let Some(next) = activities.get(i + 1) {
            let nx = pos[next.as_str()];
            let cx = (x + nx) / 2;
            let box_top = PN_ACTIVITY_Y - PN_BOX_HALF_HEIGHT;

            canvas.circle_outline(cx, PN_PLACE_Y, PN_PLACE_RADIUS, PN_PLACE_INK);
            canvas.arrow(x, box_top, cx, PN_PLACE_Y + PN_PLACE_RADIUS, PN_FLOW_INK);
            canvas.arrow(cx, PN_PLACE_Y - PN_PLACE_RADIUS, nx, box_top, PN_FLOW_INK);
        }
    }

    for (i, (object_type, edges)) in dfg.iter().enumerate() {
        let color = config.color_for(i);
        draw_legend_row(&mut canvas, i, object_type, color, TITLE_INK);

        let lane_y = PN_FIRST_LANE_Y + i as i32 * LANE_SPACING;
        for edge in edges {
            canvas.arrow(pos[edge.from.as_str()], lane_y, pos[edge.to.as_str()], lane_y, color);
        }
    }

    debug!(
        "Rendered OC-PN: {} activities, {} transitions",
        activities.len(),
        activities.len().saturating_sub(1)
    );

    canvas
}

/// Render and encode the OC-DFG view
pub fn render_oc_dfg_png(dfg: &OcDfg, config: &RenderConfig) -> Result<Vec<u8>, EncodeError> {
    info!("Rendering OC-DFG image: {}", config.title);
    encode_png(&render_oc_dfg(dfg, config))
}

/// Render and encode the OC-PN view
pub fn render_oc_pn_png(dfg: &OcDfg, config: &RenderConfig) -> Result<Vec<u8>, EncodeError> {
    info!("Rendering OC-PN image: {}", config.title);
    encode_png(&render_oc_pn(dfg, config))
}

fn blank_with_title(config: &RenderConfig) -> Canvas {
    let mut canvas = Canvas::new(config.width, config.height, BACKGROUND);
    canvas.text_block(TITLE_X, TITLE_Y, &config.title, TITLE_INK);
    canvas
}

/// Filled box with a one-pixel border, label stamped inside
fn draw_activity_box(canvas: &mut Canvas, x: i32, label: &str) {
    let (left, right) = (x - PN_BOX_HALF_WIDTH, x + PN_BOX_HALF_WIDTH);
    let (top, bottom) = (PN_ACTIVITY_Y - PN_BOX_HALF_HEIGHT, PN_ACTIVITY_Y + PN_BOX_HALF_HEIGHT);

    canvas.rectangle(left, top, right, bottom, PN_BOX_FILL);
    canvas.line(left, top, right, top, PN_BOX_BORDER);
    canvas.line(left, bottom, right, bottom, PN_BOX_BORDER);
    canvas.line(left, top, left, bottom, PN_BOX_BORDER);
    canvas.line(right, top, right, bottom, PN_BOX_BORDER);
    canvas.text_block(x - 18, PN_ACTIVITY_Y - 5, label, LABEL_INK);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::DfgEdge;

    fn sample_dfg() -> OcDfg {
        let mut dfg = OcDfg::new();
        dfg.insert(
            "order".to_string(),
            vec![DfgEdge::new("Create", "Ship", 2), DfgEdge::new("Ship", "Bill", 1)],
        );
        dfg.insert("item".to_string(), vec![DfgEdge::new("Pick", "Ship", 1)]);
        dfg
    }

    #[test]
    fn test_color_for_cycles_palette() {
        let config = RenderConfig::oc_dfg().with_palette(vec![Rgb::new(1, 1, 1), Rgb::new(2, 2, 2)]);
        assert_eq!(config.color_for(0), Rgb::new(1, 1, 1));
        assert_eq!(config.color_for(3), Rgb::new(2, 2, 2));

        let empty = RenderConfig::oc_dfg().with_palette(vec![]);
        assert_eq!(empty.color_for(5), FALLBACK_INK);
    }

    #[test]
    fn test_oc_dfg_uses_palette_for_legend() {
        let palette = vec![Rgb::new(200, 0, 0), Rgb::new(0, 200, 0)];
        let config = RenderConfig::oc_dfg().with_palette(palette.clone());
        let canvas = render_oc_dfg(&sample_dfg(), &config);

        assert_eq!(canvas.width(), 1200);
        assert_eq!(canvas.height(), 520);
        // "item" sorts first, so it takes the first color
        assert_eq!(canvas.get_pixel(25, 85), Some(palette[0]));
        assert_eq!(canvas.get_pixel(25, 107), Some(palette[1]));
    }

    #[test]
    fn test_oc_dfg_lanes_are_per_type() {
        let palette = vec![Rgb::new(200, 0, 0), Rgb::new(0, 200, 0)];
        let config = RenderConfig::oc_dfg().with_palette(palette.clone());
        let canvas = render_oc_dfg(&sample_dfg(), &config);

        // Activities: Bill, Create, Pick, Ship -> x = 100, 433, 766, 1100
        // item lane (index 0) at y=290, order lane (index 1) at y=274
        assert_eq!(canvas.get_pixel(900, 290), Some(palette[0]));
        assert_eq!(canvas.get_pixel(600, 274), Some(palette[1]));
    }

    #[test]
    fn test_oc_pn_draws_transition_circles() {
        let canvas = render_oc_pn(&sample_dfg(), &RenderConfig::oc_pn());

        assert_eq!(canvas.height(), 540);
        // Box fill around the first activity (Bill at x=110)
        assert_eq!(canvas.get_pixel(110 - 30, 340 + 15), Some(PN_BOX_FILL));
        // Transition circle between Bill (110) and Create (436): center 273
        assert_eq!(canvas.get_pixel(273 + 10, 240), Some(PN_PLACE_INK));
    }

    #[test]
    fn test_empty_dfg_renders_title_only() {
        let config = RenderConfig::oc_pn().with_title("empty");
        let canvas = render_oc_pn(&OcDfg::new(), &config);

        assert_eq!(canvas.get_pixel(20, 20), Some(TITLE_INK));
        assert_eq!(canvas.get_pixel(110, 340), Some(BACKGROUND));
        assert_eq!(canvas.get_pixel(25, 85), Some(BACKGROUND));
    }
}
