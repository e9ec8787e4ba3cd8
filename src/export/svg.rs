//! SVG rendering of drawing data.
//!
//! Every view becomes a self-contained `<svg>` document with a fixed pixel
//! size, a background rect and a title caption. Millimetres are multiplied
//! by [`RenderOptions::scale`]; the elevation views (front, side,
//! installation) flip y so the floor sits at the bottom of the image, the
//! plan view is drawn as-is.

use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

use crate::models::{
    DimensionLine, DrawingData, DrawingMetadata, FrontView, HardwareKind, InstallationLayout,
    Line, ManufacturingLayout, PlanView, Rect, SectionPartKind, SideView, Tier, UtilityKind,
};
use crate::services::drawing::manufacturing::GRID_COLUMNS;

/// Millimetre to pixel factor used when the caller does not pick one.
pub const DEFAULT_SCALE: f64 = 0.5;

/// Margin around the drawing, in pixels, reserved for dimension annotations.
pub const PADDING_PX: f64 = 120.0;

/// Largest cell a single manufacturing panel may occupy.
pub const MAX_CELL_WIDTH_PX: f64 = 260.0;
/// Largest cell a single manufacturing panel may occupy.
pub const MAX_CELL_HEIGHT_PX: f64 = 320.0;

const TITLE_HEIGHT_PX: f64 = 30.0;
const FONT_SIZE_PX: f64 = 12.0;
const TICK_PX: f64 = 5.0;
const HINGE_RADIUS_PX: f64 = 4.0;
const HANDLE_LENGTH_PX: f64 = 14.0;
const RAIL_LENGTH_PX: f64 = 18.0;
const MARKER_RADIUS_PX: f64 = 10.0;
const CELL_MARGIN_PX: f64 = 40.0;
const CELL_LABEL_LINES: usize = 3;

const BACKGROUND: &str = "#ffffff";
const LOWER_STYLE: &str = r##"fill="#f4efe6" stroke="#333333" stroke-width="1.2""##;
const UPPER_STYLE: &str = r##"fill="#eef2f6" stroke="#333333" stroke-width="1.2""##;
const PLAN_UPPER_STYLE: &str =
    r##"fill="none" stroke="#335577" stroke-width="1" stroke-dasharray="6,3""##;
const FRONT_STYLE: &str = r##"fill="#ffffff" stroke="#666666" stroke-width="0.8""##;
const COUNTERTOP_STYLE: &str = r##"fill="#c8c8c8" stroke="#333333" stroke-width="1""##;
const TRIM_STYLE: &str = r##"fill="#9a8c7a" stroke="#333333" stroke-width="0.8""##;
const BOARD_STYLE: &str = r##"fill="#e2d6c2" stroke="#333333" stroke-width="0.8""##;
const BACK_STYLE: &str = r##"fill="#d0c4ae" stroke="#333333" stroke-width="0.6""##;
const HINGE_STYLE: &str = r##"fill="none" stroke="#1f1f1f" stroke-width="1""##;
const HANDLE_STYLE: &str = r##"stroke="#1f1f1f" stroke-width="3" stroke-linecap="round""##;
const RAIL_STYLE: &str = r##"stroke="#1f1f1f" stroke-width="1" stroke-dasharray="3,2""##;
const DIMENSION_STYLE: &str = r##"stroke="#555555" stroke-width="0.8""##;
const WALL_STYLE: &str = r##"fill="#fbfbf8" stroke="#222222" stroke-width="1.5""##;
const TILE_STYLE: &str = r##"stroke="#d8d8d8" stroke-width="0.5""##;
const ZONE_STYLE: &str =
    r##"fill="none" stroke="#aa3322" stroke-width="1" stroke-dasharray="5,3""##;
const CLEARANCE_STYLE: &str =
    r##"fill="#4a90d9" fill-opacity="0.12" stroke="#4a90d9" stroke-width="0.8""##;
const PANEL_STYLE: &str = r##"fill="#f4efe6" stroke="#333333" stroke-width="1""##;
const EDGE_BAND_STYLE: &str = r##"stroke="#d9822b" stroke-width="2.5""##;

/// Rendering options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Pixels per millimetre
    pub scale: f64,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
        }
    }
}

impl RenderOptions {
    /// Creates options with a custom scale.
    ///
    /// # Errors
    ///
    /// Returns an error unless `scale` is a finite positive number.
    pub fn new(scale: f64) -> Result<Self> {
        ensure!(
            scale.is_finite() && scale > 0.0,
            "Scale must be a positive number, got {scale}"
        );
        Ok(Self { scale })
    }
}

/// One SVG document per view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedViews {
    /// Front elevation
    pub front_view: String,
    /// Side section
    pub side_view: String,
    /// Plan
    pub plan_view: String,
    /// Cut sheet
    pub manufacturing: String,
    /// Wall layout
    pub installation: String,
}

impl RenderedViews {
    /// Iterates `(view name, svg)` pairs in a fixed order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("front_view", self.front_view.as_str()),
            ("side_view", self.side_view.as_str()),
            ("plan_view", self.plan_view.as_str()),
            ("manufacturing", self.manufacturing.as_str()),
            ("installation", self.installation.as_str()),
        ]
        .into_iter()
    }
}

/// Renders every view of `drawing`.
#[must_use]
pub fn render_drawing(drawing: &DrawingData, options: &RenderOptions) -> RenderedViews {
    let title = |view: &str| caption(view, &drawing.metadata);
    RenderedViews {
        front_view: render_front_view(&drawing.common.front_view, &title("Front view"), options),
        side_view: render_side_view(&drawing.common.side_view, &title("Side section"), options),
        plan_view: render_plan_view(&drawing.common.plan_view, &title("Plan"), options),
        manufacturing: render_manufacturing(
            &drawing.manufacturing,
            &title("Manufacturing"),
            options,
        ),
        installation: render_installation(
            &drawing.installation,
            &title("Installation"),
            options,
        ),
    }
}

fn caption(view: &str, metadata: &DrawingMetadata) -> String {
    let style = metadata.style.trim();
    if style.is_empty() {
        format!("{view} ({})", metadata.category.as_str())
    } else {
        format!("{view} ({}, {style})", metadata.category.as_str())
    }
}

/// Renders the front elevation.
#[must_use]
pub fn render_front_view(view: &FrontView, title: &str, options: &RenderOptions) -> String {
    let mut bounds = Bounds::default();
    view.cabinets.iter().for_each(|c| bounds.include_rect(&c.rect));
    view.fronts.iter().for_each(|f| bounds.include_rect(&f.rect));
    for rect in [&view.countertop, &view.molding, &view.baseboard].into_iter().flatten() {
        bounds.include_rect(rect);
    }
    view.hardware
        .iter()
        .for_each(|h| bounds.include_point(h.position.x, h.position.y));
    view.dimensions.iter().for_each(|d| bounds.include_dimension(d));

    let (mut doc, frame) = SvgDoc::for_bounds(title, &bounds, options.scale, true);

    if let Some(baseboard) = &view.baseboard {
        doc.rect(&frame, baseboard, TRIM_STYLE);
    }
    for cabinet in &view.cabinets {
        let style = match cabinet.tier {
            Tier::Lower => LOWER_STYLE,
            Tier::Upper => UPPER_STYLE,
        };
        doc.rect(&frame, &cabinet.rect, style);
    }
    for front in &view.fronts {
        doc.rect(&frame, &front.rect, FRONT_STYLE);
    }
    if let Some(countertop) = &view.countertop {
        doc.rect(&frame, countertop, COUNTERTOP_STYLE);
    }
    if let Some(molding) = &view.molding {
        doc.rect(&frame, molding, TRIM_STYLE);
    }

    for mark in &view.hardware {
        let (x, y) = (frame.x(mark.position.x), frame.y(mark.position.y));
        match mark.kind {
            HardwareKind::Hinge => doc.circle(x, y, HINGE_RADIUS_PX, HINGE_STYLE),
            HardwareKind::Handle => doc.segment(
                x,
                y - HANDLE_LENGTH_PX / 2.0,
                x,
                y + HANDLE_LENGTH_PX / 2.0,
                HANDLE_STYLE,
            ),
            HardwareKind::Rail => doc.segment(
                x - RAIL_LENGTH_PX / 2.0,
                y,
                x + RAIL_LENGTH_PX / 2.0,
                y,
                RAIL_STYLE,
            ),
        }
    }

    for cabinet in &view.cabinets {
        doc.text(
            frame.x(cabinet.rect.x) + 4.0,
            frame.y(cabinet.rect.top()) + FONT_SIZE_PX + 2.0,
            &cabinet.cabinet_ref,
            "start",
        );
    }

    for dimension in &view.dimensions {
        doc.dimension(&frame, dimension);
    }
    doc.finish()
}

/// Renders the side section.
#[must_use]
pub fn render_side_view(view: &SideView, title: &str, options: &RenderOptions) -> String {
    let mut bounds = Bounds::default();
    view.parts.iter().for_each(|p| bounds.include_rect(&p.rect));
    view.dimensions.iter().for_each(|d| bounds.include_dimension(d));

    let (mut doc, frame) = SvgDoc::for_bounds(title, &bounds, options.scale, true);
    for part in &view.parts {
        let style = match part.kind {
            SectionPartKind::SidePanel | SectionPartKind::BottomBoard | SectionPartKind::Shelf => {
                BOARD_STYLE
            }
            SectionPartKind::BackPanel => BACK_STYLE,
            SectionPartKind::Countertop => COUNTERTOP_STYLE,
        };
        doc.rect(&frame, &part.rect, style);
    }
    for dimension in &view.dimensions {
        doc.dimension(&frame, dimension);
    }
    doc.finish()
}

/// Renders the plan. Upper footprints are dashed over the base cabinets.
#[must_use]
pub fn render_plan_view(view: &PlanView, title: &str, options: &RenderOptions) -> String {
    let mut bounds = Bounds::default();
    view.cabinets.iter().for_each(|c| bounds.include_rect(&c.rect));
    if let Some(countertop) = &view.countertop {
        bounds.include_rect(countertop);
    }
    view.dimensions.iter().for_each(|d| bounds.include_dimension(d));

    let (mut doc, frame) = SvgDoc::for_bounds(title, &bounds, options.scale, false);
    if let Some(countertop) = &view.countertop {
        doc.rect(&frame, countertop, COUNTERTOP_STYLE);
    }
    for tier in [Tier::Lower, Tier::Upper] {
        for footprint in view.cabinets.iter().filter(|c| c.tier == tier) {
            let style = match tier {
                Tier::Lower => LOWER_STYLE,
                Tier::Upper => PLAN_UPPER_STYLE,
            };
            doc.rect(&frame, &footprint.rect, style);
            let center = footprint.rect.center();
            doc.text(
                frame.x(center.x),
                frame.y(center.y),
                &footprint.cabinet_ref,
                "middle",
            );
        }
    }
    for dimension in &view.dimensions {
        doc.dimension(&frame, dimension);
    }
    doc.finish()
}

/// Renders the installation layout on the wall elevation.
#[must_use]
pub fn render_installation(
    layout: &InstallationLayout,
    title: &str,
    options: &RenderOptions,
) -> String {
    let mut bounds = Bounds::default();
    bounds.include_rect(&layout.wall);
    layout
        .equipment_zones
        .iter()
        .for_each(|z| bounds.include_rect(&z.rect));
    layout
        .clearance_zones
        .iter()
        .for_each(|z| bounds.include_rect(&z.rect));
    layout
        .utility_markers
        .iter()
        .for_each(|m| bounds.include_point(m.position.x, m.position.y));

    let (mut doc, frame) = SvgDoc::for_bounds(title, &bounds, options.scale, true);
    let wall = layout.wall;
    doc.rect(&frame, &wall, WALL_STYLE);

    if let Some(grid) = &layout.tile_grid {
        for col in 1..grid.cols {
            let x = wall.x + f64::from(col) * grid.tile_width;
            if x < wall.right() {
                doc.line(&frame, &Line::new(x, wall.y, x, wall.top()), TILE_STYLE);
            }
        }
        for row in 1..grid.rows {
            let y = wall.y + f64::from(row) * grid.tile_height;
            if y < wall.top() {
                doc.line(&frame, &Line::new(wall.x, y, wall.right(), y), TILE_STYLE);
            }
        }
    }

    for zone in &layout.clearance_zones {
        doc.rect(&frame, &zone.rect, CLEARANCE_STYLE);
        let label = format!("{} ({} mm)", zone.label, format_mm(zone.swing_depth));
        let center = zone.rect.center();
        doc.text(frame.x(center.x), frame.y(center.y), &label, "middle");
    }

    for zone in &layout.equipment_zones {
        doc.rect(&frame, &zone.rect, ZONE_STYLE);
        doc.text(
            frame.x(zone.rect.center().x),
            frame.y(zone.rect.top()) - 4.0,
            zone.kind.display_name(),
            "middle",
        );
    }

    for marker in &layout.utility_markers {
        let (x, y) = (frame.x(marker.position.x), frame.y(marker.position.y));
        let style = format!(
            r##"fill="{}" stroke="#222222" stroke-width="1""##,
            utility_color(marker.kind)
        );
        doc.circle(x, y, MARKER_RADIUS_PX, &style);
        doc.glyph(x, y + FONT_SIZE_PX / 3.0, marker.kind.glyph());
        doc.text(x + MARKER_RADIUS_PX + 4.0, y + 4.0, marker.kind.label(), "start");
    }

    doc.finish()
}

fn utility_color(kind: UtilityKind) -> &'static str {
    match kind {
        UtilityKind::Water => "#2b7bd6",
        UtilityKind::Exhaust => "#7a7a7a",
        UtilityKind::Gas => "#e0a020",
    }
}

/// Renders the cut sheet.
///
/// Every panel gets its own scale, `min(scale, cell / panel size)`, so long
/// boards and small fronts stay legible in the same grid.
#[must_use]
pub fn render_manufacturing(
    layout: &ManufacturingLayout,
    title: &str,
    options: &RenderOptions,
) -> String {
    let scale = options.scale;
    let max_width = layout.panels.iter().map(|p| p.rect.width).fold(0.0, f64::max);
    let max_height = layout.panels.iter().map(|p| p.rect.height).fold(0.0, f64::max);
    let cell_width = (max_width * scale).min(MAX_CELL_WIDTH_PX);
    let cell_height = (max_height * scale).min(MAX_CELL_HEIGHT_PX);
    let label_height = CELL_LABEL_LINES as f64 * (FONT_SIZE_PX + 2.0);
    let slot_width = cell_width + 2.0 * CELL_MARGIN_PX;
    let slot_height = cell_height + 2.0 * CELL_MARGIN_PX + label_height;

    let columns = layout.panels.len().min(GRID_COLUMNS);
    let rows = layout.panels.iter().map(|p| p.row + 1).max().unwrap_or(0);
    let width = columns as f64 * slot_width + 2.0 * PADDING_PX;
    let height = rows as f64 * slot_height + 2.0 * PADDING_PX + TITLE_HEIGHT_PX;

    let mut doc = SvgDoc::begin(title, width, height);
    if layout.panels.is_empty() {
        doc.text(PADDING_PX, PADDING_PX + TITLE_HEIGHT_PX, "No sheet parts", "start");
    }

    for panel in &layout.panels {
        let rect = panel.rect;
        let mut local_scale = scale;
        if rect.width > 0.0 {
            local_scale = local_scale.min(cell_width / rect.width);
        }
        if rect.height > 0.0 {
            local_scale = local_scale.min(cell_height / rect.height);
        }

        let origin_x = PADDING_PX + panel.column as f64 * slot_width + CELL_MARGIN_PX;
        let origin_y = PADDING_PX + TITLE_HEIGHT_PX + panel.row as f64 * slot_height + CELL_MARGIN_PX;
        let frame = Frame {
            min_x: rect.x,
            min_y: rect.y,
            max_y: rect.top(),
            scale: local_scale,
            origin_x,
            origin_y,
            flip_y: true,
        };

        doc.rect(&frame, &rect, PANEL_STYLE);
        for edge in &panel.edge_banding {
            doc.line(&frame, edge, EDGE_BAND_STYLE);
        }
        for dimension in &panel.dimensions {
            doc.dimension(&frame, dimension);
        }

        let label_y = origin_y + cell_height + CELL_MARGIN_PX;
        let lines = [
            format!("{} {}", panel.bom_id, panel.name),
            format!(
                "{} x {} x {}",
                format_mm(rect.width),
                format_mm(rect.height),
                format_mm(panel.thickness)
            ),
            format!("{} x{}", panel.material, panel.quantity),
        ];
        for (i, line) in lines.iter().enumerate() {
            doc.text(
                origin_x,
                label_y + i as f64 * (FONT_SIZE_PX + 2.0),
                line,
                "start",
            );
        }
    }

    doc.finish()
}

/// Escapes the five XML special characters.
#[must_use]
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// `720` or `2.7`.
fn format_mm(value: f64) -> String {
    if (value - value.round()).abs() < 1e-9 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

fn dimension_text(dimension: &DimensionLine) -> String {
    let value = format_mm(dimension.value);
    match &dimension.label {
        Some(label) => format!("{value} {} ({label})", dimension.unit),
        None => format!("{value} {}", dimension.unit),
    }
}

/// Bounding box in millimetres.
#[derive(Debug, Clone, Copy)]
struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }
}

impl Bounds {
    fn include_point(&mut self, x: f64, y: f64) {
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    fn include_rect(&mut self, rect: &Rect) {
        self.include_point(rect.x, rect.y);
        self.include_point(rect.right(), rect.top());
    }

    fn include_dimension(&mut self, dimension: &DimensionLine) {
        self.include_point(dimension.start.x, dimension.start.y);
        self.include_point(dimension.end.x, dimension.end.y);
    }

    /// `(min_x, min_y, max_x, max_y)`, all zero when nothing was added.
    fn extents(&self) -> (f64, f64, f64, f64) {
        if self.min_x > self.max_x || self.min_y > self.max_y {
            (0.0, 0.0, 0.0, 0.0)
        } else {
            (self.min_x, self.min_y, self.max_x, self.max_y)
        }
    }
}

/// Millimetre to pixel transform.
#[derive(Debug, Clone, Copy)]
struct Frame {
    min_x: f64,
    min_y: f64,
    max_y: f64,
    scale: f64,
    origin_x: f64,
    origin_y: f64,
    flip_y: bool,
}

impl Frame {
    fn x(&self, x: f64) -> f64 {
        self.origin_x + (x - self.min_x) * self.scale
    }

    fn y(&self, y: f64) -> f64 {
        if self.flip_y {
            self.origin_y + (self.max_y - y) * self.scale
        } else {
            self.origin_y + (y - self.min_y) * self.scale
        }
    }

    fn len(&self, mm: f64) -> f64 {
        mm * self.scale
    }

    /// Pixel rect `(x, y, width, height)` with y pointing down.
    fn rect(&self, rect: &Rect) -> (f64, f64, f64, f64) {
        let top_edge = if self.flip_y { rect.top() } else { rect.y };
        (
            self.x(rect.x),
            self.y(top_edge),
            self.len(rect.width.max(0.0)),
            self.len(rect.height.max(0.0)),
        )
    }
}

/// SVG document under construction.
struct SvgDoc {
    out: String,
}

impl SvgDoc {
    fn begin(title: &str, width: f64, height: f64) -> Self {
        let (width, height) = (width.ceil(), height.ceil());
        let mut out = String::new();
        let _ = writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width:.0}" height="{height:.0}" viewBox="0 0 {width:.0} {height:.0}">"#
        );
        let _ = writeln!(
            out,
            r#"  <rect x="0" y="0" width="{width:.0}" height="{height:.0}" fill="{BACKGROUND}"/>"#
        );
        let _ = writeln!(
            out,
            r#"  <text x="{:.1}" y="{:.1}" font-family="sans-serif" font-size="16" font-weight="bold">{}</text>"#,
            PADDING_PX / 2.0,
            TITLE_HEIGHT_PX,
            escape_xml(title)
        );
        Self { out }
    }

    /// Starts a document sized to `bounds` and returns the matching frame.
    fn for_bounds(title: &str, bounds: &Bounds, scale: f64, flip_y: bool) -> (Self, Frame) {
        let (min_x, min_y, max_x, max_y) = bounds.extents();
        let width = (max_x - min_x) * scale + 2.0 * PADDING_PX;
        let height = (max_y - min_y) * scale + 2.0 * PADDING_PX + TITLE_HEIGHT_PX;
        let frame = Frame {
            min_x,
            min_y,
            max_y,
            scale,
            origin_x: PADDING_PX,
            origin_y: PADDING_PX + TITLE_HEIGHT_PX,
            flip_y,
        };
        (Self::begin(title, width, height), frame)
    }

    fn finish(mut self) -> String {
        self.out.push_str("</svg>\n");
        self.out
    }

    fn rect(&mut self, frame: &Frame, rect: &Rect, style: &str) {
        let (x, y, w, h) = frame.rect(rect);
        let _ = writeln!(
            self.out,
            r#"  <rect x="{x:.1}" y="{y:.1}" width="{w:.1}" height="{h:.1}" {style}/>"#
        );
    }

    fn line(&mut self, frame: &Frame, line: &Line, style: &str) {
        self.segment(
            frame.x(line.x1),
            frame.y(line.y1),
            frame.x(line.x2),
            frame.y(line.y2),
            style,
        );
    }

    fn segment(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, style: &str) {
        let _ = writeln!(
            self.out,
            r#"  <line x1="{x1:.1}" y1="{y1:.1}" x2="{x2:.1}" y2="{y2:.1}" {style}/>"#
        );
    }

    fn circle(&mut self, cx: f64, cy: f64, r: f64, style: &str) {
        let _ = writeln!(
            self.out,
            r#"  <circle cx="{cx:.1}" cy="{cy:.1}" r="{r:.1}" {style}/>"#
        );
    }

    fn text(&mut self, x: f64, y: f64, text: &str, anchor: &str) {
        let _ = writeln!(
            self.out,
            r#"  <text x="{x:.1}" y="{y:.1}" font-family="sans-serif" font-size="{FONT_SIZE_PX:.0}" text-anchor="{anchor}">{}</text>"#,
            escape_xml(text)
        );
    }

    fn glyph(&mut self, x: f64, y: f64, glyph: &str) {
        let _ = writeln!(
            self.out,
            r##"  <text x="{x:.1}" y="{y:.1}" font-family="sans-serif" font-size="{FONT_SIZE_PX:.0}" font-weight="bold" fill="#ffffff" text-anchor="middle">{}</text>"##,
            escape_xml(glyph)
        );
    }

    /// Dimension line with end ticks and a centred `value unit (label)`.
    fn dimension(&mut self, frame: &Frame, dimension: &DimensionLine) {
        let (x1, y1) = (frame.x(dimension.start.x), frame.y(dimension.start.y));
        let (x2, y2) = (frame.x(dimension.end.x), frame.y(dimension.end.y));
        self.segment(x1, y1, x2, y2, DIMENSION_STYLE);

        let horizontal = dimension.is_horizontal();
        for (x, y) in [(x1, y1), (x2, y2)] {
            if horizontal {
                self.segment(x, y - TICK_PX, x, y + TICK_PX, DIMENSION_STYLE);
            } else {
                self.segment(x - TICK_PX, y, x + TICK_PX, y, DIMENSION_STYLE);
            }
        }

        let (mx, my) = ((x1 + x2) / 2.0, (y1 + y2) / 2.0);
        let text = escape_xml(&dimension_text(dimension));
        if horizontal {
            let _ = writeln!(
                self.out,
                r#"  <text x="{mx:.1}" y="{:.1}" font-family="sans-serif" font-size="{FONT_SIZE_PX:.0}" text-anchor="middle">{text}</text>"#,
                my - TICK_PX - 2.0
            );
        } else {
            let tx = mx - TICK_PX - 2.0;
            let _ = writeln!(
                self.out,
                r#"  <text x="{tx:.1}" y="{my:.1}" font-family="sans-serif" font-size="{FONT_SIZE_PX:.0}" text-anchor="middle" transform="rotate(-90 {tx:.1} {my:.1})">{text}</text>"#
            );
        }
    }
}
