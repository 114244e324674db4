use serde::{Deserialize, Serialize};

/// Fully positioned layout for one map render: everything the SVG writer
/// needs, with no further lookups or arithmetic left to do.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VillageMapLayout {
    pub width: i32,
    pub height: i32,
    /// Drawn before the boxes so lines render beneath them.
    pub connections: Vec<ConnectionLayout>,
    pub rooms: Vec<RoomBoxLayout>,
    pub indicators: Vec<IndicatorLayout>,
    pub legend: LegendLayout,
}

/// One room box, centered at (x, y).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomBoxLayout {
    pub id: String,
    /// Display label, already formatted and truncated for the box width.
    pub label: String,
    pub x: i32,
    pub y: i32,
    pub is_current: bool,
    /// Below-ground rooms get a dashed border.
    pub underground: bool,
}

/// One connection line, endpoints already pulled in to the box edges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionLayout {
    pub from_id: String,
    pub to_id: String,
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
    /// Vertical (up/down) connectors are dashed.
    pub dashed: bool,
}

/// One triangular up/down marker at a room's right edge. The polygon is the
/// apex plus a base edge 5px either side of it at `base_y`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorLayout {
    pub room_id: String,
    pub x: i32,
    pub apex_y: i32,
    pub base_y: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegendLayout {
    pub x: i32,
    pub y: i32,
    pub text: String,
}
