//! Static room positions and the layout pass.
//!
//! Positions are hand-placed on an integer grid for the village map, not
//! computed from the exit topology; the table is the single source of truth
//! for where a room sits and for the canvas size.

use crate::model::{
    ConnectionLayout, IndicatorLayout, LegendLayout, RoomBoxLayout, VillageMapLayout,
};
use crate::text::{format_room_name, truncate_label};
use mudmap_core::MapModel;
use rustc_hash::FxHashSet;

pub const CELL_SIZE: i32 = 100;
pub const ROOM_WIDTH: i32 = 80;
pub const ROOM_HEIGHT: i32 = 50;
pub const PADDING: i32 = 60;

/// Below-ground rooms share a grid cell with the room above them; this
/// diagonal shift keeps both visible.
const UNDERGROUND_OFFSET: i32 = 15;

/// (grid_x, grid_y, level) per room; level 0 is ground, negative is below.
const ROOM_POSITIONS: &[(&str, (i32, i32, i32))] = &[
    ("tavern", (2, 3, 0)),
    ("cellar", (2, 3, -1)),
    ("street", (2, 2, 0)),
    ("market", (3, 2, 0)),
    ("blacksmith", (3, 1, 0)),
    ("temple", (1, 2, 0)),
    ("village_gate", (2, 1, 0)),
    ("forest_path", (2, 0, 0)),
];

fn room_position(room_id: &str) -> Option<(i32, i32, i32)> {
    ROOM_POSITIONS
        .iter()
        .find(|(id, _)| *id == room_id)
        .map(|(_, pos)| *pos)
}

fn room_level(room_id: &str) -> i32 {
    room_position(room_id).map(|(_, _, level)| level).unwrap_or(0)
}

/// Center of a room in SVG pixel space.
///
/// Rooms absent from the position table map to the origin rather than
/// failing; callers that want to skip unknown rooms check the table first.
pub fn room_center(room_id: &str) -> (i32, i32) {
    let Some((grid_x, grid_y, level)) = room_position(room_id) else {
        return (0, 0);
    };

    let mut x = PADDING + grid_x * CELL_SIZE;
    let mut y = PADDING + grid_y * CELL_SIZE;
    if level < 0 {
        x += UNDERGROUND_OFFSET;
        y += UNDERGROUND_OFFSET;
    }
    (x, y)
}

/// Canvas size in pixels, derived from the position table's extent plus
/// padding on every side. Independent of which rooms a render call supplies.
pub fn canvas_size() -> (i32, i32) {
    let max_x = ROOM_POSITIONS
        .iter()
        .map(|(_, (grid_x, _, _))| *grid_x)
        .max()
        .unwrap_or(0)
        + 1;
    let max_y = ROOM_POSITIONS
        .iter()
        .map(|(_, (_, grid_y, _))| *grid_y)
        .max()
        .unwrap_or(0)
        + 1;

    (
        PADDING * 2 + max_x * CELL_SIZE,
        PADDING * 2 + max_y * CELL_SIZE,
    )
}

/// Builds one connection line, pulling each endpoint in from its room's
/// center to the box edge so lines terminate at box boundaries.
///
/// Each endpoint is adjusted independently from its own center, so the rule
/// tolerates asymmetric layouts. Unrecognized direction labels get no
/// adjustment and the line runs center-to-center.
fn layout_connection(from_id: &str, to_id: &str, direction: &str) -> ConnectionLayout {
    let (mut x1, mut y1) = room_center(from_id);
    let (mut x2, mut y2) = room_center(to_id);

    match direction {
        "north" => {
            y1 -= ROOM_HEIGHT / 2;
            y2 += ROOM_HEIGHT / 2;
        }
        "south" => {
            y1 += ROOM_HEIGHT / 2;
            y2 -= ROOM_HEIGHT / 2;
        }
        "east" => {
            x1 += ROOM_WIDTH / 2;
            x2 -= ROOM_WIDTH / 2;
        }
        "west" => {
            x1 -= ROOM_WIDTH / 2;
            x2 += ROOM_WIDTH / 2;
        }
        "up" | "down" => {
            // Vertical connectors hug the right edge of both boxes so they
            // read as stairs rather than as another lateral passage.
            x1 += ROOM_WIDTH / 2 - 10;
            x2 += ROOM_WIDTH / 2 - 10;
            if direction == "down" {
                y1 += ROOM_HEIGHT / 2;
                y2 -= ROOM_HEIGHT / 2;
            } else {
                y1 -= ROOM_HEIGHT / 2;
                y2 += ROOM_HEIGHT / 2;
            }
        }
        _ => {}
    }

    ConnectionLayout {
        from_id: from_id.to_string(),
        to_id: to_id.to_string(),
        x1,
        y1,
        x2,
        y2,
        dashed: matches!(direction, "up" | "down"),
    }
}

fn layout_indicators(room_id: &str, has_up: bool, has_down: bool, out: &mut Vec<IndicatorLayout>) {
    if !has_up && !has_down {
        return;
    }

    let (x, y) = room_center(room_id);
    let indicator_x = x + ROOM_WIDTH / 2 - 8;

    if has_up {
        let apex_y = y - ROOM_HEIGHT / 2 + 8;
        out.push(IndicatorLayout {
            room_id: room_id.to_string(),
            x: indicator_x,
            apex_y,
            base_y: apex_y + 8,
        });
    }
    if has_down {
        let apex_y = y + ROOM_HEIGHT / 2 - 8;
        out.push(IndicatorLayout {
            room_id: room_id.to_string(),
            x: indicator_x,
            apex_y,
            base_y: apex_y - 8,
        });
    }
}

/// The composer's layout half: positions every primitive for one render.
///
/// Rooms absent from the position table are skipped silently, as are exits
/// whose target is absent. Each undirected connection is laid out once,
/// keyed by the unordered id pair; the direction label comes from whichever
/// side's exit is encountered first in supply order.
pub fn layout_village_map(map: &MapModel, current_room: &str) -> VillageMapLayout {
    let (width, height) = canvas_size();

    let mut connections = Vec::new();
    let mut drawn: FxHashSet<(String, String)> = FxHashSet::default();
    for (room_id, room) in &map.rooms {
        if room_position(room_id).is_none() {
            continue;
        }
        for (direction, target_id) in &room.exits {
            if room_position(target_id).is_none() {
                continue;
            }
            let pair = if room_id <= target_id {
                (room_id.clone(), target_id.clone())
            } else {
                (target_id.clone(), room_id.clone())
            };
            if !drawn.insert(pair) {
                continue;
            }
            connections.push(layout_connection(room_id, target_id, direction));
        }
    }

    let mut rooms = Vec::new();
    let mut indicators = Vec::new();
    for (room_id, room) in &map.rooms {
        if room_position(room_id).is_none() {
            continue;
        }
        let (x, y) = room_center(room_id);
        rooms.push(RoomBoxLayout {
            id: room_id.clone(),
            label: truncate_label(&format_room_name(room_id)),
            x,
            y,
            is_current: room_id == current_room,
            underground: room_level(room_id) < 0,
        });
        layout_indicators(
            room_id,
            room.exits.contains_key("up"),
            room.exits.contains_key("down"),
            &mut indicators,
        );
    }

    VillageMapLayout {
        width,
        height,
        connections,
        rooms,
        indicators,
        legend: LegendLayout {
            x: 10,
            y: height - 10,
            text: format!("Current location: {}", format_room_name(current_room)),
        },
    }
}
