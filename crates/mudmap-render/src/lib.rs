#![forbid(unsafe_code)]

//! Headless layout + SVG renderer for room maps.
//!
//! The pipeline has two halves, both pure:
//! - [`map::layout_village_map`] turns a [`mudmap_core::MapModel`] into a
//!   [`model::VillageMapLayout`] with every pixel position precomputed
//! - [`svg::render_village_map_svg`] writes that layout as one SVG document
//!
//! Rendering never fails: rooms missing from the static position table are
//! skipped, unknown direction labels fall back to center-to-center lines, and
//! the output is always a complete document.

pub mod map;
pub mod model;
pub mod svg;
pub mod text;

use mudmap_core::MapModel;

/// Renders the supplied rooms as a complete SVG document, highlighting
/// `current_room` as the viewer's position.
pub fn render_map_svg(map: &MapModel, current_room: &str) -> String {
    let layout = map::layout_village_map(map, current_room);
    svg::render_village_map_svg(&layout)
}
