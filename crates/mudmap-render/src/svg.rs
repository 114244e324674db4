//! SVG writer for [`VillageMapLayout`].
//!
//! The writer does no positioning of its own: every coordinate arrives
//! precomputed, and each layout item becomes one line of markup.

use crate::map::{ROOM_HEIGHT, ROOM_WIDTH};
use crate::model::VillageMapLayout;
use std::fmt::Write as _;

const CURRENT_FILL: &str = "#4a9eff";
const CURRENT_STROKE: &str = "#2563eb";
const CURRENT_TEXT: &str = "#ffffff";
const DEFAULT_FILL: &str = "#e8e8e8";
const DEFAULT_STROKE: &str = "#666";
const DEFAULT_TEXT: &str = "#333";
const BACKGROUND_FILL: &str = "#f5f5f5";
const CONNECTION_STROKE: &str = "#888";
const LEGEND_FILL: &str = "#666";

/// Writes one complete, self-contained SVG document for the layout.
///
/// Connections come before room boxes so lines render beneath them.
pub fn render_village_map_svg(layout: &VillageMapLayout) -> String {
    let mut out = String::new();

    let _ = writeln!(
        &mut out,
        r#"<svg viewBox="0 0 {w} {h}" xmlns="http://www.w3.org/2000/svg">"#,
        w = layout.width,
        h = layout.height
    );
    out.push_str("  <!-- Background -->\n");
    let _ = writeln!(
        &mut out,
        r#"  <rect width="{w}" height="{h}" fill="{fill}"/>"#,
        w = layout.width,
        h = layout.height,
        fill = BACKGROUND_FILL
    );

    out.push_str("\n  <!-- Connections -->\n");
    for conn in &layout.connections {
        let dash = if conn.dashed {
            r#" stroke-dasharray="4,2""#
        } else {
            ""
        };
        let _ = writeln!(
            &mut out,
            r#"  <line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{stroke}" stroke-width="2"{dash}/>"#,
            x1 = conn.x1,
            y1 = conn.y1,
            x2 = conn.x2,
            y2 = conn.y2,
            stroke = CONNECTION_STROKE,
            dash = dash
        );
    }

    out.push_str("\n  <!-- Rooms -->\n");
    for room in &layout.rooms {
        let (fill, stroke, stroke_width, text_color, weight) = if room.is_current {
            (CURRENT_FILL, CURRENT_STROKE, 3, CURRENT_TEXT, "bold")
        } else {
            (DEFAULT_FILL, DEFAULT_STROKE, 2, DEFAULT_TEXT, "normal")
        };
        let dash = if room.underground {
            r#" stroke-dasharray="5,3""#
        } else {
            ""
        };

        let _ = writeln!(
            &mut out,
            r#"  <rect x="{x}" y="{y}" width="{w}" height="{h}" rx="8" fill="{fill}" stroke="{stroke}" stroke-width="{sw}"{dash}/>"#,
            x = room.x - ROOM_WIDTH / 2,
            y = room.y - ROOM_HEIGHT / 2,
            w = ROOM_WIDTH,
            h = ROOM_HEIGHT,
            fill = fill,
            stroke = stroke,
            sw = stroke_width,
            dash = dash
        );
        let _ = writeln!(
            &mut out,
            r#"  <text x="{x}" y="{y}" text-anchor="middle" font-family="Arial, sans-serif" font-size="11" fill="{color}" font-weight="{weight}">{label}</text>"#,
            x = room.x,
            y = room.y + 5,
            color = text_color,
            weight = weight,
            label = escape_xml(&room.label)
        );
    }

    for ind in &layout.indicators {
        let _ = writeln!(
            &mut out,
            r##"  <polygon points="{x},{apex} {xl},{base} {xr},{base}" fill="#666" stroke="none"/>"##,
            x = ind.x,
            apex = ind.apex_y,
            xl = ind.x - 5,
            xr = ind.x + 5,
            base = ind.base_y
        );
    }

    out.push_str("\n  <!-- Legend -->\n");
    let _ = writeln!(
        &mut out,
        r#"  <text x="{x}" y="{y}" font-family="Arial, sans-serif" font-size="10" fill="{fill}">{text}</text>"#,
        x = layout.legend.x,
        y = layout.legend.y,
        fill = LEGEND_FILL,
        text = escape_xml(&layout.legend.text)
    );
    out.push_str("</svg>");

    out
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::escape_xml;

    #[test]
    fn escape_xml_covers_markup_characters() {
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml(r#"<"x">"#), "&lt;&quot;x&quot;&gt;");
        assert_eq!(escape_xml("plain"), "plain");
    }
}
