use mudmap_core::MapModel;
use mudmap_render::render_map_svg;

fn model(json: &str) -> MapModel {
    MapModel::from_json_str(json).expect("valid test JSON")
}

#[test]
fn renders_a_complete_document() {
    let map = model(r#"{"tavern": {"exits": {}}}"#);
    let svg = render_map_svg(&map, "tavern");

    assert!(svg.starts_with(r#"<svg viewBox="0 0 520 520" xmlns="http://www.w3.org/2000/svg">"#));
    assert!(svg.ends_with("</svg>"));
    assert!(svg.contains(r##"<rect width="520" height="520" fill="#f5f5f5"/>"##));
    assert!(svg.contains("<!-- Connections -->"));
    assert!(svg.contains("<!-- Rooms -->"));
    assert!(svg.contains("<!-- Legend -->"));
}

#[test]
fn current_room_box_uses_highlight_styling() {
    let map = model(r#"{"tavern": {"exits": {}}, "street": {"exits": {}}}"#);
    let svg = render_map_svg(&map, "tavern");

    // Tavern centered at (260, 360), so the rect corner is (220, 335).
    assert!(svg.contains(
        r##"<rect x="220" y="335" width="80" height="50" rx="8" fill="#4a9eff" stroke="#2563eb" stroke-width="3"/>"##
    ));
    assert!(svg.contains(r##"fill="#ffffff" font-weight="bold">Tavern</text>"##));

    // Street gets the default styling.
    assert!(svg.contains(
        r##"<rect x="220" y="235" width="80" height="50" rx="8" fill="#e8e8e8" stroke="#666" stroke-width="2"/>"##
    ));
    assert!(svg.contains(r##"fill="#333" font-weight="normal">Street</text>"##));
}

#[test]
fn underground_rooms_get_a_dashed_border() {
    let map = model(r#"{"cellar": {"exits": {}}}"#);
    let svg = render_map_svg(&map, "street");

    assert!(svg.contains(
        r##"<rect x="235" y="350" width="80" height="50" rx="8" fill="#e8e8e8" stroke="#666" stroke-width="2" stroke-dasharray="5,3"/>"##
    ));
}

#[test]
fn vertical_connections_are_dashed_lines() {
    let map = model(
        r#"{"tavern": {"exits": {"down": "cellar"}}, "cellar": {"exits": {"up": "tavern"}}}"#,
    );
    let svg = render_map_svg(&map, "tavern");

    assert!(svg.contains(
        r##"<line x1="290" y1="385" x2="305" y2="350" stroke="#888" stroke-width="2" stroke-dasharray="4,2"/>"##
    ));
    // Exactly one connection line despite reciprocal exits.
    assert_eq!(svg.matches("<line ").count(), 1);

    // Down indicator on the tavern, up indicator on the cellar.
    assert!(
        svg.contains(r##"<polygon points="292,377 287,369 297,369" fill="#666" stroke="none"/>"##)
    );
    assert!(
        svg.contains(r##"<polygon points="307,358 302,366 312,366" fill="#666" stroke="none"/>"##)
    );
}

#[test]
fn labels_render_formatted() {
    let map = model(r#"{"village_gate": {"exits": {}}, "blacksmith": {"exits": {}}}"#);
    let svg = render_map_svg(&map, "blacksmith");

    // "Village Gate" is exactly 12 characters: kept whole.
    assert!(svg.contains(">Village Gate</text>"));
    assert!(svg.contains(">Blacksmith</text>"));
}

#[test]
fn end_to_end_street_to_village_gate() {
    // The target of an exit only needs a position-table entry, not an entry
    // in the supplied map, for the connection to be drawn.
    let map = model(
        r#"{
            "tavern": {"exits": {}},
            "street": {"exits": {"north": "village_gate"}}
        }"#,
    );
    let svg = render_map_svg(&map, "tavern");

    assert_eq!(svg.matches("<line ").count(), 1);
    assert!(svg.contains(
        r##"<line x1="260" y1="235" x2="260" y2="185" stroke="#888" stroke-width="2"/>"##
    ));

    // Two boxes (village_gate itself is not supplied), one of them current.
    assert_eq!(svg.matches("<rect x=").count(), 2);
    assert_eq!(svg.matches(r##"fill="#4a9eff""##).count(), 1);

    assert!(svg.contains(
        r##"<text x="10" y="510" font-family="Arial, sans-serif" font-size="10" fill="#666">Current location: Tavern</text>"##
    ));
}

#[test]
fn unknown_current_room_still_renders_a_legend() {
    let map = model(r#"{"tavern": {"exits": {}}}"#);
    let svg = render_map_svg(&map, "dragon_lair");

    // No box is highlighted, but the document still closes cleanly.
    assert!(!svg.contains(r##"fill="#4a9eff""##));
    assert!(svg.contains(">Current location: Dragon Lair</text>"));
    assert!(svg.ends_with("</svg>"));
}

#[test]
fn empty_map_renders_background_and_legend_only() {
    let svg = render_map_svg(&MapModel::default(), "tavern");

    assert!(svg.contains(r##"<rect width="520" height="520" fill="#f5f5f5"/>"##));
    assert_eq!(svg.matches("<line ").count(), 0);
    assert_eq!(svg.matches("<rect x=").count(), 0);
    assert!(svg.contains(">Current location: Tavern</text>"));
}
