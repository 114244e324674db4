//! Label formatting helpers for room names.

/// Formats a room identifier for display: underscores become spaces and each
/// word is title-cased (`"village_gate"` -> `"Village Gate"`, `"TAVERN"` ->
/// `"Tavern"`).
///
/// A "word" starts at the first alphabetic character after a non-alphabetic
/// one, so digits break words the same way separators do.
pub fn format_room_name(room_id: &str) -> String {
    let mut out = String::with_capacity(room_id.len());
    let mut in_word = false;
    for ch in room_id.chars() {
        let ch = if ch == '_' { ' ' } else { ch };
        if ch.is_alphabetic() {
            if in_word {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(ch);
            in_word = false;
        }
    }
    out
}

/// Truncates a formatted label to fit a room box: names longer than 12
/// characters become their first 11 characters plus `"..."`.
///
/// The 12/11 split is a compatibility value; previously generated diagrams
/// depend on it.
pub fn truncate_label(name: &str) -> String {
    if name.chars().count() > 12 {
        let mut out: String = name.chars().take(11).collect();
        out.push_str("...");
        out
    } else {
        name.to_string()
    }
}
