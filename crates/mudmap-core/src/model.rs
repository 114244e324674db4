use crate::Result;
use indexmap::IndexMap;
use serde_json::Value;

/// One room as supplied by the caller: a set of named exits mapping a
/// direction label (`"north"`, `"up"`, ...) to a target room identifier.
///
/// Any other fields on the supplied record are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Room {
    pub exits: IndexMap<String, String>,
}

/// A full map document: room identifier -> room record, in supply order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapModel {
    pub rooms: IndexMap<String, Room>,
}

impl MapModel {
    /// Decodes a map document from an already-parsed JSON value.
    ///
    /// Decoding is lenient and never fails: a non-object document yields an
    /// empty map, and malformed room records degrade to rooms with no exits.
    /// Dropped data is reported through `tracing::warn!`.
    pub fn from_value(value: &Value) -> Self {
        let Some(rooms_obj) = value.as_object() else {
            if !value.is_null() {
                tracing::warn!("map document is not a JSON object; treating as empty map");
            }
            return Self::default();
        };

        let mut rooms = IndexMap::with_capacity(rooms_obj.len());
        for (room_id, room_value) in rooms_obj {
            rooms.insert(room_id.clone(), Room::from_value(room_id, room_value));
        }
        Self { rooms }
    }

    /// Parses a map document from JSON text.
    ///
    /// The only failure mode is syntactically invalid JSON; the parsed value
    /// then goes through the same lenient path as [`MapModel::from_value`].
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::from_value(&value))
    }
}

impl Room {
    fn from_value(room_id: &str, value: &Value) -> Self {
        let Some(record) = value.as_object() else {
            if !value.is_null() {
                tracing::warn!(room = room_id, "room record is not a JSON object");
            }
            return Self::default();
        };

        let mut exits = IndexMap::new();
        match record.get("exits") {
            None | Some(Value::Null) => {}
            Some(Value::Object(exit_obj)) => {
                for (direction, target) in exit_obj {
                    match target.as_str() {
                        Some(target_id) => {
                            exits.insert(direction.clone(), target_id.to_string());
                        }
                        None => {
                            tracing::warn!(
                                room = room_id,
                                direction = direction.as_str(),
                                "exit target is not a string; dropping exit"
                            );
                        }
                    }
                }
            }
            Some(_) => {
                tracing::warn!(room = room_id, "exits is not a JSON object; treating as empty");
            }
        }
        Self { exits }
    }
}
