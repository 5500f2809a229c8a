//! History storage - one localStorage slot holding a JSON array of entries
//!
//! Every mutation is a whole-array read-modify-write; there is no partial
//! update. Malformed or absent storage reads as an empty history, never an
//! error. Entries are addressed by a random id rather than list position,
//! so the browser's newest-first sort can never delete the wrong entry.

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The localStorage slot shared by all configurators and the browser
pub const STORAGE_KEY: &str = "elems";

/// One generated snippet. `settings` and `id` are optional on read:
/// entries written by older builds carry neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,
    /// Epoch milliseconds at creation
    pub time: i64,
}

impl HistoryEntry {
    pub fn new(kind: &str, code: String, settings: Option<Value>, time: i64) -> Self {
        Self {
            id: fresh_id(),
            kind: kind.to_string(),
            code,
            settings,
            time,
        }
    }
}

/// Random 8-hex-digit entry id
pub fn fresh_id() -> String {
    let mut buf = [0u8; 32];
    getrandom::fill(&mut buf).expect("getrandom");
    let mut rng = SmallRng::from_seed(buf);
    format!("{:08x}", rng.random::<u32>())
}

/// Decode the stored array. Anything unparseable is an empty history.
/// Legacy entries without an id get a synthetic one from their position
/// and timestamp so the browser can still address them.
pub fn decode_entries(raw: Option<&str>) -> Vec<HistoryEntry> {
    let mut entries: Vec<HistoryEntry> = raw
        .and_then(|s| serde_json::from_str(s).ok())
        .unwrap_or_default();
    for (index, entry) in entries.iter_mut().enumerate() {
        if entry.id.is_empty() {
            entry.id = format!("legacy-{index}-{}", entry.time);
        }
    }
    entries
}

pub fn encode_entries(entries: &[HistoryEntry]) -> String {
    serde_json::to_string(entries).unwrap_or_else(|_| "[]".into())
}

/// Remove the entry with the given id. Returns false when no entry matches.
pub fn remove_by_id(entries: &mut Vec<HistoryEntry>, id: &str) -> bool {
    let before = entries.len();
    entries.retain(|e| e.id != id);
    entries.len() != before
}

/// Display order: newest first. Storage order stays append order.
pub fn sorted_newest_first(entries: &[HistoryEntry]) -> Vec<HistoryEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| b.time.cmp(&a.time));
    sorted
}

/// The localStorage boundary. All methods are no-ops in environments
/// without a window (nothing to persist to).
pub struct HistoryStore;

impl HistoryStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    fn read_raw() -> Option<String> {
        Self::storage()?.get_item(STORAGE_KEY).ok().flatten()
    }

    fn write(entries: &[HistoryEntry]) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(STORAGE_KEY, &encode_entries(entries));
        }
    }

    /// Read the full log in append order
    pub fn list() -> Vec<HistoryEntry> {
        decode_entries(Self::read_raw().as_deref())
    }

    /// Read, push, write back
    pub fn append(entry: HistoryEntry) {
        let mut entries = Self::list();
        entries.push(entry);
        Self::write(&entries);
    }

    /// Read, remove by id, write back
    pub fn delete(id: &str) {
        let mut entries = Self::list();
        if remove_by_id(&mut entries, id) {
            Self::write(&entries);
        }
    }

    /// Drop the whole slot
    pub fn clear() {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(kind: &str, time: i64) -> HistoryEntry {
        HistoryEntry::new(kind, format!("<div>{kind}</div>"), None, time)
    }

    #[test]
    fn append_then_decode_sees_tail() {
        let mut entries = vec![entry("button", 1), entry("card", 2)];
        let appended = entry("toggle", 3);
        entries.push(appended.clone());

        let decoded = decode_entries(Some(&encode_entries(&entries)));
        assert_eq!(decoded.len(), 3);
        assert_eq!(decoded.last(), Some(&appended));
    }

    #[test]
    fn delete_removes_exactly_one() {
        let mut entries = vec![entry("button", 1), entry("card", 2), entry("input", 3)];
        let victim = entries[1].id.clone();

        assert!(remove_by_id(&mut entries, &victim));
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.id != victim));
        assert!(!remove_by_id(&mut entries, &victim));
    }

    #[test]
    fn delete_by_id_survives_display_sort() {
        // Insertion order differs from timestamp order; deleting via the
        // sorted view must still hit the right stored entry.
        let mut stored = vec![entry("button", 30), entry("card", 10), entry("input", 20)];
        let display = sorted_newest_first(&stored);
        assert_eq!(display[0].kind, "button");
        assert_eq!(display[2].kind, "card");

        let second_newest = display[1].id.clone();
        assert!(remove_by_id(&mut stored, &second_newest));
        assert!(stored.iter().all(|e| e.kind != "input"));
    }

    #[test]
    fn malformed_storage_reads_empty() {
        assert!(decode_entries(None).is_empty());
        assert!(decode_entries(Some("not json")).is_empty());
        assert!(decode_entries(Some("{\"oops\":1}")).is_empty());
    }

    #[test]
    fn legacy_entries_decode_without_settings_or_id() {
        let raw = r#"[{"type":"card","code":"<div></div>","time":1700000000000}]"#;
        let decoded = decode_entries(Some(raw));
        assert_eq!(decoded.len(), 1);
        assert_eq!(decoded[0].kind, "card");
        assert!(decoded[0].settings.is_none());
        assert_eq!(decoded[0].id, "legacy-0-1700000000000");
    }

    #[test]
    fn settings_snapshot_round_trips() {
        let snapshot = json!({"padding": 8, "color": "#2563EB"});
        let entries = vec![HistoryEntry::new(
            "button",
            "<button></button>".into(),
            Some(snapshot.clone()),
            42,
        )];
        let decoded = decode_entries(Some(&encode_entries(&entries)));
        assert_eq!(decoded[0].settings, Some(snapshot));
    }

    #[test]
    fn absent_settings_is_omitted_from_json() {
        let encoded = encode_entries(&[entry("loader", 1)]);
        assert!(!encoded.contains("settings"));
    }

    #[test]
    fn sort_is_newest_first_and_stable_copy() {
        let stored = vec![entry("a", 10), entry("b", 30), entry("c", 20)];
        let display = sorted_newest_first(&stored);
        let times: Vec<i64> = display.iter().map(|e| e.time).collect();
        assert_eq!(times, vec![30, 20, 10]);
        // original order untouched
        assert_eq!(stored[0].time, 10);
    }

    #[test]
    fn fresh_ids_are_hex_and_distinct() {
        let a = fresh_id();
        let b = fresh_id();
        assert_eq!(a.len(), 8);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }
}
