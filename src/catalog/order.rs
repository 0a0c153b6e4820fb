//! Object key order for catalog objects.
//!
//! Each catalog object remembers the order its keys were read in and writes
//! them back in that order. Keys the document did not have before (a new
//! `localizations` map, say) are slotted in alphabetically, which is how the
//! authoring tool orders them.

use serde::de::{DeserializeOwned, Error as _};
use serde_json::{Map, Value};

/// Keys of one JSON object in the order they were read.
///
/// Order is presentation only: two objects with the same content compare
/// equal whatever order they were read in.
#[derive(Debug, Clone, Default)]
pub struct KeyOrder(Vec<String>);

impl KeyOrder {
    pub fn of(map: &Map<String, Value>) -> Self {
        Self(map.keys().cloned().collect())
    }

    /// Put the `present` keys in output order.
    ///
    /// Known keys keep their read position; the rest go before the first
    /// key that sorts after them.
    pub fn arrange<'a>(&self, present: Vec<&'a str>) -> Vec<&'a str> {
        let mut ordered: Vec<&'a str> = self
            .0
            .iter()
            .filter_map(|known| present.iter().copied().find(|key| *key == known.as_str()))
            .collect();

        for key in present {
            if ordered.contains(&key) {
                continue;
            }
            let at = ordered
                .iter()
                .position(|existing| *existing > key)
                .unwrap_or(ordered.len());
            ordered.insert(at, key);
        }
        ordered
    }
}

impl PartialEq for KeyOrder {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

/// Remove `key` from `map` and decode it. `null` reads as absent.
pub(super) fn take<T>(map: &mut Map<String, Value>, key: &str) -> Result<Option<T>, serde_json::Error>
where
    T: DeserializeOwned,
{
    match map.shift_remove(key) {
        Some(value) => serde_json::from_value::<Option<T>>(value),
        None => Ok(None),
    }
}

/// Like [`take`], for fields every object must carry.
pub(super) fn take_required<T>(
    map: &mut Map<String, Value>,
    key: &'static str,
) -> Result<T, serde_json::Error>
where
    T: DeserializeOwned,
{
    take(map, key)?.ok_or_else(|| serde_json::Error::missing_field(key))
}
