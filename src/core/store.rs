use crate::domain::ports::Storage;
use crate::utils::error::{ReservationError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Named JSON collections (one array-of-objects file each) on top of a
/// [`Storage`]. Nothing is cached: every `load` re-reads and every `save`
/// rewrites the whole file.
#[derive(Debug, Clone)]
pub struct JsonStore<S: Storage> {
    storage: S,
}

impl<S: Storage> JsonStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// 載入集合；檔案不存在或內容損毀時回傳空集合
    ///
    /// Only an OS-level read failure is returned as an error. Corrupted
    /// content is logged and treated as "no usable data".
    pub fn load<T: DeserializeOwned>(&self, name: &str) -> Result<Vec<T>> {
        let Some(bytes) = self.storage.read_file(name)? else {
            tracing::debug!("{}: no file yet, starting with an empty collection", name);
            return Ok(Vec::new());
        };

        let value: Value = match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(
                    "{}: invalid JSON ({}), continuing with an empty collection",
                    name,
                    e
                );
                return Ok(Vec::new());
            }
        };

        let Value::Array(rows) = value else {
            tracing::warn!(
                "{}: expected a JSON array, continuing with an empty collection",
                name
            );
            return Ok(Vec::new());
        };

        let total = rows.len();
        let records: Vec<T> = rows
            .into_iter()
            .enumerate()
            .filter_map(|(index, row)| match serde_json::from_value(row) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!("{}: skipping malformed record #{} ({})", name, index, e);
                    None
                }
            })
            .collect();

        tracing::debug!("{}: loaded {}/{} records", name, records.len(), total);
        Ok(records)
    }

    pub fn save<T: Serialize>(&self, name: &str, records: &[T]) -> Result<()> {
        let data = serde_json::to_vec_pretty(records)
            .map_err(|e| ReservationError::storage(name, std::io::Error::other(e)))?;
        self.storage.write_file(name, &data)?;
        tracing::debug!("{}: saved {} records", name, records.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MemoryStorage;
    use crate::domain::model::Hotel;

    struct ReadOnlyStorage;

    impl Storage for ReadOnlyStorage {
        fn read_file(&self, _path: &str) -> Result<Option<Vec<u8>>> {
            Ok(None)
        }

        fn write_file(&self, path: &str, _data: &[u8]) -> Result<()> {
            Err(ReservationError::storage(
                path,
                std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
            ))
        }
    }

    fn hotel(id: &str, rooms: u32) -> Hotel {
        Hotel {
            id: id.to_string(),
            name: format!("Hotel {}", id),
            rooms,
        }
    }

    #[test]
    fn test_load_missing_file_returns_empty() {
        let store = JsonStore::new(MemoryStorage::new());
        let hotels: Vec<Hotel> = store.load("hotels.json").unwrap();
        assert!(hotels.is_empty());
    }

    #[test]
    fn test_save_then_load_preserves_order() {
        let store = JsonStore::new(MemoryStorage::new());
        let hotels = vec![hotel("H2", 3), hotel("H1", 2)];

        store.save("hotels.json", &hotels).unwrap();
        let loaded: Vec<Hotel> = store.load("hotels.json").unwrap();

        assert_eq!(loaded, hotels);
    }

    #[test]
    fn test_load_invalid_json_returns_empty() {
        let storage = MemoryStorage::new().with_file("customers.json", "{ BAD JSON ]");
        let store = JsonStore::new(storage);

        let rows: Vec<Value> = store.load("customers.json").unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_load_invalid_utf8_returns_empty() {
        let storage = MemoryStorage::new().with_file("hotels.json", vec![0xff, 0xfe, 0x00]);
        let store = JsonStore::new(storage);

        let rows: Vec<Hotel> = store.load("hotels.json").unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_load_non_array_returns_empty() {
        let storage = MemoryStorage::new().with_file("hotels.json", r#"{"id": "H1"}"#);
        let store = JsonStore::new(storage);

        let rows: Vec<Hotel> = store.load("hotels.json").unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_load_skips_malformed_records() {
        let storage = MemoryStorage::new().with_file(
            "hotels.json",
            r#"[{"id": "H1", "name": "Azul", "rooms": 2}, {"id": "H2"}, {"id": "H3", "name": "Rojo", "rooms": 4}]"#,
        );
        let store = JsonStore::new(storage);

        let hotels: Vec<Hotel> = store.load("hotels.json").unwrap();
        let ids: Vec<&str> = hotels.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["H1", "H3"]);
    }

    #[test]
    fn test_save_surfaces_storage_error() {
        let store = JsonStore::new(ReadOnlyStorage);
        let result = store.save("hotels.json", &[hotel("H1", 1)]);

        assert!(matches!(result, Err(ReservationError::StorageError { .. })));
    }
}
