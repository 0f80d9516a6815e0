//! Persistence: storage capability, snapshot codec, and the listener
//! that writes a snapshot after every applied action.
//!
//! The store never talks to storage directly. It notifies its
//! `StateListener`s; `Persister` is the listener that encodes the state
//! with `bincode` and hands the bytes to an injected `StateStorage`.
//! Write failures are logged and otherwise ignored: the match goes on
//! whether or not the snapshot landed.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::core::config::StoreConfig;
use crate::core::state::MatchState;

/// Persistence errors.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Snapshot could not be serialized.
    #[error("failed to encode match snapshot: {0}")]
    Encode(#[source] bincode::Error),

    /// Stored bytes are not a valid snapshot.
    #[error("failed to decode match snapshot: {0}")]
    Decode(#[source] bincode::Error),

    /// Backing store rejected the operation.
    #[error("storage error: {0}")]
    Storage(String),
}

/// Result alias for persistence operations.
pub type PersistResult<T> = Result<T, PersistError>;

/// Durable key-value storage for match snapshots.
pub trait StateStorage {
    /// Read the record under `key`, if any.
    fn load(&self, key: &str) -> PersistResult<Option<Vec<u8>>>;

    /// Write (or overwrite) the record under `key`.
    fn save(&mut self, key: &str, bytes: &[u8]) -> PersistResult<()>;

    /// Delete the record under `key`. Deleting a missing key is not an error.
    fn remove(&mut self, key: &str) -> PersistResult<()>;
}

/// In-process storage.
///
/// Clones share the same records, so a caller can keep a handle while
/// the store owns another.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    records: Rc<RefCell<FxHashMap<String, Vec<u8>>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }

    /// Check whether a record exists.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.records.borrow().contains_key(key)
    }
}

impl StateStorage for MemoryStorage {
    fn load(&self, key: &str) -> PersistResult<Option<Vec<u8>>> {
        Ok(self.records.borrow().get(key).cloned())
    }

    fn save(&mut self, key: &str, bytes: &[u8]) -> PersistResult<()> {
        self.records.borrow_mut().insert(key.to_string(), bytes.to_vec());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> PersistResult<()> {
        self.records.borrow_mut().remove(key);
        Ok(())
    }
}

/// Serialize a snapshot.
pub fn encode_state(state: &MatchState) -> PersistResult<Vec<u8>> {
    bincode::serialize(state).map_err(PersistError::Encode)
}

/// Deserialize a snapshot.
pub fn decode_state(bytes: &[u8]) -> PersistResult<MatchState> {
    bincode::deserialize(bytes).map_err(PersistError::Decode)
}

/// Post-action hook. Called once after every applied action with the
/// new state; never called for ignored actions.
pub trait StateListener {
    fn on_state_changed(&mut self, snapshot: &MatchState);
}

impl<F> StateListener for F
where
    F: FnMut(&MatchState),
{
    fn on_state_changed(&mut self, snapshot: &MatchState) {
        self(snapshot)
    }
}

/// Listener that writes each snapshot to storage under a fixed key.
#[derive(Debug)]
pub struct Persister<S> {
    storage: S,
    key: String,
}

impl<S: StateStorage> Persister<S> {
    /// Persist under the key from `config`.
    pub fn new(storage: S, config: &StoreConfig) -> Self {
        Self {
            storage,
            key: config.storage_key.clone(),
        }
    }

    /// Storage key in use.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Backing storage.
    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Encode and write a snapshot.
    pub fn save(&mut self, state: &MatchState) -> PersistResult<()> {
        let bytes = encode_state(state)?;
        self.storage.save(&self.key, &bytes)
    }

    /// Read the stored snapshot, if there is one.
    pub fn load(&self) -> PersistResult<Option<MatchState>> {
        match self.storage.load(&self.key)? {
            Some(bytes) => decode_state(&bytes).map(Some),
            None => Ok(None),
        }
    }

    /// Stored snapshot, or pre-match defaults when the record is missing
    /// or unreadable.
    #[must_use]
    pub fn load_or_default(&self) -> MatchState {
        match self.load() {
            Ok(Some(state)) => {
                log::info!("Restored match snapshot from '{}'", self.key);
                state
            }
            Ok(None) => {
                log::debug!("No match snapshot under '{}', starting fresh", self.key);
                MatchState::new()
            }
            Err(e) => {
                log::warn!("Discarding match snapshot under '{}': {}", self.key, e);
                MatchState::new()
            }
        }
    }
}

impl<S: StateStorage> StateListener for Persister<S> {
    fn on_state_changed(&mut self, snapshot: &MatchState) {
        if let Err(e) = self.save(snapshot) {
            log::warn!("Failed to persist match snapshot to '{}': {}", self.key, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Slot;

    /// Storage that refuses every write.
    struct ReadOnlyStorage;

    impl StateStorage for ReadOnlyStorage {
        fn load(&self, _key: &str) -> PersistResult<Option<Vec<u8>>> {
            Ok(None)
        }

        fn save(&mut self, key: &str, _bytes: &[u8]) -> PersistResult<()> {
            Err(PersistError::Storage(format!("{key} is read-only")))
        }

        fn remove(&mut self, _key: &str) -> PersistResult<()> {
            Ok(())
        }
    }

    #[test]
    fn test_memory_storage_basics() {
        let mut storage = MemoryStorage::new();
        assert!(storage.is_empty());

        storage.save("k", &[1, 2, 3]).unwrap();
        assert_eq!(storage.load("k").unwrap(), Some(vec![1, 2, 3]));
        assert!(storage.contains("k"));

        storage.remove("k").unwrap();
        assert_eq!(storage.load("k").unwrap(), None);
        storage.remove("k").unwrap();
    }

    #[test]
    fn test_memory_storage_clones_share_records() {
        let mut writer = MemoryStorage::new();
        let reader = writer.clone();

        writer.save("k", b"x").unwrap();
        assert_eq!(reader.len(), 1);
    }

    #[test]
    fn test_codec_round_trip() {
        let mut state = MatchState::new();
        state.players[Slot::B].score = 12;
        state.current_server = Slot::B;

        let bytes = encode_state(&state).unwrap();
        assert_eq!(decode_state(&bytes).unwrap(), state);
    }

    #[test]
    fn test_decode_garbage() {
        let err = decode_state(&[0xff, 0x00]).unwrap_err();
        assert!(matches!(err, PersistError::Decode(_)));
    }

    #[test]
    fn test_persister_save_and_load() {
        let storage = MemoryStorage::new();
        let mut persister = Persister::new(storage.clone(), &StoreConfig::new());

        assert_eq!(persister.load().unwrap(), None);

        let mut state = MatchState::new();
        state.started = true;
        persister.on_state_changed(&state);

        assert!(storage.contains(persister.key()));
        assert_eq!(persister.load().unwrap(), Some(state));
    }

    #[test]
    fn test_persister_corrupt_record_falls_back() {
        let mut storage = MemoryStorage::new();
        let config = StoreConfig::new().with_storage_key("board");
        storage.save("board", b"not a snapshot").unwrap();

        let persister = Persister::new(storage, &config);
        assert_eq!(persister.load_or_default(), MatchState::new());
    }

    #[test]
    fn test_persister_swallows_write_errors() {
        let mut persister = Persister::new(ReadOnlyStorage, &StoreConfig::new());

        assert!(matches!(
            persister.save(&MatchState::new()),
            Err(PersistError::Storage(_))
        ));
        // Listener path must not panic.
        persister.on_state_changed(&MatchState::new());
    }
}
