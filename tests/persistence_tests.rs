//! Persistence integration tests.
//!
//! A store writes a snapshot after every applied action; a second store
//! rehydrated from the same storage must pick up exactly where the
//! first left off.

use badminton_scoreboard::core::{
    DoublesTeam, MatchFormat, MatchSetup, MatchState, Slot, StoreConfig,
};
use badminton_scoreboard::store::{
    encode_state, MatchStore, MemoryStorage, PersistError, PersistResult, StateStorage,
};

fn doubles_setup() -> MatchSetup {
    MatchSetup::new(MatchFormat::MixedDoubles)
        .with_team(Slot::A, DoublesTeam::new("Zheng", "Huang"))
        .with_team(Slot::B, DoublesTeam::new("Watanabe", "Higashino"))
}

/// Fresh storage rehydrates to pre-match defaults.
#[test]
fn test_rehydrate_empty_storage() {
    let storage = MemoryStorage::new();
    let store = MatchStore::rehydrate(storage.clone(), &StoreConfig::new());

    assert_eq!(store.state(), &MatchState::new());
    assert!(storage.is_empty());
}

/// Every applied action is persisted; a restart resumes mid-game.
#[test]
fn test_resume_after_restart() {
    let storage = MemoryStorage::new();
    let config = StoreConfig::new();

    let before = {
        let mut store = MatchStore::rehydrate(storage.clone(), &config);
        store.start_match(doubles_setup());
        for _ in 0..21 {
            store.score_point(Slot::A);
        }
        store.confirm_set_win(Slot::A);
        store.score_point(Slot::B);
        store.score_point(Slot::B);
        store.snapshot()
    };

    let mut resumed = MatchStore::rehydrate(storage, &config);
    assert_eq!(resumed.state(), &before);
    assert_eq!(resumed.state().name(Slot::A), "Zheng / Huang");
    assert_eq!(resumed.state().history().len(), 2);

    // History survives the restart, so undo still works.
    assert!(resumed.undo().is_applied());
    assert_eq!(resumed.state().score(Slot::B), 1);
}

/// Ignored actions do not rewrite the record.
#[test]
fn test_ignored_action_not_persisted() {
    let storage = MemoryStorage::new();
    let config = StoreConfig::new().with_storage_key("court-1");

    let mut store = MatchStore::rehydrate(storage.clone(), &config);
    store.undo();
    assert!(!storage.contains("court-1"));

    store.score_point(Slot::A);
    assert!(storage.contains("court-1"));
}

/// Separate keys hold separate matches.
#[test]
fn test_storage_keys_are_independent() {
    let storage = MemoryStorage::new();
    let court1 = StoreConfig::new().with_storage_key("court-1");
    let court2 = StoreConfig::new().with_storage_key("court-2");

    let mut a = MatchStore::rehydrate(storage.clone(), &court1);
    let mut b = MatchStore::rehydrate(storage.clone(), &court2);
    a.score_point(Slot::A);
    b.score_point(Slot::B);
    b.score_point(Slot::B);

    assert_eq!(storage.len(), 2);
    let a2 = MatchStore::rehydrate(storage.clone(), &court1);
    let b2 = MatchStore::rehydrate(storage, &court2);
    assert_eq!(a2.state().score(Slot::A), 1);
    assert_eq!(b2.state().score(Slot::B), 2);
}

/// A corrupt record is discarded and the next action overwrites it.
#[test]
fn test_corrupt_record_recovers() {
    let mut storage = MemoryStorage::new();
    let config = StoreConfig::new();
    storage.save(&config.storage_key, &[0xde, 0xad, 0xbe, 0xef]).unwrap();

    let mut store = MatchStore::rehydrate(storage.clone(), &config);
    assert_eq!(store.state(), &MatchState::new());

    store.start_match(doubles_setup());
    let stored = storage.load(&config.storage_key).unwrap().unwrap();
    assert_eq!(stored, encode_state(store.state()).unwrap());
}

/// Storage that fails on every call.
struct BrokenStorage;

impl StateStorage for BrokenStorage {
    fn load(&self, _key: &str) -> PersistResult<Option<Vec<u8>>> {
        Err(PersistError::Storage("disk unavailable".to_string()))
    }

    fn save(&mut self, _key: &str, _bytes: &[u8]) -> PersistResult<()> {
        Err(PersistError::Storage("disk unavailable".to_string()))
    }

    fn remove(&mut self, _key: &str) -> PersistResult<()> {
        Err(PersistError::Storage("disk unavailable".to_string()))
    }
}

/// Storage failures never block scoring.
#[test]
fn test_broken_storage_does_not_block_play() {
    let mut store = MatchStore::rehydrate(BrokenStorage, &StoreConfig::new());

    store.start_match(doubles_setup());
    assert!(store.score_point(Slot::A).is_applied());
    assert_eq!(store.state().score(Slot::A), 1);
}
