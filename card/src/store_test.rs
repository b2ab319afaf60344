use super::*;

fn sample() -> MessagePayload {
    MessagePayload::new("Dinda", "Hi", "Sehat")
}

// =============================================================
// load
// =============================================================

#[test]
fn load_from_empty_store_is_none() {
    let mut cache = MessageCache::new(MemoryStore::new());
    assert_eq!(cache.load(), None);
}

#[test]
fn save_then_load_round_trips() {
    let mut cache = MessageCache::new(MemoryStore::new());
    cache.save(&sample()).unwrap();

    let mut reloaded = MessageCache::new(cache.into_inner());
    assert_eq!(reloaded.load(), Some(sample()));
}

#[test]
fn garbage_is_discarded_and_removed() {
    let mut cache = MessageCache::new(MemoryStore::with_entry(STORAGE_KEY, "{not json"));
    assert_eq!(cache.load(), None);
    assert_eq!(cache.store().raw(STORAGE_KEY), None);

    // Second load behaves as if storage were empty.
    assert_eq!(cache.load(), None);
}

#[test]
fn wrong_shape_is_treated_as_corrupt() {
    for raw in ["42", "null", r#"{"name":"x"}"#, r#"["a","b","c"]"#] {
        let mut cache = MessageCache::new(MemoryStore::with_entry(STORAGE_KEY, raw));
        assert_eq!(cache.load(), None, "raw {raw}");
        assert_eq!(cache.store().raw(STORAGE_KEY), None, "raw {raw}");
    }
}

#[test]
fn load_ignores_other_keys() {
    let mut cache = MessageCache::new(MemoryStore::with_entry("something_else", "{}"));
    assert_eq!(cache.load(), None);
    assert_eq!(cache.store().raw("something_else"), Some("{}"));
}

// =============================================================
// save / clear
// =============================================================

#[test]
fn save_writes_canonical_json() {
    let mut cache = MessageCache::new(MemoryStore::new());
    cache.save(&sample()).unwrap();
    assert_eq!(
        cache.store().raw(STORAGE_KEY),
        Some(r#"{"name":"Dinda","message":"Hi","hope2026":"Sehat"}"#)
    );
}

#[test]
fn save_surfaces_rejected_write() {
    let mut store = MemoryStore::new();
    store.reject_writes(true);
    let mut cache = MessageCache::new(store);

    let err = cache.save(&sample()).unwrap_err();
    assert!(matches!(err, StorageError::WriteRejected(_)));
    assert_eq!(cache.load(), None);
}

#[test]
fn rejected_write_drops_older_entry() {
    let older = MessagePayload::new("Raka", "Halo", "Lulus");
    let mut store = MemoryStore::with_entry(STORAGE_KEY, &serde_json::to_string(&older).unwrap());
    store.reject_writes(true);
    let mut cache = MessageCache::new(store);

    assert!(cache.save(&sample()).is_err());
    assert_eq!(cache.store().raw(STORAGE_KEY), None);
    assert_eq!(cache.load(), None);
}

#[test]
fn clear_then_reload_is_empty() {
    let mut cache = MessageCache::new(MemoryStore::new());
    cache.save(&sample()).unwrap();
    cache.clear().unwrap();

    let mut reloaded = MessageCache::new(cache.into_inner());
    assert_eq!(reloaded.load(), None);
}
