//! Draft store over a pluggable key/value storage

use std::collections::HashMap;
use std::sync::Mutex;

use shared::models::{BookingDraft, DraftPatch, GuestContact};

/// Storage key for the draft blob (dates, guest count, selected room).
pub const DRAFT_KEY: &str = "bookingDetails";

/// Storage key for the guest-contact blob.
pub const CONTACT_KEY: &str = "guestDetails";

/// The browser-persistent storage seam: string keys to string values,
/// synchronous, last write wins.
pub trait DraftStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory storage, for tests and native hosts.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DraftStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .ok()
            .and_then(|map| map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) {
        if let Ok(mut map) = self.entries.lock() {
            map.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut map) = self.entries.lock() {
            map.remove(key);
        }
    }
}

/// Read/write access to the persisted booking draft.
///
/// `load` never fails: any parse failure yields an empty draft, so stale
/// or hand-edited storage can never break a funnel page. `save` is a
/// partial merge: fields absent from the patch are preserved.
#[derive(Debug)]
pub struct DraftStore<S: DraftStorage> {
    storage: S,
}

impl<S: DraftStorage> DraftStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// The current draft, or an empty one when nothing (valid) is stored.
    pub fn load(&self) -> BookingDraft {
        self.storage
            .get(DRAFT_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    /// Merge the supplied fields into the stored draft and persist the
    /// result. Returns the merged draft so callers read fresh state
    /// without a second load.
    pub fn save(&self, patch: &DraftPatch) -> BookingDraft {
        let merged = self.load().merged(patch);
        if let Ok(raw) = serde_json::to_string(&merged) {
            self.storage.set(DRAFT_KEY, &raw);
        }
        merged
    }

    /// The stored guest contact, if present and parseable.
    pub fn load_contact(&self) -> Option<GuestContact> {
        self.storage
            .get(CONTACT_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
    }

    /// Persist the guest contact blob.
    pub fn save_contact(&self, contact: &GuestContact) {
        if let Ok(raw) = serde_json::to_string(contact) {
            self.storage.set(CONTACT_KEY, &raw);
        }
    }

    /// Drop both blobs: after a confirmed booking, or when the user
    /// explicitly returns to the homepage.
    pub fn clear(&self) {
        self.storage.remove(DRAFT_KEY);
        self.storage.remove(CONTACT_KEY);
    }
}
