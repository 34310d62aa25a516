//! Resolves the open question left by the reference's hard-coded SUPI
//! comparison: the home network consults an injected lookup capability
//! rather than comparing the decrypted plaintext against a literal string.

use aka_crypto::Key;
use std::collections::HashMap;

/// A subscriber's long-term AKA state as held by the home network.
#[derive(Clone)]
pub struct SubscriberRecord {
    pub supi: String,
    pub k: Key,
    pub sqn_hn: u64,
}

/// Looks up and advances a subscriber's long-term record by its permanent
/// identifier. `set_sqn_hn` is called exactly once per issued challenge,
/// and once more on a verified resync, so the store can persist `SQN_HN`
/// across sessions.
pub trait SubscriberStore {
    fn lookup(&self, supi: &str) -> Option<SubscriberRecord>;
    fn set_sqn_hn(&mut self, supi: &str, sqn_hn: u64);
}

/// A `HashMap`-backed [`SubscriberStore`] for tests and small deployments.
#[derive(Default)]
pub struct InMemorySubscriberStore {
    records: HashMap<String, SubscriberRecord>,
}

impl InMemorySubscriberStore {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    pub fn insert(&mut self, record: SubscriberRecord) {
        self.records.insert(record.supi.clone(), record);
    }
}

impl SubscriberStore for InMemorySubscriberStore {
    fn lookup(&self, supi: &str) -> Option<SubscriberRecord> {
        self.records.get(supi).cloned()
    }

    fn set_sqn_hn(&mut self, supi: &str, sqn_hn: u64) {
        if let Some(record) = self.records.get_mut(supi) {
            record.sqn_hn = sqn_hn;
        }
    }
}
