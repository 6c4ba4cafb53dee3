use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Source of generated identifiers and of the import timestamp.
///
/// Injected into the importer so tests (and reproducible batch runs) can
/// substitute a deterministic implementation instead of relying on global
/// clock-plus-random state.
pub trait IdSource: Send {
    /// Next identifier, unique within the session, under the given prefix
    fn next_id(&mut self, prefix: &str) -> String;

    /// The moment of import, used for both created and updated timestamps
    fn now(&self) -> DateTime<Utc>;
}

/// Production id source: millisecond timestamp plus a short random suffix
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemIds;

impl IdSource for SystemIds {
    fn next_id(&mut self, prefix: &str) -> String {
        let suffix = Uuid::new_v4().simple().to_string();
        format!("{}-{}-{}", prefix, Utc::now().timestamp_millis(), &suffix[..8])
    }

    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Deterministic id source: sequential ids and a fixed timestamp
#[derive(Debug, Clone)]
pub struct FixedIds {
    counter: u64,
    at: DateTime<Utc>,
}

impl FixedIds {
    /// Counter starts at 1, timestamp pinned to the Unix epoch
    pub fn new() -> Self {
        Self::at(DateTime::UNIX_EPOCH)
    }

    /// Counter starts at 1, timestamp pinned to `at`
    pub fn at(at: DateTime<Utc>) -> Self {
        Self { counter: 0, at }
    }
}

impl Default for FixedIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdSource for FixedIds {
    fn next_id(&mut self, prefix: &str) -> String {
        self.counter += 1;
        format!("{}-{}", prefix, self.counter)
    }

    fn now(&self) -> DateTime<Utc> {
        self.at
    }
}
