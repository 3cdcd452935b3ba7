//! Roll journal.
//!
//! A session log the host application can persist and replay: the log
//! carries the seed its generator was built from, so feeding
//! [`RollLog::rng`] through the same sequence of engine calls reproduces
//! every face. Entries are timestamped structured results, not rendered
//! strings.

use crate::check::SkillCheckResult;
use crate::combat::DamageApplication;
use crate::damage::DamageOutcome;
use crate::legacy::LegacyRoll;
use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// One logged engine result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RollRecord {
    /// A pool-system skill check.
    Skill(SkillCheckResult),
    /// A legacy d20 check.
    Legacy(LegacyRoll),
    /// A resolved damage roll.
    Damage(DamageOutcome),
    /// A Guard/Vitality mutation.
    Resource(DamageApplication),
}

/// A record plus when it happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Wall-clock time of the event.
    pub at: DateTime<Utc>,
    /// What happened.
    pub record: RollRecord,
}

/// An append-only session journal tied to one RNG seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollLog {
    seed: u64,
    entries: Vec<LogEntry>,
}

impl RollLog {
    /// Starts an empty journal for the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            entries: Vec::new(),
        }
    }

    /// The seed this journal's rolls were drawn under.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// A fresh generator at the journal's seed. Calling this again
    /// restarts the sequence, which is exactly what a replay wants.
    pub fn rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed)
    }

    /// Appends a record stamped with the current time.
    pub fn record(&mut self, record: RollRecord) {
        self.entries.push(LogEntry {
            at: Utc::now(),
            record,
        });
    }

    /// Appends a prepared entry, keeping its timestamp.
    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    /// Everything logged so far, oldest first.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// No entries yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
