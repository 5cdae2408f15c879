use std::collections::{HashMap, HashSet};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;
use crate::models::{OptionResult, VotingOption};

pub const POLL_TOPIC: &str = "What is your favorite programming language?";

const SEED_OPTIONS: [(&str, &str); 4] = [
    ("1", "Option A: TypeScript"),
    ("2", "Option B: Go"),
    ("3", "Option C: Python"),
    ("4", "Option D: Rust"),
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Need at least 1 option")] NoOptions,
    #[error("Option id must not be empty")] EmptyOptionId,
    #[error("Duplicate option id: {0}")] DuplicateOption(String),
}

#[derive(Debug)]
struct Tally {
    option_text: String,
    votes: u32,
}

/// In-memory poll state: a fixed option set and one vote counter per option.
///
/// The option list never changes after construction, so it is read without
/// locking. Counters sit behind a single `RwLock` that is held only for the
/// lookup and increment (writers) or the copy-out (readers).
#[derive(Debug)]
pub struct VoteRegistry {
    topic: String,
    options: Vec<VotingOption>,
    tallies: RwLock<HashMap<String, Tally>>,
}

impl Default for VoteRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl VoteRegistry {
    /// The fixed programming-language poll served by the backend.
    pub fn new() -> Self {
        let options = SEED_OPTIONS
            .iter()
            .map(|&(id, text)| VotingOption::new(id, text))
            .collect();
        Self::from_unique(POLL_TOPIC.to_string(), options)
    }

    pub fn with_options(
        topic: impl Into<String>,
        options: impl IntoIterator<Item = VotingOption>,
    ) -> Result<Self, RegistryError> {
        let options: Vec<VotingOption> = options.into_iter().collect();
        if options.is_empty() {
            return Err(RegistryError::NoOptions);
        }

        let mut seen = HashSet::with_capacity(options.len());
        for option in &options {
            if option.id.is_empty() {
                return Err(RegistryError::EmptyOptionId);
            }
            if !seen.insert(option.id.as_str()) {
                return Err(RegistryError::DuplicateOption(option.id.clone()));
            }
        }

        Ok(Self::from_unique(topic.into(), options))
    }

    // Caller guarantees ids are unique, so every option gets exactly one tally.
    fn from_unique(topic: String, options: Vec<VotingOption>) -> Self {
        let tallies = options
            .iter()
            .map(|option| (option.id.clone(), Tally { option_text: option.text.clone(), votes: 0 }))
            .collect();

        Self {
            topic,
            options,
            tallies: RwLock::new(tallies),
        }
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    pub fn list_options(&self) -> Vec<VotingOption> {
        self.options.clone()
    }

    /// Adds one vote to `option_id`. Returns `false`, leaving every tally
    /// untouched, when no option has that id.
    pub fn cast_vote(&self, option_id: &str) -> bool {
        let mut tallies = self.write_tallies();
        match tallies.get_mut(option_id) {
            Some(tally) => {
                tally.votes = tally.votes.saturating_add(1);
                true
            }
            None => false,
        }
    }

    /// One snapshot per option, in option registration order.
    pub fn list_results(&self) -> Vec<OptionResult> {
        let tallies = self.read_tallies();
        self.options
            .iter()
            .filter_map(|option| {
                tallies.get(&option.id).map(|tally| OptionResult {
                    option_id: option.id.clone(),
                    option_text: tally.option_text.clone(),
                    votes: tally.votes,
                })
            })
            .collect()
    }

    // Nothing panics while a guard is held, so a poisoned lock still protects
    // consistent counters.
    fn read_tallies(&self) -> RwLockReadGuard<'_, HashMap<String, Tally>> {
        self.tallies.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_tallies(&self) -> RwLockWriteGuard<'_, HashMap<String, Tally>> {
        self.tallies.write().unwrap_or_else(PoisonError::into_inner)
    }
}
