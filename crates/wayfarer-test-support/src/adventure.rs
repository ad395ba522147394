//! Test adventures — scripted `Adventure` implementations that record how
//! they were driven.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use wayfarer_core::adventure::Adventure;
use wayfarer_core::outcome::Outcome;

#[derive(Debug)]
struct RecordLog<I> {
    inputs: Vec<Option<I>>,
    disposals: usize,
}

/// Shared view into what a `ScriptedAdventure` has seen. Stays readable after
/// the adventure itself has been moved into (or dropped by) a campaign.
#[derive(Debug)]
pub struct AdventureRecorder<I> {
    log: Arc<Mutex<RecordLog<I>>>,
}

impl<I> Clone for AdventureRecorder<I> {
    fn clone(&self) -> Self {
        Self {
            log: Arc::clone(&self.log),
        }
    }
}

impl<I: Clone> AdventureRecorder<I> {
    /// Returns every input delivered to the adventure, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn inputs(&self) -> Vec<Option<I>> {
        self.log.lock().unwrap().inputs.clone()
    }

    /// Number of times the adventure was resumed.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn resumptions(&self) -> usize {
        self.log.lock().unwrap().inputs.len()
    }

    /// Number of times `dispose` was called.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    #[must_use]
    pub fn disposals(&self) -> usize {
        self.log.lock().unwrap().disposals
    }
}

/// An adventure that returns a predetermined sequence of outcomes, one per
/// resumption, and records every input it receives. Panics if resumed more
/// often than it has outcomes.
pub struct ScriptedAdventure<I, O> {
    name: String,
    script: VecDeque<Outcome<I, O>>,
    log: Arc<Mutex<RecordLog<I>>>,
}

impl<I, O> ScriptedAdventure<I, O> {
    /// Create an adventure with an empty script.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            script: VecDeque::new(),
            log: Arc::new(Mutex::new(RecordLog {
                inputs: Vec::new(),
                disposals: 0,
            })),
        }
    }

    /// Append an outcome to the script.
    #[must_use]
    pub fn then(mut self, outcome: Outcome<I, O>) -> Self {
        self.script.push_back(outcome);
        self
    }

    /// Returns a recorder sharing this adventure's recording.
    #[must_use]
    pub fn recorder(&self) -> AdventureRecorder<I> {
        AdventureRecorder {
            log: Arc::clone(&self.log),
        }
    }
}

impl<I: Clone, O> Adventure<I, O> for ScriptedAdventure<I, O> {
    fn resume(&mut self, input: Option<&I>) -> Outcome<I, O> {
        self.log.lock().unwrap().inputs.push(input.cloned());
        self.script
            .pop_front()
            .unwrap_or_else(|| panic!("ScriptedAdventure {} resumed past its script", self.name))
    }

    fn dispose(&mut self) {
        self.log.lock().unwrap().disposals += 1;
    }

    fn name(&self) -> &str {
        &self.name
    }
}
