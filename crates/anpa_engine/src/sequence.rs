use std::collections::HashMap;
use std::sync::Mutex;

use anpa_core::Subscriber;
use serde::Deserialize;

use crate::{DependencyError, SettingsError};

/// Hands out story numbers. Numbers must be unique and increasing per
/// subscriber, also under concurrent callers.
#[async_trait::async_trait]
pub trait SequenceProvider: Send + Sync {
    async fn next_sequence(&self, subscriber: &Subscriber) -> Result<u32, DependencyError>;
}

/// Range a subscriber's story numbers cycle through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SequenceSettings {
    pub min: u32,
    pub max: u32,
}

impl Default for SequenceSettings {
    fn default() -> Self {
        Self { min: 1, max: 9999 }
    }
}

/// Process-local sequence store. After `max` the next number is `min` again.
#[derive(Debug, Default)]
pub struct InMemorySequenceProvider {
    settings: SequenceSettings,
    last_issued: Mutex<HashMap<String, u32>>,
}

impl InMemorySequenceProvider {
    pub fn new(settings: SequenceSettings) -> Result<Self, SettingsError> {
        if settings.min > settings.max {
            return Err(SettingsError::Invalid(format!(
                "sequence min {} exceeds max {}",
                settings.min, settings.max
            )));
        }
        Ok(Self {
            settings,
            last_issued: Mutex::new(HashMap::new()),
        })
    }

    pub fn settings(&self) -> SequenceSettings {
        self.settings
    }
}

#[async_trait::async_trait]
impl SequenceProvider for InMemorySequenceProvider {
    async fn next_sequence(&self, subscriber: &Subscriber) -> Result<u32, DependencyError> {
        let mut last_issued = self
            .last_issued
            .lock()
            .map_err(|_| DependencyError::Sequence("sequence store lock poisoned".into()))?;
        let SequenceSettings { min, max } = self.settings;
        let next = match last_issued.get(&subscriber.id) {
            Some(&last) if last < max => last + 1,
            _ => min,
        };
        last_issued.insert(subscriber.id.clone(), next);
        Ok(next)
    }
}
