use std::fmt;

use serde::Deserialize;

/// Identity a message is produced for. Story numbers are sequenced per subscriber.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct Subscriber {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

impl Subscriber {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl fmt::Display for Subscriber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} ({})", self.id, name),
            None => write!(f, "{}", self.id),
        }
    }
}
