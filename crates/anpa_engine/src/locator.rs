use std::collections::HashMap;

use anpa_core::Article;
use serde::Deserialize;
use wire_logging::wire_trace;

use crate::{DependencyError, SettingsError};

/// Resolves the headline locator for an article filed under `category`
/// (uppercased). `Ok(None)` means the category carries no locator.
#[async_trait::async_trait]
pub trait Locator: Send + Sync {
    async fn locate(
        &self,
        article: &Article,
        category: &str,
    ) -> Result<Option<String>, DependencyError>;
}

/// Never adds a locator.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoLocator;

#[async_trait::async_trait]
impl Locator for NoLocator {
    async fn locate(
        &self,
        _article: &Article,
        _category: &str,
    ) -> Result<Option<String>, DependencyError> {
        Ok(None)
    }
}

/// Table-driven locator.
///
/// Sport categories take their locator from the first article subject with a
/// sport entry; all other categories from the first article place with a
/// place entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct VocabularyLocator {
    sport_categories: Vec<String>,
    sport_locators: HashMap<String, String>,
    place_locators: HashMap<String, String>,
}

impl VocabularyLocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_ron_str(text: &str) -> Result<Self, SettingsError> {
        ron::from_str(text).map_err(|err| SettingsError::Parse(err.to_string()))
    }

    pub fn with_sport_category(mut self, category: impl Into<String>) -> Self {
        self.sport_categories
            .push(category.into().to_ascii_uppercase());
        self
    }

    pub fn with_sport_locator(
        mut self,
        subject: impl Into<String>,
        locator: impl Into<String>,
    ) -> Self {
        self.sport_locators.insert(subject.into(), locator.into());
        self
    }

    pub fn with_place_locator(
        mut self,
        place: impl Into<String>,
        locator: impl Into<String>,
    ) -> Self {
        self.place_locators.insert(place.into(), locator.into());
        self
    }

    pub fn lookup(&self, article: &Article, category: &str) -> Option<String> {
        let is_sport = self
            .sport_categories
            .iter()
            .any(|c| c.eq_ignore_ascii_case(category));
        let (terms, table) = if is_sport {
            (&article.subjects, &self.sport_locators)
        } else {
            (&article.places, &self.place_locators)
        };
        terms
            .iter()
            .find_map(|term| table.get(&term.qcode))
            .cloned()
    }
}

#[async_trait::async_trait]
impl Locator for VocabularyLocator {
    async fn locate(
        &self,
        article: &Article,
        category: &str,
    ) -> Result<Option<String>, DependencyError> {
        let locator = self.lookup(article, category);
        if let Some(found) = &locator {
            wire_trace!("locator {} resolved for category {}", found, category);
        }
        Ok(locator)
    }
}
