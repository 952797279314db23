//! In-process tag registry.

use async_trait::async_trait;
use std::sync::RwLock;

use super::tags_errors::TagError;
use super::tags_model::{NewTag, Tag};
use super::tags_traits::{TagRegistryTrait, TagRepositoryTrait};
use crate::errors::{Error, Result};

/// Tag registry held in memory, in registration order.
#[derive(Debug, Default)]
pub struct InMemoryTagRegistry {
    tags: RwLock<Vec<Tag>>,
}

impl InMemoryTagRegistry {
    /// Builds a registry with default colors for each name.
    pub fn with_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags = names
            .into_iter()
            .map(|name| NewTag::named(name).into_tag())
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            tags: RwLock::new(tags),
        })
    }
}

fn poisoned<T>(_: T) -> Error {
    Error::Unexpected("tag registry lock poisoned".to_string())
}

impl TagRegistryTrait for InMemoryTagRegistry {
    fn lookup(&self, name: &str) -> Result<Option<String>> {
        let tags = self.tags.read().map_err(poisoned)?;
        Ok(tags
            .iter()
            .find(|tag| tag.name.eq_ignore_ascii_case(name))
            .map(|tag| tag.name.clone()))
    }
}

#[async_trait]
impl TagRepositoryTrait for InMemoryTagRegistry {
    fn list(&self) -> Result<Vec<Tag>> {
        Ok(self.tags.read().map_err(poisoned)?.clone())
    }

    async fn create(&self, tag: Tag) -> Result<Tag> {
        let mut tags = self.tags.write().map_err(poisoned)?;
        if tags.iter().any(|t| t.name.eq_ignore_ascii_case(&tag.name)) {
            return Err(TagError::DuplicateTag(tag.name).into());
        }
        tags.push(tag.clone());
        Ok(tag)
    }

    async fn delete(&self, name: &str) -> Result<usize> {
        let mut tags = self.tags.write().map_err(poisoned)?;
        let before = tags.len();
        tags.retain(|t| !t.name.eq_ignore_ascii_case(name));
        if tags.len() == before {
            return Err(TagError::UnknownTag(name.to_string()).into());
        }
        Ok(before - tags.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_folds_ascii_case_only() {
        let registry = InMemoryTagRegistry::with_names(["Miner", "Ärger"]).unwrap();
        assert_eq!(registry.lookup("mINER").unwrap().as_deref(), Some("Miner"));
        assert_eq!(registry.lookup("Ärger").unwrap().as_deref(), Some("Ärger"));
        assert_eq!(registry.lookup("ärger").unwrap(), None);
    }
}
