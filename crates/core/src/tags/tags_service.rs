use async_trait::async_trait;
use log::debug;
use std::sync::Arc;

use super::tags_model::{NewTag, Tag};
use super::tags_traits::{TagRepositoryTrait, TagServiceTrait};
use crate::errors::Result;

pub struct TagService {
    repository: Arc<dyn TagRepositoryTrait>,
}

impl TagService {
    pub fn new(repository: Arc<dyn TagRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl TagServiceTrait for TagService {
    fn get_tags(&self) -> Result<Vec<Tag>> {
        self.repository.list()
    }

    async fn add_tag(&self, new_tag: NewTag) -> Result<Vec<Tag>> {
        let tag = new_tag.into_tag()?;
        debug!("Registering tag {}", tag.name);
        self.repository.create(tag).await?;
        self.repository.list()
    }

    /// Balances that still carry the tag keep it; nothing is cascaded.
    async fn delete_tag(&self, name: &str) -> Result<Vec<Tag>> {
        debug!("Deleting tag {}", name);
        self.repository.delete(name).await?;
        self.repository.list()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::{InMemoryTagRegistry, TagError, TagRegistryTrait};
    use crate::Error;

    #[tokio::test]
    async fn test_add_then_delete_tag() {
        let registry = Arc::new(InMemoryTagRegistry::default());
        let service = TagService::new(registry.clone());

        let tags = service.add_tag(NewTag::named("Public")).await.unwrap();
        assert_eq!(tags.len(), 1);
        assert_eq!(registry.lookup("PUBLIC").unwrap().as_deref(), Some("Public"));

        let tags = service.delete_tag("public").await.unwrap();
        assert!(tags.is_empty());
        assert!(!registry.contains("Public").unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_name_ignoring_case() {
        let service = TagService::new(Arc::new(InMemoryTagRegistry::default()));
        service.add_tag(NewTag::named("miner")).await.unwrap();

        let err = service.add_tag(NewTag::named("MINER")).await.unwrap_err();
        assert!(matches!(err, Error::Tag(TagError::DuplicateTag(_))));
    }

    #[tokio::test]
    async fn test_delete_unknown_tag() {
        let service = TagService::new(Arc::new(InMemoryTagRegistry::default()));
        let err = service.delete_tag("ghost").await.unwrap_err();
        assert!(matches!(err, Error::Tag(TagError::UnknownTag(ref n)) if n == "ghost"));
    }
}
