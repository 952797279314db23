use async_trait::async_trait;

use super::tags_model::{NewTag, Tag};
use crate::errors::Result;

/// Read-only view of the tag registry used by the balance manager.
pub trait TagRegistryTrait: Send + Sync {
    /// Looks a tag up ignoring case and returns its registered spelling.
    ///
    /// Case folding is ASCII-only, matching SQLite `NOCASE`: `Ärger` and
    /// `ärger` are different tags.
    fn lookup(&self, name: &str) -> Result<Option<String>>;

    fn contains(&self, name: &str) -> Result<bool> {
        Ok(self.lookup(name)?.is_some())
    }
}

/// Persistence contract for tag definitions.
#[async_trait]
pub trait TagRepositoryTrait: Send + Sync {
    fn list(&self) -> Result<Vec<Tag>>;

    /// Fails with `TagError::DuplicateTag` if the name is taken (ignoring case).
    async fn create(&self, tag: Tag) -> Result<Tag>;

    /// Fails with `TagError::UnknownTag` if no tag has this name (ignoring case).
    async fn delete(&self, name: &str) -> Result<usize>;
}

/// Service operations behind the tag endpoints.
#[async_trait]
pub trait TagServiceTrait: Send + Sync {
    fn get_tags(&self) -> Result<Vec<Tag>>;
    async fn add_tag(&self, new_tag: NewTag) -> Result<Vec<Tag>>;
    async fn delete_tag(&self, name: &str) -> Result<Vec<Tag>>;
}
