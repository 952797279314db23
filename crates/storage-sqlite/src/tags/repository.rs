use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use std::sync::Arc;

use super::model::TagDB;
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::tags;
use crate::schema::tags::dsl::*;
use tallyfolio_core::errors::Result;
use tallyfolio_core::tags::{Tag, TagError, TagRegistryTrait, TagRepositoryTrait};

/// Tag registry backed by the `tags` table. The `name` column is
/// `COLLATE NOCASE`, so equality lookups ignore ASCII case.
pub struct TagRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl TagRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        TagRepository { pool, writer }
    }
}

impl TagRegistryTrait for TagRepository {
    fn lookup(&self, wanted: &str) -> Result<Option<String>> {
        let mut conn = get_connection(&self.pool)?;
        let found = tags
            .filter(name.eq(wanted))
            .select(name)
            .first::<String>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        Ok(found)
    }
}

#[async_trait]
impl TagRepositoryTrait for TagRepository {
    fn list(&self) -> Result<Vec<Tag>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = tags
            .order(name.asc())
            .select(TagDB::as_select())
            .load::<TagDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Tag::from).collect())
    }

    async fn create(&self, tag: Tag) -> Result<Tag> {
        let row = TagDB::from(tag);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Tag> {
                let taken = diesel::select(diesel::dsl::exists(tags.filter(name.eq(&row.name))))
                    .get_result::<bool>(conn)
                    .map_err(StorageError::from)?;
                if taken {
                    return Err(TagError::DuplicateTag(row.name).into());
                }
                diesel::insert_into(tags::table)
                    .values(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                Ok(Tag::from(row))
            })
            .await
    }

    async fn delete(&self, wanted: &str) -> Result<usize> {
        let wanted = wanted.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let affected = diesel::delete(tags.filter(name.eq(&wanted)))
                    .execute(conn)
                    .map_err(StorageError::from)?;
                if affected == 0 {
                    return Err(TagError::UnknownTag(wanted).into());
                }
                Ok(affected)
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_pool, run_migrations, spawn_writer};
    use tallyfolio_core::tags::NewTag;
    use tallyfolio_core::Error;
    use tempfile::tempdir;

    async fn create_test_repository() -> (TagRepository, tempfile::TempDir) {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let db_path = temp_dir.path().join("test.db");
        let db_path_str = db_path.to_string_lossy().to_string();

        let pool = create_pool(&db_path_str).expect("Failed to create pool");
        run_migrations(&pool).expect("Failed to run migrations");
        let writer = spawn_writer((*pool).clone()).expect("Failed to spawn writer");

        (TagRepository::new(pool, writer), temp_dir)
    }

    #[tokio::test]
    async fn test_lookup_ignores_case_and_returns_registered_spelling() {
        let (repo, _dir) = create_test_repository().await;
        repo.create(NewTag::named("Inheritance").into_tag().unwrap())
            .await
            .unwrap();

        assert_eq!(
            repo.lookup("inheritance").unwrap().as_deref(),
            Some("Inheritance")
        );
        assert_eq!(
            repo.lookup("INHERITANCE").unwrap().as_deref(),
            Some("Inheritance")
        );
        assert!(repo.lookup("ghost").unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_rejects_names_differing_only_in_case() {
        let (repo, _dir) = create_test_repository().await;
        repo.create(NewTag::named("public").into_tag().unwrap())
            .await
            .unwrap();

        let err = repo
            .create(NewTag::named("PUBLIC").into_tag().unwrap())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Tag(TagError::DuplicateTag(_))));
        assert_eq!(repo.list().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_unknown_tag_fails() {
        let (repo, _dir) = create_test_repository().await;
        repo.create(NewTag::named("public").into_tag().unwrap())
            .await
            .unwrap();

        let err = repo.delete("miner").await.unwrap_err();
        assert!(matches!(err, Error::Tag(TagError::UnknownTag(_))));

        assert_eq!(repo.delete("Public").await.unwrap(), 1);
        assert!(repo.list().unwrap().is_empty());
    }
}
