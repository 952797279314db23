use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use log::debug;
use std::sync::Arc;

use super::model::{ManualBalanceChangesDB, ManualBalanceDB, NewManualBalanceDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::manual_balances;
use crate::schema::manual_balances::dsl::*;
use tallyfolio_core::balances::{ManualBalance, ManualBalanceRepositoryTrait};
use tallyfolio_core::errors::{DatabaseError, Result};

pub struct ManualBalanceRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl ManualBalanceRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        ManualBalanceRepository { pool, writer }
    }
}

#[async_trait]
impl ManualBalanceRepositoryTrait for ManualBalanceRepository {
    fn get_all(&self) -> Result<Vec<ManualBalance>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = manual_balances
            .order(id.asc())
            .select(ManualBalanceDB::as_select())
            .load::<ManualBalanceDB>(&mut conn)
            .map_err(StorageError::from)?;
        rows.into_iter()
            .map(|row| ManualBalance::try_from(row).map_err(Into::into))
            .collect()
    }

    fn contains(&self, wanted: &str) -> Result<bool> {
        let mut conn = get_connection(&self.pool)?;
        let found = diesel::select(diesel::dsl::exists(
            manual_balances.filter(label.eq(wanted)),
        ))
        .get_result::<bool>(&mut conn)
        .map_err(StorageError::from)?;
        Ok(found)
    }

    async fn insert_all(&self, balances: Vec<ManualBalance>) -> Result<usize> {
        let rows = balances
            .iter()
            .map(NewManualBalanceDB::try_from)
            .collect::<std::result::Result<Vec<_>, StorageError>>()?;

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let mut inserted = 0;
                for row in &rows {
                    inserted += diesel::insert_into(manual_balances::table)
                        .values(row)
                        .execute(conn)
                        .map_err(StorageError::from)?;
                }
                debug!("Inserted {} manual balance rows", inserted);
                Ok(inserted)
            })
            .await
    }

    async fn replace_all(&self, balances: Vec<ManualBalance>) -> Result<usize> {
        let changes = balances
            .iter()
            .map(|b| ManualBalanceChangesDB::try_from(b).map(|c| (b.label.clone(), c)))
            .collect::<std::result::Result<Vec<_>, StorageError>>()?;

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let mut replaced = 0;
                for (key, change) in &changes {
                    let affected = diesel::update(manual_balances.filter(label.eq(key)))
                        .set(change)
                        .execute(conn)
                        .map_err(StorageError::from)?;
                    if affected == 0 {
                        return Err(DatabaseError::NotFound(key.clone()).into());
                    }
                    replaced += affected;
                }
                Ok(replaced)
            })
            .await
    }

    async fn remove_all(&self, labels: Vec<String>) -> Result<usize> {
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                let mut removed = 0;
                for key in &labels {
                    let affected = diesel::delete(manual_balances.filter(label.eq(key)))
                        .execute(conn)
                        .map_err(StorageError::from)?;
                    if affected == 0 {
                        return Err(DatabaseError::NotFound(key.clone()).into());
                    }
                    removed += affected;
                }
                Ok(removed)
            })
            .await
    }
}
