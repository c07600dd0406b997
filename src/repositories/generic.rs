//! Repository - Generic CRUD repository bound to one session
//!
//! A `Repository<E>` borrows the caller's connection for the duration of a
//! unit of work and never closes it. Every mutating operation runs in its own
//! transaction and commits before returning; an error (or a cancelled future)
//! drops the transaction, which rolls it back.
//!
//! SQL is assembled with `QueryBuilder`. Table and column names only ever come
//! from the static `Entity` descriptor; every value is a bound parameter.

use super::{Create, Delete, List, Page, Read, Update};
use crate::core::{StoreError, StoreResult};
use crate::entities::{Changes, Entity, FieldValue};
use sqlx::{Connection, QueryBuilder, Sqlite, SqliteConnection};
use std::marker::PhantomData;
use tracing::{debug, info, instrument, warn};

pub struct Repository<'s, E> {
    session: &'s mut SqliteConnection,
    _entity: PhantomData<fn() -> E>,
}

impl<'s, E: Entity> Repository<'s, E> {
    pub fn new(session: &'s mut SqliteConnection) -> Self {
        Self {
            session,
            _entity: PhantomData,
        }
    }

    /// Number of stored rows
    #[instrument(skip(self), fields(entity = E::NAME))]
    pub async fn count(&mut self) -> StoreResult<i64> {
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", E::TABLE))
            .fetch_one(&mut *self.session)
            .await?;
        debug!(count, "Counted rows");
        Ok(count)
    }

    fn select_by_id(id: i64) -> QueryBuilder<'static, Sqlite> {
        let mut builder = QueryBuilder::new(format!(
            "SELECT * FROM {} WHERE {} = ",
            E::TABLE,
            E::ID_COLUMN
        ));
        builder.push_bind(id);
        builder
    }

    fn insert(entity: &E) -> StoreResult<QueryBuilder<'static, Sqlite>> {
        let mut columns: Vec<&'static str> = Vec::with_capacity(E::FIELDS.len() + 1);
        let mut values: Vec<FieldValue> = Vec::with_capacity(E::FIELDS.len() + 1);

        if let Some(id) = entity.id() {
            columns.push(E::ID_COLUMN);
            values.push(FieldValue::Integer(id));
        }

        let entity_values = entity.values();
        debug_assert_eq!(
            entity_values.len(),
            E::FIELDS.len(),
            "{}::values() must match FIELDS",
            E::NAME
        );
        // NULLs are left out so that column defaults apply
        for (field, value) in E::FIELDS.iter().zip(entity_values) {
            if value.is_null() {
                continue;
            }
            if !field.accepts(&value) {
                return Err(StoreError::field_type(
                    E::NAME,
                    field.name,
                    field.describe(),
                    value.type_name(),
                ));
            }
            columns.push(field.name);
            values.push(value);
        }

        let mut builder = QueryBuilder::new(format!("INSERT INTO {} ", E::TABLE));
        if columns.is_empty() {
            builder.push("DEFAULT VALUES");
        } else {
            builder.push("(");
            builder.push(columns.join(", "));
            builder.push(") VALUES (");
            for (i, value) in values.into_iter().enumerate() {
                if i > 0 {
                    builder.push(", ");
                }
                value.push_bind(&mut builder);
            }
            builder.push(")");
        }
        builder.push(" RETURNING *");
        Ok(builder)
    }

    fn update_by_id(id: i64, changes: Changes) -> QueryBuilder<'static, Sqlite> {
        let mut builder = QueryBuilder::new(format!("UPDATE {} SET ", E::TABLE));
        for (i, (field, value)) in changes.into_iter().enumerate() {
            if i > 0 {
                builder.push(", ");
            }
            builder.push(field);
            builder.push(" = ");
            value.push_bind(&mut builder);
        }
        builder.push(format!(" WHERE {} = ", E::ID_COLUMN));
        builder.push_bind(id);
        builder.push(" RETURNING *");
        builder
    }
}

impl<E: Entity> Create<E> for Repository<'_, E> {
    #[instrument(skip(self, entity), fields(entity = E::NAME))]
    async fn add(&mut self, entity: &E) -> StoreResult<E> {
        let mut query = match Self::insert(entity) {
            Ok(query) => query,
            Err(err) => {
                warn!("Rejected insert: {}", err);
                return Err(err);
            }
        };

        let mut tx = self.session.begin().await?;
        let created = query.build_query_as::<E>().fetch_one(&mut *tx).await?;
        tx.commit().await?;

        info!(id = ?created.id(), "Entity added");
        Ok(created)
    }
}

impl<E: Entity> Read<E> for Repository<'_, E> {
    #[instrument(skip(self), fields(entity = E::NAME))]
    async fn get(&mut self, id: i64) -> StoreResult<Option<E>> {
        let found = Self::select_by_id(id)
            .build_query_as::<E>()
            .fetch_optional(&mut *self.session)
            .await?;

        debug!(found = found.is_some(), "Entity lookup");
        Ok(found)
    }
}

impl<E: Entity> List<E> for Repository<'_, E> {
    #[instrument(skip(self), fields(entity = E::NAME))]
    async fn list(&mut self, page: Page) -> StoreResult<Vec<E>> {
        let mut query = QueryBuilder::<Sqlite>::new(format!(
            "SELECT * FROM {} ORDER BY {} ASC LIMIT ",
            E::TABLE,
            E::ID_COLUMN
        ));
        query.push_bind(page.sql_limit());
        query.push(" OFFSET ");
        query.push_bind(page.sql_offset());

        let entities = query
            .build_query_as::<E>()
            .fetch_all(&mut *self.session)
            .await?;

        debug!(returned = entities.len(), "Entities listed");
        Ok(entities)
    }
}

impl<E: Entity> Update<E> for Repository<'_, E> {
    #[instrument(skip(self, changes), fields(entity = E::NAME, fields = changes.len()))]
    async fn update(&mut self, id: i64, changes: Changes) -> StoreResult<E> {
        if let Err(err) = changes.validate::<E>() {
            warn!("Rejected update: {}", err);
            return Err(err);
        }

        let mut tx = self.session.begin().await?;

        let current = Self::select_by_id(id)
            .build_query_as::<E>()
            .fetch_optional(&mut *tx)
            .await?;
        let Some(current) = current else {
            warn!("Entity to update not found");
            return Err(StoreError::not_found(E::NAME, id));
        };

        if changes.is_empty() {
            tx.commit().await?;
            debug!("No changes to apply");
            return Ok(current);
        }

        let updated = Self::update_by_id(id, changes)
            .build_query_as::<E>()
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        info!("Entity updated");
        Ok(updated)
    }
}

impl<E: Entity> Delete for Repository<'_, E> {
    #[instrument(skip(self), fields(entity = E::NAME))]
    async fn delete(&mut self, id: i64) -> StoreResult<()> {
        let mut query = QueryBuilder::<Sqlite>::new(format!(
            "DELETE FROM {} WHERE {} = ",
            E::TABLE,
            E::ID_COLUMN
        ));
        query.push_bind(id);

        let mut tx = self.session.begin().await?;
        let result = query.build().execute(&mut *tx).await?;

        if result.rows_affected() == 0 {
            // tx is dropped here and rolled back
            warn!("Entity to delete not found");
            return Err(StoreError::not_found(E::NAME, id));
        }
        tx.commit().await?;

        info!("Entity deleted");
        Ok(())
    }
}
