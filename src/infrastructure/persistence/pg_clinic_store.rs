//! PostgreSQL implementation of the clinic record store.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{PgPool, Postgres, Transaction};
use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::entities::PetType;
use crate::domain::repositories::{
    ClinicStore, DescendantRows, OwnerRow, PetRow, ReadSession, VisitRow,
};
use crate::error::LoadError;

const OWNER_COLUMNS: &str = "o.id, o.first_name, o.last_name, o.address, o.city, o.telephone";

/// PostgreSQL record store.
///
/// Each [`ClinicStore::begin_read`] checks one connection out of the pool and
/// opens a `READ ONLY` transaction on it. The transaction is never committed;
/// dropping the session rolls it back and returns the connection.
pub struct PgClinicStore {
    pool: Arc<PgPool>,
}

impl PgClinicStore {
    /// Creates a new store with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    async fn open_session(&self) -> Result<PgReadSession, LoadError> {
        let tx = self.pool.begin_with("BEGIN READ ONLY").await?;
        Ok(PgReadSession { tx })
    }
}

#[async_trait]
impl ClinicStore for PgClinicStore {
    async fn begin_read(&self) -> Result<Box<dyn ReadSession>, LoadError> {
        Ok(Box::new(self.open_session().await?))
    }

    async fn ping(&self) -> Result<(), LoadError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }
}

/// A read-only transaction on one pooled connection.
pub struct PgReadSession {
    tx: Transaction<'static, Postgres>,
}

#[derive(sqlx::FromRow)]
struct OwnerRecord {
    id: i32,
    first_name: String,
    last_name: String,
    address: String,
    city: String,
    telephone: String,
}

impl From<OwnerRecord> for OwnerRow {
    fn from(r: OwnerRecord) -> Self {
        OwnerRow {
            id: r.id,
            first_name: r.first_name,
            last_name: r.last_name,
            address: r.address,
            city: r.city,
            telephone: r.telephone,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PetTypeRecord {
    id: i32,
    name: String,
}

/// One row of the pets/types/visits join. Type and visit columns are null
/// when the pet has no matching type row or no visits.
#[derive(Debug, Clone, sqlx::FromRow)]
struct DescendantRecord {
    pet_id: i32,
    pet_name: String,
    birth_date: NaiveDate,
    type_id: i32,
    owner_id: i32,
    type_row_id: Option<i32>,
    type_name: Option<String>,
    visit_id: Option<i32>,
    visit_date: Option<NaiveDate>,
    description: Option<String>,
}

#[async_trait]
impl ReadSession for PgReadSession {
    async fn owner_by_id(&mut self, id: i32) -> Result<Option<OwnerRow>, LoadError> {
        fetched("owner_by_id");
        let row = sqlx::query_as::<_, OwnerRecord>(&format!(
            "SELECT {OWNER_COLUMNS} FROM owners o WHERE o.id = $1"
        ))
        .bind(id)
        .fetch_optional(&mut *self.tx)
        .await?;

        Ok(row.map(OwnerRow::from))
    }

    async fn owners_by_last_name(
        &mut self,
        last_name_prefix: Option<String>,
    ) -> Result<Vec<OwnerRow>, LoadError> {
        fetched("owners_by_last_name");
        let pattern = last_name_prefix.as_deref().map(like_prefix_pattern);

        let rows = sqlx::query_as::<_, OwnerRecord>(&format!(
            r#"
            SELECT {OWNER_COLUMNS}
            FROM owners o
            WHERE ($1::text IS NULL OR o.last_name LIKE $1)
            ORDER BY o.last_name, o.id
            "#
        ))
        .bind(pattern)
        .fetch_all(&mut *self.tx)
        .await?;

        Ok(rows.into_iter().map(OwnerRow::from).collect())
    }

    async fn owner_by_pet_id(&mut self, pet_id: i32) -> Result<Option<OwnerRow>, LoadError> {
        fetched("owner_by_pet_id");
        let row = sqlx::query_as::<_, OwnerRecord>(&format!(
            r#"
            SELECT {OWNER_COLUMNS}
            FROM owners o
            JOIN pets p ON p.owner_id = o.id
            WHERE p.id = $1
            "#
        ))
        .bind(pet_id)
        .fetch_optional(&mut *self.tx)
        .await?;

        Ok(row.map(OwnerRow::from))
    }

    async fn owner_by_visit_id(&mut self, visit_id: i32) -> Result<Option<OwnerRow>, LoadError> {
        fetched("owner_by_visit_id");
        let row = sqlx::query_as::<_, OwnerRecord>(&format!(
            r#"
            SELECT {OWNER_COLUMNS}
            FROM owners o
            JOIN pets p ON p.owner_id = o.id
            JOIN visits v ON v.pet_id = p.id
            WHERE v.id = $1
            "#
        ))
        .bind(visit_id)
        .fetch_optional(&mut *self.tx)
        .await?;

        Ok(row.map(OwnerRow::from))
    }

    async fn descendants(&mut self, owner_ids: &[i32]) -> Result<DescendantRows, LoadError> {
        fetched("descendants");
        let records = sqlx::query_as::<_, DescendantRecord>(
            r#"
            SELECT p.id AS pet_id, p.name AS pet_name, p.birth_date, p.type_id, p.owner_id,
                   t.id AS type_row_id, t.name AS type_name,
                   v.id AS visit_id, v.visit_date, v.description
            FROM pets p
            LEFT JOIN types t ON t.id = p.type_id
            LEFT JOIN visits v ON v.pet_id = p.id
            WHERE p.owner_id = ANY($1)
            ORDER BY p.id, v.id
            "#,
        )
        .bind(owner_ids)
        .fetch_all(&mut *self.tx)
        .await?;

        Ok(split_descendants(records))
    }

    async fn pet_types(&mut self) -> Result<Vec<PetType>, LoadError> {
        fetched("pet_types");
        let rows =
            sqlx::query_as::<_, PetTypeRecord>("SELECT id, name FROM types ORDER BY name, id")
                .fetch_all(&mut *self.tx)
                .await?;

        Ok(rows
            .into_iter()
            .map(|r| PetType::new(r.id, r.name))
            .collect())
    }

    async fn pet_type_by_id(&mut self, id: i32) -> Result<Option<PetType>, LoadError> {
        fetched("pet_type_by_id");
        let row = sqlx::query_as::<_, PetTypeRecord>("SELECT id, name FROM types WHERE id = $1")
            .bind(id)
            .fetch_optional(&mut *self.tx)
            .await?;

        Ok(row.map(|r| PetType::new(r.id, r.name)))
    }
}

fn fetched(query: &'static str) {
    metrics::counter!("clinic_store_fetches_total", "query" => query).increment(1);
}

/// Builds a `LIKE` pattern matching values that start with `prefix` literally.
fn like_prefix_pattern(prefix: &str) -> String {
    let mut pattern = String::with_capacity(prefix.len() + 1);
    for c in prefix.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

/// Splits flat join rows into distinct pets, the types they found, and visits
/// in fetch order.
fn split_descendants(records: Vec<DescendantRecord>) -> DescendantRows {
    let mut rows = DescendantRows::default();
    let mut seen_pets = HashSet::new();
    let mut seen_types = HashSet::new();

    for r in records {
        if seen_pets.insert(r.pet_id) {
            rows.pets.push(PetRow {
                id: r.pet_id,
                name: r.pet_name,
                birth_date: r.birth_date,
                type_id: r.type_id,
                owner_id: r.owner_id,
            });
        }

        if let (Some(type_id), Some(type_name)) = (r.type_row_id, r.type_name)
            && seen_types.insert(type_id)
        {
            rows.pet_types.push(PetType::new(type_id, type_name));
        }

        if let (Some(id), Some(visit_date), Some(description)) =
            (r.visit_id, r.visit_date, r.description)
        {
            rows.visits.push(VisitRow {
                id,
                pet_id: r.pet_id,
                visit_date,
                description,
            });
        }
    }

    rows
}
