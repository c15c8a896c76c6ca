use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde::de::DeserializeOwned;
use sqlx::PgPool;
use sqlx::postgres::PgRow;
use uuid::Uuid;

use crate::models::{DeleteStatus, Role};
use crate::pagination::OrderDir;

/// The contract every entity module satisfies: one generic data-access and
/// routing template, instantiated per schema. Entity-specific wiring is the
/// table name, ordering whitelist, localized messages, the mutation role
/// set, and the insert/update SQL.
#[async_trait]
pub trait CrudEntity:
    for<'r> sqlx::FromRow<'r, PgRow> + Serialize + Unpin + Send + Sync + Sized + 'static
{
    type Create: DeserializeOwned + Send + 'static;
    type Update: DeserializeOwned + Send + 'static;

    const TABLE: &'static str;
    const ORDER_KEYS: &'static [&'static str];
    const DEFAULT_ORDER: (&'static str, OrderDir);

    /// Roles admitted to create/update/remove. Empty means any authenticated
    /// identity; ADMIN is always admitted. Restore and hard-remove are
    /// ADMIN-only regardless.
    const MUTATION_ROLES: &'static [Role] = &[];

    const CREATED_MSG: &'static str;
    const UPDATED_MSG: &'static str;
    const REMOVED_MSG: &'static str;
    const RESTORED_MSG: &'static str;
    const HARD_REMOVED_MSG: &'static str;
    const NOT_FOUND_MSG: &'static str;
    const LISTED_MSG: &'static str = "Listagem realizada com sucesso!";
    const FOUND_MSG: &'static str = "Registro encontrado!";

    fn id(&self) -> Uuid;
    fn deleted_at(&self) -> Option<DateTime<Utc>>;

    fn delete_status(&self) -> DeleteStatus {
        DeleteStatus::from(self.deleted_at())
    }

    /// Entity-specific INSERT. A field reference in the payload is attached
    /// by id.
    async fn insert(pool: &PgPool, dto: Self::Create) -> Result<Self, sqlx::Error>;

    /// Entity-specific partial UPDATE. Absent payload members leave the
    /// column (including the field relation) untouched.
    async fn update(pool: &PgPool, id: Uuid, dto: Self::Update) -> Result<Self, sqlx::Error>;
}
