use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;

use crate::domain::identity::models::Identity;
use crate::domain::identity::models::IdentityId;
use crate::domain::identity::models::NewIdentity;
use crate::domain::identity::models::Nik;
use crate::domain::identity::models::Role;
use crate::domain::identity::ports::IdentityRepository;
use crate::identity::errors::CredentialError;
use crate::identity::errors::PersistenceError;

const NIK_UNIQUE_CONSTRAINT: &str = "identities_nik_key";

pub struct PostgresIdentityRepository {
    pool: PgPool,
}

impl PostgresIdentityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct IdentityRow {
    id: i64,
    nik: String,
    role: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<IdentityRow> for Identity {
    type Error = CredentialError;

    fn try_from(row: IdentityRow) -> Result<Self, Self::Error> {
        Ok(Identity {
            id: IdentityId(row.id),
            nik: Nik::new(row.nik)?,
            role: Role::new(row.role)?,
            password_hash: row.password_hash,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl IdentityRepository for PostgresIdentityRepository {
    async fn create(&self, identity: NewIdentity) -> Result<Identity, CredentialError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO identities (nik, role, password_hash, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(identity.nik.as_str())
        .bind(identity.role.as_str())
        .bind(&identity.password_hash)
        .bind(identity.created_at)
        .bind(identity.updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_unique_violation()
                    && db_err.constraint() == Some(NIK_UNIQUE_CONSTRAINT)
                {
                    return PersistenceError::Conflict(identity.nik.to_string());
                }
            }
            PersistenceError::Database(e.to_string())
        })?;

        Ok(identity.with_id(IdentityId(id)))
    }

    async fn find_by_nik(&self, nik: &Nik) -> Result<Option<Identity>, CredentialError> {
        let row = sqlx::query_as::<_, IdentityRow>(
            r#"
            SELECT id, nik, role, password_hash, created_at, updated_at
            FROM identities
            WHERE nik = $1
            "#,
        )
        .bind(nik.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| PersistenceError::Database(e.to_string()))?;

        row.map(Identity::try_from).transpose()
    }
}
