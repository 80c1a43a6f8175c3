use anyhow::Context as _;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
};

use keygate_access_schema::access_keys;

use crate::domain::repository::AccessKeyRepository;
use crate::domain::types::{AccessKey, KeyStatus};
use crate::error::AccessServiceError;

#[derive(Clone)]
pub struct DbAccessKeyRepository {
    pub db: DatabaseConnection,
}

impl AccessKeyRepository for DbAccessKeyRepository {
    async fn find(&self, code: &str) -> Result<Option<AccessKey>, AccessServiceError> {
        let model = access_keys::Entity::find_by_id(code)
            .one(&self.db)
            .await
            .context("find access key")?;
        Ok(model.map(key_from_model))
    }

    async fn insert(&self, key: &AccessKey) -> Result<(), AccessServiceError> {
        access_keys::ActiveModel {
            code: Set(key.code.clone()),
            status: Set(status_to_db(key.status)),
            owner_email: Set(key.owner_email.clone()),
            expires_at: Set(key.expires_at),
            created_at: Set(key.created_at),
        }
        .insert(&self.db)
        .await
        .context("insert access key")?;
        Ok(())
    }

    async fn activate(
        &self,
        code: &str,
        email: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<bool, AccessServiceError> {
        // Single conditional UPDATE guarded on status = pending; the row
        // count tells us whether this caller won the activation.
        let result = access_keys::Entity::update_many()
            .col_expr(
                access_keys::Column::Status,
                Expr::value(access_keys::Status::Active),
            )
            .col_expr(access_keys::Column::OwnerEmail, Expr::value(email))
            .col_expr(access_keys::Column::ExpiresAt, Expr::value(expires_at))
            .filter(access_keys::Column::Code.eq(code))
            .filter(access_keys::Column::Status.eq(access_keys::Status::Pending))
            .exec(&self.db)
            .await
            .context("activate access key")?;
        Ok(result.rows_affected > 0)
    }

    async fn delete_owned(
        &self,
        code: &str,
        owner_email: &str,
    ) -> Result<bool, AccessServiceError> {
        let result = access_keys::Entity::delete_many()
            .filter(access_keys::Column::Code.eq(code))
            .filter(access_keys::Column::OwnerEmail.eq(owner_email))
            .exec(&self.db)
            .await
            .context("delete access key")?;
        Ok(result.rows_affected > 0)
    }
}

fn key_from_model(model: access_keys::Model) -> AccessKey {
    AccessKey {
        code: model.code,
        status: match model.status {
            access_keys::Status::Pending => KeyStatus::Pending,
            access_keys::Status::Active => KeyStatus::Active,
        },
        owner_email: model.owner_email,
        expires_at: model.expires_at,
        created_at: model.created_at,
    }
}

fn status_to_db(status: KeyStatus) -> access_keys::Status {
    match status {
        KeyStatus::Pending => access_keys::Status::Pending,
        KeyStatus::Active => access_keys::Status::Active,
    }
}
