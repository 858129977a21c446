// src/repository/user_repository.rs

use crate::domain::user_model::{self, Entity as UserEntity, User, UserCriteria};
use crate::error::AppResult;
use crate::security::stores::UserStore;
use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct UserRepository {
    db: Arc<DatabaseConnection>,
}

impl UserRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// ユーザーをユーザー名で検索（削除済みは除外）
    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let model = UserEntity::find()
            .filter(user_model::Column::Username.eq(username))
            .filter(user_model::Column::Deleted.eq(false))
            .one(self.db.as_ref())
            .await?;
        Ok(model)
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn get_user(&self, criteria: &UserCriteria) -> AppResult<Option<User>> {
        if criteria.username.is_empty() {
            return Ok(None);
        }
        self.find_by_username(&criteria.username).await
    }
}
