// src/repository/member_repository.rs

use crate::domain::project_member_model::{self, Entity as ProjectMemberEntity, MemberKind};
use crate::domain::role_model::{self, Entity as RoleEntity};
use crate::error::AppResult;
use crate::security::stores::RoleStore;
use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, QueryTrait,
};
use std::sync::Arc;

/// プロジェクトメンバーの直接ロールを引くリポジトリ
#[derive(Debug, Clone)]
pub struct MemberRepository {
    db: Arc<DatabaseConnection>,
}

impl MemberRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// メンバーに割り当てられたロール行
    pub async fn find_member_roles(
        &self,
        entity_id: i64,
        project_id: i64,
        kind: MemberKind,
    ) -> AppResult<Vec<role_model::Model>> {
        let member_roles = ProjectMemberEntity::find()
            .select_only()
            .column(project_member_model::Column::Role)
            .filter(project_member_model::Column::ProjectId.eq(project_id))
            .filter(project_member_model::Column::EntityId.eq(entity_id))
            .filter(project_member_model::Column::EntityType.eq(kind.entity_type()))
            .into_query();

        let roles = RoleEntity::find()
            .filter(role_model::Column::RoleId.in_subquery(member_roles))
            .order_by_asc(role_model::Column::RoleId)
            .all(self.db.as_ref())
            .await?;

        Ok(roles)
    }
}

#[async_trait]
impl RoleStore for MemberRepository {
    async fn get_user_project_roles(
        &self,
        user_id: i64,
        project_id: i64,
        kind: MemberKind,
    ) -> AppResult<Vec<String>> {
        let roles = self.find_member_roles(user_id, project_id, kind).await?;
        Ok(roles.into_iter().map(|role| role.role_code).collect())
    }
}
