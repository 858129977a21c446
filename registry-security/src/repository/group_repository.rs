// src/repository/group_repository.rs

use crate::domain::project_member_model::{self, Entity as ProjectMemberEntity, MemberKind};
use crate::domain::role_model::{self, Entity as RoleEntity};
use crate::domain::user_group_model::{self, Entity as UserGroupEntity, LDAP_GROUP_TYPE};
use crate::error::AppResult;
use crate::security::stores::{GroupQueryBuilder, GroupQueryCondition, GroupRoleStore};
use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect, QueryTrait,
};
use std::collections::BTreeSet;
use std::sync::Arc;

/// LDAP グループ DN から検索条件を作る
///
/// 前後の空白を除去し、空の DN は捨てる。`BTreeSet` 由来なので重複はない。
#[derive(Debug, Clone, Copy, Default)]
pub struct LdapGroupQueryBuilder;

impl GroupQueryBuilder for LdapGroupQueryBuilder {
    fn build_condition(&self, groups: &BTreeSet<String>) -> GroupQueryCondition {
        let dns: BTreeSet<String> = groups
            .iter()
            .map(|dn| dn.trim())
            .filter(|dn| !dn.is_empty())
            .map(str::to_string)
            .collect();
        GroupQueryCondition::new(dns.into_iter().collect())
    }
}

/// グループ経由のロールを引くリポジトリ
#[derive(Debug, Clone)]
pub struct GroupRepository {
    db: Arc<DatabaseConnection>,
}

impl GroupRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    pub async fn find_group_roles(
        &self,
        project_id: i64,
        condition: &GroupQueryCondition,
    ) -> AppResult<Vec<role_model::Model>> {
        // 条件が空なら問い合わせない
        if condition.is_empty() {
            return Ok(Vec::new());
        }

        let group_ids = UserGroupEntity::find()
            .select_only()
            .column(user_group_model::Column::Id)
            .filter(user_group_model::Column::GroupType.eq(LDAP_GROUP_TYPE))
            .filter(user_group_model::Column::LdapGroupDn.is_in(condition.group_dns().iter().cloned()))
            .into_query();

        let member_roles = ProjectMemberEntity::find()
            .select_only()
            .column(project_member_model::Column::Role)
            .filter(project_member_model::Column::ProjectId.eq(project_id))
            .filter(project_member_model::Column::EntityType.eq(MemberKind::Group.entity_type()))
            .filter(project_member_model::Column::EntityId.in_subquery(group_ids))
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
impl GroupRoleStore for GroupRepository {
    async fn get_roles_by_group(
        &self,
        project_id: i64,
        condition: &GroupQueryCondition,
    ) -> AppResult<Vec<String>> {
        let roles = self.find_group_roles(project_id, condition).await?;
        Ok(roles.into_iter().map(|role| role.role_code).collect())
    }
}
