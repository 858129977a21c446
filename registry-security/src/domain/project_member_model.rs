// src/domain/project_member_model.rs

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// プロジェクトメンバー（ユーザーまたはグループへのロール割り当て）
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "project_member")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub project_id: i64,

    /// `entity_type` が "u" なら users.user_id、"g" なら user_group.id
    pub entity_id: i64,

    pub entity_type: String,

    pub role: i32,

    pub creation_time: DateTime<Utc>,

    pub update_time: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::project_model::Entity",
        from = "Column::ProjectId",
        to = "super::project_model::Column::ProjectId"
    )]
    Project,

    #[sea_orm(
        belongs_to = "super::role_model::Entity",
        from = "Column::Role",
        to = "super::role_model::Column::RoleId"
    )]
    Role,
}

impl Related<super::project_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Project.def()
    }
}

impl Related<super::role_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Role.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// メンバー種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberKind {
    User,
    Group,
}

impl MemberKind {
    /// `project_member.entity_type` の値
    pub fn entity_type(&self) -> &'static str {
        match self {
            MemberKind::User => "u",
            MemberKind::Group => "g",
        }
    }
}
