// src/domain/project_model.rs

use crate::error::{AppError, AppResult};
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// プロジェクトエンティティ
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "project")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub project_id: i64,

    pub owner_id: i64,

    #[sea_orm(unique)]
    pub name: String,

    pub public: bool,

    pub deleted: bool,

    pub creation_time: DateTime<Utc>,

    pub update_time: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::project_member_model::Entity")]
    Members,

    #[sea_orm(
        belongs_to = "super::user_model::Entity",
        from = "Column::OwnerId",
        to = "super::user_model::Column::UserId"
    )]
    Owner,
}

impl Related<super::project_member_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Members.def()
    }
}

impl Related<super::user_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub type Project = Model;

/// プロジェクトの指定方法（ID または名前）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectIdentifier {
    ById(i64),
    ByName(String),
}

impl ProjectIdentifier {
    /// 検索に使える識別子か確認（0以下のID・空の名前は不正）
    pub fn validate(&self) -> AppResult<()> {
        match self {
            ProjectIdentifier::ById(id) if *id <= 0 => Err(AppError::InvalidInput(format!(
                "project id must be positive: {}",
                id
            ))),
            ProjectIdentifier::ByName(name) if name.trim().is_empty() => Err(
                AppError::InvalidInput("project name must not be blank".to_string()),
            ),
            _ => Ok(()),
        }
    }

    /// 識別子に対応する検索条件
    pub fn condition(&self) -> sea_orm::Condition {
        match self {
            ProjectIdentifier::ById(id) => sea_orm::Condition::all().add(Column::ProjectId.eq(*id)),
            ProjectIdentifier::ByName(name) => {
                sea_orm::Condition::all().add(Column::Name.eq(name.as_str()))
            }
        }
    }

    /// プロジェクトがこの識別子に一致するか
    pub fn matches(&self, project: &Model) -> bool {
        match self {
            ProjectIdentifier::ById(id) => project.project_id == *id,
            ProjectIdentifier::ByName(name) => project.name == *name,
        }
    }
}

impl std::fmt::Display for ProjectIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectIdentifier::ById(id) => write!(f, "{}", id),
            ProjectIdentifier::ByName(name) => write!(f, "{}", name),
        }
    }
}

impl From<i64> for ProjectIdentifier {
    fn from(id: i64) -> Self {
        ProjectIdentifier::ById(id)
    }
}

impl From<&str> for ProjectIdentifier {
    fn from(name: &str) -> Self {
        ProjectIdentifier::ByName(name.to_string())
    }
}

impl From<String> for ProjectIdentifier {
    fn from(name: String) -> Self {
        ProjectIdentifier::ByName(name)
    }
}

/// メンバー条件でのプロジェクト一覧クエリ
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectQueryParam {
    pub member: Option<MemberQuery>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberQuery {
    pub name: String,
    pub group_list: Vec<String>,
}
