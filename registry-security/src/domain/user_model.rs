// src/domain/user_model.rs

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub user_id: i64,

    #[sea_orm(unique)]
    pub username: String,

    #[sea_orm(nullable)]
    pub email: Option<String>,

    #[sea_orm(nullable)]
    pub realname: Option<String>,

    pub sysadmin_flag: bool,

    pub deleted: bool,

    pub creation_time: DateTime<Utc>,

    pub update_time: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::project_model::Entity")]
    OwnedProjects,
}

impl Related<super::project_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OwnedProjects.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

pub type User = Model;

/// ユーザー検索条件
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserCriteria {
    pub username: String,
}

impl UserCriteria {
    pub fn by_username(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}
