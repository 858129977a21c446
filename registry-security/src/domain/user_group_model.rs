// src/domain/user_group_model.rs

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// LDAP グループ種別
pub const LDAP_GROUP_TYPE: i32 = 1;

/// ディレクトリグループ（LDAP DN で識別）
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user_group")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub group_name: String,

    pub group_type: i32,

    #[sea_orm(unique)]
    pub ldap_group_dn: String,

    pub creation_time: DateTime<Utc>,

    pub update_time: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
