// src/domain/role_model.rs

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// ロールエンティティ（固定の3行: MDRWS / RWS / RS）
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "role")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub role_id: i32,

    pub role_mask: i32,

    #[sea_orm(unique)]
    pub role_code: String,

    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::project_member_model::Entity")]
    Members,
}

impl Related<super::project_member_model::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Members.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
