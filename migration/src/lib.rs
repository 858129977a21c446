// migration/src/lib.rs
pub use sea_orm_migration::prelude::*;

// ユーザー・グループ
mod m20250801_000001_create_users_table;
mod m20250801_000002_create_user_group_table;

// プロジェクトとロール
mod m20250801_000003_create_project_table;
mod m20250801_000004_create_role_table;

// メンバーシップ（ユーザー / グループ → ロール）
mod m20250801_000005_create_project_member_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            // 1. 依存関係のないテーブル
            Box::new(m20250801_000001_create_users_table::Migration),
            Box::new(m20250801_000002_create_user_group_table::Migration),
            // 2. usersに依存
            Box::new(m20250801_000003_create_project_table::Migration),
            // 3. 固定ロール
            Box::new(m20250801_000004_create_role_table::Migration),
            // 4. project / role に依存
            Box::new(m20250801_000005_create_project_member_table::Migration),
        ]
    }
}
