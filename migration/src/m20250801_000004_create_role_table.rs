use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Role::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Role::RoleId)
                            .integer()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Role::RoleMask).integer().not_null().default(0))
                    .col(
                        ColumnDef::new(Role::RoleCode)
                            .string_len(20)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Role::Name).string_len(20).not_null())
                    .to_owned(),
            )
            .await?;

        // 固定ロールを投入（role_id はアプリケーション側のロールIDと一致させる）
        manager
            .exec_stmt(
                Query::insert()
                    .into_table(Role::Table)
                    .columns([Role::RoleId, Role::RoleMask, Role::RoleCode, Role::Name])
                    .values_panic([1.into(), 0.into(), "MDRWS".into(), "projectAdmin".into()])
                    .values_panic([2.into(), 0.into(), "RWS".into(), "developer".into()])
                    .values_panic([3.into(), 0.into(), "RS".into(), "guest".into()])
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Role::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Role {
    Table,
    RoleId,
    RoleMask,
    RoleCode,
    Name,
}
