use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000002_create_coach_table::Coach;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Team::Table)
                    .if_not_exists()
                    .col(pk_auto(Team::TeamId))
                    .col(string(Team::TeamName))
                    .col(integer(Team::YearCreated))
                    .col(integer_null(Team::CoachId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_coach_id")
                            .from(Team::Table, Team::CoachId)
                            .to(Coach::Table, Coach::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Team::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Team {
    Table,
    TeamId,
    TeamName,
    YearCreated,
    CoachId,
}
