use sea_orm_migration::{prelude::*, schema::*};

use super::m20250601_000001_create_player_table::Player;
use super::m20250601_000003_create_team_table::Team;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TeamPlayers::Table)
                    .if_not_exists()
                    .col(integer(TeamPlayers::TeamId))
                    .col(integer(TeamPlayers::PlayerId))
                    .primary_key(
                        Index::create()
                            .name("pk_team_players")
                            .col(TeamPlayers::TeamId)
                            .col(TeamPlayers::PlayerId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_players_team_id")
                            .from(TeamPlayers::Table, TeamPlayers::TeamId)
                            .to(Team::Table, Team::TeamId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_team_players_player_id")
                            .from(TeamPlayers::Table, TeamPlayers::PlayerId)
                            .to(Player::Table, Player::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TeamPlayers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TeamPlayers {
    Table,
    TeamId,
    PlayerId,
}
