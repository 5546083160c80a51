use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    data::{player::PlayerRepository, team::TeamRepository},
    error::AppError,
    model::player::{CreatePlayerParams, Player, PlayerFilter, UpdatePlayerParams},
};

pub struct PlayerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlayerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all players matching the filter, ordered by ID
    pub async fn get_all(&self, filter: PlayerFilter) -> Result<Vec<Player>, AppError> {
        let repo = PlayerRepository::new(self.db);

        let players = repo.get_all().await?;

        Ok(players
            .into_iter()
            .filter(|player| filter.matches(player))
            .collect())
    }

    /// Gets a player by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Player>, AppError> {
        let repo = PlayerRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    /// Creates a new player
    pub async fn create(&self, params: CreatePlayerParams) -> Result<Player, AppError> {
        let repo = PlayerRepository::new(self.db);

        let player = repo.create(params).await?;

        tracing::info!("Created player {}", player.id);

        Ok(player)
    }

    /// Replaces a player's fields
    /// Returns None if the player doesn't exist
    pub async fn update(&self, params: UpdatePlayerParams) -> Result<Option<Player>, AppError> {
        let repo = PlayerRepository::new(self.db);

        // Missing row, including one deleted since the request arrived
        let player = match repo.update(params).await {
            Ok(player) => player,
            Err(DbErr::RecordNotFound(_)) => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        tracing::info!("Updated player {}", player.id);

        Ok(Some(player))
    }

    /// Deletes a player after removing them from every team
    ///
    /// The scrub and the delete commit together or not at all.
    ///
    /// # Returns
    /// - `Ok(true)` - Player deleted
    /// - `Ok(false)` - No player with that ID
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;
        let player_repo = PlayerRepository::new(&txn);
        let team_repo = TeamRepository::new(&txn);

        if !player_repo.exists(id).await? {
            return Ok(false);
        }

        let team_ids = team_repo.get_ids_by_player(id).await?;
        for team_id in &team_ids {
            team_repo.remove_player(*team_id, id).await?;
            tracing::debug!("Removed player {} from team {}", id, team_id);
        }

        player_repo.delete(id).await?;
        txn.commit().await?;

        tracing::info!(
            "Deleted player {} after removing them from {} teams",
            id,
            team_ids.len()
        );

        Ok(true)
    }
}
