use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};
use std::collections::HashMap;

use crate::server::{
    data::{coach::CoachRepository, player::PlayerRepository, team::TeamRepository},
    error::AppError,
    model::team::{
        CreateTeamParams, Team, TeamFields, TeamFilter, TeamWithMembers, UpdateTeamParams,
    },
};

pub struct TeamService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TeamService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all teams matching the filter with coach and players resolved
    pub async fn get_all(&self, filter: TeamFilter) -> Result<Vec<TeamWithMembers>, AppError> {
        let repo = TeamRepository::new(self.db);

        let teams: Vec<Team> = repo
            .get_all()
            .await?
            .into_iter()
            .filter(|team| filter.matches(team))
            .collect();

        with_members(self.db, teams).await
    }

    /// Gets a team by ID with coach and players resolved
    pub async fn get_by_id(&self, team_id: i32) -> Result<Option<TeamWithMembers>, AppError> {
        let repo = TeamRepository::new(self.db);

        let Some(team) = repo.get_by_id(team_id).await? else {
            return Ok(None);
        };

        Ok(with_members(self.db, vec![team]).await?.pop())
    }

    /// Creates a team with its coach and player memberships
    ///
    /// Fails with BadRequest before any write if the coach or a player is unknown.
    pub async fn create(&self, params: CreateTeamParams) -> Result<TeamWithMembers, AppError> {
        let txn = self.db.begin().await?;

        ensure_references_exist(&txn, &params.fields).await?;

        let team = TeamRepository::new(&txn).create(params).await?;
        let team_id = team.team_id;
        let result = single_with_members(&txn, team).await?;

        txn.commit().await?;

        tracing::info!(
            "Created team {} with {} players",
            team_id,
            result.players.len()
        );

        Ok(result)
    }

    /// Replaces a team's fields, coach and player set
    /// Returns None if the team doesn't exist
    pub async fn update(
        &self,
        params: UpdateTeamParams,
    ) -> Result<Option<TeamWithMembers>, AppError> {
        let txn = self.db.begin().await?;
        let repo = TeamRepository::new(&txn);

        if !repo.exists(params.team_id).await? {
            return Ok(None);
        }

        ensure_references_exist(&txn, &params.fields).await?;

        let team = repo.update(params).await?;
        let team_id = team.team_id;
        let result = single_with_members(&txn, team).await?;

        txn.commit().await?;

        tracing::info!("Updated team {}", team_id);

        Ok(Some(result))
    }

    /// Deletes a team and its memberships
    /// Returns true if deleted, false if not found
    pub async fn delete(&self, team_id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;
        let repo = TeamRepository::new(&txn);

        if !repo.exists(team_id).await? {
            return Ok(false);
        }

        repo.delete(team_id).await?;
        txn.commit().await?;

        tracing::info!("Deleted team {}", team_id);

        Ok(true)
    }

    /// Adds a player to a team
    ///
    /// Adding an existing member leaves the team unchanged.
    pub async fn add_player(
        &self,
        team_id: i32,
        player_id: i32,
    ) -> Result<TeamWithMembers, AppError> {
        let txn = self.db.begin().await?;
        let repo = TeamRepository::new(&txn);

        ensure_team_and_player_exist(&txn, team_id, player_id).await?;

        if repo.add_player(team_id, player_id).await? {
            tracing::info!("Added player {} to team {}", player_id, team_id);
        } else {
            tracing::debug!("Player {} already in team {}", player_id, team_id);
        }

        let team = load_team(&txn, team_id).await?;
        let result = single_with_members(&txn, team).await?;

        txn.commit().await?;

        Ok(result)
    }

    /// Removes a player from a team
    ///
    /// Removing a non-member leaves the team unchanged.
    pub async fn remove_player(
        &self,
        team_id: i32,
        player_id: i32,
    ) -> Result<TeamWithMembers, AppError> {
        let txn = self.db.begin().await?;
        let repo = TeamRepository::new(&txn);

        ensure_team_and_player_exist(&txn, team_id, player_id).await?;

        if repo.remove_player(team_id, player_id).await? {
            tracing::info!("Removed player {} from team {}", player_id, team_id);
        } else {
            tracing::debug!("Player {} not in team {}", player_id, team_id);
        }

        let team = load_team(&txn, team_id).await?;
        let result = single_with_members(&txn, team).await?;

        txn.commit().await?;

        Ok(result)
    }
}

/// Resolves the coach and player references of a team request.
async fn ensure_references_exist<C: ConnectionTrait>(
    db: &C,
    fields: &TeamFields,
) -> Result<(), AppError> {
    if let Some(coach_id) = fields.coach_id {
        if !CoachRepository::new(db).exists(coach_id).await? {
            return Err(AppError::BadRequest(format!(
                "Coach not found with id: {}",
                coach_id
            )));
        }
    }

    let found: Vec<i32> = PlayerRepository::new(db)
        .get_by_ids(&fields.player_ids)
        .await?
        .into_iter()
        .map(|player| player.id)
        .collect();

    if let Some(missing) = fields.player_ids.iter().find(|id| !found.contains(id)) {
        return Err(AppError::BadRequest(format!(
            "Player not found with id: {}",
            missing
        )));
    }

    Ok(())
}

async fn ensure_team_and_player_exist<C: ConnectionTrait>(
    db: &C,
    team_id: i32,
    player_id: i32,
) -> Result<(), AppError> {
    if !TeamRepository::new(db).exists(team_id).await? {
        return Err(AppError::NotFound(format!(
            "Team not found with id: {}",
            team_id
        )));
    }

    if !PlayerRepository::new(db).exists(player_id).await? {
        return Err(AppError::NotFound(format!(
            "Player not found with id: {}",
            player_id
        )));
    }

    Ok(())
}

async fn load_team<C: ConnectionTrait>(db: &C, team_id: i32) -> Result<Team, AppError> {
    TeamRepository::new(db)
        .get_by_id(team_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Team not found with id: {}", team_id)))
}

async fn single_with_members<C: ConnectionTrait>(
    db: &C,
    team: Team,
) -> Result<TeamWithMembers, AppError> {
    let team_id = team.team_id;

    with_members(db, vec![team])
        .await?
        .pop()
        .ok_or_else(|| AppError::InternalError(format!("Team {} lost while loading", team_id)))
}

/// Resolves coaches and players for a batch of teams with one query per table.
async fn with_members<C: ConnectionTrait>(
    db: &C,
    teams: Vec<Team>,
) -> Result<Vec<TeamWithMembers>, AppError> {
    let mut coach_ids: Vec<i32> = teams.iter().filter_map(|team| team.coach_id).collect();
    coach_ids.sort_unstable();
    coach_ids.dedup();

    let mut player_ids: Vec<i32> = teams
        .iter()
        .flat_map(|team| team.player_ids.iter().copied())
        .collect();
    player_ids.sort_unstable();
    player_ids.dedup();

    let coaches_by_id: HashMap<i32, _> = CoachRepository::new(db)
        .get_by_ids(&coach_ids)
        .await?
        .into_iter()
        .map(|coach| (coach.id, coach))
        .collect();
    let players_by_id: HashMap<i32, _> = PlayerRepository::new(db)
        .get_by_ids(&player_ids)
        .await?
        .into_iter()
        .map(|player| (player.id, player))
        .collect();

    Ok(teams
        .into_iter()
        .map(|team| {
            let coach = team.coach_id.and_then(|id| coaches_by_id.get(&id).cloned());
            let players = team
                .player_ids
                .iter()
                .filter_map(|id| players_by_id.get(id).cloned())
                .collect();

            TeamWithMembers {
                team,
                coach,
                players,
            }
        })
        .collect())
}
