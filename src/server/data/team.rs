use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};
use std::collections::HashMap;

use crate::server::model::team::{CreateTeamParams, Team, TeamFields, UpdateTeamParams};

/// Team table and `team_players` membership access.
///
/// A team's player set lives entirely in the join table; every method that
/// returns a [`Team`] loads it from there.
pub struct TeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new team and its memberships
    ///
    /// Referenced coach and players must already exist.
    pub async fn create(&self, params: CreateTeamParams) -> Result<Team, DbErr> {
        let TeamFields {
            team_name,
            year_created,
            coach_id,
            player_ids,
        } = params.fields;

        let team = entity::team::ActiveModel {
            team_name: ActiveValue::Set(team_name),
            year_created: ActiveValue::Set(year_created),
            coach_id: ActiveValue::Set(coach_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        self.insert_memberships(team.team_id, &player_ids).await?;

        Ok(Team::from_entity(team, player_ids))
    }

    /// Gets a team by ID with its player IDs
    pub async fn get_by_id(&self, team_id: i32) -> Result<Option<Team>, DbErr> {
        let Some(team) = entity::prelude::Team::find_by_id(team_id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let player_ids = self.player_ids_for_team(team_id).await?;

        Ok(Some(Team::from_entity(team, player_ids)))
    }

    /// Gets all teams ordered by ID with their player IDs
    pub async fn get_all(&self) -> Result<Vec<Team>, DbErr> {
        let teams = entity::prelude::Team::find()
            .order_by_asc(entity::team::Column::TeamId)
            .all(self.db)
            .await?;

        // Group all memberships in one query
        let memberships = entity::prelude::TeamPlayer::find().all(self.db).await?;
        let mut players_by_team: HashMap<i32, Vec<i32>> = HashMap::new();
        for membership in memberships {
            players_by_team
                .entry(membership.team_id)
                .or_default()
                .push(membership.player_id);
        }

        Ok(teams
            .into_iter()
            .map(|team| {
                let player_ids = players_by_team.remove(&team.team_id).unwrap_or_default();
                Team::from_entity(team, player_ids)
            })
            .collect())
    }

    /// Replaces a team's fields, coach reference and full player set
    pub async fn update(&self, params: UpdateTeamParams) -> Result<Team, DbErr> {
        let team = entity::prelude::Team::find_by_id(params.team_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Team with id {} not found",
                params.team_id
            )))?;

        let TeamFields {
            team_name,
            year_created,
            coach_id,
            player_ids,
        } = params.fields;

        let mut active_model: entity::team::ActiveModel = team.into();
        active_model.team_name = ActiveValue::Set(team_name);
        active_model.year_created = ActiveValue::Set(year_created);
        active_model.coach_id = ActiveValue::Set(coach_id);
        let team = active_model.update(self.db).await?;

        entity::prelude::TeamPlayer::delete_many()
            .filter(entity::team_player::Column::TeamId.eq(params.team_id))
            .exec(self.db)
            .await?;
        self.insert_memberships(params.team_id, &player_ids).await?;

        Ok(Team::from_entity(team, player_ids))
    }

    /// Deletes a team and its memberships
    pub async fn delete(&self, team_id: i32) -> Result<(), DbErr> {
        entity::prelude::TeamPlayer::delete_many()
            .filter(entity::team_player::Column::TeamId.eq(team_id))
            .exec(self.db)
            .await?;

        entity::prelude::Team::delete_by_id(team_id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Checks if a team exists
    pub async fn exists(&self, team_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Team::find()
            .filter(entity::team::Column::TeamId.eq(team_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Gets the IDs of every team listing the player, ordered by team ID
    pub async fn get_ids_by_player(&self, player_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::TeamPlayer::find()
            .select_only()
            .column(entity::team_player::Column::TeamId)
            .filter(entity::team_player::Column::PlayerId.eq(player_id))
            .order_by_asc(entity::team_player::Column::TeamId)
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Gets the IDs of every team coached by the coach, ordered by team ID
    pub async fn get_ids_by_coach(&self, coach_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::Team::find()
            .select_only()
            .column(entity::team::Column::TeamId)
            .filter(entity::team::Column::CoachId.eq(coach_id))
            .order_by_asc(entity::team::Column::TeamId)
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Checks if the player is a member of the team
    pub async fn has_player(&self, team_id: i32, player_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::TeamPlayer::find()
            .filter(entity::team_player::Column::TeamId.eq(team_id))
            .filter(entity::team_player::Column::PlayerId.eq(player_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Adds a player to a team
    ///
    /// # Returns
    /// - `Ok(true)` - Membership inserted
    /// - `Ok(false)` - Player was already a member
    pub async fn add_player(&self, team_id: i32, player_id: i32) -> Result<bool, DbErr> {
        if self.has_player(team_id, player_id).await? {
            return Ok(false);
        }

        entity::team_player::ActiveModel {
            team_id: ActiveValue::Set(team_id),
            player_id: ActiveValue::Set(player_id),
        }
        .insert(self.db)
        .await?;

        Ok(true)
    }

    /// Removes a player from a team
    ///
    /// # Returns
    /// - `Ok(true)` - Membership removed
    /// - `Ok(false)` - Player was not a member
    pub async fn remove_player(&self, team_id: i32, player_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::TeamPlayer::delete_many()
            .filter(entity::team_player::Column::TeamId.eq(team_id))
            .filter(entity::team_player::Column::PlayerId.eq(player_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Clears the coach reference of a team
    pub async fn clear_coach(&self, team_id: i32) -> Result<(), DbErr> {
        let team = entity::prelude::Team::find_by_id(team_id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Team with id {} not found",
                team_id
            )))?;

        let mut active_model: entity::team::ActiveModel = team.into();
        active_model.coach_id = ActiveValue::Set(None);
        active_model.update(self.db).await?;

        Ok(())
    }

    async fn player_ids_for_team(&self, team_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::TeamPlayer::find()
            .select_only()
            .column(entity::team_player::Column::PlayerId)
            .filter(entity::team_player::Column::TeamId.eq(team_id))
            .order_by_asc(entity::team_player::Column::PlayerId)
            .into_tuple()
            .all(self.db)
            .await
    }

    async fn insert_memberships(&self, team_id: i32, player_ids: &[i32]) -> Result<(), DbErr> {
        for &player_id in player_ids {
            entity::team_player::ActiveModel {
                team_id: ActiveValue::Set(team_id),
                player_id: ActiveValue::Set(player_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(())
    }
}
