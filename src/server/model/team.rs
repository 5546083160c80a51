//! Team domain models and parameters.

use crate::{
    model::team::{TeamDto, TeamFilterDto, TeamRequestDto},
    server::{
        error::AppError,
        model::{coach::Coach, player::Player},
        util::{
            filter::{contains_ignore_case, equals},
            validate::{require, require_text},
        },
    },
};

/// A persisted team with its member ids.
///
/// `player_ids` is ordered by player id.
#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub team_id: i32,
    pub team_name: String,
    pub year_created: i32,
    pub coach_id: Option<i32>,
    pub player_ids: Vec<i32>,
}

impl Team {
    /// Converts a team entity and its membership ids to a domain model.
    pub fn from_entity(entity: entity::team::Model, mut player_ids: Vec<i32>) -> Self {
        player_ids.sort_unstable();

        Self {
            team_id: entity.team_id,
            team_name: entity.team_name,
            year_created: entity.year_created,
            coach_id: entity.coach_id,
            player_ids,
        }
    }
}

/// A team with its coach and players resolved, ready for the wire.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamWithMembers {
    pub team: Team,
    pub coach: Option<Coach>,
    pub players: Vec<Player>,
}

impl TeamWithMembers {
    pub fn into_dto(self) -> TeamDto {
        TeamDto {
            team_id: self.team.team_id,
            team_name: self.team.team_name,
            year_created: self.team.year_created,
            coach: self.coach.map(Coach::into_dto),
            players: self.players.into_iter().map(Player::into_dto).collect(),
        }
    }
}

/// Validated team fields shared by create and full-replace update.
///
/// Omitted `coach_id` means no coach and omitted `player_ids` means no players.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamFields {
    pub team_name: String,
    pub year_created: i32,
    pub coach_id: Option<i32>,
    /// Deduplicated, first occurrence wins.
    pub player_ids: Vec<i32>,
}

impl TeamFields {
    pub fn from_dto(dto: TeamRequestDto) -> Result<Self, AppError> {
        let team_name = require_text("teamName", dto.team_name)?;
        let year_created = require("yearCreated", dto.year_created)?;

        let mut player_ids: Vec<i32> = Vec::new();
        for id in dto.player_ids.unwrap_or_default() {
            if !player_ids.contains(&id) {
                player_ids.push(id);
            }
        }

        Ok(Self {
            team_name,
            year_created,
            coach_id: dto.coach_id,
            player_ids,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateTeamParams {
    pub fields: TeamFields,
}

impl CreateTeamParams {
    pub fn from_dto(dto: TeamRequestDto) -> Result<Self, AppError> {
        Ok(Self {
            fields: TeamFields::from_dto(dto)?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateTeamParams {
    pub team_id: i32,
    pub fields: TeamFields,
}

impl UpdateTeamParams {
    pub fn from_dto(team_id: i32, dto: TeamRequestDto) -> Result<Self, AppError> {
        Ok(Self {
            team_id,
            fields: TeamFields::from_dto(dto)?,
        })
    }
}

/// Conjunctive list filter for teams.
#[derive(Debug, Clone, Default)]
pub struct TeamFilter {
    pub team_name: Option<String>,
    pub year_created: Option<i32>,
    pub coach_id: Option<i32>,
    pub player_id: Option<i32>,
}

impl TeamFilter {
    pub fn from_dto(dto: TeamFilterDto) -> Self {
        Self {
            team_name: dto.team_name,
            year_created: dto.year_created,
            coach_id: dto.coach_id,
            player_id: dto.player_id,
        }
    }

    pub fn matches(&self, team: &Team) -> bool {
        contains_ignore_case(&team.team_name, self.team_name.as_deref())
            && equals(&team.year_created, self.year_created.as_ref())
            && self
                .coach_id
                .is_none_or(|coach_id| team.coach_id == Some(coach_id))
            && self
                .player_id
                .is_none_or(|player_id| team.player_ids.contains(&player_id))
    }
}
