//! OpenAPI document for the roster API.

use utoipa::OpenApi;

use crate::{
    model::{
        api::{ErrorDto, HealthDto},
        coach::{CoachDto, CoachRequestDto},
        player::{PlayerDto, PlayerRequestDto},
        team::{TeamDto, TeamRequestDto},
    },
    server::controller::{coach, health, player, team},
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Roster API", description = "Players, coaches and the teams that group them"),
    paths(
        health::health,
        player::get_players,
        player::create_player,
        player::get_player_by_id,
        player::update_player,
        player::delete_player,
        coach::get_coaches,
        coach::create_coach,
        coach::get_coach_by_id,
        coach::update_coach,
        coach::delete_coach,
        team::get_teams,
        team::create_team,
        team::get_team_by_id,
        team::update_team,
        team::delete_team,
        team::add_player_to_team,
        team::remove_player_from_team,
    ),
    components(schemas(
        ErrorDto,
        HealthDto,
        PlayerDto,
        PlayerRequestDto,
        CoachDto,
        CoachRequestDto,
        TeamDto,
        TeamRequestDto,
    )),
    tags(
        (name = "health", description = "Liveness check"),
        (name = "player", description = "Player records"),
        (name = "coach", description = "Coach records"),
        (name = "team", description = "Teams and their memberships"),
    )
)]
pub struct ApiDoc;
