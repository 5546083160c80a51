use super::*;
use crate::server::{
    model::team::{CreateTeamParams, TeamFilter, UpdateTeamParams},
    service::{player::PlayerService, team::TeamService},
};

mod create;
mod get_all;
mod update;
