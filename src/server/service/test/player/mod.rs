use super::*;
use crate::server::{
    model::player::{PlayerFields, PlayerFilter, UpdatePlayerParams},
    service::{player::PlayerService, team::TeamService},
};

mod delete;
