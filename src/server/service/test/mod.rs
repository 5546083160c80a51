use crate::server::{error::AppError, model::team::TeamFields};
use entity::prelude::*;
use sea_orm::{ConnectionTrait, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory, factory::helpers::create_team_with_members};

mod coach;
mod player;
mod team;

fn team_fields(coach_id: Option<i32>, player_ids: Vec<i32>) -> TeamFields {
    TeamFields {
        team_name: "Eagles".to_string(),
        year_created: 2024,
        coach_id,
        player_ids,
    }
}
