use crate::server::{
    data::team::TeamRepository,
    model::team::{CreateTeamParams, TeamFields, UpdateTeamParams},
};
use entity::prelude::*;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory, factory::helpers::create_team_with_members};

mod create;
mod get_all;
mod membership;
mod references;

fn fields(coach_id: Option<i32>, player_ids: Vec<i32>) -> TeamFields {
    TeamFields {
        team_name: "Eagles".to_string(),
        year_created: 2024,
        coach_id,
        player_ids,
    }
}
