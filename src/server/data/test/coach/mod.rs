use crate::server::{
    data::coach::CoachRepository,
    model::coach::{CoachFields, CreateCoachParams, UpdateCoachParams},
};
use chrono::NaiveDate;
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;

fn fields(license_id: &str) -> CoachFields {
    CoachFields {
        name: "Maria".to_string(),
        surname: "Garcia".to_string(),
        coaching_from: NaiveDate::from_ymd_opt(2015, 8, 1).unwrap(),
        license_id: license_id.to_string(),
        personal_code: "CC001".to_string(),
    }
}
