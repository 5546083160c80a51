use super::*;
use crate::server::{
    model::coach::{CoachFields, UpdateCoachParams},
    service::{coach::CoachService, team::TeamService},
};


fn fields() -> CoachFields {
    CoachFields {
        name: "Maria".to_string(),
        surname: "Garcia".to_string(),
        coaching_from: test_utils::fixture::coach::default_coaching_from(),
        license_id: "LIC-002".to_string(),
        personal_code: "CC001".to_string(),
    }
}
