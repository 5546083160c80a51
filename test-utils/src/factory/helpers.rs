//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a team with a coach and `player_count` players.
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
/// - `player_count` - Number of players to create and add to the team
///
/// # Returns
/// - `Ok((coach, players, team))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_team_with_members(
    db: &DatabaseConnection,
    player_count: usize,
) -> Result<
    (
        entity::coach::Model,
        Vec<entity::player::Model>,
        entity::team::Model,
    ),
    DbErr,
> {
    let coach = crate::factory::coach::create_coach(db).await?;

    let mut players = Vec::with_capacity(player_count);
    for _ in 0..player_count {
        players.push(crate::factory::player::create_player(db).await?);
    }

    let team = crate::factory::team::TeamFactory::new(db)
        .coach_id(Some(coach.id))
        .player_ids(players.iter().map(|p| p.id).collect())
        .build()
        .await?;

    Ok((coach, players, team))
}
