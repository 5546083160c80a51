use super::*;

/// Tests filtering teams by player membership after the player is deleted.
///
/// Expected: Ok with no team matching the deleted player
#[tokio::test]
async fn deleted_player_matches_no_team() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, players, _) = create_team_with_members(db, 1).await?;
    let service = TeamService::new(db);
    let filter = TeamFilter {
        player_id: Some(players[0].id),
        ..Default::default()
    };

    assert_eq!(service.get_all(filter.clone()).await?.len(), 1);

    PlayerService::new(db).delete(players[0].id).await?;

    assert!(service.get_all(filter).await?.is_empty());

    Ok(())
}

/// Tests filtering teams by name and year together.
///
/// Expected: Ok with only the team matching both conditions
#[tokio::test]
async fn get_all_applies_filters() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let eagles = factory::team::TeamFactory::new(db)
        .team_name("Eagles")
        .year_created(2024)
        .build()
        .await?;
    factory::team::TeamFactory::new(db)
        .team_name("Eagles Juniors")
        .year_created(2020)
        .build()
        .await?;
    factory::team::TeamFactory::new(db)
        .team_name("Hawks")
        .year_created(2024)
        .build()
        .await?;

    let teams = TeamService::new(db)
        .get_all(TeamFilter {
            team_name: Some("eagle".to_string()),
            year_created: Some(2024),
            ..Default::default()
        })
        .await?;

    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].team.team_id, eagles.team_id);

    Ok(())
}
