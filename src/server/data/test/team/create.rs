use super::*;

/// Tests creating a team with a coach and players.
///
/// Verifies that the team row and one membership row per player are inserted.
///
/// Expected: Ok with memberships persisted
#[tokio::test]
async fn creates_team_with_members() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = factory::create_coach(db).await?;
    let first = factory::create_player(db).await?;
    let second = factory::create_player(db).await?;

    let repo = TeamRepository::new(db);
    let team = repo
        .create(CreateTeamParams {
            fields: fields(Some(coach.id), vec![second.id, first.id]),
        })
        .await?;

    assert_eq!(team.team_name, "Eagles");
    assert_eq!(team.coach_id, Some(coach.id));
    assert_eq!(team.player_ids, vec![first.id, second.id]);

    let memberships = TeamPlayer::find()
        .filter(entity::team_player::Column::TeamId.eq(team.team_id))
        .count(db)
        .await?;
    assert_eq!(memberships, 2);

    Ok(())
}

/// Tests creating a team without coach or players.
///
/// Expected: Ok with no coach and empty player list
#[tokio::test]
async fn creates_empty_team() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = TeamRepository::new(db);
    let team = repo
        .create(CreateTeamParams {
            fields: fields(None, Vec::new()),
        })
        .await?;

    assert!(team.coach_id.is_none());
    assert!(team.player_ids.is_empty());

    let fetched = repo.get_by_id(team.team_id).await?;
    assert_eq!(fetched, Some(team));

    Ok(())
}
