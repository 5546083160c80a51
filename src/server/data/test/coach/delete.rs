use super::*;

/// Tests deleting an unassigned coach.
///
/// Expected: Ok with coach removed
#[tokio::test]
async fn deletes_coach() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = factory::create_coach(db).await?;

    let repo = CoachRepository::new(db);
    repo.delete(coach.id).await?;

    assert!(!repo.exists(coach.id).await?);

    Ok(())
}

/// Tests deleting a coach still referenced by a team.
///
/// Verifies that the coach foreign key is not cascaded.
///
/// Expected: Err and coach still present
#[tokio::test]
async fn fails_while_coach_is_assigned() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_roster_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let coach = factory::create_coach(db).await?;
    factory::team::TeamFactory::new(db)
        .coach_id(Some(coach.id))
        .build()
        .await?;

    let repo = CoachRepository::new(db);
    let result = repo.delete(coach.id).await;

    assert!(result.is_err());
    assert!(repo.exists(coach.id).await?);

    Ok(())
}
