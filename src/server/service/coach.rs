use sea_orm::{DatabaseConnection, DbErr, TransactionTrait};

use crate::server::{
    data::{coach::CoachRepository, team::TeamRepository},
    error::AppError,
    model::coach::{Coach, CoachFilter, CreateCoachParams, UpdateCoachParams},
};

pub struct CoachService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CoachService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all coaches matching the filter, ordered by ID
    pub async fn get_all(&self, filter: CoachFilter) -> Result<Vec<Coach>, AppError> {
        let repo = CoachRepository::new(self.db);

        let coaches = repo.get_all().await?;

        Ok(coaches
            .into_iter()
            .filter(|coach| filter.matches(coach))
            .collect())
    }

    /// Gets a coach by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Coach>, AppError> {
        let repo = CoachRepository::new(self.db);

        Ok(repo.get_by_id(id).await?)
    }

    /// Creates a new coach
    pub async fn create(&self, params: CreateCoachParams) -> Result<Coach, AppError> {
        let repo = CoachRepository::new(self.db);

        let coach = repo.create(params).await?;

        tracing::info!("Created coach {}", coach.id);

        Ok(coach)
    }

    /// Replaces a coach's fields
    /// Returns None if the coach doesn't exist
    pub async fn update(&self, params: UpdateCoachParams) -> Result<Option<Coach>, AppError> {
        let repo = CoachRepository::new(self.db);

        // Missing row, including one deleted since the request arrived
        let coach = match repo.update(params).await {
            Ok(coach) => coach,
            Err(DbErr::RecordNotFound(_)) => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        tracing::info!("Updated coach {}", coach.id);

        Ok(Some(coach))
    }

    /// Deletes a coach after clearing it from every team it coaches
    /// Returns true if deleted, false if not found
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let txn = self.db.begin().await?;
        let coach_repo = CoachRepository::new(&txn);
        let team_repo = TeamRepository::new(&txn);

        if !coach_repo.exists(id).await? {
            return Ok(false);
        }

        let team_ids = team_repo.get_ids_by_coach(id).await?;
        for team_id in &team_ids {
            team_repo.clear_coach(*team_id).await?;
            tracing::debug!("Cleared coach {} from team {}", id, team_id);
        }

        coach_repo.delete(id).await?;
        txn.commit().await?;

        tracing::info!(
            "Deleted coach {} after clearing {} teams",
            id,
            team_ids.len()
        );

        Ok(true)
    }
}
