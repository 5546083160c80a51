use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::coach::{Coach, CreateCoachParams, UpdateCoachParams};

pub struct CoachRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CoachRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new coach
    pub async fn create(&self, params: CreateCoachParams) -> Result<Coach, DbErr> {
        let fields = params.fields;

        let entity = entity::coach::ActiveModel {
            name: ActiveValue::Set(fields.name),
            surname: ActiveValue::Set(fields.surname),
            coaching_from: ActiveValue::Set(fields.coaching_from),
            license_id: ActiveValue::Set(fields.license_id),
            personal_code: ActiveValue::Set(fields.personal_code),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Coach::from_entity(entity))
    }

    /// Gets a coach by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Coach>, DbErr> {
        let entity = entity::prelude::Coach::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Coach::from_entity))
    }

    /// Gets all coaches ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Coach>, DbErr> {
        let entities = entity::prelude::Coach::find()
            .order_by_asc(entity::coach::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Coach::from_entity).collect())
    }

    /// Gets the coaches with the given IDs ordered by ID, skipping unknown IDs
    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<Coach>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Coach::find()
            .filter(entity::coach::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::coach::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Coach::from_entity).collect())
    }

    /// Replaces all scalar fields of an existing coach
    pub async fn update(&self, params: UpdateCoachParams) -> Result<Coach, DbErr> {
        let coach = entity::prelude::Coach::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Coach with id {} not found",
                params.id
            )))?;

        let fields = params.fields;
        let mut active_model: entity::coach::ActiveModel = coach.into();
        active_model.name = ActiveValue::Set(fields.name);
        active_model.surname = ActiveValue::Set(fields.surname);
        active_model.coaching_from = ActiveValue::Set(fields.coaching_from);
        active_model.license_id = ActiveValue::Set(fields.license_id);
        active_model.personal_code = ActiveValue::Set(fields.personal_code);

        let entity = active_model.update(self.db).await?;

        Ok(Coach::from_entity(entity))
    }

    /// Deletes a coach
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Coach::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }

    /// Checks if a coach exists
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Coach::find()
            .filter(entity::coach::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
