use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::player::{CreatePlayerParams, Player, UpdatePlayerParams};

/// Player table access.
///
/// Generic over the connection so the same queries run against the pool or
/// inside a transaction.
pub struct PlayerRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PlayerRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new player
    pub async fn create(&self, params: CreatePlayerParams) -> Result<Player, DbErr> {
        let fields = params.fields;

        let entity = entity::player::ActiveModel {
            name: ActiveValue::Set(fields.name),
            surname: ActiveValue::Set(fields.surname),
            date_of_birth: ActiveValue::Set(fields.date_of_birth),
            personal_code: ActiveValue::Set(fields.personal_code),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Player::from_entity(entity))
    }

    /// Gets a player by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Player>, DbErr> {
        let entity = entity::prelude::Player::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Player::from_entity))
    }

    /// Gets all players ordered by ID
    pub async fn get_all(&self) -> Result<Vec<Player>, DbErr> {
        let entities = entity::prelude::Player::find()
            .order_by_asc(entity::player::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Player::from_entity).collect())
    }

    /// Gets the players with the given IDs ordered by ID.
    ///
    /// IDs with no matching row are skipped.
    pub async fn get_by_ids(&self, ids: &[i32]) -> Result<Vec<Player>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Player::find()
            .filter(entity::player::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::player::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Player::from_entity).collect())
    }

    /// Replaces all scalar fields of an existing player
    pub async fn update(&self, params: UpdatePlayerParams) -> Result<Player, DbErr> {
        let player = entity::prelude::Player::find_by_id(params.id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Player with id {} not found",
                params.id
            )))?;

        let fields = params.fields;
        let mut active_model: entity::player::ActiveModel = player.into();
        active_model.name = ActiveValue::Set(fields.name);
        active_model.surname = ActiveValue::Set(fields.surname);
        active_model.date_of_birth = ActiveValue::Set(fields.date_of_birth);
        active_model.personal_code = ActiveValue::Set(fields.personal_code);

        let entity = active_model.update(self.db).await?;

        Ok(Player::from_entity(entity))
    }

    /// Deletes a player
    ///
    /// Fails with a foreign key violation while any team still lists the player.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::Player::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Checks if a player exists
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Player::find()
            .filter(entity::player::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
