use chrono::Utc;
use migration::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

pub struct TeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamRepository<'a, C> {
    /// Creates a new instance of [`TeamRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a team for a user with `is_ready` unset.
    ///
    /// The unique index on `user_id` makes this fail with a database error if
    /// the user already has a team, which is what guards squad assembly
    /// against duplicate job deliveries racing each other.
    pub async fn create(
        &self,
        user_id: i32,
        name: &str,
        budget: f64,
    ) -> Result<entity::team::Model, DbErr> {
        entity::team::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            name: ActiveValue::Set(name.to_string()),
            budget: ActiveValue::Set(budget),
            is_ready: ActiveValue::Set(false),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }

    /// Fetches a team by ID
    pub async fn get_by_id(&self, team_id: i32) -> Result<Option<entity::team::Model>, DbErr> {
        entity::prelude::Team::find_by_id(team_id).one(self.db).await
    }

    /// Fetches a user's team
    pub async fn get_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::team::Model>, DbErr> {
        entity::prelude::Team::find()
            .filter(entity::team::Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    /// Fetches a user's team together with its full roster.
    pub async fn get_with_players(
        &self,
        user_id: i32,
    ) -> Result<Option<(entity::team::Model, Vec<entity::player::Model>)>, DbErr> {
        let mut teams = entity::prelude::Team::find()
            .find_with_related(entity::prelude::Player)
            .filter(entity::team::Column::UserId.eq(user_id))
            .all(self.db)
            .await?;

        // user_id is unique, so the grouped result holds at most one entry
        Ok(teams.pop())
    }

    /// Renames a team
    pub async fn rename(&self, team_id: i32, name: &str) -> Result<entity::team::Model, DbErr> {
        entity::team::ActiveModel {
            id: ActiveValue::Unchanged(team_id),
            name: ActiveValue::Set(name.to_string()),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .update(self.db)
        .await
    }

    /// Flips the team to ready.
    ///
    /// Squad assembly calls this as its final write so a ready team is never
    /// observable without its full roster.
    pub async fn set_ready(&self, team_id: i32) -> Result<(), DbErr> {
        entity::prelude::Team::update_many()
            .col_expr(entity::team::Column::IsReady, Expr::value(true))
            .col_expr(
                entity::team::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::team::Column::Id.eq(team_id))
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Adds `delta` to the team's budget in-place; pass a negative delta to
    /// debit.
    pub async fn adjust_budget(&self, team_id: i32, delta: f64) -> Result<(), DbErr> {
        entity::prelude::Team::update_many()
            .col_expr(
                entity::team::Column::Budget,
                Expr::col(entity::team::Column::Budget).add(delta),
            )
            .col_expr(
                entity::team::Column::UpdatedAt,
                Expr::value(Utc::now().naive_utc()),
            )
            .filter(entity::team::Column::Id.eq(team_id))
            .exec(self.db)
            .await?;

        Ok(())
    }
}
