use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::OnConflict;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

/// The single live check-in secret of a lesson.
///
/// Keyed by `lesson_id`, so writing a new token replaces the old one and
/// no history is kept.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "lesson_tokens")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub lesson_id: i64,
    pub token: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::lesson::Entity",
        from = "Column::LessonId",
        to = "super::lesson::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Lesson,
}

impl Related<super::lesson::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lesson.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Inserts or replaces the lesson's token in a single statement.
    pub async fn upsert<C>(
        db: &C,
        lesson_id: i64,
        token: &str,
        now: DateTime<Utc>,
    ) -> Result<Model, DbErr>
    where
        C: ConnectionTrait,
    {
        let am = ActiveModel {
            lesson_id: Set(lesson_id),
            token: Set(token.to_owned()),
            created_at: Set(now),
        };

        Entity::insert(am)
            .on_conflict(
                OnConflict::column(Column::LessonId)
                    .update_columns([Column::Token, Column::CreatedAt])
                    .to_owned(),
            )
            .exec_without_returning(db)
            .await?;

        Ok(Model {
            lesson_id,
            token: token.to_owned(),
            created_at: now,
        })
    }

    pub async fn find_for_lesson<C>(db: &C, lesson_id: i64) -> Result<Option<Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find_by_id(lesson_id).one(db).await
    }

    /// Returns `false` when the lesson had no token.
    pub async fn delete_for_lesson(db: &DbConn, lesson_id: i64) -> Result<bool, DbErr> {
        let res = Entity::delete_by_id(lesson_id).exec(db).await?;
        Ok(res.rows_affected > 0)
    }
}
