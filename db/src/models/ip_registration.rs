use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{PaginatorTrait, Set};
use serde::{Deserialize, Serialize};

/// Marks a network origin as used for one lesson's check-in.
///
/// `(lesson_id, ip_address)` carries a unique index; rows are never updated.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ip_registrations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub lesson_id: i64,
    pub ip_address: String,
    pub registered_at: DateTime<Utc>,
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
    pub async fn exists<C>(db: &C, lesson_id: i64, ip_address: &str) -> Result<bool, DbErr>
    where
        C: ConnectionTrait,
    {
        let n = Entity::find()
            .filter(Column::LessonId.eq(lesson_id))
            .filter(Column::IpAddress.eq(ip_address))
            .count(db)
            .await?;
        Ok(n > 0)
    }

    /// Inserts the registration. A second insert for the same pair fails with a
    /// unique constraint violation.
    pub async fn record<C>(
        db: &C,
        lesson_id: i64,
        ip_address: &str,
        now: DateTime<Utc>,
    ) -> Result<Model, DbErr>
    where
        C: ConnectionTrait,
    {
        ActiveModel {
            lesson_id: Set(lesson_id),
            ip_address: Set(ip_address.to_owned()),
            registered_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    pub async fn count_for_lesson<C>(db: &C, lesson_id: i64) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find()
            .filter(Column::LessonId.eq(lesson_id))
            .count(db)
            .await
    }
}
