use sea_orm::entity::prelude::*;
use sea_orm::{FromQueryResult, JoinType, QueryOrder, QuerySelect, Set};
use serde::{Deserialize, Serialize};

/// A class is the root aggregate: students and lessons hang off it and
/// are removed with it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "classes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::student::Entity")]
    Students,
    #[sea_orm(has_many = "super::lesson::Entity")]
    Lessons,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Students.def()
    }
}

impl Related<super::lesson::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lessons.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Class row joined with the number of enrolled students.
#[derive(Debug, Clone, PartialEq, FromQueryResult, Serialize)]
pub struct ClassSummary {
    pub id: i64,
    pub name: String,
    pub student_count: i64,
}

impl Model {
    pub async fn create(db: &DbConn, name: &str) -> Result<Model, DbErr> {
        ActiveModel {
            name: Set(name.to_owned()),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    pub async fn find<C>(db: &C, id: i64) -> Result<Option<Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find_by_id(id).one(db).await
    }

    /// All classes with their student counts, oldest first.
    pub async fn list_with_student_counts(db: &DbConn) -> Result<Vec<ClassSummary>, DbErr> {
        Entity::find()
            .select_only()
            .column(Column::Id)
            .column(Column::Name)
            .column_as(super::student::Column::StudentId.count(), "student_count")
            .join(JoinType::LeftJoin, Relation::Students.def())
            .group_by(Column::Id)
            .group_by(Column::Name)
            .order_by_asc(Column::Id)
            .into_model::<ClassSummary>()
            .all(db)
            .await
    }

    /// Deletes the class and, through the foreign keys, everything it owns.
    /// Returns `false` when no class had that id.
    pub async fn delete_by_id(db: &DbConn, id: i64) -> Result<bool, DbErr> {
        let res = Entity::delete_by_id(id).exec(db).await?;
        Ok(res.rows_affected > 0)
    }
}
