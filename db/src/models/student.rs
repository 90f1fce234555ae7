use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, Set};
use serde::{Deserialize, Serialize};

/// A student enrolled in one class.
///
/// `student_id` is the registration number typed by the instructor; it is only
/// unique within a class, so the key is `(student_id, class_id)`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub class_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::class::Entity",
        from = "Column::ClassId",
        to = "super::class::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Class,
}

impl Related<super::class::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        class_id: i64,
        student_id: &str,
        first_name: &str,
        last_name: &str,
    ) -> Result<Model, DbErr> {
        ActiveModel {
            student_id: Set(student_id.to_owned()),
            first_name: Set(first_name.to_owned()),
            last_name: Set(last_name.to_owned()),
            class_id: Set(class_id),
        }
        .insert(db)
        .await
    }

    pub async fn find(
        db: &DbConn,
        class_id: i64,
        student_id: &str,
    ) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id((student_id.to_owned(), class_id))
            .one(db)
            .await
    }

    pub async fn list_for_class<C>(db: &C, class_id: i64) -> Result<Vec<Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find()
            .filter(Column::ClassId.eq(class_id))
            .order_by_asc(Column::LastName)
            .order_by_asc(Column::FirstName)
            .order_by_asc(Column::StudentId)
            .all(db)
            .await
    }

    /// Removes one student from one class. Their attendance rows go with them.
    pub async fn delete_by_id(db: &DbConn, class_id: i64, student_id: &str) -> Result<bool, DbErr> {
        let res = Entity::delete_many()
            .filter(Column::StudentId.eq(student_id))
            .filter(Column::ClassId.eq(class_id))
            .exec(db)
            .await?;
        Ok(res.rows_affected > 0)
    }
}
