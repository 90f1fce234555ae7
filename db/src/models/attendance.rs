use sea_orm::entity::prelude::*;
use sea_orm::Statement;
use sea_orm::sea_query::Expr;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Presence of one student in one lesson.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "attendance")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub lesson_id: i64,
    #[sea_orm(primary_key, auto_increment = false)]
    pub student_id: String,
    #[sea_orm(primary_key, auto_increment = false)]
    pub class_id: i64,
    pub is_present: bool,
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
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "(Column::StudentId, Column::ClassId)",
        to = "(super::student::Column::StudentId, super::student::Column::ClassId)",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Student,
}

impl Related<super::lesson::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lesson.def()
    }
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// One line of a lesson's register as shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosterEntry {
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    pub is_present: bool,
}

impl Model {
    /// Inserts an absent row for every student of `class_id` that has none for
    /// `lesson_id` yet. Returns the number of rows inserted.
    ///
    /// Running it again without membership changes inserts nothing.
    pub async fn seed_missing<C>(db: &C, lesson_id: i64, class_id: i64) -> Result<u64, DbErr>
    where
        C: ConnectionTrait,
    {
        let stmt = Statement::from_sql_and_values(
            db.get_database_backend(),
            r#"
            INSERT INTO attendance (lesson_id, student_id, class_id, is_present)
            SELECT ?, s.student_id, s.class_id, 0
            FROM students s
            WHERE s.class_id = ?
              AND NOT EXISTS (
                  SELECT 1 FROM attendance a
                  WHERE a.lesson_id = ?
                    AND a.student_id = s.student_id
                    AND a.class_id = s.class_id
              )
            "#,
            [lesson_id.into(), class_id.into(), lesson_id.into()],
        );

        let res = db.execute(stmt).await?;
        Ok(res.rows_affected())
    }

    /// Sets the presence flag of an existing row.
    /// Returns `false` when the student has no row for that lesson.
    pub async fn set_presence<C>(
        db: &C,
        lesson_id: i64,
        class_id: i64,
        student_id: &str,
        present: bool,
    ) -> Result<bool, DbErr>
    where
        C: ConnectionTrait,
    {
        let res = Entity::update_many()
            .col_expr(Column::IsPresent, Expr::value(present))
            .filter(Column::LessonId.eq(lesson_id))
            .filter(Column::ClassId.eq(class_id))
            .filter(Column::StudentId.eq(student_id))
            .exec(db)
            .await?;
        Ok(res.rows_affected > 0)
    }

    pub async fn find_one<C>(
        db: &C,
        lesson_id: i64,
        class_id: i64,
        student_id: &str,
    ) -> Result<Option<Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find_by_id((lesson_id, student_id.to_owned(), class_id))
            .one(db)
            .await
    }

    pub async fn find_for_lesson<C>(db: &C, lesson_id: i64) -> Result<Vec<Model>, DbErr>
    where
        C: ConnectionTrait,
    {
        Entity::find()
            .filter(Column::LessonId.eq(lesson_id))
            .all(db)
            .await
    }

    /// The lesson's register: every current student of the class, with students
    /// that have no row yet reported as absent.
    pub async fn roster<C>(db: &C, lesson_id: i64, class_id: i64) -> Result<Vec<RosterEntry>, DbErr>
    where
        C: ConnectionTrait,
    {
        let students = super::student::Model::list_for_class(db, class_id).await?;
        let presence: HashMap<String, bool> = Self::find_for_lesson(db, lesson_id)
            .await?
            .into_iter()
            .filter(|a| a.class_id == class_id)
            .map(|a| (a.student_id, a.is_present))
            .collect();

        Ok(students
            .into_iter()
            .map(|s| RosterEntry {
                is_present: presence.get(&s.student_id).copied().unwrap_or(false),
                student_id: s.student_id,
                first_name: s.first_name,
                last_name: s.last_name,
            })
            .collect())
    }
}
