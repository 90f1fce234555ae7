use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202510180001_create_classes::Migration),
            Box::new(migrations::m202510180002_create_students::Migration),
            Box::new(migrations::m202510180003_create_lessons::Migration),
            Box::new(migrations::m202510180004_create_attendance::Migration),
            Box::new(migrations::m202510180005_create_lesson_tokens::Migration),
            Box::new(migrations::m202510180006_create_ip_registrations::Migration),
        ]
    }
}
