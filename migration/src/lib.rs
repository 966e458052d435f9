pub use sea_orm_migration::prelude::*;

mod m20221016_000001_create_users_table;
mod m20221016_000002_create_tags_table;
mod m20221016_000003_create_notes_table;
mod m20221016_000004_create_notes_tags_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20221016_000001_create_users_table::Migration),
            Box::new(m20221016_000002_create_tags_table::Migration),
            Box::new(m20221016_000003_create_notes_table::Migration),
            Box::new(m20221016_000004_create_notes_tags_table::Migration),
        ]
    }
}
