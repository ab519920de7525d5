pub use sea_orm_migration::prelude::*;

pub mod seed;

mod m20250301_000001_create_user_table;
mod m20250301_000002_create_equipment_table;
mod m20250301_000003_create_order_table;
mod m20250301_000004_create_order_equipment_table;
mod m20250301_000005_create_status_name_tables;
mod m20250301_000006_create_order_status_table;
mod m20250301_000007_create_equipment_status_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_user_table::Migration),
            Box::new(m20250301_000002_create_equipment_table::Migration),
            Box::new(m20250301_000003_create_order_table::Migration),
            Box::new(m20250301_000004_create_order_equipment_table::Migration),
            Box::new(m20250301_000005_create_status_name_tables::Migration),
            Box::new(m20250301_000006_create_order_status_table::Migration),
            Box::new(m20250301_000007_create_equipment_status_table::Migration),
        ]
    }
}
