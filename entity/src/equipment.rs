use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "equipment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::equipment_status::Entity")]
    EquipmentStatus,
    #[sea_orm(has_many = "super::order_equipment::Entity")]
    OrderEquipment,
}

impl Related<super::equipment_status::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EquipmentStatus.def()
    }
}

impl Related<super::order_equipment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderEquipment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
