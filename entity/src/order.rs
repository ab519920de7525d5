use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Renting user.
    pub user_id: i32,
    pub description: Option<String>,
    pub rent_start: DateTimeUtc,
    pub rent_end: DateTimeUtc,
    /// Bumped on every appended status event, used as a compare-and-swap token.
    pub status_version: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(has_many = "super::order_status::Entity")]
    OrderStatus,
    #[sea_orm(has_many = "super::order_equipment::Entity")]
    OrderEquipment,
    #[sea_orm(has_many = "super::equipment_status::Entity")]
    EquipmentStatus,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::order_status::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderStatus.def()
    }
}

impl Related<super::order_equipment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::OrderEquipment.def()
    }
}

impl Related<super::equipment_status::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::EquipmentStatus.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
