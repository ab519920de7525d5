pub use super::equipment::Entity as Equipment;
pub use super::equipment_status::Entity as EquipmentStatus;
pub use super::equipment_status_name::Entity as EquipmentStatusName;
pub use super::order::Entity as Order;
pub use super::order_equipment::Entity as OrderEquipment;
pub use super::order_status::Entity as OrderStatus;
pub use super::order_status_name::Entity as OrderStatusName;
pub use super::user::Entity as User;
