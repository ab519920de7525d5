mod equipment_status;
mod order_status;
mod status_name;
mod user;
