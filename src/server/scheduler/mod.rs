pub mod overdue_orders;
