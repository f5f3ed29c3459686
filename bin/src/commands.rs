pub mod jump;
