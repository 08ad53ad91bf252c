pub mod handler;
pub mod jump;
pub mod navigation;
