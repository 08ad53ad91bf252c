pub mod footer;
pub mod header;
pub mod modals;
pub mod page_view;
