pub mod action;
pub mod chord;
pub mod command;
pub mod config;
pub mod controller;
pub mod dispatcher;
pub mod features;
pub mod highlight;
pub mod input;
pub mod r#loop;
pub mod modal;
pub mod page;
pub mod reducer;
pub mod state;
pub mod symbols;
pub mod task;
pub mod timeago;
pub mod ui;
