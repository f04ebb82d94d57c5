pub mod actions;
pub mod buffer;
pub mod config;
pub mod error;
pub mod notification;
pub mod session;
pub mod shades;
pub mod shortcuts;
