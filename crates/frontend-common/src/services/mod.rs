//! API services

pub mod session;
pub mod supply_list;

pub use supply_list::{fetch_supply_list, SupplyItem, SupplyList};
