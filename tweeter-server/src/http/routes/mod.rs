//! Route handlers organized by resource

pub mod health;
pub mod tweets;
pub mod users;
