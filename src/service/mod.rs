//! Bot logic independent of the Discord gateway.
//!
//! Services operate on the in-memory bot state and persist through the `data`
//! repositories. Command handlers and the scheduler call into these and only deal with
//! rendering and delivery themselves.

pub mod avatar;
pub mod format;
pub mod listing;
pub mod poll;
pub mod presenter;
pub mod roster;
pub mod status;
pub mod user_info;
pub mod wait_list;
pub mod will_list;
