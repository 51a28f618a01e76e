//! Paginated list presentation.
//!
//! This module holds the Discord-independent half of the presenter: splitting list lines
//! into pages and the navigation state machine driven by reactions. The Discord session
//! that renders pages and listens for reactions lives in `bot::presenter`.

pub mod navigator;
pub mod page;

pub use navigator::{Control, Navigator, Transition};
pub use page::{paginate, Page, PageSet};

/// Items per page for the online and avatar lists.
pub const DEFAULT_PAGE_SIZE: usize = 15;

/// Items per page for the will list, whose entries can span two lines.
pub const WILL_LIST_PAGE_SIZE: usize = 10;
