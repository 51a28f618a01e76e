use chrono::Utc;
use serde_json::json;

use crate::data::{
    will_list::{WillListEntries, WillListRepository},
    DataStore, WILL_LIST_FILE,
};
use test_utils::{builder::TestBuilder, error::TestError};

mod load;
mod save;
