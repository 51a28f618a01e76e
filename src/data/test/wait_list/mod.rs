use std::collections::BTreeSet;

use serde_json::json;

use crate::data::{
    wait_list::{WaitListEntries, WaitListRepository},
    DataStore, WAIT_LIST_FILE,
};
use test_utils::{builder::TestBuilder, error::TestError};

mod load;
mod save;
