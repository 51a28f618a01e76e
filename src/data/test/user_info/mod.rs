use chrono::{TimeZone, Utc};

use crate::data::{user_info::UserInfoRepository, DataStore, USER_INFO_FILE};
use test_utils::{
    builder::TestBuilder,
    error::TestError,
    factory::user_info::{user_info_file, UserInfoFactory},
};

mod load;
mod save;
