use crate::{
    data::{online_record::OnlineRecordRepository, DataStore, ONLINE_RECORD_FILE},
    error::storage::StorageError,
    model::online_record::OnlineRecord,
};
use test_utils::{builder::TestBuilder, error::TestError};

mod load;
mod save;
