use crate::data::{avatar::AvatarRepository, DataStore, AVATARS_FILE};
use test_utils::{builder::TestBuilder, error::TestError, factory};

mod load;
mod save;
