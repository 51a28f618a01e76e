use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WaitListError {
    /// The observer already watches the maximum number of characters.
    ///
    /// The wait list is left untouched when this is returned.
    #[error("Wait list limit of {limit} characters reached")]
    CapacityReached { limit: usize },
}
