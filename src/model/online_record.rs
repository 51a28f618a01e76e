/// Highest simultaneous online count ever observed.
///
/// The value only ever grows; [`OnlineRecord::observe`] reports whether it did so the
/// caller knows when to persist it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OnlineRecord(u64);

impl OnlineRecord {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// Raises the record to `count` if it is higher.
    ///
    /// # Returns
    /// - `true` - The record was raised and should be saved
    /// - `false` - The record already covers `count`
    pub fn observe(&mut self, count: usize) -> bool {
        let count = count as u64;
        if count > self.0 {
            self.0 = count;
            true
        } else {
            false
        }
    }
}
