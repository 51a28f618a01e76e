use super::*;

/// Tests that the record is written as a bare integer.
///
/// Expected: Ok with the file containing only the digits
#[test]
fn writes_bare_integer() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let store = DataStore::new(test.dir());

    OnlineRecordRepository::new(&store)
        .save(OnlineRecord::new(23))
        .unwrap();

    assert_eq!(test.read_file(ONLINE_RECORD_FILE)?, "23");
    Ok(())
}
