use super::*;

/// Tests loading a missing record file.
///
/// Expected: Ok with a zero record
#[test]
fn defaults_to_zero() -> Result<(), TestError> {
    let test = TestBuilder::new().build()?;
    let store = DataStore::new(test.dir());

    let record = OnlineRecordRepository::new(&store).load().unwrap();

    assert_eq!(record.value(), 0);
    Ok(())
}

/// Tests loading a bare integer with a trailing newline.
///
/// Expected: Ok with the parsed value
#[test]
fn parses_bare_integer() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_file(ONLINE_RECORD_FILE, "17\n")
        .build()?;
    let store = DataStore::new(test.dir());

    let record = OnlineRecordRepository::new(&store).load().unwrap();

    assert_eq!(record, OnlineRecord::new(17));
    Ok(())
}

/// Tests loading garbage.
///
/// Expected: Err with InvalidRecord carrying the offending value
#[test]
fn rejects_non_integer() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_file(ONLINE_RECORD_FILE, "many")
        .build()?;
    let store = DataStore::new(test.dir());

    let result = OnlineRecordRepository::new(&store).load();

    match result {
        Err(StorageError::InvalidRecord { value, .. }) => assert_eq!(value, "many"),
        other => panic!("unexpected result: {other:?}"),
    }
    Ok(())
}
