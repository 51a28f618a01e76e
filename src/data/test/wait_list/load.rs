use super::*;

/// Tests loading the observer → names map.
///
/// Expected: Ok with numeric observer ids and empty observers dropped
#[test]
fn loads_observers_and_skips_empty_ones() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_json(
            WAIT_LIST_FILE,
            json!({
                "111": { "Alice": {}, "Bob": {} },
                "222": {}
            }),
        )
        .build()?;
    let store = DataStore::new(test.dir());

    let entries = WaitListRepository::new(&store).load().unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(
        entries.get(&111),
        Some(&BTreeSet::from(["Alice".to_string(), "Bob".to_string()]))
    );
    Ok(())
}
