use super::*;

/// Tests that a saved book is written in the persisted shape and loads back unchanged.
///
/// Expected: Ok with `lastSeenAt` written as epoch milliseconds
#[test]
fn writes_and_reloads() -> Result<(), TestError> {
    let seen = Utc.with_ymd_and_hms(2024, 3, 10, 18, 30, 0).unwrap();
    let test = TestBuilder::new().build()?;
    let store = DataStore::new(test.dir());
    let repo = UserInfoRepository::new(&store);

    let mut book = repo.load().unwrap();
    book.touch_seen(&vec!["Alice".to_string()], seen);
    repo.save(&book).unwrap();

    assert_eq!(
        test.read_json(USER_INFO_FILE)?,
        user_info_file(
            false,
            vec![("Alice", UserInfoFactory::new().last_seen_at(seen).build())]
        )
    );
    assert_eq!(repo.load().unwrap(), book);
    Ok(())
}
