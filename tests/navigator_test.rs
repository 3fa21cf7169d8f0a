mod common;

use anyhow::Result;
use coffer::domain::{Navigator, NavigatorError};
use common::album;

#[test]
fn test_album_walkthrough() {
    let mut nav = album();
    assert_eq!(nav.owner_name(), "KAT-TUN");
    assert_eq!(nav.collection_name(), "cast");
    assert_eq!(nav.current(), "moonlight");

    assert_eq!(nav.advance(), "one way love");
    assert_eq!(nav.retreat(), "moonlight");
}

#[test]
fn test_full_cycle_returns_to_start() {
    let mut nav = album();
    let len = nav.len();

    let forward: Vec<String> = (0..len).map(|_| nav.advance().to_string()).collect();
    assert_eq!(forward.last().map(String::as_str), Some("moonlight"));
    assert_eq!(nav.index(), 0);

    for _ in 0..len {
        nav.retreat();
    }
    assert_eq!(nav.current(), "moonlight");
}

#[test]
fn test_retreat_from_start_lands_on_last() {
    let mut nav = album();
    assert_eq!(nav.retreat(), "new genesis");
    assert_eq!(nav.index(), nav.len() - 1);
    assert_eq!(nav.advance(), "moonlight");
}

#[test]
fn test_three_item_wraparound() -> Result<()> {
    let mut nav = Navigator::new("me", "abc", ["A", "B", "C"])?;
    assert_eq!(nav.advance(), "B");
    assert_eq!(nav.advance(), "C");
    assert_eq!(nav.advance(), "A");
    assert_eq!(nav.retreat(), "C");
    Ok(())
}

#[test]
fn test_single_item() -> Result<()> {
    let mut nav = Navigator::new("me", "single", vec!["A".to_string()])?;
    for _ in 0..3 {
        assert_eq!(nav.advance(), "A");
        assert_eq!(nav.retreat(), "A");
    }
    Ok(())
}

#[test]
fn test_repeated_tracks_keep_their_position() -> Result<()> {
    let mut nav = Navigator::new("me", "encore", ["intro", "hit", "hit", "outro"])?;
    nav.advance();
    nav.advance();
    assert_eq!((nav.index(), nav.current()), (2, "hit"));
    assert_eq!(nav.retreat(), "hit");
    assert_eq!(nav.index(), 1);
    assert_eq!(nav.advance(), "hit");
    assert_eq!(nav.advance(), "outro");
    Ok(())
}

#[test]
fn test_empty_sequence_is_rejected() {
    let err = Navigator::new("me", "blank", std::iter::empty::<&str>()).unwrap_err();
    assert!(matches!(err, NavigatorError::EmptySequence { ref collection } if collection == "blank"));
    assert_eq!(err.to_string(), "Cannot navigate an empty sequence: blank");
}
