use crate::{ConfigurationError, DelimiterTable, MathDelimiter};

#[test]
fn empty_configuration_yields_defaults() {
    let table = DelimiterTable::build(&[]).unwrap();
    assert_eq!(table.len(), 4);
    let pairs: Vec<(&str, &str, bool)> = table
        .iter()
        .map(|d| (d.left.as_str(), d.right.as_str(), d.display))
        .collect();
    // Longest left first; ties keep configured order.
    assert_eq!(
        pairs,
        vec![
            ("\\(", "\\)", false),
            ("$$", "$$", true),
            ("\\[", "\\]", true),
            ("$", "$", false),
        ]
    );
}

#[test]
fn longest_left_sorts_first() {
    let table = DelimiterTable::build(&[
        MathDelimiter::new("$", "$", false),
        MathDelimiter::new("<<<", ">>>", true),
        MathDelimiter::new("<<", ">>", false),
    ])
    .unwrap();
    let lefts: Vec<&str> = table.iter().map(|d| d.left.as_str()).collect();
    assert_eq!(lefts, vec!["<<<", "<<", "$"]);
}

#[test]
fn candidates_keep_table_order() {
    let table = DelimiterTable::build(&[]).unwrap();
    let dollar_lefts: Vec<&str> = table
        .candidates_at(b'$')
        .map(|d| d.left.as_str())
        .collect();
    assert_eq!(dollar_lefts, vec!["$$", "$"]);
    assert!(table.could_open(b'\\'));
    assert!(!table.could_open(b'x'));
}

#[test]
fn empty_marker_is_rejected() {
    let err = DelimiterTable::build(&[MathDelimiter::new("", "$", false)]).unwrap_err();
    assert_eq!(err, ConfigurationError::EmptyMarker);
    let err = DelimiterTable::build(&[MathDelimiter::new("$", "", false)]).unwrap_err();
    assert_eq!(err, ConfigurationError::EmptyMarker);
}

#[test]
fn duplicate_pair_is_rejected() {
    let err = DelimiterTable::build(&[
        MathDelimiter::new("$", "$", false),
        MathDelimiter::new("$", "$", true),
    ])
    .unwrap_err();
    assert_eq!(
        err,
        ConfigurationError::DuplicateDelimiter {
            left: "$".to_string(),
            right: "$".to_string(),
        }
    );
}

// Same left with different rights is a legitimate configuration.
#[test]
fn same_left_different_right_is_allowed() {
    let table = DelimiterTable::build(&[
        MathDelimiter::new("$", "$", false),
        MathDelimiter::new("$", "€", false),
    ]);
    assert!(table.is_ok());
}
