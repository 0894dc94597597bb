use svmlight::{ParsedLine, Record, SyntaxError, parse_line};

#[test]
fn comment_only_line_yields_no_record() {
    assert_eq!(parse_line("# just a note"), Ok(ParsedLine::Comment));
    assert_eq!(parse_line("#"), Ok(ParsedLine::Comment));
}

#[test]
fn empty_line_is_rejected() {
    assert_eq!(parse_line(""), Err(SyntaxError::EmptyLine));
    assert_eq!(SyntaxError::EmptyLine.to_string(), "empty line");
}

#[test]
fn whitespace_only_line_is_a_label_error() {
    assert_eq!(parse_line("   "), Err(SyntaxError::BadLabel));
}

#[test]
fn plain_record_with_features() {
    let parsed = parse_line("-1 1:2.5 4:-0.5").unwrap();
    assert_eq!(
        parsed,
        ParsedLine::Record(Record {
            label: -1.0,
            qid: None,
            features: vec![(1, 2.5), (4, -0.5)],
            comment: None,
        })
    );
}

#[test]
fn qid_annotation_is_carried_not_treated_as_feature() {
    let parsed = parse_line("1.0 qid:3 5:0.2 7:1.5").unwrap();
    assert_eq!(
        parsed,
        ParsedLine::Record(Record {
            label: 1.0,
            qid: Some(3),
            features: vec![(5, 0.2), (7, 1.5)],
            comment: None,
        })
    );
}

#[test]
fn qid_alone_gives_a_zero_feature_record() {
    let parsed = parse_line("2 qid:41").unwrap();
    assert_eq!(
        parsed,
        ParsedLine::Record(Record {
            label: 2.0,
            qid: Some(41),
            features: vec![],
            comment: None,
        })
    );
}

#[test]
fn qid_is_only_recognized_as_second_token() {
    // In third position it must parse as a feature pair, and cannot.
    let err = parse_line("1 2:3 qid:4").unwrap_err();
    assert_eq!(
        err,
        SyntaxError::ExpectedColon {
            found: "qid:4".to_string()
        }
    );
}

#[test]
fn inline_comment_drops_hash_and_one_space() {
    let parsed = parse_line("1.0 5:0.2 # good").unwrap();
    let ParsedLine::Record(record) = parsed else {
        panic!("expected a record");
    };
    assert_eq!(record.comment.as_deref(), Some("good"));

    // Only one space is stripped.
    let parsed = parse_line("1.0 5:0.2 #  indented").unwrap();
    let ParsedLine::Record(record) = parsed else {
        panic!("expected a record");
    };
    assert_eq!(record.comment.as_deref(), Some(" indented"));
}

#[test]
fn empty_comment_is_absent() {
    for line in ["1.0 5:0.2 #", "1.0 5:0.2 # "] {
        let ParsedLine::Record(record) = parse_line(line).unwrap() else {
            panic!("expected a record");
        };
        assert_eq!(record.comment, None, "line: {line:?}");
    }
}

#[test]
fn bare_label_is_rejected_with_the_historical_message() {
    let err = parse_line("1.0").unwrap_err();
    assert_eq!(err, SyntaxError::MissingQid);
    assert_eq!(err.to_string(), "missing qid label");
}

#[test]
fn non_numeric_label_is_rejected() {
    let err = parse_line("abc 1:2").unwrap_err();
    assert_eq!(err, SyntaxError::BadLabel);
    assert_eq!(err.to_string(), "non-numeric or missing label");
}

#[test]
fn wrong_separator_names_the_separator() {
    let err = parse_line("1.0 5-0.2").unwrap_err();
    assert_eq!(
        err,
        SyntaxError::ExpectedColon {
            found: "-".to_string()
        }
    );
    assert_eq!(err.to_string(), "expected ':', got '-'");
}

#[test]
fn unparseable_token_names_the_whole_token() {
    let err = parse_line("1.0 5:x").unwrap_err();
    assert_eq!(
        err,
        SyntaxError::ExpectedColon {
            found: "5:x".to_string()
        }
    );

    let err = parse_line("1.0 :2").unwrap_err();
    assert_eq!(
        err,
        SyntaxError::ExpectedColon {
            found: ":2".to_string()
        }
    );

    // Malformed qid falls through to feature parsing.
    let err = parse_line("1.0 qid:x").unwrap_err();
    assert_eq!(
        err,
        SyntaxError::ExpectedColon {
            found: "qid:x".to_string()
        }
    );
}

#[test]
fn indices_are_kept_in_file_order_with_duplicates() {
    let ParsedLine::Record(record) = parse_line("1 7:1 3:2 7:3").unwrap() else {
        panic!("expected a record");
    };
    assert_eq!(record.features, vec![(7, 1.0), (3, 2.0), (7, 3.0)]);
}

#[test]
fn label_accepts_common_float_forms() {
    for (line, expected) in [
        ("+2 1:1", 2.0),
        ("1e2 1:1", 100.0),
        (".5 1:1", 0.5),
        ("-0 1:1", -0.0),
    ] {
        let ParsedLine::Record(record) = parse_line(line).unwrap() else {
            panic!("expected a record for {line:?}");
        };
        assert_eq!(record.label, expected, "line: {line:?}");
    }
}

#[test]
fn values_accept_exponent_and_sign_forms() {
    let ParsedLine::Record(record) = parse_line("1 2:1e-3 4:+2.5 6:-1E2").unwrap() else {
        panic!("expected a record");
    };
    assert_eq!(record.features, vec![(2, 1e-3), (4, 2.5), (6, -100.0)]);
}

#[test]
fn tabs_separate_tokens_like_spaces() {
    let ParsedLine::Record(record) = parse_line("1\t2:3\t4:5").unwrap() else {
        panic!("expected a record");
    };
    assert_eq!(record.features, vec![(2, 3.0), (4, 5.0)]);
}
