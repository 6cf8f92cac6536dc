use chatlog::core::Message;
use chatlog::transcript::{ClassifiedLine, classify_line, classify_lines};

#[test]
fn test_directive_is_stripped_of_prefix_and_whitespace() {
    assert_eq!(
        classify_line("P:  hello "),
        ClassifiedLine::Directive("hello".to_string())
    );
}

#[test]
fn test_empty_directive_is_kept() {
    assert_eq!(classify_line("P:"), ClassifiedLine::Directive(String::new()));
    assert_eq!(classify_line("  P:   "), ClassifiedLine::Directive(String::new()));
}

#[test]
fn test_numbered_question() {
    assert_eq!(
        classify_line("Q1: What is X?"),
        ClassifiedLine::Message(Message::new("Q1", "What is X?"))
    );
}

#[test]
fn test_unnumbered_answer() {
    assert_eq!(
        classify_line("A: it is Y"),
        ClassifiedLine::Message(Message::new("A", "it is Y"))
    );
}

#[test]
fn test_colon_is_optional() {
    assert_eq!(
        classify_line("A12 no colon here"),
        ClassifiedLine::Message(Message::new("A12", "no colon here"))
    );
}

#[test]
fn test_comment_blank_and_free_text_are_discarded() {
    for line in ["# just a comment", "", "   ", "hello there", "P no colon", "B1: nope"] {
        assert_eq!(
            classify_line(line),
            ClassifiedLine::Discarded,
            "line should be discarded: {line:?}"
        );
    }
}

#[test]
fn test_regex_decides_words_starting_with_q() {
    // "Quiet please" passes the Q prefix check and the regex reads it as type "Q".
    assert_eq!(
        classify_line("Quiet please"),
        ClassifiedLine::Message(Message::new("Q", "uiet please"))
    );
}

#[test]
fn test_multiline_entry_is_discarded() {
    assert_eq!(classify_line("Q: first\nsecond"), ClassifiedLine::Discarded);
}

#[test]
fn test_every_message_type_matches_pattern() {
    let lines = [
        "Q: a", "Q7: b", "A: c", "A42 d", "Answer: e", "Qx", "P: f", "random", "A",
    ];
    let parsed = classify_lines(lines);
    for m in &parsed.messages {
        let mut chars = m.kind.chars();
        let role = chars.next().unwrap();
        assert!(role == 'Q' || role == 'A', "bad role in {:?}", m.kind);
        assert!(chars.all(|c| c.is_ascii_digit()), "bad suffix in {:?}", m.kind);
    }
}

#[test]
fn test_outputs_keep_source_order_without_duplicates() {
    let lines = vec![
        "Q1: first question",
        "P: first directive",
        "# comment",
        "A1: first answer",
        "P: second directive",
        "Q2: second question",
        "A2: second answer",
        "P: third directive",
    ];

    let parsed = classify_lines(&lines);

    assert_eq!(
        parsed.directives,
        vec!["first directive", "second directive", "third directive"]
    );
    assert_eq!(
        parsed.messages,
        vec![
            Message::new("Q1", "first question"),
            Message::new("A1", "first answer"),
            Message::new("Q2", "second question"),
            Message::new("A2", "second answer"),
        ]
    );
    assert_eq!(parsed.directives.len() + parsed.messages.len(), 7);
}

#[test]
fn test_repeated_lines_stay_repeated() {
    let parsed = classify_lines(["Q: same", "Q: same", "P: x", "P: x"]);
    assert_eq!(parsed.messages.len(), 2);
    assert_eq!(parsed.directives, vec!["x", "x"]);
}

#[test]
fn test_end_to_end_split() {
    let parsed = classify_lines(["P: one", "P: two", "Q: hi", "A1: hello"]);
    assert_eq!(parsed.directives, vec!["one", "two"]);
    assert_eq!(
        parsed.messages,
        vec![Message::new("Q", "hi"), Message::new("A1", "hello")]
    );
}

#[test]
fn test_empty_input() {
    let parsed = classify_lines(Vec::<String>::new());
    assert!(parsed.is_empty());
}
