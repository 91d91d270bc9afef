use battleship_client::FeedbackLog;

#[test]
fn test_newest_line_first() {
    let mut log = FeedbackLog::new(100);
    log.push("first");
    log.push("second");
    log.push("third");
    let lines: Vec<&str> = log.lines().collect();
    assert_eq!(lines, ["third", "second", "first"]);
    assert_eq!(log.latest(), Some("third"));
}

#[test]
fn test_total_length_never_exceeds_cap() {
    let cap = 60;
    let mut log = FeedbackLog::new(cap);
    for i in 0..50 {
        log.push(format!("narration line number {i}"));
        assert!(log.render().chars().count() <= cap, "cap exceeded after line {i}");
    }
    // Old lines were evicted, the newest survives.
    assert_eq!(log.latest(), Some("narration line number 49"));
}

#[test]
fn test_oversized_single_line_is_truncated() {
    let mut log = FeedbackLog::new(10);
    log.push("a".repeat(50));
    assert_eq!(log.len(), 1);
    assert_eq!(log.latest(), Some("aaaaaaaaaa"));
}

#[test]
fn test_default_is_empty() {
    let log = FeedbackLog::default();
    assert!(log.is_empty());
    assert_eq!(log.latest(), None);
    assert_eq!(log.render(), "");
}
