use stoppoint_core::{Point, StateId};

use super::tree_sitter::ShiftRecord;
use super::{
    ERROR_STATE, INITIAL_STATE, ParseEngine, ParseSession, RecoveryLog, RecoveryStrategy,
    ResolutionMode, TreeSitterEngine,
};

fn search(source: &str, stop: Point, mode: ResolutionMode) -> (StateId, RecoveryLog) {
    let lang = stoppoint_langs::json();
    let mut session = TreeSitterEngine.new_session(&lang).unwrap();
    session.set_stop_point(stop);
    session.set_resolution_mode(mode);
    let tree = session.parse(source.as_bytes()).unwrap();
    assert!(tree.is_some());
    session.find_closest_recoverable_state(stop)
}

fn resolve(source: &str, stop: Point) -> (StateId, RecoveryLog) {
    search(source, stop, ResolutionMode::Resolve)
}

/// Whether the JSON automaton shifts `kind` in `state`.
fn shifts(state: StateId, kind: &str, named: bool) -> bool {
    let lang = stoppoint_langs::json();
    let language = lang.language();
    let symbol = language.id_for_node_kind(kind, named);
    assert_ne!(symbol, 0, "unknown JSON token {kind:?}");
    language.next_state(state.get(), symbol) != 0
}

fn record(lines: &[&str]) -> ShiftRecord {
    let mut record = ShiftRecord::default();
    for line in lines {
        record.observe(line);
    }
    record
}

#[test]
fn empty_source_is_initial_state() {
    let (state, log) = resolve("", Point::new(1, 1));
    assert_eq!(state, INITIAL_STATE);
    assert_eq!(log.strategy, RecoveryStrategy::Initial);
}

#[test]
fn complete_document_resolves_exactly() {
    let (state, log) = resolve(r#"{"a": 1}"#, Point::new(1, 9));
    assert_ne!(state, ERROR_STATE);
    assert_eq!(log, RecoveryLog::new(RecoveryStrategy::Exact, 0));
}

#[test]
fn incomplete_document_still_resolves() {
    let (state, log) = resolve(r#"{"a": "#, Point::new(1, 7));
    assert_ne!(state, ERROR_STATE);
    assert_ne!(log.strategy, RecoveryStrategy::Sentinel);
}

#[test]
fn malformed_document_still_resolves() {
    let (state, log) = resolve("[1, 2 @@", Point::new(1, 9));
    assert_ne!(state, ERROR_STATE);
    assert_ne!(log.strategy, RecoveryStrategy::Initial);
}

#[test]
fn search_is_deterministic() {
    let source = "[1, {\"b\": tru";
    let stop = Point::new(1, 14);
    assert_eq!(resolve(source, stop), resolve(source, stop));
}

#[test]
fn discover_mode_matches_resolve_mode() {
    let source = "[true, ";
    let stop = Point::new(1, 8);
    assert_eq!(
        search(source, stop, ResolutionMode::Discover),
        search(source, stop, ResolutionMode::Resolve)
    );
}

#[test]
fn after_array_comma_expects_a_value() {
    let (state, log) = resolve("[true, ", Point::new(1, 8));
    assert_eq!(log, RecoveryLog::new(RecoveryStrategy::Exact, 0));
    assert!(shifts(state, "true", true));
    assert!(shifts(state, "{", false));
    assert!(!shifts(state, "]", false));
    assert!(!shifts(state, ",", false));

    // the element kind is reduced away before the comma is shifted
    assert_eq!(resolve("[1, ", Point::new(1, 5)).0, state);
}

#[test]
fn after_value_expects_separator() {
    let (after_value, log) = resolve("[true", Point::new(1, 6));
    assert_eq!(log.strategy, RecoveryStrategy::Exact);
    assert!(!shifts(after_value, "true", true));

    let (after_comma, _) = resolve("[true, ", Point::new(1, 8));
    assert_ne!(after_value, after_comma);
}

#[test]
fn after_object_colon_expects_a_value() {
    let (state, log) = resolve(r#"{"a": "#, Point::new(1, 7));
    assert_eq!(log, RecoveryLog::new(RecoveryStrategy::Exact, 0));
    assert!(shifts(state, "true", true));
    assert!(shifts(state, "[", false));
    assert!(!shifts(state, "}", false));
    assert!(!shifts(state, ":", false));
}

#[test]
fn tokens_on_later_lines_move_the_state() {
    let source = "[1,\n2]";
    let on_first_row = resolve(&source[..3], Point::new(1, 4));
    let on_second_row = resolve(source, Point::new(2, 3));
    assert_ne!(on_first_row.0, on_second_row.0);
    assert!(shifts(on_first_row.0, "number", true));
}

#[test]
fn skipped_tokens_are_counted() {
    let (state, log) = resolve("[1 @ @", Point::new(1, 7));
    assert_eq!(log.strategy, RecoveryStrategy::Backtrack);
    assert!(log.skipped > 0);
    assert_eq!(state, resolve("[1", Point::new(1, 3)).0);
}

#[test]
fn shift_record_keeps_last_shift() {
    let record = record(&["shift state:5", "reduce sym:pair, child_count:3", "shift state:12"]);
    assert_eq!(record.last, Some(StateId::new(12)));
    assert_eq!(record.skipped, 0);
}

#[test]
fn shift_record_counts_skips_since_last_shift() {
    let record = record(&[
        "skip_token symbol:ERROR",
        "shift state:7",
        "detect_error lookahead:@",
        "skip_token symbol:@",
        "skip_token symbol:@",
    ]);
    assert_eq!(record.last, Some(StateId::new(7)));
    assert_eq!(record.skipped, 2);
}

#[test]
fn shift_record_ignores_extras_and_error_states() {
    let record = record(&["shift_extra", "shift state:0", "shift state:65535", "shift state:x"]);
    assert_eq!(record.last, None);
}

#[test]
fn no_parse_means_sentinel() {
    let lang = stoppoint_langs::json();
    let mut session = TreeSitterEngine.new_session(&lang).unwrap();
    let (state, log) = session.find_closest_recoverable_state(Point::new(1, 1));
    assert_eq!(state, ERROR_STATE);
    assert_eq!(log.strategy, RecoveryStrategy::Sentinel);
}

#[test]
fn recovery_log_display() {
    insta::assert_snapshot!(RecoveryLog::new(RecoveryStrategy::Exact, 0), @"exact");
    insta::assert_snapshot!(
        RecoveryLog::new(RecoveryStrategy::Backtrack, 2),
        @"backtrack (skipped 2)"
    );
    insta::assert_snapshot!(RecoveryLog::new(RecoveryStrategy::Initial, 0), @"initial");
    insta::assert_snapshot!(
        RecoveryLog::new(RecoveryStrategy::Sentinel, 5),
        @"sentinel (skipped 5)"
    );
}
