//! Scenario tests for debounced delivery of editor changes.

use std::time::Duration;

use orquesta_editor::{EditorSession, EditorSettings};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

/// Drive a session with `(text, at_ms)` keystrokes, ticking every 10 ms
/// until `end_ms`. Returns every committed text in order.
fn replay(session: &mut EditorSession, keystrokes: &[(&str, u64)], end_ms: u64) -> Vec<String> {
    let mut commits = Vec::new();
    let mut next = keystrokes.iter().peekable();
    let mut now = 0;
    while now <= end_ms {
        while let Some((text, at)) = next.peek() {
            if *at > now {
                break;
            }
            session.keystroke(*text, ms(*at));
            next.next();
        }
        if let Some(text) = session.tick(ms(now)) {
            commits.push(text.to_string());
        }
        now += 10;
    }
    commits
}

#[test]
fn test_single_keystroke_then_wait() {
    let mut session = EditorSession::default();
    let commits = replay(&mut session, &[("a", 0)], 1000);
    assert_eq!(commits, vec!["a"]);
    assert_eq!(session.document().source(), "a");
    assert_eq!(session.preview_source(), "a");
}

#[test]
fn test_rapid_keystrokes_coalesce() {
    let mut session = EditorSession::default();
    let commits = replay(&mut session, &[("a", 0), ("ab", 100), ("abc", 200)], 1200);
    assert_eq!(commits, vec!["abc"]);
    assert_eq!(session.document().revision(), 1);
    assert_eq!(session.preview_source(), "abc");
}

#[test]
fn test_gaps_longer_than_quiet_period_commit_each_prefix() {
    let mut session = EditorSession::default();
    let keystrokes = [("n", 0), ("na", 800), ("nam", 1600), ("name", 2400)];
    let commits = replay(&mut session, &keystrokes, 4000);
    assert_eq!(commits, vec!["n", "na", "nam", "name"]);
}

#[test]
fn test_intermediate_text_never_observable() {
    let mut session = EditorSession::default();
    let keystrokes = [("v", 0), ("ve", 300), ("ver", 600), ("vers", 900)];
    let mut seen = Vec::new();
    let mut ks = keystrokes.iter();
    let mut now = 0;
    let mut pending = ks.next();
    while now <= 3000 {
        if let Some((text, at)) = pending
            && *at == now
        {
            session.keystroke(*text, ms(*at));
            pending = ks.next();
        }
        session.tick(ms(now));
        seen.push(session.preview_source().to_string());
        now += 50;
    }
    assert!(seen.iter().all(|s| s.is_empty() || s == "vers"));
    assert_eq!(session.preview_source(), "vers");
    assert_eq!(session.document().revision(), 1);
}

#[test]
fn test_no_interaction_previews_empty() {
    let mut session = EditorSession::default();
    let commits = replay(&mut session, &[], 5000);
    assert!(commits.is_empty());
    assert_eq!(session.preview_source(), "");
    assert!(session.placeholder_visible());
}

#[test]
fn test_clearing_editor_commits_empty_text() {
    let mut session = EditorSession::default();
    let commits = replay(&mut session, &[("x", 0), ("", 1000)], 2000);
    assert_eq!(commits, vec!["x", ""]);
    assert!(session.placeholder_visible());
}

#[test]
fn test_custom_quiet_period() {
    let settings = EditorSettings {
        debounce: ms(200),
        ..EditorSettings::default()
    };
    let mut session = EditorSession::new(settings);
    session.keystroke("a", ms(0));
    assert_eq!(session.tick(ms(199)), None);
    assert_eq!(session.tick(ms(200)), Some("a"));
}
