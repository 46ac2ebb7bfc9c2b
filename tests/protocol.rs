use netbot::board::Color;
use netbot::config::EngineConfig;
use netbot::protocol::TextEngine;

fn run(script: &str) -> String {
    let mut engine = TextEngine::new(Color::Black, EngineConfig::with_depth(1));
    let mut out = Vec::new();
    engine.run(script.as_bytes(), &mut out).expect("in-memory io");
    String::from_utf8(out).expect("utf8 output")
}

#[test]
fn session_transcript() {
    let out = run("new white 1\nforce add 0 3\nopponent add 0 4\nnetwork black\nboard\nquit\n");
    let expected = "\
ok
ok
illegal
network none
#......#
........
........
W.......
........
........
........
#......#
";
    pretty_assertions::assert_eq!(out, expected);
}

#[test]
fn go_replies_with_a_move() {
    let out = run("go\n");
    let line = out.lines().next().expect("one reply");
    assert!(line.starts_with("move add "), "unexpected reply {line}");
}

#[test]
fn network_lists_cell_ids() {
    let script = "force add 6 0\nforce add 6 5\nforce add 5 5\nforce add 3 3\nforce add 3 5\nforce add 5 7\nnetwork black\n";
    let out = run(script);
    pretty_assertions::assert_eq!(out.lines().last(), Some("network 60 65 55 33 35 57"));
}

#[test]
fn bad_input_gets_error_lines() {
    let out = run("depth x\nnew green\nforce hop 1 2\n\nwhatever\n");
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines.iter().all(|l| l.starts_with("error ")), "{lines:?}");
}
