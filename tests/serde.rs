#![cfg(feature = "serde")]

use trawl::Automaton;

#[test]
fn serde_match_bytes() {
    let aut = Automaton::new(["ab", "b"]).unwrap();
    let matches = aut.find_all(b"ab");
    let json = serde_json::to_value(&matches).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            { "pattern": 0, "symbols": [97, 98], "start": 0 },
            { "pattern": 1, "symbols": [98], "start": 1 },
        ])
    );
}

#[test]
fn serde_match_chars() {
    let aut = Automaton::from_strs(["ñ"]).unwrap();
    let m = aut.find_in_str("añ").next().unwrap();
    assert_eq!(
        serde_json::to_string(&m).unwrap(),
        r#"{"pattern":0,"symbols":["ñ"],"start":1}"#
    );
}
