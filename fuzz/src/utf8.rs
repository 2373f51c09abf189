#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (Vec<String>, &[u8])| {
    let (patterns, haystack) = data;
    let aut = trawl::Automaton::from_strs(&patterns).unwrap();
    match std::str::from_utf8(haystack) {
        Ok(text) => {
            let chars: Vec<char> = text.chars().collect();
            for m in aut.find_in_utf8(haystack).unwrap() {
                assert_eq!(&chars[m.range()], m.as_slice());
            }
        }
        Err(_) => {
            assert!(aut.find_in_utf8(haystack).is_err());
        }
    }
});
