use proptest::prelude::*;

use trawl::{Automaton, Builder, Transitions};

/// Finds all matches by checking every pattern at every end offset.
fn naive(patterns: &[Vec<u8>], haystack: &[u8]) -> Vec<(usize, usize, usize)> {
    let mut matches = Vec::new();
    for end in 0..=haystack.len() {
        for len in (0..=end).rev() {
            let start = end - len;
            let first = patterns
                .iter()
                .position(|p| p.as_slice() == &haystack[start..end]);
            if let Some(id) = first {
                matches.push((id, start, end));
            }
        }
    }
    matches
}

fn find(
    transitions: Transitions,
    patterns: &[Vec<u8>],
    haystack: &[u8],
) -> Vec<(usize, usize, usize)> {
    let aut = Builder::new()
        .transitions(transitions)
        .build(patterns)
        .unwrap();
    aut.find_iter(haystack)
        .map(|m| (m.pattern().as_usize(), m.start(), m.end()))
        .collect()
}

fn symbols(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(b'a'..=b'c', 0..max_len)
}

fn pattern_sets() -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(symbols(6), 0..8)
}

proptest! {
    #[test]
    fn matches_are_slices_of_the_haystack(patterns in pattern_sets(), haystack in symbols(64)) {
        let aut = Automaton::new(&patterns).unwrap();
        for m in aut.find_iter(&haystack) {
            prop_assert_eq!(&haystack[m.start()..m.end()], m.as_slice());
            prop_assert_eq!(Some(m.as_slice()), aut.pattern(m.pattern()));
        }
    }

    #[test]
    fn matches_agree_with_naive_search(patterns in pattern_sets(), haystack in symbols(64)) {
        let exp = naive(&patterns, &haystack);
        prop_assert_eq!(find(Transitions::Dense, &patterns, &haystack), exp.clone());
        prop_assert_eq!(find(Transitions::Sparse, &patterns, &haystack), exp);
    }

    #[test]
    fn matches_are_ordered(patterns in pattern_sets(), haystack in symbols(64)) {
        let aut = Automaton::new(&patterns).unwrap();
        let matches: Vec<_> = aut.find_iter(&haystack).collect();
        for w in matches.windows(2) {
            let (a, b) = (&w[0], &w[1]);
            prop_assert!(a.end() < b.end() || (a.end() == b.end() && a.len() > b.len()));
        }
    }

    #[test]
    fn suffix_links_name_longest_suffix(patterns in pattern_sets(), probe in symbols(8)) {
        let aut = Automaton::new(&patterns).unwrap();

        // Walk the trie along the probe for as long as it is a prefix of
        // some pattern.
        let is_prefix = |s: &[u8]| patterns.iter().any(|p| p.starts_with(s));
        let len = (0..=probe.len()).rev().find(|&n| is_prefix(&probe[..n])).unwrap_or(0);
        let prefix = &probe[..len];
        let state = prefix.iter().fold(aut.start_state(), |s, &b| aut.next_state(s, b));

        if !prefix.is_empty() {
            let link = aut.suffix_link(state);
            let suffix = (1..=prefix.len())
                .map(|k| &prefix[k..])
                .find(|&s| is_prefix(s))
                .unwrap_or(&[]);
            let exp = suffix.iter().fold(aut.start_state(), |s, &b| aut.next_state(s, b));
            prop_assert_eq!(link, exp);
        } else {
            prop_assert_eq!(aut.suffix_link(state), aut.start_state());
        }
    }

    #[test]
    fn scans_do_not_interfere(patterns in pattern_sets(), a in symbols(32), b in symbols(32)) {
        let aut = Automaton::new(&patterns).unwrap();
        let collect = |h: &[u8]| -> Vec<_> {
            aut.find_iter(h).map(|m| (m.pattern(), m.start())).collect()
        };
        let first = collect(&a[..]);
        let _ = collect(&b[..]);
        prop_assert_eq!(first, collect(&a[..]));
    }

    #[test]
    fn empty_pattern_saturates(haystack in symbols(64)) {
        let aut = Automaton::new([b""]).unwrap();
        let starts: Vec<_> = aut.find_iter(&haystack).map(|m| m.start()).collect();
        prop_assert_eq!(starts, (0..=haystack.len()).collect::<Vec<_>>());
    }

    #[test]
    fn utf8_offsets_count_chars(patterns in prop::collection::vec("[aöß]{0,3}", 0..5), haystack in "[aöß]{0,24}") {
        let aut = Automaton::from_strs(&patterns).unwrap();
        let chars: Vec<char> = haystack.chars().collect();
        for m in aut.find_in_str(&haystack) {
            prop_assert_eq!(&chars[m.range()], m.as_slice());
        }
    }
}
