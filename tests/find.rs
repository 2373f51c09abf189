use std::thread;

use trawl::{Automaton, Builder, Transitions};

const ALL_BYTES: &[u8] = &{
    let mut bytes = [0; 256];
    let mut i = 0;
    while i < 256 {
        bytes[i] = i as u8;
        i += 1;
    }
    bytes
};

const TEXT: &str = "\
There were four of us - George, and William Samuel Harris, and myself, and
Montmorency. We were sitting in my room, smoking, and talking about how bad we
were - bad from a medical point of view I mean, of course. We were all feeling
seedy, and we were getting quite nervous about it. Harris said he felt such
extraordinary fits of giddiness come over him at times, that he hardly knew
what he was doing; and then George said that HE had fits of giddiness too, and
hardly knew what HE was doing. With me, it was my liver that was out of order.
I knew it was my liver that was out of order, because I had just been reading
a patent liver-pill circular, in which were detailed the various symptoms by
which a man could tell when his liver was out of order. I had them all. So we
decided to take a boat up the Thames, three men in a boat, to do us good.";

fn find(patterns: &[&str], haystack: &str) -> Vec<(String, usize)> {
    let aut = Automaton::new(patterns).unwrap();
    aut.find_iter(haystack.as_bytes())
        .map(|m| (String::from_utf8(m.as_slice().to_vec()).unwrap(), m.start()))
        .collect()
}

fn pairs(matches: impl IntoIterator<Item = (String, usize)>) -> Vec<(String, usize)> {
    matches.into_iter().collect()
}

fn owned(matches: &[(&str, usize)]) -> Vec<(String, usize)> {
    pairs(matches.iter().map(|&(p, i)| (p.to_owned(), i)))
}

#[test]
fn find_empty_pattern_set() {
    let aut = Automaton::<u8>::new(Vec::<Vec<u8>>::new()).unwrap();
    assert_eq!(aut.find_iter(b"abcdefghijklmnopqrstuvwxyz").count(), 0);
    assert_eq!(aut.find_iter(b"0123456789").count(), 0);
    assert_eq!(aut.find_iter(&ALL_BYTES[1..]).count(), 0);
    assert_eq!(aut.find_iter(&vec![b'a'; 1_000_000]).count(), 0);
    assert_eq!(aut.find_iter(b"").count(), 0);
}

#[test]
fn find_empty_pattern_saturates() {
    assert_eq!(find(&[""], ""), owned(&[("", 0)]));

    let haystack = "a".repeat(10);
    let exp = pairs((0..=10).map(|i| (String::new(), i)));
    assert_eq!(find(&[""], &haystack), exp);
}

#[test]
fn find_nested() {
    let patterns: Vec<_> = (1..=10).map(|i| "a".repeat(i)).collect();
    let patterns: Vec<_> = patterns.iter().map(String::as_str).collect();
    let haystack = "a".repeat(10);

    let mut exp = Vec::new();
    for end in 1..=10 {
        for len in (1..=end).rev() {
            exp.push(("a".repeat(len), end - len));
        }
    }
    assert_eq!(find(&patterns, &haystack), exp);
}

#[test]
fn find_nested_small() {
    assert_eq!(
        find(&["a", "aa", "aaa"], "aaa"),
        owned(&[("a", 0), ("aa", 0), ("a", 1), ("aaa", 0), ("aa", 1), ("a", 2)])
    );
}

#[test]
fn find_same_suffix() {
    let patterns: Vec<_> = (1..=10).map(|i| format!("b{}", "a".repeat(i))).collect();
    let patterns: Vec<_> = patterns.iter().map(String::as_str).collect();
    let haystack = format!("b{}", "a".repeat(10));

    let exp = pairs(patterns.iter().map(|p| (p.to_string(), 0)));
    assert_eq!(find(&patterns, &haystack), exp);
}

#[test]
fn find_same_prefix_longest_first() {
    let patterns: Vec<_> = (1..=10).map(|i| format!("{}b", "a".repeat(i))).collect();
    let patterns: Vec<_> = patterns.iter().map(String::as_str).collect();
    let haystack = format!("{}b", "a".repeat(10));

    let exp = pairs(
        patterns
            .iter()
            .rev()
            .enumerate()
            .map(|(i, p)| (p.to_string(), i)),
    );
    assert_eq!(find(&patterns, &haystack), exp);
}

#[test]
fn find_duplicates_reported_once() {
    assert_eq!(
        find(&["ab", "ab", "b"], "abab"),
        owned(&[("ab", 0), ("b", 1), ("ab", 2), ("b", 3)])
    );
}

#[test]
fn find_words() {
    let haystack = TEXT.to_lowercase();
    let patterns = ["three", "men", "in", "a", "boat"];
    let aut = Automaton::new(patterns).unwrap();

    let mut count = 0;
    for m in aut.find_iter(haystack.as_bytes()) {
        let pattern = m.as_slice();
        assert!(patterns.iter().any(|p| p.as_bytes() == pattern));
        assert_eq!(&haystack.as_bytes()[m.range()], pattern);
        count += 1;
    }
    let naive: usize = patterns
        .iter()
        .map(|p| {
            (0..=haystack.len() - p.len())
                .filter(|&i| haystack[i..].starts_with(p))
                .count()
        })
        .sum();
    assert_eq!(count, naive);
}

#[test]
fn find_is_repeatable() {
    let aut = Automaton::new(["he", "she", "his", "hers"]).unwrap();
    let collect = |haystack: &str| -> Vec<_> {
        aut.find_iter(haystack.as_bytes())
            .map(|m| (m.pattern(), m.start(), m.end()))
            .collect()
    };

    let first = collect("ushers and his sheep");
    assert_eq!(first, collect("ushers and his sheep"));

    let other = collect("hishershe");
    assert_ne!(other, first);
    assert_eq!(first, collect("ushers and his sheep"));
}

#[test]
fn find_strategies_agree() {
    let patterns = ["announce", "annual", "ann", "nnu", "un", "ce", "e"];
    let haystack = "annually we announce an annual announcement";
    let find = |transitions| -> Vec<_> {
        let aut = Builder::new()
            .transitions(transitions)
            .build(patterns)
            .unwrap();
        aut.find_iter(haystack.as_bytes())
            .map(|m| (m.pattern(), m.start()))
            .collect::<Vec<_>>()
    };
    let dense = find(Transitions::Dense);
    assert!(!dense.is_empty());
    assert_eq!(dense, find(Transitions::Sparse));
}

#[test]
fn find_concurrently() {
    let aut = Automaton::new(["in", "a", "boat", "three men"]).unwrap();
    let haystack = TEXT.to_lowercase();
    let exp = aut.find_all(haystack.as_bytes()).len();

    thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| aut.find_iter(haystack.as_bytes()).count()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), exp);
        }
    });
}

#[test]
fn find_char_offsets() {
    let aut = Automaton::from_strs(["ö", "bö", "öb"]).unwrap();
    let matches: Vec<_> = aut
        .find_in_str("böb")
        .map(|m| (m.text(), m.start()))
        .collect();
    assert_eq!(
        matches,
        [
            (String::from("bö"), 0),
            (String::from("ö"), 1),
            (String::from("öb"), 1),
        ]
    );
}
