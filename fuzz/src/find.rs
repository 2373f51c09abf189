#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use trawl::{Builder, Transitions};

#[derive(Debug, Arbitrary)]
struct Input {
    patterns: Vec<Vec<u8>>,
    haystack: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let Input { patterns, haystack } = input;
    let dense = Builder::new().build(&patterns).unwrap();
    let sparse = Builder::new()
        .transitions(Transitions::Sparse)
        .build(&patterns)
        .unwrap();

    let mut last = (0, usize::MAX);
    let mut it = sparse.find_iter(&haystack);
    for m in dense.find_iter(&haystack) {
        assert_eq!(&haystack[m.range()], m.as_slice());
        assert!(last.0 < m.end() || (last.0 == m.end() && last.1 > m.len()));
        last = (m.end(), m.len());
        assert_eq!(Some(m), it.next());
    }
    assert_eq!(it.next(), None);
});
