//! A multi-pattern searcher based on the [Aho-Corasick algorithm][wikipedia].
//!
//! The automaton reports *every* occurrence of every pattern, including
//! overlapping and nested occurrences. Matches are yielded in ascending order
//! of end offset and matches sharing an end offset are yielded longest first.
//!
//! [wikipedia]: https://en.wikipedia.org/wiki/Aho%E2%80%93Corasick_algorithm

mod alphabet;
mod build;
mod state;

use std::iter::Copied;
use std::slice;
use std::str::Chars;

use crate::find::{FindIter, Match, MatchesAt};
use crate::{utf8, Builder, Result, Symbol, Transitions};

use self::alphabet::Alphabet;
pub(crate) use self::build::Compiler;
use self::state::State;
pub use self::state::StateID;

/// A compiled Aho-Corasick automaton.
///
/// An automaton is immutable once built. It can be used for any number of
/// independent scans, including concurrently from multiple threads.
///
/// The symbol type `S` is the alphabet of the automaton. It defaults to `u8`,
/// in which case patterns and texts are byte strings and all offsets are byte
/// offsets. Use `char` to search by Unicode scalar values instead.
///
/// # Examples
///
/// ```
/// let aut = trawl::Automaton::new(["he", "she", "hers"])?;
///
/// let matches: Vec<_> = aut
///     .find_iter(b"ushers")
///     .map(|m| (m.as_slice(), m.start()))
///     .collect();
///
/// assert_eq!(
///     matches,
///     [(&b"she"[..], 1), (&b"he"[..], 2), (&b"hers"[..], 2)]
/// );
/// # Ok::<(), trawl::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Automaton<S = u8> {
    states: Vec<State<S>>,
    patterns: Vec<Box<[S]>>,
    dense: Option<Dense<S>>,
}

/// A materialized transition table with one row per state and one column per
/// symbol class.
#[derive(Debug, Clone)]
struct Dense<S> {
    alphabet: Alphabet<S>,
    table: Vec<StateID>,
}

/// The identifier of a pattern, which is its index in the collection of
/// patterns the automaton was built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PatternID(pub(crate) usize);

impl PatternID {
    /// Returns this identifier as an index into the pattern collection.
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0
    }
}

impl<S: Symbol> Automaton<S> {
    /// Builds an automaton for the given patterns using the default
    /// configuration.
    ///
    /// Any collection of patterns is accepted, including an empty one or one
    /// containing the empty pattern. Duplicate patterns are reported once,
    /// under the identifier of their first occurrence.
    ///
    /// See [`Builder`] for configuring how the automaton is built.
    ///
    /// # Errors
    ///
    /// Only if the automaton would need more states than can be addressed.
    pub fn new<I, P>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[S]>,
    {
        Builder::new().build(patterns)
    }

    /// Returns an iterator over all matches in the haystack.
    ///
    /// The iterator yields matches in ascending order of end offset. Matches
    /// with the same end offset are yielded longest first.
    ///
    /// # Examples
    ///
    /// ```
    /// let aut = trawl::Automaton::new(["a", "aa"])?;
    ///
    /// let matches: Vec<_> = aut
    ///     .find_iter(b"aaa")
    ///     .map(|m| (m.pattern().as_usize(), m.start(), m.end()))
    ///     .collect();
    ///
    /// assert_eq!(
    ///     matches,
    ///     [(0, 0, 1), (1, 0, 2), (0, 1, 2), (1, 1, 3), (0, 2, 3)]
    /// );
    /// # Ok::<(), trawl::Error>(())
    /// ```
    #[inline]
    pub fn find_iter<'a, 'h>(
        &'a self,
        haystack: &'h [S],
    ) -> FindIter<'a, S, Copied<slice::Iter<'h, S>>> {
        FindIter::new(self, haystack.iter().copied())
    }

    /// Returns an iterator over all matches in a sequence of symbols.
    ///
    /// This is useful when the haystack is not available as a contiguous
    /// slice, for example when decoding it on the fly.
    #[inline]
    pub fn find_iter_symbols<I>(&self, symbols: I) -> FindIter<'_, S, I::IntoIter>
    where
        I: IntoIterator<Item = S>,
    {
        FindIter::new(self, symbols.into_iter())
    }

    /// Returns all matches in the haystack.
    ///
    /// This is equivalent to collecting [`.find_iter()`][Self::find_iter].
    pub fn find_all(&self, haystack: &[S]) -> Vec<Match<'_, S>> {
        self.find_iter(haystack).collect()
    }

    /// Returns the matches ending at the given state, longest first.
    ///
    /// This walks the output chain of `state`, so it yields a match for the
    /// state itself if a pattern ends there followed by a match for every
    /// state on its suffix chain at which a pattern ends. Each match is
    /// reported as ending at `end`.
    ///
    /// # Panics
    ///
    /// If `state` is not a state of this automaton or if `end` is smaller
    /// than the length of the longest match.
    #[inline]
    pub fn matches_at(&self, state: StateID, end: usize) -> MatchesAt<'_, S> {
        MatchesAt::new(self, self.state(state).first_output(state), end)
    }

    /// Returns the state the automaton starts every scan in.
    #[inline]
    pub fn start_state(&self) -> StateID {
        StateID::ROOT
    }

    /// Returns the state reached from `id` on the given symbol.
    ///
    /// This function is total: a symbol that does not extend any pattern
    /// leads back to the root.
    ///
    /// # Panics
    ///
    /// If `id` is not a state of this automaton.
    #[inline]
    pub fn next_state(&self, id: StateID, symbol: S) -> StateID {
        match &self.dense {
            Some(dense) => match dense.alphabet.class(&symbol) {
                Some(class) => dense.table[id.as_usize() * dense.alphabet.len() + class],
                None => StateID::ROOT,
            },
            None => self.next_state_sparse(id, &symbol),
        }
    }

    /// Follows suffix links until a state with an explicit edge for the
    /// symbol is found.
    fn next_state_sparse(&self, mut id: StateID, symbol: &S) -> StateID {
        loop {
            let state = self.state(id);
            if let Some(next) = state.next_state(symbol) {
                return next;
            }
            if id == StateID::ROOT {
                return StateID::ROOT;
            }
            id = state.fail;
        }
    }

    /// Returns the suffix link of the given state.
    ///
    /// The suffix link names the state representing the longest proper
    /// suffix of the state's string that is also a prefix of some pattern.
    /// The root links to itself.
    ///
    /// # Panics
    ///
    /// If `id` is not a state of this automaton.
    #[inline]
    pub fn suffix_link(&self, id: StateID) -> StateID {
        self.state(id).fail
    }

    /// Returns the pattern with the given identifier.
    #[inline]
    pub fn pattern(&self, id: PatternID) -> Option<&[S]> {
        self.patterns.get(id.0).map(|p| &**p)
    }

    /// Returns the number of patterns the automaton was built from,
    /// duplicates included.
    #[inline]
    pub fn patterns_len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns the number of states in the automaton.
    #[inline]
    pub fn states_len(&self) -> usize {
        self.states.len()
    }

    /// Returns the transition strategy the automaton was built with.
    #[inline]
    pub fn transitions(&self) -> Transitions {
        match self.dense {
            Some(_) => Transitions::Dense,
            None => Transitions::Sparse,
        }
    }

    /// Returns the approximate heap memory used by the automaton in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        let states = self.states.len() * size_of::<State<S>>()
            + self
                .states
                .iter()
                .map(|s| s.trans.len() * size_of::<(S, StateID)>())
                .sum::<usize>();
        let patterns = self.patterns.len() * size_of::<Box<[S]>>()
            + self
                .patterns
                .iter()
                .map(|p| p.len() * size_of::<S>())
                .sum::<usize>();
        let dense = self.dense.as_ref().map_or(0, |d| {
            d.alphabet.memory_usage() + d.table.len() * size_of::<StateID>()
        });
        states + patterns + dense
    }

    /// Returns the match for a terminal state along with the next state on
    /// its output chain.
    pub(crate) fn get_match(
        &self,
        id: StateID,
        end: usize,
    ) -> Option<(Match<'_, S>, Option<StateID>)> {
        let state = self.state(id);
        let pattern = state.pattern?;
        let start = match end.checked_sub(state.depth) {
            Some(start) => start,
            None => panic!("match of length {} cannot end at {end}", state.depth),
        };
        let m = Match::new(pattern, &self.patterns[pattern.0], start);
        Some((m, state.output))
    }

    fn state(&self, id: StateID) -> &State<S> {
        &self.states[id.as_usize()]
    }
}

impl Automaton<char> {
    /// Builds a `char` automaton from string patterns using the default
    /// configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// let aut = trawl::Automaton::from_strs(["süß", "ß"])?;
    ///
    /// let matches: Vec<_> = aut
    ///     .find_in_str("grüße, süß")
    ///     .map(|m| (m.text(), m.start()))
    ///     .collect();
    ///
    /// assert_eq!(
    ///     matches,
    ///     [
    ///         (String::from("ß"), 3),
    ///         (String::from("süß"), 7),
    ///         (String::from("ß"), 9),
    ///     ]
    /// );
    /// # Ok::<(), trawl::Error>(())
    /// ```
    pub fn from_strs<I, P>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        Builder::new().build_strs(patterns)
    }

    /// Builds a `char` automaton from patterns that must be valid UTF-8,
    /// using the default configuration.
    ///
    /// # Errors
    ///
    /// If any pattern is not valid UTF-8. No automaton is built in this case.
    pub fn from_utf8<I, P>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        Builder::new().build_utf8(patterns)
    }

    /// Returns an iterator over all matches in a string.
    ///
    /// Offsets in the yielded matches count `char`s, not bytes.
    #[inline]
    pub fn find_in_str<'a, 'h>(&'a self, haystack: &'h str) -> FindIter<'a, char, Chars<'h>> {
        FindIter::new(self, haystack.chars())
    }

    /// Returns an iterator over all matches in a haystack that must be valid
    /// UTF-8.
    ///
    /// # Errors
    ///
    /// If the haystack is not valid UTF-8. The automaton is unaffected and
    /// can be used for subsequent scans.
    pub fn find_in_utf8<'a, 'h>(
        &'a self,
        haystack: &'h [u8],
    ) -> Result<FindIter<'a, char, Chars<'h>>> {
        let haystack = utf8::decode_text(haystack)?;
        Ok(self.find_in_str(haystack))
    }
}
