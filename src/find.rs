//! Output collection and match enumeration.

use std::iter::{Fuse, FusedIterator};
use std::ops::Range;

use crate::automaton::{Automaton, PatternID, StateID};
use crate::Symbol;

/// An occurrence of a pattern in a haystack.
///
/// Offsets are measured in symbols, which are bytes for a `u8` automaton and
/// `char`s for a `char` automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Match<'a, S> {
    pattern: PatternID,
    symbols: &'a [S],
    start: usize,
}

impl<'a, S> Match<'a, S> {
    pub(crate) fn new(pattern: PatternID, symbols: &'a [S], start: usize) -> Self {
        Self {
            pattern,
            symbols,
            start,
        }
    }

    /// The identifier of the matched pattern.
    #[inline]
    pub fn pattern(&self) -> PatternID {
        self.pattern
    }

    /// The symbols of the matched pattern.
    #[inline]
    pub fn as_slice(&self) -> &'a [S] {
        self.symbols
    }

    /// The starting position of the match.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// The ending position of the match.
    #[inline]
    pub fn end(&self) -> usize {
        self.start + self.symbols.len()
    }

    /// The length of the match.
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether this is a match of the empty pattern.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The range of the match in the haystack.
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end()
    }
}

impl Match<'_, char> {
    /// Returns the text of the matched pattern.
    pub fn text(&self) -> String {
        self.symbols.iter().collect()
    }
}

/// An iterator over the matches ending at a single position.
///
/// This struct is created by [`Automaton::matches_at`].
#[derive(Debug, Clone)]
pub struct MatchesAt<'a, S> {
    automaton: &'a Automaton<S>,
    next: Option<StateID>,
    end: usize,
}

impl<'a, S: Symbol> MatchesAt<'a, S> {
    pub(crate) fn new(automaton: &'a Automaton<S>, next: Option<StateID>, end: usize) -> Self {
        Self {
            automaton,
            next,
            end,
        }
    }
}

impl<'a, S: Symbol> Iterator for MatchesAt<'a, S> {
    type Item = Match<'a, S>;

    fn next(&mut self) -> Option<Self::Item> {
        let (m, next) = self.automaton.get_match(self.next?, self.end)?;
        self.next = next;
        Some(m)
    }
}

impl<S: Symbol> FusedIterator for MatchesAt<'_, S> {}

/// An iterator over all matches in a haystack.
///
/// This struct is created by [`Automaton::find_iter`] and friends. Each
/// iterator carries its own scan position, so any number of them may run
/// over the same automaton at once.
#[derive(Debug, Clone)]
pub struct FindIter<'a, S, I> {
    automaton: &'a Automaton<S>,
    symbols: Fuse<I>,
    state: StateID,
    pos: usize,
    matches: MatchesAt<'a, S>,
}

impl<'a, S, I> FindIter<'a, S, I>
where
    S: Symbol,
    I: Iterator<Item = S>,
{
    pub(crate) fn new(automaton: &'a Automaton<S>, symbols: I) -> Self {
        // Matches of the empty pattern precede all symbols.
        let state = automaton.start_state();
        Self {
            automaton,
            symbols: symbols.fuse(),
            state,
            pos: 0,
            matches: automaton.matches_at(state, 0),
        }
    }

    /// The number of symbols consumed so far.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }
}

impl<'a, S, I> Iterator for FindIter<'a, S, I>
where
    S: Symbol,
    I: Iterator<Item = S>,
{
    type Item = Match<'a, S>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(m) = self.matches.next() {
                return Some(m);
            }
            let symbol = self.symbols.next()?;
            self.state = self.automaton.next_state(self.state, symbol);
            self.pos += 1;
            self.matches = self.automaton.matches_at(self.state, self.pos);
        }
    }
}

impl<S, I> FusedIterator for FindIter<'_, S, I>
where
    S: Symbol,
    I: Iterator<Item = S>,
{
}
