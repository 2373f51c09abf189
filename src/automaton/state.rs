use std::fmt;

use super::PatternID;

/// A unique identifier for a state in an automaton.
///
/// State identifiers are indexes into the automaton's state arena. The root
/// state always has the identifier [`StateID::ROOT`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateID(u32);

impl StateID {
    /// The identifier of the root state, which represents the empty string.
    pub const ROOT: StateID = StateID(0);

    pub(crate) fn new(id: usize) -> Option<Self> {
        u32::try_from(id).ok().map(Self)
    }

    /// Returns this identifier as an index into the state arena.
    #[inline]
    pub fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for StateID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}

/// A state in an Aho-Corasick automaton.
#[derive(Debug, Clone)]
pub struct State<S> {
    /// The explicit trie edges out of this state, sorted by symbol.
    pub trans: Vec<(S, StateID)>,

    /// The suffix link. The root links to itself.
    pub fail: StateID,

    /// The nearest terminal state further along the suffix chain, if any.
    pub output: Option<StateID>,

    /// The first pattern that ends at this state, if any.
    pub pattern: Option<PatternID>,

    /// The distance from the root, which is also the length of the string
    /// this state represents.
    pub depth: usize,
}

impl<S: Ord> State<S> {
    pub fn new(depth: usize) -> Self {
        Self {
            trans: Vec::new(),
            fail: StateID::ROOT,
            output: None,
            pattern: None,
            depth,
        }
    }

    /// Searches the edges for the given symbol, returning the index of the
    /// edge or the index at which it would be inserted.
    #[inline]
    pub fn edge_index(&self, symbol: &S) -> Result<usize, usize> {
        self.trans.binary_search_by(|(s, _)| s.cmp(symbol))
    }

    /// Returns the explicit trie edge for the given symbol.
    #[inline]
    pub fn next_state(&self, symbol: &S) -> Option<StateID> {
        self.edge_index(symbol).ok().map(|i| self.trans[i].1)
    }

    /// Whether or not a pattern ends at this state.
    #[inline]
    pub fn is_match(&self) -> bool {
        self.pattern.is_some()
    }

    /// Returns the first state on the output chain starting at this one,
    /// including itself.
    #[inline]
    pub fn first_output(&self, id: StateID) -> Option<StateID> {
        if self.is_match() {
            Some(id)
        } else {
            self.output
        }
    }
}
