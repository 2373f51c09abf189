//! Construction of an Aho-Corasick automaton.
//!
//! From the given set of patterns we first build a trie where each pattern
//! has a path of symbol labelled edges from the root state. Consider the
//! patterns 'abe' and 'bcd'. States are represented as `S?` and have an
//! asterisk (`*`) if a pattern ends at that state.
//!
//! ```text
//!      a - S1 - b - S2 - e - S3*
//!     /
//! S0 - b - S4 - c - S5 - d - S6*
//! ```
//!
//! Every state other than the root then gets a suffix link: a pointer to the
//! state representing the longest proper suffix of its string that also
//! exists in the trie. Above, S2 represents 'ab' and its longest suffix in the
//! trie is 'b', so S2 links to S4. All other states link back to the root.
//!
//! ```text
//!      a - S1 - b - S2 - e - S3*
//!     /             /
//!    /       -------
//!   /       /
//! S0 - b - S4 - c - S5 - d - S6*
//! ```
//!
//! Suffix links are resolved using a breadth-first search starting with all
//! transitions from the root. For each state and for every outgoing edge we
//! follow the suffix links of the state backward until we find a state that
//! has an edge for the same symbol. The target of that edge is the suffix
//! link of the child. Since suffix links always point to shallower states,
//! every link needed during the search has already been resolved.
//!
//! In the same pass we record output links, pointing to the nearest state
//! along the suffix chain at which a pattern ends, and fill in the dense
//! transition table if one was requested and it fits within the size limit.

use std::collections::VecDeque;
use std::mem;

use super::alphabet::Alphabet;
use super::state::{State, StateID};
use super::{Automaton, Dense, PatternID};
use crate::macros::debug;
use crate::{Error, Result, Symbol, Transitions};

pub struct Compiler<S> {
    states: Vec<State<S>>,
    patterns: Vec<Box<[S]>>,
    transitions: Transitions,
    dense_limit: usize,
}

impl<S: Symbol> Compiler<S> {
    pub fn new(transitions: Transitions, dense_limit: usize) -> Self {
        Self {
            states: Vec::new(),
            patterns: Vec::new(),
            transitions,
            dense_limit,
        }
    }

    pub fn build<I, P>(mut self, patterns: I) -> Result<Automaton<S>>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[S]>,
    {
        self.push_state(0)?; // the root state
        self.build_initial_trie(patterns)?;

        let mut dense = match self.transitions {
            Transitions::Dense => self.new_dense()?,
            Transitions::Sparse => None,
        };
        self.fill_failure_transitions(dense.as_mut());

        debug!(
            patterns = self.patterns.len(),
            states = self.states.len(),
            alphabet = dense.as_ref().map(|d| d.alphabet.len()),
            dense = dense.is_some(),
            "built automaton"
        );

        let Self {
            states, patterns, ..
        } = self;
        Ok(Automaton {
            states,
            patterns,
            dense,
        })
    }

    /// Build the initial trie where each pattern has a path from the root
    /// state until the end of the pattern.
    fn build_initial_trie<I, P>(&mut self, patterns: I) -> Result<()>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[S]>,
    {
        for pattern in patterns {
            let pattern = pattern.as_ref();
            let pattern_id = PatternID(self.patterns.len());

            let mut id = StateID::ROOT;
            for (depth, symbol) in pattern.iter().enumerate() {
                id = match self.state(id).edge_index(symbol) {
                    Ok(i) => self.state(id).trans[i].1,
                    Err(i) => {
                        let next = self.push_state(depth + 1)?;
                        self.state_mut(id).trans.insert(i, (*symbol, next));
                        next
                    }
                };
            }

            // Duplicates collapse onto the first pattern.
            let state = self.state_mut(id);
            if state.pattern.is_none() {
                state.pattern = Some(pattern_id);
            }
            self.patterns.push(pattern.into());
        }
        Ok(())
    }

    fn fill_failure_transitions(&mut self, mut dense: Option<&mut Dense<S>>) {
        if let Some(dense) = dense.as_deref_mut() {
            self.fill_dense_row(dense, StateID::ROOT);
        }

        // Initialize the queue for breadth first search with all transitions
        // out of the root state. These states have no proper suffix other
        // than the empty string so they keep the default link to the root.
        let mut queue = VecDeque::new();
        let root_output = self.start().first_output(StateID::ROOT);
        for i in 0..self.start().trans.len() {
            let next = self.start().trans[i].1;
            self.state_mut(next).output = root_output;
            queue.push_back(next);
        }

        while let Some(curr) = queue.pop_front() {
            if let Some(dense) = dense.as_deref_mut() {
                self.fill_dense_row(dense, curr);
            }

            for i in 0..self.state(curr).trans.len() {
                let (symbol, next) = self.state(curr).trans[i];
                let fail = self.find_fail(self.state(curr).fail, &symbol);
                debug_assert!(fail != next, "a state must never link to itself");
                let output = self.state(fail).first_output(fail);

                let state = self.state_mut(next);
                state.fail = fail;
                state.output = output;
                queue.push_back(next);
            }
        }
    }

    /// Follows suffix links from `id` until a state with an explicit edge for
    /// `symbol` is found and returns the target of that edge, or the root.
    fn find_fail(&self, mut id: StateID, symbol: &S) -> StateID {
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

    /// Allocates the dense transition table, or returns `None` if it would
    /// exceed the size limit.
    fn new_dense(&self) -> Result<Option<Dense<S>>> {
        let alphabet = Alphabet::new(
            self.states
                .iter()
                .flat_map(|state| state.trans.iter().map(|&(symbol, _)| symbol)),
        );
        let len = self
            .states
            .len()
            .checked_mul(alphabet.len())
            .filter(|&len| len <= self.dense_limit / mem::size_of::<StateID>());
        let len = match len {
            Some(len) => len,
            None => {
                debug!(
                    states = self.states.len(),
                    alphabet = alphabet.len(),
                    limit = self.dense_limit,
                    "dense transition table over limit, using sparse transitions"
                );
                return Ok(None);
            }
        };

        let mut table = Vec::new();
        table
            .try_reserve_exact(len)
            .map_err(|_| Error::too_many_states("cannot allocate dense transition table"))?;
        table.resize(len, StateID::ROOT);
        Ok(Some(Dense { alphabet, table }))
    }

    /// Fills the row of the dense table for the given state.
    ///
    /// The row of the state's suffix link must already be filled.
    fn fill_dense_row(&self, dense: &mut Dense<S>, id: StateID) {
        let stride = dense.alphabet.len();
        let row = id.as_usize() * stride;
        if id != StateID::ROOT {
            let fail = self.state(id).fail.as_usize() * stride;
            dense.table.copy_within(fail..fail + stride, row);
        }
        for (symbol, next) in &self.state(id).trans {
            if let Some(class) = dense.alphabet.class(symbol) {
                dense.table[row + class] = *next;
            }
        }
    }

    fn push_state(&mut self, depth: usize) -> Result<StateID> {
        let id = StateID::new(self.states.len())
            .ok_or_else(|| Error::too_many_states("state identifier overflow"))?;
        self.states
            .try_reserve(1)
            .map_err(|_| Error::too_many_states("cannot allocate state"))?;
        self.states.push(State::new(depth));
        Ok(id)
    }

    fn state(&self, id: StateID) -> &State<S> {
        &self.states[id.as_usize()]
    }

    fn state_mut(&mut self, id: StateID) -> &mut State<S> {
        &mut self.states[id.as_usize()]
    }

    fn start(&self) -> &State<S> {
        self.state(StateID::ROOT)
    }
}
