use crate::automaton::{Automaton, Compiler};
use crate::{utf8, Result, Symbol};

/// The default size limit of a dense transition table in bytes.
const DEFAULT_DENSE_LIMIT: usize = 16 * (1 << 20);

/// The strategy used to represent the transition function of an automaton.
///
/// Both strategies produce identical search results. They only differ in how
/// much memory the automaton uses and how fast each symbol is processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transitions {
    /// Materialize a transition for every state and every symbol that occurs
    /// in a pattern.
    ///
    /// Each symbol of the haystack is processed with a single table lookup.
    /// The table has one entry per state for each distinct symbol in the
    /// patterns, which can get large for big alphabets. A table that would
    /// exceed the [dense limit][Builder::dense_limit] is not built and the
    /// automaton uses sparse transitions instead.
    #[default]
    Dense,

    /// Only store the edges of the trie and follow suffix links at search
    /// time when a state has no edge for a symbol.
    ///
    /// The amortized cost per symbol is still constant but each step is
    /// slower than a table lookup.
    Sparse,
}

/// A builder for configuring an [`Automaton`].
///
/// # Examples
///
/// ```
/// use trawl::{Builder, Transitions};
///
/// let aut = Builder::new()
///     .transitions(Transitions::Sparse)
///     .build(["foo", "oops"])?;
///
/// let starts: Vec<_> = aut.find_iter(b"foops").map(|m| m.start()).collect();
/// assert_eq!(starts, [0, 1]);
/// # Ok::<(), trawl::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Builder {
    transitions: Transitions,
    dense_limit: usize,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            transitions: Transitions::default(),
            dense_limit: DEFAULT_DENSE_LIMIT,
        }
    }
}

impl Builder {
    /// Creates a new builder with the default configuration.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the transition strategy.
    ///
    /// Defaults to [`Transitions::Dense`].
    #[inline]
    pub fn transitions(&mut self, transitions: Transitions) -> &mut Self {
        self.transitions = transitions;
        self
    }

    /// Set the maximum size of a dense transition table in bytes.
    ///
    /// If the dense table for a set of patterns would be larger than this,
    /// the automaton is built with [`Transitions::Sparse`] instead. Use
    /// [`Automaton::transitions`] to find out which strategy was used.
    ///
    /// Defaults to 16 MiB.
    ///
    /// # Examples
    ///
    /// ```
    /// use trawl::{Builder, Transitions};
    ///
    /// let aut = Builder::new().dense_limit(0).build(["foo"])?;
    /// assert_eq!(aut.transitions(), Transitions::Sparse);
    /// # Ok::<(), trawl::Error>(())
    /// ```
    #[inline]
    pub fn dense_limit(&mut self, bytes: usize) -> &mut Self {
        self.dense_limit = bytes;
        self
    }

    /// Builds an automaton for the given patterns.
    ///
    /// # Errors
    ///
    /// If the automaton would need more states than can be addressed or if
    /// memory for it cannot be allocated.
    pub fn build<S, I, P>(&self, patterns: I) -> Result<Automaton<S>>
    where
        S: Symbol,
        I: IntoIterator<Item = P>,
        P: AsRef<[S]>,
    {
        Compiler::new(self.transitions, self.dense_limit).build(patterns)
    }

    /// Builds a `char` automaton for the given string patterns.
    pub fn build_strs<I, P>(&self, patterns: I) -> Result<Automaton<char>>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<str>,
    {
        self.build(
            patterns
                .into_iter()
                .map(|p| p.as_ref().chars().collect::<Vec<_>>()),
        )
    }

    /// Builds a `char` automaton for patterns that must be valid UTF-8.
    ///
    /// # Errors
    ///
    /// If any pattern is not valid UTF-8. The error names the first invalid
    /// pattern and no automaton is built.
    ///
    /// # Examples
    ///
    /// ```
    /// use trawl::{Builder, ErrorKind};
    ///
    /// let err = Builder::new()
    ///     .build_utf8([&b"ok"[..], b"no\xff"])
    ///     .unwrap_err();
    ///
    /// assert_eq!(err.kind(), ErrorKind::InvalidPattern { index: 1 });
    /// ```
    pub fn build_utf8<I, P>(&self, patterns: I) -> Result<Automaton<char>>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<[u8]>,
    {
        let patterns = patterns
            .into_iter()
            .enumerate()
            .map(|(i, p)| utf8::decode_pattern(i, p.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        self.build(patterns)
    }
}
