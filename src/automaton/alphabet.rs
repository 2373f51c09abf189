use crate::Symbol;

/// The set of symbols that occur in at least one pattern.
///
/// Each symbol is assigned a class, its index in the sorted set, which is
/// used as the column of the dense transition table. A symbol that is not in
/// the alphabet cannot extend any state other than the root, so it always
/// transitions to the root.
#[derive(Debug, Clone)]
pub struct Alphabet<S> {
    symbols: Vec<S>,
}

impl<S: Symbol> Alphabet<S> {
    pub fn new<I>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
    {
        let mut symbols: Vec<_> = symbols.into_iter().collect();
        symbols.sort_unstable();
        symbols.dedup();
        Self { symbols }
    }

    /// Returns the class of the given symbol.
    #[inline]
    pub fn class(&self, symbol: &S) -> Option<usize> {
        self.symbols.binary_search(symbol).ok()
    }

    /// The number of classes.
    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn memory_usage(&self) -> usize {
        self.symbols.len() * std::mem::size_of::<S>()
    }
}
