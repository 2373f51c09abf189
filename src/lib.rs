//! Find every occurrence of many patterns in a single pass.
//!
//! This crate implements the [Aho-Corasick algorithm][wikipedia]. Given a
//! collection of patterns it builds an automaton that, when run once over a
//! haystack, reports every occurrence of every pattern. Unlike most
//! multi-pattern searchers, *all* matches are reported, including matches
//! that overlap or are nested inside other matches.
//!
//! # Features
//!
//! - Overlapping and nested matches in a precisely defined order: ascending
//!   end offset, and longest first for matches with the same end offset.
//! - Any alphabet: bytes, `char`s, or any other `Copy + Ord` symbol type.
//! - Two interchangeable transition strategies, see [`Transitions`].
//! - Immutable automatons that can be shared across threads.
//! - Lazy iteration over matches, also over haystacks that are produced on
//!   the fly.
//!
//! # Getting started
//!
//! Build an [`Automaton`] from the patterns and then iterate over the
//! matches in a haystack using [`.find_iter()`][Automaton::find_iter].
//!
//! ```
//! let aut = trawl::Automaton::new(["a", "aa", "aaa"])?;
//!
//! let matches: Vec<_> = aut
//!     .find_iter(b"aaa")
//!     .map(|m| (m.as_slice(), m.start()))
//!     .collect();
//!
//! assert_eq!(
//!     matches,
//!     [
//!         (&b"a"[..], 0),
//!         (&b"aa"[..], 0),
//!         (&b"a"[..], 1),
//!         (&b"aaa"[..], 0),
//!         (&b"aa"[..], 1),
//!         (&b"a"[..], 2),
//!     ]
//! );
//! # Ok::<(), trawl::Error>(())
//! ```
//!
//! # Examples
//!
//! ### Search by `char`
//!
//! An automaton over `char`s reports offsets in `char`s instead of bytes.
//!
//! ```
//! let aut = trawl::Automaton::from_strs(["ñu"])?;
//!
//! let starts: Vec<_> = aut.find_in_str("el ñu").map(|m| m.start()).collect();
//! assert_eq!(starts, [3]);
//! # Ok::<(), trawl::Error>(())
//! ```
//!
//! Patterns and haystacks that are not known to be UTF-8 can be checked at
//! the same time.
//!
//! ```
//! let aut = trawl::Automaton::from_utf8([b"caf\xc3\xa9"])?;
//!
//! let err = aut.find_in_utf8(b"caf\xc3").unwrap_err();
//! assert_eq!(err.to_string(), "invalid UTF-8 in search text at byte 3");
//! # Ok::<(), trawl::Error>(())
//! ```
//!
//! ### Configure the automaton
//!
//! The transition strategy can be set using the [`Builder`].
//!
//! ```
//! use trawl::{Builder, Transitions};
//!
//! let aut = Builder::new()
//!     .transitions(Transitions::Sparse)
//!     .build(["abc", "bc", "c"])?;
//!
//! let ends: Vec<_> = aut.find_iter(b"abc").map(|m| m.end()).collect();
//! assert_eq!(ends, [3, 3, 3]);
//! # Ok::<(), trawl::Error>(())
//! ```
//!
//! ### Search a custom alphabet
//!
//! ```
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
//! enum Base { A, C, G, T }
//!
//! use Base::*;
//!
//! let aut = trawl::Automaton::new([[G, A, T], [A, T, G]])?;
//! let matches: Vec<_> = aut
//!     .find_iter(&[G, A, T, G])
//!     .map(|m| m.range())
//!     .collect();
//!
//! assert_eq!(matches, [0..3, 1..4]);
//! # Ok::<(), trawl::Error>(())
//! ```
//!
//! [wikipedia]: https://en.wikipedia.org/wiki/Aho%E2%80%93Corasick_algorithm

#![cfg_attr(docsrs, feature(doc_cfg))]

mod automaton;
mod config;
mod error;
mod find;
mod macros;
#[cfg(feature = "serde")]
mod ser;
mod utf8;

use std::fmt;

pub use crate::automaton::{Automaton, PatternID, StateID};
pub use crate::config::{Builder, Transitions};
pub use crate::error::{Error, ErrorKind};
pub use crate::find::{FindIter, Match, MatchesAt};

/// A type alias for results in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// A symbol of the alphabet an [`Automaton`] searches over.
///
/// This trait is implemented for every type that is `Copy`, `Ord` and
/// `Debug`, such as `u8`, `char` and `u16`.
pub trait Symbol: Copy + Ord + fmt::Debug {}

impl<T> Symbol for T where T: Copy + Ord + fmt::Debug {}
