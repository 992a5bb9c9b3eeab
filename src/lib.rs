//! A small playing-card deck library with flat-file persistence.
//!
//! The crate provides a [`Deck`] type that builds a fixed 16-card deck,
//! shuffles it with a caller-supplied RNG, deals it into hands, and
//! saves/loads it as a comma-separated text file.
//!
//! # Example
//!
//! ```
//! use deckrs::Deck;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut deck = Deck::new();
//! deck.shuffle(&mut ChaCha8Rng::seed_from_u64(42));
//! let (hand, remainder) = deck.deal(4);
//! assert_eq!(hand.len() + remainder.len(), deck.len());
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod deck;
pub mod error;

// Re-export main types
pub use deck::{DECK_SIZE, Deck, SUITS, VALUES};
pub use error::{LoadError, SaveError};
