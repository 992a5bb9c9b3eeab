//! The deck type and its operations.

use std::fmt;
use std::fs;
use std::path::Path;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::{LoadError, SaveError};

/// Suits in display order.
pub const SUITS: [&str; 4] = ["Spades", "Diamonds", "Hearts", "Clubs"];

/// Values in display order.
pub const VALUES: [&str; 4] = ["Ace", "Two", "Three", "Four"];

/// Number of cards in a freshly constructed deck.
pub const DECK_SIZE: usize = SUITS.len() * VALUES.len();

/// An ordered sequence of card names.
///
/// Cards are plain `"<Value> of <Suit>"` labels. The deck enforces no
/// invariant on its contents: a deck loaded from a file holds whatever the
/// file contained, duplicates and arbitrary strings included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Cards in deal order.
    cards: Vec<String>,
}

impl Deck {
    /// Creates the full deck in fixed suit-major, value-minor order.
    ///
    /// The first card is `"Ace of Spades"` and the last is
    /// `"Four of Clubs"`.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{DECK_SIZE, Deck};
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in SUITS {
            for value in VALUES {
                cards.push(format!("{value} of {suit}"));
            }
        }

        Self { cards }
    }

    /// Creates a deck from the given cards, verbatim.
    #[must_use]
    pub fn from_cards(cards: Vec<String>) -> Self {
        Self { cards }
    }

    /// Loads a deck from a file written by [`Deck::save_to_file`].
    ///
    /// The entire file content is split on `,` and the pieces become the
    /// deck verbatim: no trimming, no vocabulary check, no size check. An
    /// empty file loads as a single empty-string card. The format is a
    /// trusted round-trip companion to [`Deck::save_to_file`], not a
    /// hardened parser.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let contents = fs::read_to_string(path)?;
        Ok(Self {
            cards: contents.split(',').map(str::to_owned).collect(),
        })
    }

    /// Saves the deck as the entire content of `path`, creating or
    /// truncating the file.
    ///
    /// The content is the [`Display`](fmt::Display) form: card names
    /// joined by `,` with no trailing separator.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created or written.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), SaveError> {
        fs::write(path, self.to_string())?;
        Ok(())
    }

    /// Splits the deck at `hand_size` without reordering.
    ///
    /// Returns the hand (elements `[0, hand_size)`) and the remainder
    /// (elements `[hand_size, len)`). The deck itself is not modified.
    ///
    /// # Panics
    ///
    /// Panics if `hand_size` exceeds the deck length. Callers are expected
    /// to pass valid sizes; out-of-range sizes fail loudly rather than
    /// clamp.
    #[must_use]
    pub fn deal(&self, hand_size: usize) -> (Self, Self) {
        assert!(
            hand_size <= self.cards.len(),
            "hand size {hand_size} out of range for deck of {}",
            self.cards.len()
        );

        let hand = Self {
            cards: self.cards[..hand_size].to_vec(),
        };
        let remainder = Self {
            cards: self.cards[hand_size..].to_vec(),
        };
        (hand, remainder)
    }

    /// Shuffles the deck in place.
    ///
    /// Uses a uniform Fisher–Yates permutation driven by the given RNG.
    /// Pass a seeded RNG (e.g. `ChaCha8Rng::seed_from_u64`) for a
    /// reproducible order.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::Deck;
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut deck = Deck::new();
    /// deck.shuffle(&mut ChaCha8Rng::seed_from_u64(42));
    /// ```
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Prints the deck to stdout, one `<index> <card>` line per card,
    /// zero-based, in current deck order.
    pub fn print(&self) {
        for (index, card) in self.cards.iter().enumerate() {
            println!("{index} {card}");
        }
    }

    /// Returns the cards in deal order.
    #[must_use]
    pub fn cards(&self) -> &[String] {
        &self.cards
    }

    /// Returns the number of cards in the deck.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

/// The serialized form: card names joined by `,` with no trailing
/// separator and no escaping. Card names must not contain commas for the
/// form to round-trip (true for the fixed vocabulary).
impl fmt::Display for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.cards.join(","))
    }
}
