//! Deck CLI: builds a full deck, shuffles it, and prints it.

use std::time::{SystemTime, UNIX_EPOCH};

use deckrs::Deck;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn main() {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut deck = Deck::new();
    deck.shuffle(&mut rng);
    deck.print();
}
