//! Short, human-typable game code generation.

use rand::Rng;

/// Characters allowed in a game code. Visually ambiguous glyphs (`0/O`, `1/I`)
/// are excluded so codes survive being read out loud or scribbled on paper.
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

/// Length of every generated game code.
pub const CODE_LENGTH: usize = 6;

/// Upper bound on collision retries when allocating a code for a new game.
pub const MAX_CODE_ATTEMPTS: usize = 32;

/// Draw a fresh game code uniformly from [`CODE_ALPHABET`].
///
/// The draw is pure and makes no uniqueness promise; [`crate::state::game::GameRegistry`]
/// is responsible for detecting collisions and asking for another code.
pub fn new_game_code() -> String {
    let mut rng = rand::rng();
    (0..CODE_LENGTH)
        .map(|_| CODE_ALPHABET[rng.random_range(0..CODE_ALPHABET.len())] as char)
        .collect()
}
