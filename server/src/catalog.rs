// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

//! Phrase catalog
//!
//! The order of `PHRASES` is part of the public contract: `frase_id` is the
//! 1-based position of the phrase in this list.

use rand::Rng;

pub const PHRASES: [&str; 7] = [
    "Acredite em você mesmo e tudo será possível!",
    "Cada passo conta, mesmo os mais lentos.",
    "O sucesso é a soma de pequenos esforços diários.",
    "Você consegue! Nunca subestime sua força interior",
    "Persistência é o caminho do êxito.",
    "Não espere por oportunidades. Crie-as.",
    "Seja a mudança que você deseja ver no mundo.",
];

/// Pick a phrase uniformly at random, returning its 0-based index and text.
pub fn pick_phrase<R: Rng + ?Sized>(rng: &mut R) -> (usize, &'static str) {
    let index = rng.gen_range(0..PHRASES.len());
    (index, PHRASES[index])
}

/// External identifier for the phrase at `index`.
pub fn phrase_id(index: usize) -> u32 {
    index as u32 + 1
}

/// Look a phrase up by its 1-based identifier.
pub fn phrase_by_id(id: u32) -> Option<&'static str> {
    let index = usize::try_from(id).ok()?.checked_sub(1)?;
    PHRASES.get(index).copied()
}
