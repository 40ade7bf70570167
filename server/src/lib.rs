// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

//! Motivational greeting server.
//!
//! Takes a request envelope that may carry a `nome`, picks a phrase from a
//! fixed catalog and answers with `{"mensagem", "frase_id", "gerado_em"}`.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod errors;
pub mod handlers;
pub mod messages;
pub mod timestamp;
pub mod transport;

pub use errors::HandlerError;
pub use handlers::greeting::handle;
