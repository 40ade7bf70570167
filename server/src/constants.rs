// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

/// Default bind address when neither config nor `HOST` provide one.
pub const SERVER_HOST: &str = "127.0.0.1";
/// Default bind port when neither config nor `PORT` provide one.
pub const SERVER_PORT: u16 = 8080;
/// Default log level.
pub const LOG_LEVEL: &str = "INFO";

/// Name used whenever the request carries no usable `nome`.
pub const DEFAULT_NAME: &str = "Visitante";
/// Separator between the phrase and the name in `mensagem`.
pub const NAME_SEPARATOR: &str = ", ";
/// Content type of every greeting response.
pub const CONTENT_TYPE_JSON: &str = "application/json";
/// Largest request body accepted; bigger bodies get 413 Payload Too Large.
pub const MAX_BODY_BYTES: usize = 64 * 1024;
