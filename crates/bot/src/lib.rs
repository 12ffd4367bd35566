//! combo-bot: the chat command surface.
//!
//! Each command takes its raw argument tokens, parses them with a
//! declared grammar, resolves against the injected sheet, and produces
//! a transport-neutral [`Response`]. The transport (not part of this
//! crate) turns a response into an actual chat message.
//!
//! User errors stop here and become error replies; structural errors
//! propagate out of `execute` so the surrounding process can crash or
//! log loudly instead of answering the user with something wrong.

pub mod combo;
pub mod reply;
pub mod roundlength;
pub mod vocab;

pub use reply::{ErrorReply, Reply, ReplyField, Response};
pub use vocab::StaticVocabulary;
