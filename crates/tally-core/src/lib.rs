#![deny(missing_docs)]
#![doc = "Core types for the tally check engine: test details, the stringification capability and message streams."]

pub mod details;
pub mod errors;
/// Canonical hashing helpers.
pub mod hash;
/// Canonical JSON and YAML helpers.
pub mod serde;
pub mod stream;
pub mod stringify;

pub use details::TestDetails;
pub use errors::{ErrorInfo, TallyError};
pub use hash::stable_hash_string;
pub use stream::MessageStream;
pub use stringify::{
    all_renderable3, both_renderable, can_stringify, stringify_or, Opaque, Stringify,
};
