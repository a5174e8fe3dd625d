//! Npcf_PolicyAuthorization (3GPP TS 29.514) data models and the JSON codec
//! that keeps absent, `null` and set properties apart.

pub mod codec;
pub mod nullable;
pub mod presence;
pub mod union;
pub mod validate;
pub mod types;

pub use codec::{CodecError, Model};
pub use nullable::Nullable;
pub use presence::{is_absent, is_present, Presence};
pub use union::AnyOf;
pub use validate::{Validate, ValidationError};
