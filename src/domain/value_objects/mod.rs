//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod category_uid;
mod node_kind;
mod parent_key;

pub use category_uid::{decode_uid, try_decode_uid};
pub use node_kind::MenuNodeKind;
pub use parent_key::ParentKey;
