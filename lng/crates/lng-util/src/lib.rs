//! lng-util - shared foundation types for the LNG pipeline
//!
//! Every stage crate (`lng-lex`, `lng-parse`, `lng-sem`, `lng-interp`)
//! depends on this crate for the hashing primitives shared across stage
//! boundaries. Nothing here knows about tokens, AST nodes, or runtime
//! values — those belong to their respective stages, and each stage
//! reports its own errors as a line-tagged type rather than a shared
//! diagnostic shape.

pub use rustc_hash::FxHashMap;
pub use rustc_hash::FxHashSet;
