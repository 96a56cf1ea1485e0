//! Test doubles for the ID source.
//!
//! # Example
//!
//! ```rust,ignore
//! use tantalize_core::testing::ScriptedIdGenerator;
//!
//! let ids = ScriptedIdGenerator::new(["AAAAAAAA", "AAAAAAAA", "BBBBBBBB"]);
//! let mut generator = TicketGenerator::new(config, ids);
//! ```

mod scripted_ids;

pub use scripted_ids::ScriptedIdGenerator;
