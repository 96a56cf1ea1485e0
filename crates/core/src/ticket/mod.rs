//! Ticket batches: the record model, ID generation, CSV I/O and verification.
//!
//! A batch is produced in one pass by [`TicketGenerator`], written with
//! [`write_batch`], and later read back by the renderer or by
//! [`verify_batch`]. The CSV file is the only coupling between those steps.
//!
//! # Example
//!
//! ```ignore
//! use tantalize_core::ticket::{write_batch, TicketGenerator, UuidIdGenerator};
//!
//! let mut generator = TicketGenerator::new(config.tickets.clone(), UuidIdGenerator);
//! let tickets = generator.generate()?;
//! write_batch(&config.paths.csv_path, &tickets)?;
//! ```

mod batch;
mod error;
mod generator;
mod id;
mod types;
mod verify;

pub use batch::{read_batch, write_batch, CSV_HEADER};
pub use error::TicketError;
pub use generator::{TicketGenerator, MAX_ID_ATTEMPTS};
pub use id::{is_ticket_id, IdGenerator, UuidIdGenerator, TICKET_ID_LEN};
pub use types::{format_serial, ticket_link, Ticket, TicketStatus};
pub use verify::{verify_batch, BatchIssue, BatchReport};
