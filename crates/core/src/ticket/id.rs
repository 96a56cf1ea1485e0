//! Ticket identifier generation.

use once_cell::sync::Lazy;
use regex_lite::Regex;
use uuid::Uuid;

/// Length of a human-readable ticket ID.
pub const TICKET_ID_LEN: usize = 8;

static TICKET_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9A-F]{8}$").expect("ticket ID pattern is valid"));

/// Source of candidate ticket IDs.
///
/// Implementations need not guarantee uniqueness; the generator decides
/// whether collisions are rerolled.
pub trait IdGenerator {
    /// Returns the next candidate ID: eight uppercase hex characters.
    fn next_id(&mut self) -> String;
}

impl<G: IdGenerator + ?Sized> IdGenerator for &mut G {
    fn next_id(&mut self) -> String {
        (**self).next_id()
    }
}

/// Takes the leading hex digits of a random v4 UUID.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> String {
        let mut buf = Uuid::encode_buffer();
        let hex = Uuid::new_v4().simple().encode_lower(&mut buf);
        hex[..TICKET_ID_LEN].to_ascii_uppercase()
    }
}

/// Whether `id` has the shape of a ticket ID (`[0-9A-F]{8}`).
pub fn is_ticket_id(id: &str) -> bool {
    TICKET_ID_PATTERN.is_match(id)
}
