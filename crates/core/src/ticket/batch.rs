//! CSV batch file I/O.

use std::path::Path;

use super::error::TicketError;
use super::types::Ticket;

/// Column names of a batch file, in order.
pub const CSV_HEADER: [&str; 4] = [
    "Serial_Number",
    "Human_Readable_ID",
    "QR_Link_URL",
    "Ticket_Status",
];

/// Writes the header and every ticket to `path`, replacing any existing file.
///
/// Rows are CRLF-terminated and quoted only when a field needs it.
pub fn write_batch(path: &Path, tickets: &[Ticket]) -> Result<(), TicketError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_path(path)
        .map_err(|e| TicketError::csv(path, e))?;

    // Written by hand so an empty batch still gets a header row.
    writer
        .write_record(CSV_HEADER)
        .map_err(|e| TicketError::csv(path, e))?;
    for ticket in tickets {
        writer
            .serialize(ticket)
            .map_err(|e| TicketError::csv(path, e))?;
    }
    writer.flush().map_err(|e| TicketError::io(path, e))?;

    Ok(())
}

/// Reads every ticket from a batch file.
pub fn read_batch(path: &Path) -> Result<Vec<Ticket>, TicketError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| TicketError::csv(path, e))?;
    reader
        .deserialize()
        .collect::<Result<Vec<Ticket>, _>>()
        .map_err(|e| TicketError::csv(path, e))
}
