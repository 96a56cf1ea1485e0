//! Ticket batch generation.

use std::collections::HashSet;

use super::error::TicketError;
use super::id::IdGenerator;
use super::types::{format_serial, Ticket};
use crate::config::TicketsConfig;

/// Draws allowed per ticket before giving up when rerolling duplicates.
pub const MAX_ID_ATTEMPTS: usize = 16;

/// Produces a full batch of tickets in serial order.
pub struct TicketGenerator<G> {
    config: TicketsConfig,
    ids: G,
}

impl<G: IdGenerator> TicketGenerator<G> {
    pub fn new(config: TicketsConfig, ids: G) -> Self {
        Self { config, ids }
    }

    /// Generates `total_count` tickets with serials `1..=total_count`.
    ///
    /// With `reroll_duplicates` disabled, IDs are taken as drawn and a
    /// collision ends up in the batch unchanged.
    pub fn generate(&mut self) -> Result<Vec<Ticket>, TicketError> {
        let total = self.config.total_count;
        let mut tickets = Vec::with_capacity(total as usize);
        let mut issued = HashSet::with_capacity(total as usize);

        for index in 1..=total {
            let id = if self.config.reroll_duplicates {
                self.draw_unique(index, &issued)?
            } else {
                self.ids.next_id()
            };
            issued.insert(id.clone());

            tickets.push(Ticket::new(
                index,
                id,
                &self.config.base_url,
                self.config.status,
            ));
        }

        tracing::debug!(
            "Generated {} tickets ({} distinct IDs)",
            tickets.len(),
            issued.len()
        );
        Ok(tickets)
    }

    fn draw_unique(&mut self, index: u32, issued: &HashSet<String>) -> Result<String, TicketError> {
        for attempt in 1..=MAX_ID_ATTEMPTS {
            let id = self.ids.next_id();
            if !issued.contains(&id) {
                return Ok(id);
            }
            tracing::warn!(
                "Ticket ID collision on {} for serial {} (attempt {}), rerolling",
                id,
                format_serial(index),
                attempt
            );
        }
        Err(TicketError::IdSpaceExhausted {
            serial: format_serial(index),
            attempts: MAX_ID_ATTEMPTS,
        })
    }
}
