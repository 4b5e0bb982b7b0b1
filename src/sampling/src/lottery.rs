use std::collections::HashSet;
use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::error::Result;
use crate::error::SamplingError;

pub const TICKET_SIZE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicketItem {
    Number(u8),
    Letter(char),
}

impl fmt::Display for TicketItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TicketItem::Number(v) => write!(f, "{v}"),
            TicketItem::Letter(v) => write!(f, "'{v}'"),
        }
    }
}

/// Ten numbers and five letters.
pub const POOL: [TicketItem; 15] = [
    TicketItem::Number(1),
    TicketItem::Number(2),
    TicketItem::Number(3),
    TicketItem::Number(4),
    TicketItem::Number(5),
    TicketItem::Number(6),
    TicketItem::Number(7),
    TicketItem::Number(8),
    TicketItem::Number(9),
    TicketItem::Number(10),
    TicketItem::Letter('A'),
    TicketItem::Letter('H'),
    TicketItem::Letter('C'),
    TicketItem::Letter('P'),
    TicketItem::Letter('R'),
];

/// Samples `k` distinct positions of `pool` without replacement.
pub fn draw<R: Rng + ?Sized>(rng: &mut R, pool: &[TicketItem], k: usize) -> Result<Vec<TicketItem>> {
    if k > pool.len() {
        return Err(SamplingError::SampleTooLarge {
            requested: k,
            available: pool.len(),
        });
    }

    let items = pool.choose_multiple(rng, k).copied().collect::<Vec<_>>();
    debug!("drew {} of {} items", items.len(), pool.len());

    Ok(items)
}

pub fn winning_ticket<R: Rng + ?Sized>(rng: &mut R) -> Result<Vec<TicketItem>> {
    draw(rng, &POOL, TICKET_SIZE)
}

/// Order does not matter, only the set of items.
pub fn is_winner(ticket: &[TicketItem], winning: &[TicketItem]) -> bool {
    if ticket.len() != winning.len() {
        return false;
    }

    let ticket = ticket.iter().collect::<HashSet<_>>();
    ticket.len() == winning.len() && winning.iter().all(|v| ticket.contains(v))
}

pub fn format_ticket(items: &[TicketItem]) -> String {
    let items = items.iter().map(|v| v.to_string()).collect::<Vec<_>>();
    format!("[{}]", items.join(", "))
}
