use std::io::Write;

use rand::Rng;
use sampling::lottery::format_ticket;
use sampling::lottery::winning_ticket;

use crate::error::Result;

pub fn run<R: Rng + ?Sized, W: Write>(rng: &mut R, out: &mut W) -> Result<()> {
    let ticket = winning_ticket(rng)?;

    writeln!(
        out,
        "Any ticket matching these {} numbers or letters wins a prize:",
        ticket.len()
    )?;
    writeln!(out, "{}", format_ticket(&ticket))?;

    Ok(())
}
