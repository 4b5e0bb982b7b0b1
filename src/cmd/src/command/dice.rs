use std::io::Write;

use clap::Parser;
use common::config::Config;
use rand::Rng;
use sampling::Die;

use crate::error::Result;

#[derive(Parser, Clone, Debug, Default)]
pub struct Dice {
    /// Number of sides, the configured value when omitted
    #[arg(long)]
    pub sides: Option<u32>,
    /// Number of rolls, the configured value when omitted
    #[arg(long)]
    pub rolls: Option<usize>,
}

pub fn run<R: Rng + ?Sized, W: Write>(
    args: &Dice,
    cfg: &Config,
    rng: &mut R,
    out: &mut W,
) -> Result<()> {
    let die = Die::new(args.sides.unwrap_or(cfg.sampling.die_sides))?;
    let rolls = args.rolls.unwrap_or(cfg.sampling.die_rolls);

    for v in die.roll_many(rng, rolls) {
        writeln!(out, "{v}")?;
    }

    Ok(())
}
