use std::io::Write;

use models::Restaurant;

use crate::command::sample_user;
use crate::error::Result;

const LOGIN_ATTEMPTS: usize = 3;

pub fn run<W: Write>(out: &mut W) -> Result<()> {
    let mut restaurant = Restaurant::new("Spicy Corner", "Indian");

    writeln!(out, "Customers served: {}", restaurant.number_served)?;
    restaurant.number_served = 25;
    writeln!(
        out,
        "Customers served after direct change: {}",
        restaurant.number_served
    )?;
    restaurant.set_number_served(50)?;
    writeln!(
        out,
        "Customers served after using set_number_served(): {}",
        restaurant.number_served
    )?;
    restaurant.increment_number_served(30)?;
    writeln!(
        out,
        "Customers served after using increment_number_served(): {}",
        restaurant.number_served
    )?;

    // rejected updates keep the counter as is
    for res in [
        restaurant.set_number_served(-10),
        restaurant.increment_number_served(0),
    ] {
        if let Err(err) = res {
            writeln!(out, "{err}")?;
        }
    }
    writeln!(
        out,
        "Customers served after rejected updates: {}",
        restaurant.number_served
    )?;

    writeln!(out, "\n--- User Class with Login Attempts ---")?;
    let mut user = sample_user();
    for _ in 0..LOGIN_ATTEMPTS {
        user.increment_login_attempts();
    }
    writeln!(
        out,
        "Login attempts after increments: {}",
        user.login_attempts
    )?;
    user.reset_login_attempts();
    writeln!(out, "Login attempts after reset: {}", user.login_attempts)?;

    Ok(())
}
