use std::io::Write;

use models::Describe;
use models::Restaurant;

use crate::command::sample_user;
use crate::error::Result;

pub fn run<W: Write>(out: &mut W) -> Result<()> {
    let restaurant = Restaurant::new("La Fiesta", "Mexican");

    writeln!(out, "Restaurant Name: {}", restaurant.name)?;
    writeln!(out, "Cuisine Type: {}", restaurant.cuisine_type)?;
    writeln!(out, "{}", restaurant.describe())?;
    writeln!(out, "{}", restaurant.open())?;

    writeln!(out, "\n--- Creating multiple restaurants ---")?;
    let restaurants = [
        Restaurant::new("Pizza", "Italian"),
        Restaurant::new("Sakura", "Japanese"),
        Restaurant::new("Burger Blast", "American"),
    ];
    let described = restaurants
        .iter()
        .map(|v| v.describe())
        .collect::<Vec<_>>();
    writeln!(out, "{}", described.join("\n\n"))?;

    writeln!(out, "\n--- User Class Example ---")?;
    let user = sample_user();
    writeln!(out, "{}", user.describe())?;
    writeln!(out, "{}", user.greet())?;

    Ok(())
}
