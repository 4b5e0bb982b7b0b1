use std::io::Write;

use models::Admin;
use models::Describe;
use models::IceCreamStand;

use crate::command::sample_user;
use crate::error::Result;

pub fn run<W: Write>(out: &mut W) -> Result<()> {
    let stand = IceCreamStand::new("Cool Cones");
    writeln!(out, "{}", stand.describe())?;
    writeln!(out, "{}", stand.display_flavors())?;

    writeln!(out, "\n--- User and Admin Classes ---")?;
    let admin = Admin::new(sample_user());
    writeln!(out, "{}", admin.describe())?;
    writeln!(out, "{}", admin.privileges.show())?;

    Ok(())
}
