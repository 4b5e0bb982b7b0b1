use std::fs;
use std::path::Path;

use plotters::style::register_font;
use plotters::style::FontStyle;
use tracing::debug;

use crate::error::ChartError;
use crate::error::Result;
use crate::FONT;

/// Loads a TTF/OTF file and makes it available as [FONT]. Must run before any
/// chart is rendered.
pub fn register(path: &Path) -> Result<()> {
    let bytes = fs::read(path)
        .map_err(|err| ChartError::FontUnavailable(format!("{}: {err}", path.display())))?;
    // the registry keeps a reference for the rest of the process
    let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());

    register_font(FONT, FontStyle::Normal, bytes)
        .map_err(|_| ChartError::FontUnavailable(format!("{}: invalid font", path.display())))?;
    debug!("registered font {:?}", path);

    Ok(())
}
