//! Styles subcommand handler

use anyhow::Result;

use colorstr::registry;
use colorstr::StyledText;

/// List every registered style, each shown in its own style.
#[cfg(not(tarpaulin_include))]
pub fn handle() -> Result<()> {
    for (name, code) in registry::names() {
        let sample = StyledText::new(name, [name])?;
        println!("{:<10} {:>3}  {}", name, code, sample);
    }
    Ok(())
}
