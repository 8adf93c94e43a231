//! Paint subcommand handler

use anyhow::Result;

use colorstr::StyledText;

/// Print `text` rendered with `styles`.
#[cfg(not(tarpaulin_include))]
pub fn handle(text: &str, styles: &[String]) -> Result<()> {
    let styled = StyledText::new(text, styles)?;
    println!("{}", styled);
    Ok(())
}
