//! Demo subcommand handler

use anyhow::Result;

use colorstr::{get_plain, Arg, StyledText};

/// Print a handful of sample strings.
#[cfg(not(tarpaulin_include))]
pub fn handle() -> Result<()> {
    let greeting = StyledText::new("az {0} {1}", ["red"])?.interpolate(["0", "I am foo"])?;
    println!("{}", greeting);

    // Comparisons look at the payload, never the escape codes
    let az = StyledText::new("az", ["red"])?;
    println!("{} < \"aa\": {}", az, az < "aa");

    // 'f_' means foreground, 'b_' means background
    let label = StyledText::new("%s string", ["f_green", "b_black"])?.interpolate_percent("green")?;
    println!("{}", label);

    let inner = StyledText::new("green", ["green"])?;
    let nested = StyledText::new("%s string", ["green", "bold", "underline", "reverse"])?
        .interpolate_percent(Arg::from(&inner))?;
    println!("{}", nested);

    // Interpolated output is frozen text; strip it to get the payload back
    let plain = get_plain(nested.as_str());
    println!("{}", plain);
    println!("starts with \"green\": {}", plain.starts_with("green"));
    println!("len: {}", plain.len());
    println!("equals \"green string\": {}", plain == "green string");

    // Styled values answer as plain text directly
    let value = StyledText::new("green string", ["f_green"])?;
    println!(
        "{}: len {}, equals \"green string\": {}",
        value,
        value.len(),
        value == "green string"
    );

    let repeated = StyledText::new("ab", ["red", "underline"])? * 3;
    println!("{}", repeated);

    let swapped = StyledText::new("one_two_three", ["cyan"])?.replace_escorted("_", &inner);
    println!("{}", swapped);

    Ok(())
}
