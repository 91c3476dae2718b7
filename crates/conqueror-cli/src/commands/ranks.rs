//! Ranks command implementation.

use crate::error::Result;
use crate::output::Formatter;
use conqueror_domain::RANKS;

/// Execute the ranks command.
pub fn execute_ranks(formatter: &Formatter) -> Result<()> {
    println!("{}", formatter.format_ranks(&RANKS)?);
    Ok(())
}
