//! Quote command implementation

use anyhow::Result;
use tally_core::quotes::quote_for_date;

pub fn cmd_quote() -> Result<()> {
    let quote = quote_for_date(chrono::Local::now().date_naive());
    println!("💬 \"{}\"", quote.quote);
    println!("   - {}", quote.author);
    Ok(())
}
