//! Resume command handler

use anyhow::Result;

use seekctl::resume_position;

/// Print the resume position for an item.
pub fn handle(duration: f64, stored: Option<f64>) -> Result<()> {
    println!("{}", resume_position(stored, duration));
    Ok(())
}
