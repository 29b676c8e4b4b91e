use crate::CodeFilter;
use anyhow::{Context, Result};
use colored::Colorize;
use scenarist_core::codec::odd_parity;
use scenarist_core::{Channel, ControlCode};
use tracing::info;

/// One catalog row: mnemonic, category and the parity-protected word on a channel
pub fn render(channel: u8, filter: CodeFilter) -> Result<Vec<String>> {
    let channel = Channel::new(channel).with_context(|| "Invalid --channel")?;

    Ok(ControlCode::all()
        .filter(|code| filter.accepts(code.kind()))
        .map(|code| {
            let word = [
                odd_parity(code.first_byte(channel)),
                odd_parity(code.second_byte()),
            ];
            format!(
                "{:<8} {:<14} {}",
                code.mnemonic(),
                format!("{:?}", code.kind()),
                hex::encode(word)
            )
        })
        .collect())
}

pub fn execute(channel: u8, filter: CodeFilter) -> Result<()> {
    let rows = render(channel, filter)?;
    info!("Listing {} control codes for channel {}", rows.len(), channel);

    println!("\n=== Control Codes (CC{}) ===", channel);
    println!("{}", format!("{:<8} {:<14} {}", "Code", "Kind", "Word").bold());
    for row in rows {
        println!("{}", row);
    }

    Ok(())
}
