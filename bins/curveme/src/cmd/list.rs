//! `list` subcommand.
use clap::Parser;
use precompile::Precompiles;
use serde_json::json;

/// `list` subcommand
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Print one JSON object per operation
    #[arg(long)]
    json: bool,
}

impl Cmd {
    /// Prints every registered operation ordered by opcode.
    pub fn run(&self) -> Result<(), serde_json::Error> {
        for precompile in Precompiles::new().iter() {
            let id = precompile.id();
            if self.json {
                let entry = json!({
                    "name": id.name(),
                    "opcode": id.opcode(),
                    "address": precompile.address(),
                    "curve": id.curve().to_string(),
                    "outputLength": id.output_len(),
                });
                println!("{}", serde_json::to_string(&entry)?);
            } else {
                println!(
                    "{:#04x}  {:<20} {:<10} {:>3} bytes",
                    id.opcode(),
                    id.name(),
                    id.curve().to_string(),
                    id.output_len()
                );
            }
        }
        Ok(())
    }
}
