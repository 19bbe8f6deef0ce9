use brcode::application::service::ChargeService;
use brcode::domain::ports::ConfigStoreBox;
use brcode::infrastructure::in_memory::InMemoryConfigStore;
use brcode::infrastructure::json::JsonConfigStore;
use brcode::interfaces::csv::charge_reader::ChargeReader;
use brcode::interfaces::csv::payload_writer::PayloadWriter;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input charges CSV file (key, amount, name)
    input: PathBuf,

    /// Path to the shop settings JSON file (optional). If provided, the
    /// PIX key is read from it instead of the built-in default.
    #[arg(long)]
    config_path: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let service = if let Some(config_path) = cli.config_path {
        // Use the persistent settings file
        let store: ConfigStoreBox =
            Box::new(JsonConfigStore::open(config_path).into_diagnostic()?);
        ChargeService::new(store)
    } else {
        // Defaults only
        let store: ConfigStoreBox = Box::new(InMemoryConfigStore::new());
        ChargeService::new(store)
    };

    // Build one payload per charge
    let file = File::open(cli.input).into_diagnostic()?;
    let reader = ChargeReader::new(file);

    let stdout = io::stdout();
    let mut writer = PayloadWriter::new(stdout.lock());
    for charge_result in reader.charges() {
        match charge_result {
            Ok(charge) => match service.payload_for(charge).await {
                Ok(payload) => writer.write_payload(&payload).into_diagnostic()?,
                Err(e) => {
                    eprintln!("Error building payload: {}", e);
                }
            },
            Err(e) => {
                eprintln!("Error reading charge: {}", e);
            }
        }
    }
    writer.flush().into_diagnostic()?;

    Ok(())
}
