use clap::{Parser, Subcommand};
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "gateway-cli")]
#[command(about = "Command-line client for the highlight gateway", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:3000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Probe backend reachability through the gateway
    Debug,
    /// Upload a PDF and save the highlighted result
    Highlight {
        /// PDF to upload
        file: PathBuf,

        /// Where to write the highlighted PDF
        #[arg(short, long, default_value = "highlighted.pdf")]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    match cli.command {
        Commands::Debug => {
            let res = client.get(format!("{}/api/debug", base)).send().await?;
            let status = res.status();
            let json: Value = res.json().await?;
            println!("{}", serde_json::to_string_pretty(&json)?);
            if !status.is_success() {
                eprintln!("Gateway reported status {}", status);
            }
        }
        Commands::Highlight { file, output } => {
            let data = tokio::fs::read(&file).await?;
            let file_name = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "upload.pdf".to_string());

            let part = Part::bytes(data).file_name(file_name).mime_str("application/pdf")?;
            let form = Form::new().part("file", part);

            let res = client
                .post(format!("{}/api/highlight", base))
                .multipart(form)
                .send()
                .await?;

            let status = res.status();
            if !status.is_success() {
                eprintln!("Error: {}", failure_message(status, res).await);
                std::process::exit(1);
            }

            let pdf = res.bytes().await?;
            tokio::fs::write(&output, &pdf).await?;
            println!("Wrote {} bytes to {}", pdf.len(), output.display());
        }
    }

    Ok(())
}

/// Prefer the envelope's `details`, then `error`, then the bare status.
async fn failure_message(status: reqwest::StatusCode, res: reqwest::Response) -> String {
    match res.json::<Value>().await {
        Ok(body) => body
            .get("details")
            .and_then(Value::as_str)
            .filter(|d| !d.is_empty())
            .or_else(|| body.get("error").and_then(Value::as_str))
            .map(str::to_string)
            .unwrap_or_else(|| format!("Server Error: {}", status.as_u16())),
        Err(_) => format!("Analysis failed: {}", status),
    }
}
