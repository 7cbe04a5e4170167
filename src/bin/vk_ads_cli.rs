//! vk-ads-cli: send raw VK Ads API calls and print the classified records
//!
//! Usage:
//!   vk-ads-cli call <method> [key=value ...] [--config <file>]   Send one call
//!   vk-ads-cli version                                            Show version
//!   vk-ads-cli help                                               Show help

use anyhow::{bail, Context, Result};
use tracing_subscriber::EnvFilter;
use vk_ads_client::request::FormBody;
use vk_ads_client::{ClientConfig, VkClient};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let outcome = match args[1].as_str() {
        "call" => cmd_call(&args[2..]).await,
        "version" | "--version" | "-V" => {
            cmd_version();
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(e) = outcome {
        eprintln!("Error: {e:#}");
        std::process::exit(2);
    }
}

fn print_usage() {
    println!(
        r#"vk-ads-cli: VK Ads API command line client

USAGE:
    vk-ads-cli <COMMAND> [OPTIONS]

COMMANDS:
    call <method> [key=value ...]   Send one call, print one JSON line per record
    version                         Show version information
    help                            Show this help message

OPTIONS:
    --config <file>                 YAML client configuration

ENVIRONMENT:
    VK_API_BASE_URL                 API base URL
    VK_API_VERSION                  Value of the `v` field
    VK_HTTP_TIMEOUT_SECS            Request timeout
    VK_PROXY_URL                    HTTP(S) proxy
    VK_USER_AGENT                   User-Agent header
    RUST_LOG                        Log filter (default: info)"#
    );
}

fn cmd_version() {
    println!("vk-ads-cli {}", env!("CARGO_PKG_VERSION"));
}

async fn cmd_call(args: &[String]) -> Result<()> {
    let Some(method) = args.first() else {
        bail!("missing API method, e.g. `vk-ads-cli call ads.getAccounts access_token=...`");
    };

    let mut config = None;
    let mut body = FormBody::new();
    let mut rest = args[1..].iter();
    while let Some(arg) = rest.next() {
        if arg == "--config" {
            let path = rest.next().context("--config needs a file path")?;
            config = Some(ClientConfig::from_yaml_file(path)?);
            continue;
        }
        let (key, value) = arg
            .split_once('=')
            .with_context(|| format!("expected key=value, got `{arg}`"))?;
        body.insert(key, value);
    }

    let config = config.unwrap_or_else(ClientConfig::from_env);
    let client = VkClient::builder().config(config).build()?;
    let records = client.call(method, body).await?;

    let mut failed = 0usize;
    for record in &records {
        if record.is_error() {
            failed += 1;
        }
        println!("{}", serde_json::to_string(record)?);
    }
    eprintln!("{} record(s), {} with item errors", records.len(), failed);
    Ok(())
}
