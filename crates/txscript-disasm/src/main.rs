use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use txscript::disasm::{disasm_string, disassemble};
use txscript::standard::{classify, extract_pk_script_addrs};
use txscript::tokenizer::check_script_parses;
use txscript::Config;

/// Disassemble and classify a hex encoded script
#[derive(Parser)]
#[command(name = "txscript-disasm")]
#[command(version)]
struct Cli {
    /// Script bytes as hex
    script: String,

    /// Render data pushes in compressed form
    #[arg(long)]
    compress: bool,

    /// Script version
    #[arg(long, default_value_t = 0)]
    script_version: u16,

    /// Recognize treasury scripts
    #[arg(long)]
    treasury: bool,

    /// Render on one line with full opcode names
    #[arg(long)]
    oneline: bool,
}

fn main() -> Result<()> {
    // Uses RUST_LOG, defaults to "error"
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("error")),
        )
        .try_init();

    let cli = Cli::parse();
    let config = if cli.treasury {
        Config::with_treasury()
    } else {
        Config::without_treasury()
    };

    let script = hex::decode(cli.script.trim()).context("script is not valid hex")?;
    debug!(len = script.len(), version = cli.script_version, "decoded script");

    if cli.oneline {
        println!("{}", disasm_string(&script));
    } else {
        println!("{}", disassemble(cli.script_version, &script, cli.compress));
    }

    check_script_parses(cli.script_version, &script).context("script does not parse")?;

    let classification = classify(cli.script_version, &script, config.treasury_enabled);
    match classification.sub_class {
        Some(sub_class) => println!("class: {} ({})", classification.class, sub_class),
        None => println!("class: {}", classification.class),
    }

    let extracted = extract_pk_script_addrs(cli.script_version, &script, config.treasury_enabled)?;
    if extracted.req_sigs > 0 {
        println!("required signatures: {}", extracted.req_sigs);
    }
    for addr in &extracted.addrs {
        println!("address payload: {}", hex::encode(addr.payload()));
    }

    Ok(())
}
