use anyhow::{Context, Result};
use clap::Parser;
use numword_core::Keycode;
use numword_dts::compile_dts_file;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Validate num-word behaviors in a devicetree file", long_about = None)]
struct Args {
    /// Input devicetree (.dts / .keymap / .dtsi) file path
    input: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(if args.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    let definitions = compile_dts_file(&args.input)
        .with_context(|| format!("failed to compile {}", args.input.display()))?;

    if definitions.is_empty() {
        println!("No num-word behaviors found in {}", args.input.display());
        return Ok(());
    }

    for definition in &definitions {
        let config = &definition.config;
        let label = definition.label.as_deref().unwrap_or("-");
        println!("[{}] {} (label: {})", definition.slot, definition.name, label);
        println!("  mods:             {}", config.mods);
        match config.layer {
            Some(layer) => println!("  layer:            {}", layer),
            None => println!("  layer:            none"),
        }
        println!("  ignore-alphas:    {}", config.ignore_alphas);
        println!("  ignore-numbers:   {}", config.ignore_numbers);
        println!("  ignore-modifiers: {}", config.ignore_modifiers);
        if config.continuations.is_empty() {
            println!("  continue-list:    (empty)");
        } else {
            println!("  continue-list:");
            for rule in &config.continuations {
                let keycode = Keycode::new(rule.page, rule.id).with_mods(rule.implicit_modifiers);
                println!(
                    "    {:<16} page 0x{:02X} id 0x{:02X} requires {}",
                    keycode.to_string(),
                    rule.page,
                    rule.id,
                    rule.implicit_modifiers
                );
            }
        }
    }

    Ok(())
}
