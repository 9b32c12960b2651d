use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use numword_core::{Event, Keycode, KeycodeStateChanged, NumWordEngine, VirtualHost};
use numword_dts::{build_registry, compile_dts_file, BehaviorDefinition};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Replay a key sequence through num-word behaviors", long_about = None)]
struct Args {
    /// Input devicetree file path
    input: PathBuf,

    /// Keys to tap: key names (A, N5, LS(MINUS)) or &label to tap a num-word binding
    #[arg(required = true)]
    keys: Vec<String>,

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
    let registry = build_registry(&definitions)?;
    let mut engine = NumWordEngine::new(registry, VirtualHost::new());

    for (timestamp, token) in args.keys.iter().enumerate() {
        let timestamp = timestamp as i64;

        if let Some(label) = token.strip_prefix('&') {
            let slot = find_slot(&definitions, label)?;
            engine.binding_pressed(slot)?;
            engine.binding_released(slot)?;
            print_state(&engine, &definitions, token, None);
            continue;
        }

        let keycode = Keycode::parse(token)
            .with_context(|| format!("bad key '{}'", token))?
            .key_press_usage();

        let mut press: Event = KeycodeStateChanged::new(keycode, true, timestamp).into();
        engine.handle_event(&mut press);

        let mut release: Event = KeycodeStateChanged::new(keycode, false, timestamp).into();
        engine.handle_event(&mut release);

        let pressed = match press {
            Event::KeycodeStateChanged(ev) => Some(ev),
            _ => None,
        };
        print_state(&engine, &definitions, token, pressed.as_ref());
    }

    Ok(())
}

fn find_slot(definitions: &[BehaviorDefinition], label: &str) -> Result<usize> {
    let found = definitions
        .iter()
        .find(|d| d.label.as_deref() == Some(label) || d.name == label)
        .map(|d| d.slot);
    match found {
        Some(slot) => Ok(slot),
        None if definitions.is_empty() => bail!("no num-word behaviors defined"),
        None => Err(anyhow!("no num-word behavior labelled '{}'", label)),
    }
}

fn print_state(
    engine: &NumWordEngine<VirtualHost>,
    definitions: &[BehaviorDefinition],
    token: &str,
    pressed: Option<&KeycodeStateChanged>,
) {
    let active: Vec<&str> = engine
        .active_slots()
        .into_iter()
        .filter_map(|slot| definitions.get(slot))
        .map(|d| d.label.as_deref().unwrap_or(&d.name))
        .collect();
    let layers: Vec<String> = engine
        .host()
        .active_layers()
        .iter()
        .map(|layer| layer.to_string())
        .collect();

    let (sent, implicit) = match pressed {
        Some(ev) => (
            Keycode::new(ev.usage_page, ev.keycode).to_string(),
            ev.implicit_modifiers.to_string(),
        ),
        None => ("-".to_string(), "-".to_string()),
    };

    println!(
        "{:<12} sent {:<12} mods {:<12} active [{}] layers [{}]",
        token,
        sent,
        implicit,
        active.join(", "),
        layers.join(", ")
    );
}
