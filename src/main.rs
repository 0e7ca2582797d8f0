use anyhow::{bail, Context};
use shapekit::{init_logging, Config, DesignerState, Script};
use std::path::PathBuf;

const USAGE: &str = "usage: shapekit [--config <file.json>] <script>";

struct Args {
    config: Option<PathBuf>,
    script: PathBuf,
}

fn parse_args() -> anyhow::Result<Args> {
    let mut config = None;
    let mut script = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = args.next().context("--config needs a file")?;
                config = Some(PathBuf::from(path));
            }
            "--help" | "-h" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            _ if script.is_none() => script = Some(PathBuf::from(arg)),
            _ => bail!("unexpected argument '{}'\n{}", arg, USAGE),
        }
    }
    let Some(script) = script else {
        bail!("no script given\n{}", USAGE);
    };
    Ok(Args { config, script })
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;

    let args = parse_args()?;
    let config = match &args.config {
        Some(path) => Config::load_from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => Config::default(),
    };

    let text = std::fs::read_to_string(&args.script)
        .with_context(|| format!("reading script {}", args.script.display()))?;
    let script: Script = text.parse()?;
    tracing::info!(
        "Replaying {} commands from {}",
        script.len(),
        args.script.display()
    );

    let mut state = DesignerState::with_config(config);
    let summary = script.run(&mut state);
    tracing::info!(
        "Replay finished: {} applied, {} failed",
        summary.applied,
        summary.failed
    );

    for object in state.canvas.shapes() {
        println!("{}", serde_json::to_string(object)?);
    }
    println!("{}", state.status());

    Ok(())
}
