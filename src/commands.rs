//! CLI command implementations

use anyhow::Context;
use std::path::{Path, PathBuf};
use trellis_core::{FormState, FormStore, render_outline, sample_form, validate};

pub fn sample(out: Option<PathBuf>) -> anyhow::Result<()> {
    let state = sample_form();
    let json = serde_json::to_string_pretty(&state)?;
    match out {
        Some(path) => {
            std::fs::write(&path, json)
                .with_context(|| format!("writing {}", path.display()))?;
            tracing::info!("Sample form ({} nodes) written to {}", state.nodes.len(), path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

pub fn show(file: &Path) -> anyhow::Result<()> {
    let state = load(file)?;
    let mut store = FormStore::new();
    store.replace(state);
    tracing::info!("Loaded {} nodes from {}", store.len(), file.display());
    print!("{}", render_outline(store.snapshot()));
    Ok(())
}

pub fn check(file: &Path) -> anyhow::Result<()> {
    let state = load(file)?;
    let violations = validate(&state);
    if violations.is_empty() {
        println!("ok: {} nodes, no violations", state.nodes.len());
        return Ok(());
    }
    for violation in &violations {
        eprintln!("violation: {violation}");
    }
    anyhow::bail!("{} structural violation(s) found", violations.len())
}

fn load(file: &Path) -> anyhow::Result<FormState> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("reading {}", file.display()))?;
    let state = serde_json::from_str(&raw)
        .with_context(|| format!("parsing {}", file.display()))?;
    Ok(state)
}
