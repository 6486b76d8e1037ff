use anyhow::{bail, Result};
use shapewatch::config::{Config, LoadedConfig};

use super::GlobalArgs;

/// Print the effective configuration; fail if a required folder is unset
pub fn cmd_check(globals: &GlobalArgs) -> Result<()> {
    // Warnings are part of this command's report, not printed up front
    let loaded = Config::discover(globals.config.as_deref())?;
    let problems = problems(&loaded);

    if globals.json {
        println!("{}", to_json(&loaded, &problems));
    } else {
        print_text(&loaded, &problems);
    }

    if !problems.is_empty() {
        bail!("configuration is incomplete ({} problem(s))", problems.len());
    }
    Ok(())
}

fn problems(loaded: &LoadedConfig) -> Vec<String> {
    let config = &loaded.config;
    [
        config.require_watch_folder().err(),
        config.require_drop_folder().err(),
    ]
    .into_iter()
    .flatten()
    .map(|e| e.to_string())
    .collect()
}

fn display_or_unset(path: Option<&std::path::Path>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| "(unset)".to_string())
}

fn print_text(loaded: &LoadedConfig, problems: &[String]) {
    let config = &loaded.config;
    match &loaded.source {
        Some(path) => println!("Config: {}", path.display()),
        None => println!("Config: (defaults)"),
    }
    println!(
        "  watch.folder            {}",
        display_or_unset(config.watch.folder.as_deref())
    );
    println!(
        "  watch.extension         {}",
        if config.watch.extension.is_empty() {
            "*"
        } else {
            &config.watch.extension
        }
    );
    println!("  watch.lock_wait_seconds {}", config.watch.lock_wait_seconds);
    println!("  watch.processed_dir     {}", config.watch.processed_dir);
    println!(
        "  drop.folder             {}",
        display_or_unset(config.drop.folder.as_deref())
    );
    println!("  input.encoding          {}", config.input.encoding);
    println!("  output.verbosity        {}", config.output.verbosity);

    for warning in &loaded.warnings {
        println!("! {warning}");
    }
    for problem in problems {
        println!("✗ {problem}");
    }
    if problems.is_empty() {
        println!("✓ Configuration OK");
    }
}

fn to_json(loaded: &LoadedConfig, problems: &[String]) -> serde_json::Value {
    let config = &loaded.config;
    serde_json::json!({
        "event": "check",
        "command": "check",
        "source": loaded.source.as_ref().map(|p| p.display().to_string()),
        "watch": {
            "folder": config.watch.folder.as_ref().map(|p| p.display().to_string()),
            "extension": config.watch.extension,
            "lock_wait_seconds": config.watch.lock_wait_seconds,
            "processed_dir": config.watch.processed_dir,
        },
        "drop": {
            "folder": config.drop.folder.as_ref().map(|p| p.display().to_string()),
        },
        "input": { "encoding": config.input.encoding.to_string() },
        "warnings": loaded.warnings.iter().map(|w| w.to_string()).collect::<Vec<_>>(),
        "problems": problems,
        "valid": problems.is_empty(),
    })
}
