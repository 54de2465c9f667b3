use anyhow::{Context, Result};
use std::path::Path;

use crate::io::DocumentFormat;
use crate::scenario::{save_scenario, Scenario};

/// Write the Acme example scenario to `output`, or print it as TOML
pub fn write_example(output: Option<&Path>, force: bool) -> Result<()> {
    let scenario = Scenario::example();

    let Some(path) = output else {
        print!("{}", scenario.render(DocumentFormat::Toml)?);
        return Ok(());
    };

    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        );
    }

    save_scenario(&scenario, path)
        .with_context(|| format!("Failed to write example scenario to {}", path.display()))?;
    println!("Wrote example scenario to {}", path.display());
    Ok(())
}
