//! Suppress current lint errors with file-level directives

use std::path::Path;

use anyhow::Context;
use lintmute::adapters::EslintCli;
use lintmute::config::Config;
use lintmute::output::{IgnoreResult, OutputMode};
use lintmute::suppressor::Suppressor;

/// Run the lint engine over `root` and disable every rule with errors
pub fn ignore(
    root: &Path,
    eslint: Option<&str>,
    ext: Option<&str>,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let config = Config::load(root)?.with_eslint_command(eslint).with_extensions(ext);
    let engine = EslintCli::from_config(&config);

    let outcome = Suppressor::new(&engine)
        .suppress(root)
        .with_context(|| format!("Failed to suppress lint errors in {}", root.display()))?;
    let failures = outcome.failed.len();

    IgnoreResult::new(root.display().to_string(), outcome).render(mode);

    if failures > 0 {
        anyhow::bail!("{failures} file(s) could not be updated");
    }
    Ok(())
}
