//! List existing whole-file disable directives

use std::path::Path;

use lintmute::config::Config;
use lintmute::lister::Lister;
use lintmute::output::{ListResult, OutputMode};

/// Show which files under `root` disable which rules
pub fn list(root: &Path, ext: Option<&str>, mode: OutputMode) -> anyhow::Result<()> {
    let config = Config::load(root)?.with_extensions(ext);
    let lister = Lister::new(root, &config.scan)?;

    let result = ListResult {
        root: root.display().to_string(),
        rules: lister.list()?,
    };
    result.render(mode);
    Ok(())
}
