//! Invoke the `typst` CLI.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

#[derive(Debug, Clone)]
pub struct TypstCompiler {
    bin: PathBuf,
}

impl TypstCompiler {
    pub fn new(bin: impl Into<PathBuf>) -> Self {
        Self { bin: bin.into() }
    }

    /// Build the command line without running it.
    pub fn command(&self, root: &Path, main: &str, out: &Path, inputs: &[(&str, &str)]) -> Command {
        let mut cmd = Command::new(&self.bin);
        cmd.arg("compile").arg("--root").arg(root);
        for (key, value) in inputs {
            cmd.arg("--input").arg(format!("{}={}", key, value));
        }
        cmd.arg(root.join(main)).arg(out);
        cmd
    }

    /// `typst compile --root <root> [--input k=v].. <root>/<main> <out>`.
    pub fn compile(&self, root: &Path, main: &str, out: &Path, inputs: &[(&str, &str)]) -> Result<()> {
        if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create dir: {}", parent.display()))?;
        }
        let mut cmd = self.command(root, main, out, inputs);
        tracing::debug!("running {:?}", cmd);
        let output = cmd
            .output()
            .with_context(|| format!("run {} (is typst installed?)", self.bin.display()))?;
        if !output.status.success() {
            bail!(
                "typst compile of {} failed ({}): {}",
                main,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        tracing::info!("typst wrote {}", out.display());
        Ok(())
    }
}
