//! Subcommand implementations.

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use portfolio::config::{CONFIG_FILE, SiteConfig};
use portfolio::{render_page, verify_page};
use tracing::{debug, info};

use crate::args::{Args, Command};

pub fn run(args: &Args) -> Result<()> {
    match &args.command {
        Command::Render { out, stdout } => {
            let config = resolve_config(args.config.as_deref())?;
            let html = render_verified(&config)?;
            if *stdout {
                let mut handle = std::io::stdout().lock();
                handle.write_all(html.as_bytes()).context("failed to write to stdout")?;
                handle.flush()?;
            } else {
                write_document(out, &html)?;
            }
            Ok(())
        }
        Command::Check => {
            let config = resolve_config(args.config.as_deref())?;
            let html = render_page(&config);
            let report = verify_page(&html).context("page contract violated")?;
            println!(
                "ok: {} anchors resolved, {} sections in order, {} bytes",
                report.anchors, report.sections, report.bytes
            );
            Ok(())
        }
        Command::Content { pretty } => {
            let json = portfolio::content::to_json(*pretty).context("failed to serialize content")?;
            println!("{json}");
            Ok(())
        }
    }
}

/// An explicit `--config` must load; the implicit `./portfolio.toml` falls
/// back to defaults when absent or broken.
fn resolve_config(explicit: Option<&Path>) -> Result<SiteConfig> {
    match explicit {
        Some(path) => {
            debug!("loading config from {}", path.display());
            SiteConfig::try_load_from_path(path).with_context(|| format!("invalid config {}", path.display()))
        }
        None => {
            debug!("no --config given, looking for ./{CONFIG_FILE}");
            Ok(SiteConfig::load(Path::new(".")))
        }
    }
}

fn render_verified(config: &SiteConfig) -> Result<String> {
    let html = render_page(config);
    verify_page(&html).context("rendered page failed verification")?;
    Ok(html)
}

fn write_document(out: &Path, html: &str) -> Result<()> {
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(out, html).with_context(|| format!("failed to write {}", out.display()))?;
    info!("wrote {} ({} bytes)", out.display(), html.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn write_document_creates_parent_dirs() {
        let temp = TempDir::new().expect("temp dir");
        let out = temp.path().join("nested/dir/index.html");
        write_document(&out, "<!DOCTYPE html>\n<html></html>").expect("write");
        assert!(fs::read_to_string(&out).expect("read").starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn explicit_missing_config_is_error() {
        let temp = TempDir::new().expect("temp dir");
        let err = resolve_config(Some(&temp.path().join("missing.toml"))).expect_err("missing");
        assert!(format!("{err:#}").contains("missing.toml"));
    }

    #[test]
    fn explicit_config_is_applied() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("site.toml");
        fs::write(&path, "[site]\ntitle = \"From file\"\n").expect("write config");

        let config = resolve_config(Some(&path)).expect("config");
        assert_eq!(config.site.title, "From file");
        assert!(render_verified(&config).expect("render").contains("<title>From file</title>"));
    }
}
