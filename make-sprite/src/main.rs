use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use sprite_core::manifest::SpriteManifest;
use sprite_core::{Sprite, StandardGlyphs, make_sprite};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Regenerate the chess sprite sheet.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Output SVG path
    #[arg(long, short, default_value = "sprite.svg")]
    output: PathBuf,

    /// Also write a JSON description of the sheet layout
    #[arg(long)]
    manifest: Option<PathBuf>,
}

fn create(path: &Path) -> anyhow::Result<BufWriter<File>> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    Ok(BufWriter::new(file))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let glyphs = StandardGlyphs;

    let mut out = create(&args.output)?;
    make_sprite(&mut out, &glyphs)
        .with_context(|| format!("failed to write {}", args.output.display()))?;
    out.flush()?;
    info!(path = %args.output.display(), "sprite sheet ready");

    if let Some(path) = &args.manifest {
        let mut out = create(path)?;
        SpriteManifest::new(&Sprite::for_glyphs(&glyphs))
            .write_to(&mut out)
            .with_context(|| format!("failed to write {}", path.display()))?;
        out.flush()?;
        info!(path = %path.display(), "layout manifest ready");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_to_sprite_svg() {
        let args = Args::parse_from(["make-sprite"]);
        assert_eq!(args.output, PathBuf::from("sprite.svg"));
        assert!(args.manifest.is_none());
        let args = Args::parse_from(["make-sprite", "-o", "out.svg", "--manifest", "m.json"]);
        assert_eq!(args.output, PathBuf::from("out.svg"));
        assert_eq!(args.manifest, Some(PathBuf::from("m.json")));
    }
}
