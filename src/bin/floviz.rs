use std::path::PathBuf;

use anyhow::Context as _;
use clap::{CommandFactory as _, Parser};

#[derive(Parser, Debug)]
#[command(name = "floviz", version, about = "Render a .flo optical-flow file as a false-color PNG")]
struct Cli {
    /// Input .flo file.
    flo_path: Option<PathBuf>,

    /// Output PNG path (defaults to the input path with a .png extension).
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let Some(flo_path) = cli.flo_path else {
        // Invoked without arguments: usage is the answer, not an error.
        Cli::command().print_help()?;
        return Ok(());
    };

    let field = floviz::load(&flo_path)
        .with_context(|| format!("load flow file '{}'", flo_path.display()))?;

    let frame = floviz::colorize(&field);

    let out_path = cli.out.unwrap_or_else(|| flo_path.with_extension("png"));
    if let Some(parent) = out_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        &out_path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgb8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out_path.display()))?;

    eprintln!("wrote {}", out_path.display());
    Ok(())
}
