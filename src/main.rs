use std::path::PathBuf;

use anyhow::{bail, Context};
use tracing::{info, warn};
use vecdraw::{describe_element, init_logging, open_document, save_document, Config, VERSION};

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args_os().skip(1);
    let Some(input) = args.next().map(PathBuf::from) else {
        bail!("usage: vecdraw <input.svg> [output.svg]");
    };
    let output = args.next().map(PathBuf::from);

    init_logging()?;
    info!("VecDraw {}", VERSION);

    let mut config = Config::default_path()
        .map(|path| Config::load_or_default(&path))
        .unwrap_or_default();

    let document = match open_document(&input) {
        Ok(document) => document,
        Err(e) if e.is_markup_error() => {
            bail!("{} is not a usable SVG document: {}", input.display(), e)
        }
        Err(e) => return Err(e.into()),
    };
    config.add_recent_file(input.clone());

    println!(
        "{}: {}x{}, {} element(s)",
        input.display(),
        document.width(),
        document.height(),
        document.len()
    );
    for element in document.elements() {
        println!("  {}", describe_element(element));
    }

    if let Some(output) = output {
        save_document(&document, &output)
            .with_context(|| format!("saving {}", output.display()))?;
        println!("Wrote {}", output.display());
        config.add_recent_file(output);
    }

    if let Some(path) = Config::default_path() {
        if let Err(e) = config.save_to_file(&path) {
            warn!("Settings not saved to {}: {}", path.display(), e);
        }
    }

    Ok(())
}
