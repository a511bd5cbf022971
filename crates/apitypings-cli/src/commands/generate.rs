use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use tracing::info;

use super::run_common::{GenerationOptions, render_document};

pub struct GenerateArgs {
    pub package: PathBuf,
    pub output: Option<PathBuf>,
    pub options: GenerationOptions,
}

pub fn run(args: GenerateArgs) {
    let document = render_document(&args.package, &args.options).unwrap_or_else(|msg| {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    });

    if let Some(ref path) = args.output {
        fs::write(path, &document).unwrap_or_else(|e| {
            eprintln!("error: failed to write {}: {}", path.display(), e);
            std::process::exit(1);
        });
        info!(path = %path.display(), "wrote declarations");
    } else if let Err(e) = io::stdout().write_all(document.as_bytes()) {
        eprintln!("error: failed to write output: {}", e);
        std::process::exit(1);
    }
}
