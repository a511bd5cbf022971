use std::fs;
use std::io::{self, Read};
use std::path::Path;

use apitypings_core::{Package, load_package};

/// Load the single package of a loader dump from a file, or stdin for `-`.
pub fn load_package_dump(path: &Path) -> Result<Package, String> {
    let json = if path.as_os_str() == "-" {
        load_stdin()?
    } else {
        fs::read_to_string(path)
            .map_err(|e| format!("failed to read '{}': {}", path.display(), e))?
    };

    load_package(&json).map_err(|e| format!("'{}': {}", path.display(), e))
}

fn load_stdin() -> Result<String, String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| format!("failed to read stdin: {}", e))?;
    Ok(buf)
}
