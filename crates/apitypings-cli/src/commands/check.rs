use std::fmt;
use std::fs;
use std::path::PathBuf;

use super::run_common::{GenerationOptions, render_document};

pub struct CheckArgs {
    pub package: PathBuf,
    pub target: PathBuf,
    pub options: GenerationOptions,
}

pub fn run(args: CheckArgs) {
    let expected = render_document(&args.package, &args.options).unwrap_or_else(|msg| {
        eprintln!("error: {}", msg);
        std::process::exit(1);
    });
    let actual = fs::read_to_string(&args.target).unwrap_or_else(|e| {
        eprintln!("error: failed to read '{}': {}", args.target.display(), e);
        std::process::exit(1);
    });

    match first_difference(&expected, &actual) {
        None => println!("{} is up to date", args.target.display()),
        Some(diff) => {
            eprintln!("error: {} is out of date", args.target.display());
            eprintln!("{}", diff);
            eprintln!();
            eprintln!("Run 'apitypings generate' to update it.");
            std::process::exit(1);
        }
    }
}

/// First line where a stored file departs from the regenerated document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDifference {
    /// 1-based.
    pub line: usize,
    pub expected: Option<String>,
    pub actual: Option<String>,
}

impl fmt::Display for LineDifference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |text: &Option<String>| match text {
            Some(text) => format!("{text:?}"),
            None => "<end of file>".to_string(),
        };
        writeln!(f, "  line {}:", self.line)?;
        writeln!(f, "    expected: {}", show(&self.expected))?;
        write!(f, "    found:    {}", show(&self.actual))
    }
}

/// Compare byte-for-byte; `None` when identical.
pub fn first_difference(expected: &str, actual: &str) -> Option<LineDifference> {
    if expected == actual {
        return None;
    }

    // Splitting on '\n' keeps a missing final newline visible as a line.
    let mut expected_lines = expected.split('\n');
    let mut actual_lines = actual.split('\n');
    let mut line = 1;
    loop {
        match (expected_lines.next(), actual_lines.next()) {
            (Some(e), Some(a)) if e == a => line += 1,
            (None, None) => return None,
            (e, a) => {
                return Some(LineDifference {
                    line,
                    expected: e.map(str::to_string),
                    actual: a.map(str::to_string),
                });
            }
        }
    }
}
