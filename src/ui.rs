use console::style;
use std::io::{self, Write};

/// Write one version per line.
pub fn write_versions(out: &mut dyn Write, versions: &[String]) -> io::Result<()> {
    for version in versions {
        writeln!(out, "{}", version)?;
    }
    out.flush()
}

/// Print an error line, red when stderr is a terminal.
pub fn display_error(err: &mut dyn Write, message: &str) {
    // nowhere left to report a failed error write
    let _ = writeln!(err, "{} {}", style("error:").red().bold().for_stderr(), message);
}
