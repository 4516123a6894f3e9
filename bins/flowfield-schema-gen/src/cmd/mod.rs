pub mod avro;
pub mod columns;
pub mod rpath;

use std::io::Write;

/// Writes one line per entry to stdout.
fn write_lines(lines: &[String]) -> std::io::Result<()> {
    let mut out = std::io::stdout().lock();
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
