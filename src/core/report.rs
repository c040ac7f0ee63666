use std::io::Write;

pub const REPORT_HEADER: &str = "Fetched Jokes:";

/// Write the header followed by every result, in the order given.
pub fn write_report<W: Write>(out: &mut W, results: &[String]) -> std::io::Result<()> {
    writeln!(out, "{}", REPORT_HEADER)?;
    for result in results {
        writeln!(out, "{}", result)?;
    }
    out.flush()
}
