//! Interactive input: one line of comma-separated URLs.

use std::io::{self, BufRead, Write};

pub const BANNER: &str = "🌍 Ubuntu Requests – Respectful Image Fetcher";
pub const INSTRUCTIONS: &str = "Enter image URLs (separated by commas if multiple):";
pub const PROMPT: &str = "URLs: ";

/// Print the banner and prompt, then read a single line from `input`.
///
/// End of input yields an empty list.
pub fn prompt_for_urls<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Vec<String>> {
    writeln!(out, "{BANNER}")?;
    writeln!(out, "{INSTRUCTIONS}")?;
    write!(out, "{PROMPT}")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    Ok(parse_url_list(&line))
}

/// Split on commas, trim, drop empty entries. Order and repeats are kept.
pub fn parse_url_list(line: &str) -> Vec<String> {
    line.split(',')
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .collect()
}
