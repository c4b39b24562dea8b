//! Output formatting for the command line

use crate::index::{IndexMeta, SuffixArray};
use serde::Serialize;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Longest suffix preview printed in the array table
const PREVIEW_LEN: usize = 40;

fn stdout(color: bool) -> StandardStream {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    StandardStream::stdout(choice)
}

/// Printable form of a byte slice: invalid UTF-8 is replaced and control
/// characters become spaces so every hit stays on one line
pub fn display_bytes(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// Print search hits as `offset:context` lines with the match highlighted
pub fn print_matches(
    text: &[u8],
    positions: &[usize],
    pattern_len: usize,
    context: usize,
    color: bool,
) -> io::Result<()> {
    let mut stdout = stdout(color);

    for &pos in positions {
        let start = pos.saturating_sub(context);
        let end = (pos + pattern_len).min(text.len());
        let after = (end + context).min(text.len());

        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(stdout, "{}", pos)?;
        stdout.reset()?;
        write!(stdout, ":")?;

        write!(stdout, "{}", display_bytes(&text[start..pos]))?;
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
        write!(stdout, "{}", display_bytes(&text[pos..end]))?;
        stdout.reset()?;
        writeln!(stdout, "{}", display_bytes(&text[end..after]))?;
    }

    Ok(())
}

/// Print the suffix array, rank and LCP arrays as a table
pub fn print_arrays(sa: &SuffixArray<u8>, color: bool) -> io::Result<()> {
    let mut stdout = stdout(color);

    stdout.set_color(ColorSpec::new().set_bold(true))?;
    writeln!(stdout, "{:>8} {:>8} {:>8} {:>6}  suffix", "i", "pos", "rank", "lcp")?;
    stdout.reset()?;

    for (i, &p) in sa.pos().iter().enumerate() {
        let suffix = sa.suffix(i);
        let preview = display_bytes(&suffix[..suffix.len().min(PREVIEW_LEN)]);
        let ellipsis = if suffix.len() > PREVIEW_LEN { "..." } else { "" };
        write!(stdout, "{:>8} {:>8} {:>8} ", i, p, sa.rank()[i])?;

        // The first lcp entry has no predecessor
        if i == 0 {
            write!(stdout, "{:>6}", "-")?;
        } else {
            write!(stdout, "{:>6}", sa.lcp()[i])?;
        }

        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        write!(stdout, "  {}{}", preview, ellipsis)?;
        stdout.reset()?;
        writeln!(stdout)?;
    }

    Ok(())
}

/// Index statistics
#[derive(Debug, Clone, Serialize)]
pub struct IndexReport {
    #[serde(flatten)]
    pub meta: IndexMeta,
    pub distinct_substrings: u64,
    /// Suffix tree node count, when the tree was built
    pub tree_nodes: Option<usize>,
}

pub fn print_stats(report: &IndexReport) {
    let meta = &report.meta;
    println!("Index Statistics");
    println!("================");
    println!();
    println!("Text size:           {}", meta.text_size);
    println!("Suffixes:            {}", meta.suffix_count);
    println!("Alphabet size:       {}", meta.alphabet_size);
    println!("Longest repeat:      {}", meta.max_lcp);
    println!("Distinct substrings: {}", report.distinct_substrings);
    println!("Case insensitive:    {}", meta.case_insensitive);
    if let Some(nodes) = report.tree_nodes {
        println!("Suffix tree nodes:   {}", nodes);
    }
}

/// Write `value` to stdout as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, value)?;
    writeln!(handle)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_bytes() {
        assert_eq!(display_bytes(b"a\nb\tc"), "a b c");
        assert_eq!(display_bytes(b"ok\xff"), "ok\u{fffd}");
    }

    #[test]
    fn test_report_json_is_flat() {
        let report = IndexReport {
            meta: IndexMeta {
                text_size: 6,
                suffix_count: 6,
                alphabet_size: 3,
                max_lcp: 3,
                case_insensitive: false,
            },
            distinct_substrings: 15,
            tree_nodes: Some(7),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["text_size"], 6);
        assert_eq!(json["distinct_substrings"], 15);
        assert_eq!(json["tree_nodes"], 7);
    }
}
