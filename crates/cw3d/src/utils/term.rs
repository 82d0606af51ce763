use owo_colors::OwoColorize as _;
use regex::Regex;
use std::sync::OnceLock;

fn ansi_regex() -> &'static Regex {
  static ANSI_RE: OnceLock<Regex> = OnceLock::new();
  ANSI_RE.get_or_init(|| {
    Regex::new(
      r"(?x)
      \x1B\[[0-?]*[ -/]*[@-~]    # CSI sequence
      |                            # or
      \x1B\][^\x07\x1B]*(?:\x07|\x1B\\)  # OSC sequence terminated by BEL or ST
    ",
    )
    .expect("valid ANSI regex")
  })
}

pub fn strip_ansi_control_codes(input: &str) -> String {
  ansi_regex().replace_all(input, "").into_owned()
}

fn visible_len(s: &str) -> usize {
  strip_ansi_control_codes(s).chars().count()
}

/// Print a simple ASCII table to stdout.
pub fn print_table(headers: &[&str], rows: &[Vec<String>]) {
  anstream::print!("{}", render_table(headers, rows));
}

/// Lay out a table with one space between columns.
/// Column widths are derived from headers and the visible length of cells.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
  let cols = headers.len();
  let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
  for row in rows {
    for (i, cell) in row.iter().enumerate().take(cols) {
      widths[i] = widths[i].max(visible_len(cell));
    }
  }

  let mut out = String::new();
  let mut header_line = String::new();
  for (i, text) in headers.iter().enumerate() {
    header_line.push_str(text);
    if i + 1 < cols {
      header_line.push_str(&" ".repeat(widths[i].saturating_sub(text.len()) + 1));
    }
  }
  out.push_str(&header_line.dimmed().to_string());
  out.push('\n');

  for row in rows {
    let mut line = String::new();
    for (i, cell) in row.iter().enumerate().take(cols) {
      line.push_str(cell);
      if i + 1 < cols {
        line.push_str(&" ".repeat(widths[i].saturating_sub(visible_len(cell)) + 1));
      }
    }
    out.push_str(line.trim_end());
    out.push('\n');
  }
  out
}
