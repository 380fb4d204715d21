use console::style;
use std::backtrace::BacktraceStatus;

pub fn print_error(e: anyhow::Error) {
    for e in e.chain().rev() {
        eprintln!("{}{} {}", style("error").red().bold(), style(":").white().bold(), e);
    }
    let bt = e.backtrace();
    if bt.status() == BacktraceStatus::Captured {
        eprintln!("error backtrace:");
        eprintln!("{bt}");
    }
}

/// Parses sizes like `128K` or `1Mi` with binary multiples.
pub fn parse_size(s: &str) -> Result<usize, String> {
    let size = parse_size::Config::new()
        .with_binary()
        .parse_size(s)
        .map_err(|e| e.to_string())?;
    usize::try_from(size).map_err(|_| format!("size {size} does not fit in this platform's usize"))
}
