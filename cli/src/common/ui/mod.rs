//! # Chatrs UI Utilities Module (`common::ui`)
//!
//! File: cli/src/common/ui/mod.rs
//!
//! ## Overview
//!
//! Terminal presentation helpers shared by the commands:
//!
//! - **`prompts`**: Reading lines, writing prompts, yes/no confirmation.
//! - **`rule`** / **`heading`**: Horizontal rules and framed headings used by banners.
//! - **`table`**: A plain two-column table, used by `chatrs patterns`.
//!
pub mod prompts;

/// Width of banners and rules.
pub const WIDTH: usize = 70;

/// A horizontal rule of `ch`, [`WIDTH`] characters wide.
pub fn rule(ch: char) -> String {
    std::iter::repeat(ch).take(WIDTH).collect()
}

/// `title` framed by `=` rules above and below.
pub fn heading(title: &str) -> String {
    let line = rule('=');
    format!("{line}\n{title}\n{line}")
}

/// Formats `rows` as a left-aligned two-column table with a header.
///
/// The first column is padded to its widest cell; the separator under the
/// header spans the widest cell of each column.
pub fn table(headers: (&str, &str), rows: &[(String, String)]) -> String {
    let width = rows
        .iter()
        .map(|(left, _)| left.chars().count())
        .chain(std::iter::once(headers.0.chars().count()))
        .max()
        .unwrap_or(0);
    let right_width = rows
        .iter()
        .map(|(_, right)| right.chars().count())
        .chain(std::iter::once(headers.1.chars().count()))
        .max()
        .unwrap_or(0);

    let mut out = format!("{:<width$} | {}\n", headers.0, headers.1);
    out.push_str(&format!(
        "{}-+-{}\n",
        "-".repeat(width),
        "-".repeat(right_width)
    ));
    for (left, right) in rows {
        out.push_str(&format!("{:<width$} | {}\n", left, right));
    }
    out
}
