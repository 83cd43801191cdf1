use std::fmt::Write as _;

/// Render rows as a plain-text table with columns padded to their widest
/// cell, two spaces between columns, and a dash rule under the header.
pub fn render_table(rows: &[Vec<String>], header: Option<&[&str]>) -> String {
    let mut all: Vec<Vec<String>> = Vec::with_capacity(rows.len() + 1);
    if let Some(h) = header {
        all.push(h.iter().map(|s| (*s).to_string()).collect());
    }
    all.extend(rows.iter().cloned());

    let ncols = all.first().map_or(0, Vec::len);
    let mut widths = vec![0usize; ncols];
    for row in &all {
        for (i, cell) in row.iter().enumerate() {
            if cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    let mut out = String::new();
    for (idx, row) in all.iter().enumerate() {
        let line: Vec<String> = row
            .iter()
            .enumerate()
            .map(|(i, cell)| format!("{:<width$}", cell, width = widths[i]))
            .collect();
        let _ = writeln!(&mut out, "{}", line.join("  ").trim_end());
        if header.is_some() && idx == 0 {
            let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
            let _ = writeln!(&mut out, "{}", rule.join("  "));
        }
    }
    out
}
