/// Removes one pair of matching single or double quotes around `s`.
#[inline]
pub fn strip_surrounding_quotes(s: &str) -> &str {
    for q in ['"', '\''] {
        if let Some(inner) = s.strip_prefix(q).and_then(|rest| rest.strip_suffix(q)) {
            return inner;
        }
    }
    s
}

/// Splits one comma-separated line into trimmed, unquoted cells.
///
/// Commas inside single or double quotes do not split. A trailing comma
/// yields a trailing empty cell, so a short row stays detectable.
pub fn split_cells(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut cur = String::new();
    let mut in_quotes: Option<char> = None;

    for ch in line.chars() {
        match in_quotes {
            Some(q) if ch == q => {
                in_quotes = None;
                cur.push(ch);
            }
            Some(_) => cur.push(ch),
            None if ch == '"' || ch == '\'' => {
                in_quotes = Some(ch);
                cur.push(ch);
            }
            None if ch == ',' => {
                cells.push(strip_surrounding_quotes(cur.trim()).to_string());
                cur.clear();
            }
            None => cur.push(ch),
        }
    }
    cells.push(strip_surrounding_quotes(cur.trim()).to_string());
    cells
}
