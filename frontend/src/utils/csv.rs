fn needs_formula_guard(value: &str) -> bool {
    matches!(value.chars().next(), Some('=' | '+' | '-' | '@'))
}

fn escape_cell(value: &str) -> String {
    let mut sanitized = value.replace('"', "\"\"");
    if needs_formula_guard(&sanitized) {
        sanitized.insert(0, '\'');
    }
    format!("\"{}\"", sanitized)
}

pub fn append_csv_row<S: AsRef<str>>(buffer: &mut String, fields: &[S]) {
    for (idx, field) in fields.iter().enumerate() {
        if idx > 0 {
            buffer.push(',');
        }
        buffer.push_str(&escape_cell(field.as_ref()));
    }
    buffer.push('\n');
}

/// Header line followed by one line per row.
pub fn build_csv<I>(headers: &[&str], rows: I) -> String
where
    I: IntoIterator<Item = Vec<String>>,
{
    let mut buffer = String::new();
    append_csv_row(&mut buffer, headers);
    for row in rows {
        append_csv_row(&mut buffer, &row);
    }
    buffer
}
