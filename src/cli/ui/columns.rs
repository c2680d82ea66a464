//! Fixed-width column layout with word wrapping.

use crate::errors::MenuError;

/// How a column's raw text is interpreted before it is laid out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    String,
    Integer,
    Float,
}

/// A column header plus its signed width: positive widths right-justify,
/// negative widths left-justify, the magnitude is the character width.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnSpec {
    width: i32,
    kind: ColumnKind,
    label: String,
}

impl ColumnSpec {
    pub fn new(width: i32, kind: ColumnKind, label: impl Into<String>) -> Result<Self, MenuError> {
        let label = label.into();
        if width == 0 {
            return Err(MenuError::InvalidColumnSpec(format!(
                "column `{label}` has zero width"
            )));
        }
        Ok(Self { width, kind, label })
    }

    pub fn abs_width(&self) -> usize {
        self.width.unsigned_abs() as usize
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Pads `text` to the column width on the side given by the width's sign.
    /// Text longer than the width is left as is.
    pub fn justify(&self, text: &str) -> String {
        let width = self.abs_width();
        if self.width > 0 {
            format!("{text:>width$}")
        } else {
            format!("{text:<width$}")
        }
    }

    /// Normalizes numeric cells; text that does not parse is shown unchanged.
    pub fn format_value(&self, raw: &str) -> String {
        match self.kind {
            ColumnKind::String => raw.to_string(),
            ColumnKind::Integer => raw
                .trim()
                .parse::<i64>()
                .map(|value| value.to_string())
                .unwrap_or_else(|_| raw.to_string()),
            ColumnKind::Float => raw
                .trim()
                .parse::<f64>()
                .map(|value| format!("{value:.2}"))
                .unwrap_or_else(|_| raw.to_string()),
        }
    }
}

/// Splits `text` into lines no wider than `width` without breaking words.
/// A single word longer than `width` gets a line of its own and overflows.
pub fn wrap_text(text: &str, width: usize) -> Result<Vec<String>, MenuError> {
    if width == 0 {
        return Err(MenuError::InvalidColumnSpec(
            "cannot wrap text into a zero-width column".into(),
        ));
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current_len > 0 && current_len + word_len > width {
            lines.push(current.trim_end().to_string());
            current.clear();
            current_len = 0;
        }
        current.push_str(word);
        current.push(' ');
        current_len += word_len + 1;
    }

    if current_len > 0 || lines.is_empty() {
        lines.push(current.trim_end().to_string());
    }
    Ok(lines)
}

/// Number of rendered lines for a row: the longest column's fragment count.
pub fn row_height(columns: &[Vec<String>]) -> usize {
    columns.iter().map(Vec::len).max().unwrap_or(0)
}

/// Wraps each cell into its column and pads every column with empty
/// fragments so all of them contribute exactly the row height.
pub fn wrap_row(cells: &[String], widths: &[usize]) -> Result<Vec<Vec<String>>, MenuError> {
    let mut columns = widths
        .iter()
        .enumerate()
        .map(|(idx, width)| {
            let text = cells.get(idx).map(String::as_str).unwrap_or("");
            wrap_text(text, *width)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let height = row_height(&columns);
    for fragments in &mut columns {
        fragments.resize(height, String::new());
    }
    Ok(columns)
}
