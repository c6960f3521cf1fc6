//! A small grid table renderer with multi-line cells.

/// Text table drawn with `+`, `-`, `=` and `|` borders.
#[derive(Debug, Clone, Default)]
pub struct TextTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TextTable {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Add a row. Missing cells render empty; extra cells are ignored.
    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row: Vec<String> = cells
            .into_iter()
            .map(Into::into)
            .take(self.headers.len())
            .collect();
        row.resize(self.headers.len(), String::new());
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let separator = border(&widths, '-');

        let mut out = vec![separator.clone()];
        out.extend(render_row(&self.headers, &widths));
        out.push(border(&widths, '='));
        for row in &self.rows {
            out.extend(render_row(row, &widths));
            out.push(separator.clone());
        }
        out.join("\n")
    }

    fn column_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(col, header)| {
                self.rows
                    .iter()
                    .flat_map(|row| row[col].lines())
                    .chain(std::iter::once(header.as_str()))
                    .map(|line| line.chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

fn border(widths: &[usize], fill: char) -> String {
    let mut line = String::from("+");
    for width in widths {
        line.extend(std::iter::repeat(fill).take(width + 2));
        line.push('+');
    }
    line
}

fn render_row(cells: &[String], widths: &[usize]) -> Vec<String> {
    let cell_lines: Vec<Vec<&str>> = cells.iter().map(|c| c.lines().collect()).collect();
    let height = cell_lines.iter().map(Vec::len).max().unwrap_or(0).max(1);

    (0..height)
        .map(|i| {
            let mut line = String::from("|");
            for (lines, width) in cell_lines.iter().zip(widths) {
                let text = lines.get(i).copied().unwrap_or("");
                let pad = width - text.chars().count();
                line.push(' ');
                line.push_str(text);
                line.extend(std::iter::repeat(' ').take(pad + 1));
                line.push('|');
            }
            line
        })
        .collect()
}
