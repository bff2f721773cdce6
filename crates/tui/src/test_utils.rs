//! Helpers shared by the rendering tests.

use ratatui::buffer::Buffer;

/// Renders `buf` as text, one line per row, with trailing spaces removed.
#[must_use]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    let mut out = String::new();
    for y in buf.area.top()..buf.area.bottom() {
        let row: String = (buf.area.left()..buf.area.right())
            .filter_map(|x| buf.cell((x, y)).map(|cell| cell.symbol()))
            .collect();
        out.push_str(row.trim_end_matches(' '));
        out.push('\n');
    }
    out
}

/// Returns the text of row `y` of `buf`.
#[must_use]
pub(crate) fn row_text(buf: &Buffer, y: u16) -> String {
    (buf.area.left()..buf.area.right())
        .filter_map(|x| buf.cell((x, y)).map(|cell| cell.symbol()))
        .collect()
}
