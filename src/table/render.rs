use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};
use tabled::{builder::Builder, settings::Style};

use super::row::{ContainerRow, StatusClass};

pub const COLOR_RESET: &str = "\x1b[0m";
pub const COLOR_RED: &str = "\x1b[31m";
pub const COLOR_GREEN: &str = "\x1b[32m";

pub const HEADER: [&str; 6] = ["ID", "Image", "Port", "Created", "Status", "Names"];

/// How a [`StatusClass`] is encoded in the status cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    #[default]
    Ansi,
    Plain,
}

impl Palette {
    pub fn paint(&self, text: &str, class: StatusClass) -> String {
        match self {
            Palette::Plain => text.to_string(),
            Palette::Ansi => {
                let color = match class {
                    StatusClass::Up => COLOR_GREEN,
                    StatusClass::Down => COLOR_RED,
                };
                format!("{}{}{}", color, text, COLOR_RESET)
            }
        }
    }
}

/// Render rows as a light box-drawing table with a separator between every row.
pub fn render_table(rows: &[ContainerRow], palette: Palette) -> String {
    let mut builder = Builder::default();
    builder.push_record(HEADER);

    for row in rows {
        builder.push_record([
            row.id.clone(),
            row.image.clone(),
            row.port.clone(),
            row.created.clone(),
            palette.paint(&row.status, row.status_class),
            row.name.clone(),
        ]);
    }

    let mut table = builder.build();
    table.with(Style::modern());
    table.to_string()
}

/// Cursor home followed by clear screen.
pub fn clear_sequence() -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    queue!(buf, MoveTo(0, 0), Clear(ClearType::All))?;
    Ok(buf)
}

/// A full screen update: clear sequence, table, trailing newline.
pub fn render_frame(rows: &[ContainerRow], palette: Palette) -> std::io::Result<Vec<u8>> {
    let mut frame = clear_sequence()?;
    frame.extend_from_slice(render_table(rows, palette).as_bytes());
    frame.push(b'\n');
    Ok(frame)
}
