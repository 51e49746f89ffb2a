pub mod render;
pub mod row;

pub use render::{Palette, render_frame, render_table};
pub use row::{ContainerRow, StatusClass};

use crate::runtime::ContainerRecord;

/// Rows for one cycle, in the order the runtime returned the containers.
pub fn build_rows(records: &[ContainerRecord]) -> Vec<ContainerRow> {
    records.iter().map(ContainerRow::from_record).collect()
}
