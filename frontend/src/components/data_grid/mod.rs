pub mod column;
pub mod model;
pub mod view;

pub use column::Column;
pub use model::{CellValue, SortCycle};
pub use view::{DataTable, GridConfig};
