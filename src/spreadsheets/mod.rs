pub mod export_xlsx;

pub use export_xlsx::{analysis_workbook, export_analysis_xlsx};
