pub mod format;
pub mod frequency;
pub mod summary;

pub use frequency::{FrequencyTable, PieChart, PieSlice};
pub use summary::{PropertyLookup, PropertySummary};
