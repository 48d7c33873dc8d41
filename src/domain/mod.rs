//! Domain layer - Journal entries, validation and weekly aggregation

pub mod category;
pub mod entry;
pub mod features;
pub mod summary;
pub mod validation;
pub mod week;

pub use category::{Category, CategorySet};
pub use entry::JournalEntry;
pub use features::{derive_features, DerivedEntry};
pub use summary::{summarize, PivotTable, WeeklyCategorySummary};
pub use validation::{validate, OverlapCheck, ValidationError, Violation, ViolationKind};
pub use week::WeekStart;
