pub mod catalog;
pub mod category;
pub mod historical_pick;
pub mod legacy_pick;
pub mod outcome;
pub mod picks;
pub mod points;
pub mod selection_record;
pub mod user_name;

pub use catalog::{Catalog, CategoryEntry};
pub use category::Category;
pub use historical_pick::{HistoricalPick, PickValue};
pub use legacy_pick::{LegacyPick, parse_legacy_pick};
pub use outcome::{Outcome, OutcomeMap};
pub use picks::Picks;
pub use points::{parse_points, total_points};
pub use rust_decimal::Decimal;
pub use selection_record::SelectionRecord;
pub use user_name::UserName;
