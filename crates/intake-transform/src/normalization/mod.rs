//! Cell normalization and type coercion.
//!
//! - **text**: trimmed text and case-insensitive enumerations
//! - **datetime**: multi-layout calendar date parsing with two-digit year pivot
//! - **numeric**: exact decimal amounts with currency and accounting notation
//! - **boolean**: yes/no style flags
//! - **state**: US state name to postal code

pub mod boolean;
pub mod datetime;
pub mod numeric;
pub mod state;
pub mod text;

// Re-export commonly used items
pub use boolean::parse_bool;
pub use datetime::{is_date, parse_date};
pub use numeric::{is_numeric, normalize_numeric, parse_numeric};
pub use state::{normalize_us_state, us_state_code};
pub use text::{parse_enum, to_text};
