//! Quote index — maps a minute-resolution time key to a literary quotation.
//!
//! The index is built once at startup from a CSV table and is read-only
//! afterwards. Lookup is exact-string on the key for the current minute;
//! when no entry exists the reserved midnight fallback key is tried before
//! reporting a miss. There is no range or nearest-time matching.

mod index;
mod record;
mod time_key;

pub use index::{QuoteError, QuoteIndex};
pub use record::QuoteRecord;
pub use time_key::TimeKey;
