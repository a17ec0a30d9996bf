//! Table names and embedded-select clauses of the hosted catalog schema.
//!
//! `f_` tables hold facts, `d_` tables are dimensions and `b_` tables are
//! bridge (link) tables.

pub const COINS_TABLE: &str = "f_coins";
pub const CATEGORIES_TABLE: &str = "d_categories";
pub const COUNTRIES_TABLE: &str = "d_countries";
pub const PERIODS_COUNTRIES_TABLE: &str = "b_periods_countries";

/// Coin with all of its dimensions. `!inner` drops coins whose period does not resolve.
pub const COIN_DETAIL_SELECT: &str = "*,\
d_period!inner(period_name,period_link),\
d_series(series_name,series_link,series_range),\
d_categories(type_id,type_name),\
d_denominations(denomination_name)";

/// Coin with the dimensions shown on gallery cards
pub const COIN_LIST_SELECT: &str = "*,\
d_denominations(denomination_name),\
d_categories(type_id,type_name)";

pub const CATEGORY_SELECT: &str = "type_id,type_name";
