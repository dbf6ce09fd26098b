//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

/// Height of the header line (title and status counts).
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the filter bar in lines (border + content).
pub const FILTER_BAR_HEIGHT: u16 = 3;

/// Height of the charts row in lines, borders included.
pub const CHARTS_HEIGHT: u16 = 10;

/// Terminals shorter than this drop the charts row so the table stays usable.
pub const MIN_HEIGHT_FOR_CHARTS: u16 = 24;

/// Height of the status bar in lines.
///
/// Single line for key hints, load status and rejected-entry count.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width percentage of the detail viewer when a record is selected.
pub const DETAIL_WIDTH_PERCENT: u16 = 45;

/// Lines taken by the command table besides its rows (two borders, header).
pub const TABLE_CHROME_HEIGHT: u16 = 3;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 60;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;
