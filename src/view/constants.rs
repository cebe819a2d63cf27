//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the application.

use std::time::Duration;

/// Height of the header line (title, module count, session mode).
pub const HEADER_HEIGHT: u16 = 1;

/// Height of the search input widget in lines (border + text).
pub const SEARCH_INPUT_HEIGHT: u16 = 3;

/// Height of the pager line below the results.
pub const PAGER_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
///
/// Single line for key hints.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Width of the registration date column in the result list.
///
/// Fits `"22 May 2013 09:41:23"`.
pub const DATE_COLUMN_WIDTH: u16 = 20;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;

/// Width percentage for dialogs and forms.
pub const MODAL_WIDTH_PERCENT: u16 = 60;

/// Event poll interval. Completed requests are drained at least this often.
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);
