//! Markup contract names and defaults shared across the controllers.

// ── Persistence ─────────────────────────────────────────────────

/// `localStorage` key under which the whole likes map is stored.
pub const STORAGE_KEY: &str = "likenet_likes_v1";

// ── Layout ──────────────────────────────────────────────────────

/// Viewport widths at or below this value (CSS pixels) use the mobile nav.
pub const MOBILE_BREAKPOINT_PX: f64 = 800.0;

// ── Class names ─────────────────────────────────────────────────

pub const SITE_HEADER_CLASS: &str = "site-header";
pub const NAV_TOGGLE_CLASS: &str = "nav-toggle";
pub const MAIN_NAV_CLASS: &str = "main-nav";
pub const DROPDOWN_BUTTON_CLASS: &str = "dropdown-btn";
pub const DROPDOWN_MENU_CLASS: &str = "dropdown";
pub const LIKE_BUTTON_CLASS: &str = "like-btn";
pub const LIKE_COUNT_CLASS: &str = "like-count";

// ── Attributes ──────────────────────────────────────────────────

pub const ATTR_EXPANDED: &str = "aria-expanded";
pub const ATTR_CONTROLS: &str = "aria-controls";
pub const ATTR_PRESSED: &str = "aria-pressed";
pub const ATTR_LIKE_ID: &str = "data-id";

// ── Element ids ─────────────────────────────────────────────────

/// Footer element that receives the current year.
pub const YEAR_ELEMENT_ID: &str = "year";

/// Inline `application/json` script holding page config overrides.
pub const CONFIG_ELEMENT_ID: &str = "likenet-config";
