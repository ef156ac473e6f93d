/// Currency every quote is normalized into unless configured otherwise
pub const DEFAULT_REFERENCE_CURRENCY: &str = "USD";

/// Currency assigned to vendors created without one
pub const DEFAULT_VENDOR_CURRENCY: &str = "USD";

/// ISO 4217 alphabetic codes are exactly this long
pub const CURRENCY_CODE_LEN: usize = 3;
