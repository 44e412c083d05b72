// Centralized magic numbers & default values

/// Base64 text of the 16x16 shopping-bag favicon, wrapped at 76 columns.
pub const FAVICON_BASE64: &str = "\
iVBORw0KGgoAAAANSUhEUgAAABAAAAAQCAYAAAAf8/9hAAAACXBIWXMAAAsTAAALEwEAmpwYAAAB\n\
8ElEQVQ4jY2TTUhUURTHf+e+N++NM6OjYzqaH5GVFkVFRLQIWrRoUdCiTZsWQS2CaBG0aNOiRYug\n\
RdCmRUGLFi1aBC2KqCgiLfqwLMvKykZHZ3zvvXtvizfjODra/8+55/zOPffcK/yHRKvpdDqNiKBU\n\
q/5m5d8WbrcbEaHVVKslSZJIJpMYhkEikUApRSqVwjAMTNPEMAx0Xce2bXRdR9d1bNsmFAqRSCSw\n\
bRulFJZlYVkWlmVhGAaGYWDbNrZtY5ompmliWRaWZaGUQimFUgrbtrFtG8MwME0T0zQxDAPDMDBN\n\
E9M0sSwLy7KwbRvbtlFKoZRCREgmkyilMAyDZDKJYRgkk0lM0ySZTGKaJslkEsMwSCaTGIZBMplE\n\
KYVSCqUUSimUUiilUEqhlEIphVIKpRRKKZRSKKVQSqGUQimFUgqlFEoplFIopVBKoZRCRGg1x3Fw\n\
HAcRwXEcHMfBcRwcx8FxHBzHwXEcHMfBcRwcx8FxHBzHwXEcHMfBcRwcx8FxHBzHwXEcHMeh1WKx\n\
GKFQiFAoRCgUIhQKEQqFCIVChEIhQqEQoVCIUChEKBQiFAoRCoUIhUKEQiFCoRChUIhQKEQoFCIU\n\
ChEKhWhERGg027ZxHIdGRYS/+3j8B/4AN3ZIgWC3iN4AAAAASUVORK5CYII=";

pub const DEFAULT_OUTPUT_PATH: &str = "favicon.ico";
pub const CONFIRMATION_MESSAGE: &str = "favicon.ico created successfully!";
pub const DEFAULT_LOG_FILTER: &str = "warn";

pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
/// ICONDIR header: reserved word 0, type word 1 (icon).
pub const ICO_SIGNATURE: [u8; 4] = [0x00, 0x00, 0x01, 0x00];
