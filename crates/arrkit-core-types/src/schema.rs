//! Canonical schema constants for structured logging and events
//!
//! These constants keep log field names consistent between the emitting
//! macros and the test capture layer.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Collection sizes
pub const FIELD_ITEM_COUNT: &str = "item_count";
pub const FIELD_LIMIT: &str = "limit";
pub const FIELD_RESULT_LEN: &str = "result_len";

// Hashing
pub const FIELD_ORDERLESS: &str = "orderless";
pub const FIELD_KEY_PATH: &str = "key_path";
pub const FIELD_VALUE_KIND: &str = "value_kind";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_UNSUPPORTED_VALUE: &str = "unsupported_value";
