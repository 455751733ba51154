//! Recovery of structured output from malformed model replies.
//!
//! Models asked for JSON often wrap it in markdown fences or bury it in
//! prose. This module peels those layers off and hands back a validated
//! payload, or a recognizable sentinel when there is nothing to salvage.

mod json;

pub use json::{
    extract_first_json, recover_json, remove_end_fence, remove_start_fence, try_recover_json,
    INVALID_JSON_PREFIX,
};
