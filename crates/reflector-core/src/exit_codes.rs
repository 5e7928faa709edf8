//! Exit codes read by the gateway wrapper.
//! These codes are part of the public contract: the wrapper maps them to HTTP responses.

pub const SUCCESS: i32 = 0; // Body is the response
pub const REDIRECT: i32 = 1; // Body is a redirect location
pub const STRUCTURED_ERROR: i32 = 2; // Body is {"errCode", "errMessage"}
