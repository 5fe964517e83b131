// Library root
// -----------
// The binary (`main.rs`) is a thin wrapper over these modules.
//
// Module responsibilities:
// - `upload`: builds the JSON upload payload from a file on disk.
// - `api`: the HTTP client for the storage service's `/files` route.
// - `cli`: positional argument handling and the read-then-send flow.
// - `logger`: stderr diagnostics.
pub mod api;
pub mod cli;
pub mod logger;
pub mod upload;
