// Command-line layer: three positional arguments, no flags. `run` wires
// the payload builder to the API client in the order the tool requires:
// the file is read and encoded before any connection is opened.

use anyhow::{anyhow, Context, Result};
use serde_json::Value;
use std::ffi::OsString;
use std::io::Write;

use crate::api::ApiClient;
use crate::upload::UploadRequest;

/// Positional inputs, forwarded without validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadArgs {
    pub file_path: String,
    pub auth_token: String,
    pub parent_id: String,
}

impl UploadArgs {
    /// Collect `<file_path> <auth_token> <parent_id>` after the program
    /// name. Trailing extras are ignored. Takes raw `OsString`s so a
    /// non-UTF-8 argument is an error rather than a panic.
    pub fn from_args<I>(args: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<OsString>,
    {
        let mut it = args.into_iter().skip(1).map(Into::<OsString>::into);
        let mut next = |label: &str| -> Result<String> {
            let raw = it.next().ok_or_else(|| anyhow!("missing argument {}", label))?;
            raw.into_string()
                .map_err(|raw| anyhow!("argument {} is not valid UTF-8: {:?}", label, raw))
        };
        let file_path = next("<file_path>")?;
        let auth_token = next("<auth_token>")?;
        let parent_id = next("<parent_id>")?;
        Ok(UploadArgs {
            file_path,
            auth_token,
            parent_id,
        })
    }
}

/// Build the upload from disk and send it with `api`. Returns the decoded
/// response body.
pub fn run(args: &UploadArgs, api: ApiClient) -> Result<Value> {
    let req = UploadRequest::from_file(&args.file_path, &args.parent_id)?;
    api.with_token(&args.auth_token).upload_file(&req)
}

/// Write the response as one compact JSON line.
pub fn print_response<W: Write>(out: &mut W, resp: &Value) -> Result<()> {
    writeln!(out, "{}", resp).context("Failed to write response")?;
    Ok(())
}
