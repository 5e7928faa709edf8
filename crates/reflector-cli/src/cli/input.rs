use anyhow::Context;
use std::io::Read;

/// Resolves the request argument: `-` reads the document from `stdin`, anything
/// else is the document itself.
pub(crate) fn read_request<R: Read>(arg: &str, mut stdin: R) -> anyhow::Result<Vec<u8>> {
    if arg != "-" {
        return Ok(arg.as_bytes().to_vec());
    }
    let mut buf = Vec::new();
    stdin
        .read_to_end(&mut buf)
        .context("failed to read request from stdin")?;
    Ok(buf)
}
