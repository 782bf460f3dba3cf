//! Region annotation from a deployment resource identifier.
//!
//! Identifiers look like `arn:<vendor>:<service>:<region>:<account>:<resource>`.
//! The region segment is only used to label the client at construction time;
//! it never influences request or response data.

/// Region assumed when the identifier does not match the expected format.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Extract the region segment from a colon-delimited resource identifier.
///
/// Total over all string inputs: anything that is not an `arn:`-scheme
/// identifier with six segments and a non-empty region falls back to
/// [`DEFAULT_REGION`].
pub fn extract_region(arn: &str) -> &str {
    // The trailing resource segment may itself contain colons.
    let parts: Vec<&str> = arn.splitn(6, ':').collect();
    match parts.as_slice() {
        ["arn", _vendor, _service, region, _account, _resource] if !region.is_empty() => region,
        _ => DEFAULT_REGION,
    }
}
