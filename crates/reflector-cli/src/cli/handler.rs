//! Request routing: picks the outcome for a flattened request.

use reflector_core::{AttributeStore, Outcome};

pub const GOOGLE_LOCATION: &str = "https://www.google.com/";
pub const GOLANG_LOCATION: &str = "https://www.golang.org/";

pub fn route(ar: &AttributeStore) -> Outcome {
    let ret = ar.get("query.ret");
    let redir = ar.get("query.redir");

    match (ret.as_str(), redir.as_str()) {
        ("503", _) => Outcome::error("regex503", "invalid input request"),
        ("404", _) => Outcome::error("notFound", "requested object not found"),
        (_, "123") => Outcome::redirect(GOOGLE_LOCATION),
        (_, "456") => Outcome::redirect(GOLANG_LOCATION),
        _ if ar.get("query.type") == "all" => match ar.to_json() {
            Ok(body) => Outcome::success(String::from_utf8_lossy(&body)),
            Err(e) => {
                tracing::debug!(error = %e, "attribute dump failed");
                Outcome::success(" ")
            }
        },
        _ => Outcome::success(ar.get("sourceip")),
    }
}
