use crate::config::model::MissingMarkerPolicy;
use lazy_static::lazy_static;
use regex::{NoExpand, Regex};
use thiserror::Error;
use tracing::warn;

pub const START_MARKER: &str = "<!-- LIVE_LIST_START -->";
pub const END_MARKER: &str = "<!-- LIVE_LIST_END -->";

lazy_static! {
    static ref LIVE_LIST_REGION: Regex = Regex::new(&format!(
        "(?s){}.*?{}",
        regex::escape(START_MARKER),
        regex::escape(END_MARKER)
    ))
    .expect("Failed to create live list region regex");
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpliceError {
    #[error("live list markers not found")]
    MarkersNotFound,
}

/// Replaces the first marker-bounded region of `document`, markers included,
/// with `fragment` wrapped in fresh markers.
pub fn splice_live_list(
    document: &str,
    fragment: &str,
    policy: MissingMarkerPolicy,
) -> Result<String, SpliceError> {
    if !LIVE_LIST_REGION.is_match(document) {
        return match policy {
            MissingMarkerPolicy::Ignore => {
                warn!("Live list markers not found. Leaving document unchanged.");
                Ok(document.to_string())
            }
            MissingMarkerPolicy::Error => Err(SpliceError::MarkersNotFound),
        };
    }

    let replacement = format!("{}\n{}\n{}", START_MARKER, fragment, END_MARKER);

    Ok(LIVE_LIST_REGION
        .replacen(document, 1, NoExpand(replacement.as_str()))
        .into_owned())
}
