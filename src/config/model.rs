use chrono::NaiveDate;
use std::path::PathBuf;

pub const LIVES_FILE_NAME: &str = "lives.json";
pub const LIVE_PAGE_FILE_NAME: &str = "live.html";

#[derive(Debug, Clone)]
pub struct Config {
    pub workspace: PathBuf,
    pub missing_marker_policy: MissingMarkerPolicy,
    pub escape_html: bool,
    pub today: Option<NaiveDate>,
}

impl Config {
    pub fn lives_path(&self) -> PathBuf {
        self.workspace.join(LIVES_FILE_NAME)
    }

    pub fn live_page_path(&self) -> PathBuf {
        self.workspace.join(LIVE_PAGE_FILE_NAME)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            workspace: PathBuf::from("."),
            missing_marker_policy: MissingMarkerPolicy::default(),
            escape_html: false,
            today: None,
        }
    }
}

/// What to do when the live page has no marker-bounded region
#[derive(strum::EnumString, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum MissingMarkerPolicy {
    #[default]
    Ignore,
    Error,
}
