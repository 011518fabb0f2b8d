use crate::config::model::{Config, MissingMarkerPolicy};
use crate::lives::model::parse_live_date;
use chrono::NaiveDate;
use std::env;
use std::path::PathBuf;

const WORKSPACE_VAR: &str = "GITHUB_WORKSPACE";
const MISSING_MARKERS_VAR: &str = "LIVE_MISSING_MARKERS";
const ESCAPE_HTML_VAR: &str = "LIVE_ESCAPE_HTML";
const TODAY_VAR: &str = "LIVE_TODAY";

pub fn load_config() -> Config {
    load_config_with(|name| env::var(name).ok())
}

pub fn load_config_with<F>(lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    let workspace = lookup(WORKSPACE_VAR)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));

    Config {
        workspace,
        missing_marker_policy: load_policy_config(&lookup, MISSING_MARKERS_VAR),
        escape_html: load_bool_config(&lookup, ESCAPE_HTML_VAR, false),
        today: load_date_config(&lookup, TODAY_VAR),
    }
}

fn load_policy_config<F>(lookup: &F, name: &str) -> MissingMarkerPolicy
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) => value.parse().unwrap_or_else(|_| {
            panic!(
                "Invalid config '{}'. Expected either 'ignore' or 'error'",
                name
            )
        }),
        None => MissingMarkerPolicy::default(),
    }
}

fn load_bool_config<F>(lookup: &F, name: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .unwrap_or_else(|| default.to_string())
        .parse()
        .unwrap_or_else(|_| {
            panic!(
                "Invalid config '{}'. Expected either 'true' or 'false'",
                name
            )
        })
}

fn load_date_config<F>(lookup: &F, name: &str) -> Option<NaiveDate>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).filter(|value| !value.is_empty()).map(|value| {
        parse_live_date(&value).unwrap_or_else(|| {
            panic!("Invalid config '{}'. Expected a YYYY-MM-DD date.", name)
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load_from(vars: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        load_config_with(|name| vars.get(name).cloned())
    }

    #[test_log::test]
    fn when_nothing_is_set_should_use_defaults() {
        let config = load_from(&[]);

        assert_eq!(config.workspace, PathBuf::from("."));
        assert_eq!(config.missing_marker_policy, MissingMarkerPolicy::Ignore);
        assert!(!config.escape_html);
        assert_eq!(config.today, None);
        assert_eq!(config.lives_path(), PathBuf::from("./lives.json"));
        assert_eq!(config.live_page_path(), PathBuf::from("./live.html"));
    }

    #[test_log::test]
    fn should_locate_files_under_workspace() {
        let config = load_from(&[("GITHUB_WORKSPACE", "/srv/site")]);

        assert_eq!(config.lives_path(), PathBuf::from("/srv/site/lives.json"));
        assert_eq!(config.live_page_path(), PathBuf::from("/srv/site/live.html"));
    }

    #[test_log::test]
    fn should_read_every_option() {
        let config = load_from(&[
            ("LIVE_MISSING_MARKERS", "Error"),
            ("LIVE_ESCAPE_HTML", "true"),
            ("LIVE_TODAY", "2024-06-01"),
        ]);

        assert_eq!(config.missing_marker_policy, MissingMarkerPolicy::Error);
        assert!(config.escape_html);
        assert_eq!(config.today, NaiveDate::from_ymd_opt(2024, 6, 1));
    }

    #[test_log::test]
    fn when_variables_are_empty_should_use_defaults() {
        let config = load_from(&[("GITHUB_WORKSPACE", ""), ("LIVE_TODAY", "")]);

        assert_eq!(config.workspace, PathBuf::from("."));
        assert_eq!(config.today, None);
    }

    #[test]
    #[should_panic(expected = "LIVE_MISSING_MARKERS")]
    fn when_policy_is_unknown_should_panic() {
        load_from(&[("LIVE_MISSING_MARKERS", "sometimes")]);
    }

    #[test]
    #[should_panic(expected = "LIVE_TODAY")]
    fn when_today_is_not_padded_should_panic() {
        load_from(&[("LIVE_TODAY", "2024-6-1")]);
    }
}
