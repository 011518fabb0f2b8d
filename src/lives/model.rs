use crate::lives::dto::LiveRecord;
use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_DATE_FORMAT: &str = "%Y/%m/%d";

lazy_static! {
    // chrono alone accepts unpadded months and days
    static ref STRICT_DATE: Regex =
        Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("Failed to create date regex");
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledLive {
    pub date: NaiveDate,
    pub record: LiveRecord,
}

impl ScheduledLive {
    pub fn from_record(record: LiveRecord) -> Option<Self> {
        parse_live_date(&record.date).map(|date| Self { date, record })
    }

    pub fn display_date(&self) -> String {
        self.date.format(DISPLAY_DATE_FORMAT).to_string()
    }
}

/// Parses a zero-padded `YYYY-MM-DD` date, rejecting anything else
pub fn parse_live_date(date: &str) -> Option<NaiveDate> {
    if !STRICT_DATE.is_match(date) {
        return None;
    }

    NaiveDate::parse_from_str(date, DATE_FORMAT).ok()
}
