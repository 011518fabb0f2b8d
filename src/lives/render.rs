use crate::lives::dto::LiveRecord;
use crate::lives::model::ScheduledLive;
use chrono::NaiveDate;
use itertools::Itertools;
use std::borrow::Cow;
use tracing::{debug, instrument, warn};

pub const NO_LIVES_HTML: &str = "<p>現在、表示できるライブ情報はありません。</p>";

const CARD_STYLE: &str = "border: 1px solid #ddd; padding: 15px; margin-bottom: 20px; border-radius: 5px;";
const IMAGE_STYLE: &str = "max-width: 300px; width: 100%; border-radius: 5px; margin-bottom: 10px;";

#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    pub escape_html: bool,
}

/// Renders every live happening on or after `today`, nearest first.
///
/// Lives sharing a date keep their input order. Lives with an invalid
/// or past date are left out. Returns [`NO_LIVES_HTML`] when nothing is left.
#[instrument(skip(lives), fields(lives = lives.len()))]
pub fn render_live_list(lives: &[LiveRecord], today: NaiveDate, options: RenderOptions) -> String {
    let upcoming = upcoming_lives(lives, today);

    if upcoming.is_empty() {
        return NO_LIVES_HTML.to_string();
    }

    upcoming
        .iter()
        .map(|live| render_live_card(live, options))
        .join("\n")
}

pub fn upcoming_lives(lives: &[LiveRecord], today: NaiveDate) -> Vec<ScheduledLive> {
    lives
        .iter()
        .filter_map(|record| match ScheduledLive::from_record(record.clone()) {
            Some(live) if live.date >= today => Some(live),
            Some(live) => {
                warn!(
                    "Skipping past event: {} - {}",
                    live.record.date, live.record.title
                );
                None
            }
            None => {
                warn!("Skipping invalid date: {}", record.date);
                None
            }
        })
        .sorted_by_key(|live| live.date)
        .collect()
}

pub fn render_live_card(live: &ScheduledLive, options: RenderOptions) -> String {
    let record = &live.record;
    let field = |value: &str| -> String {
        if options.escape_html {
            html_escape(value).into_owned()
        } else {
            value.to_string()
        }
    };

    debug!(link = %record.link, "Rendering live '{}'", record.title);

    let title = field(&record.title);
    let image = if record.image.is_empty() {
        String::new()
    } else {
        format!(
            r#"<img src="{}" alt="{}" style="{}">"#,
            field(&record.image),
            title,
            IMAGE_STYLE
        )
    };

    format!(
        r#"
        <div style="{style}">
            <h3>{date} @ {place}</h3>
            {image}
            <h4>{title}</h4>
            <p>{act}</p>
            <p>🚃 {access}</p>
            <p>⏰ 開場/開演 {open_start}</p>
            <p>🎫 {ticket}</p>
        </div>
        "#,
        style = CARD_STYLE,
        date = live.display_date(),
        place = field(&record.place),
        image = image,
        title = title,
        act = field(&record.act),
        access = field(&record.access),
        open_start = field(&record.open_start),
        ticket = field(&record.ticket),
    )
}

fn html_escape(value: &str) -> Cow<'_, str> {
    if !value.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(value);
    }

    Cow::Owned(
        value
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&#39;"),
    )
}
