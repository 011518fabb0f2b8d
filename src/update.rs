use crate::config::model::Config;
use crate::lives::loader::load_lives;
use crate::lives::render::{render_live_list, RenderOptions};
use crate::page::document::{update_live_page, PageError};
use chrono::{Local, NaiveDate};
use tracing::info;

pub fn run_update(config: &Config) -> Result<(), PageError> {
    let today = config.today.unwrap_or_else(|| Local::now().date_naive());

    run_update_on(config, today)
}

pub fn run_update_on(config: &Config, today: NaiveDate) -> Result<(), PageError> {
    info!("Starting live info update for {}", today);

    let lives = load_lives(&config.lives_path());
    let html = render_live_list(
        &lives,
        today,
        RenderOptions {
            escape_html: config.escape_html,
        },
    );

    update_live_page(
        &config.live_page_path(),
        &html,
        config.missing_marker_policy,
    )
}
