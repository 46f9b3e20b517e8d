use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use crate::app::App;
use crate::render::{format_date_label, render_day};

pub fn run(app: &App, today: NaiveDate) -> Result<()> {
    println!("{}", format_date_label(app.selected_day(), today).bold());
    println!("{}", render_day(app.listed()));
    Ok(())
}
