use anyhow::Result;
use owo_colors::OwoColorize;

use crate::app::App;
use crate::render::Render;

pub fn run(app: &mut App, title: String, time: Option<String>, description: Option<String>) -> Result<()> {
    let time = time.unwrap_or_default();
    let description = description.unwrap_or_default();

    match app.add_event(&title, &time, &description)? {
        Some(event) => println!(
            "{} {} {}",
            "Created:".green(),
            event.render(),
            event.occurs_at.format("%Y-%m-%d").dimmed()
        ),
        None => anyhow::bail!("Event title cannot be empty"),
    }

    Ok(())
}
