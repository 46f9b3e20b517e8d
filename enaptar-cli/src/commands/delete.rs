use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::OwoColorize;

use super::resolve_row;
use crate::app::App;
use crate::render::Render;

pub fn run(app: &mut App, row: usize, yes: bool) -> Result<()> {
    let index = resolve_row(app, row)?;

    let Some(event) = app.event_at(Some(index)) else {
        return Ok(());
    };

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete \"{}\"?", event.title))
            .default(false)
            .interact()?;

        if !confirmed {
            return Ok(());
        }
    }

    if let Some(deleted) = app.delete_at(Some(index))? {
        println!("{} {}", "Deleted:".red(), deleted.render());
    }

    Ok(())
}
