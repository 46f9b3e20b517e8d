use anyhow::Result;

use super::resolve_row;
use crate::app::App;
use crate::render::render_details;

pub fn run(app: &App, row: usize) -> Result<()> {
    let index = resolve_row(app, row)?;

    if let Some(event) = app.event_at(Some(index)) {
        println!("{}", render_details(event));
    }

    Ok(())
}
