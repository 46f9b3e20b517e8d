//! Interactive session: a day view with a menu of actions.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use dialoguer::{Confirm, Input, Select};
use enaptar_core::EnaptarError;
use enaptar_core::time::parse_date;
use owo_colors::OwoColorize;

use crate::app::App;
use crate::render::{Render, format_date_label, render_day, render_details};

#[derive(Clone, Copy)]
enum Action {
    PickDay,
    PreviousDay,
    NextDay,
    Today,
    Add,
    View,
    Delete,
    Quit,
}

impl Action {
    const ALL: [Action; 8] = [
        Action::PickDay,
        Action::PreviousDay,
        Action::NextDay,
        Action::Today,
        Action::Add,
        Action::View,
        Action::Delete,
        Action::Quit,
    ];

    fn label(self) -> &'static str {
        match self {
            Action::PickDay => "Pick a day",
            Action::PreviousDay => "Previous day",
            Action::NextDay => "Next day",
            Action::Today => "Today",
            Action::Add => "Add event",
            Action::View => "View details",
            Action::Delete => "Delete event",
            Action::Quit => "Quit",
        }
    }
}

pub fn run(app: &mut App) -> Result<()> {
    let labels: Vec<&str> = Action::ALL.iter().map(|a| a.label()).collect();
    let mut last = 0;

    loop {
        let today = Local::now().date_naive();

        println!();
        println!("{}", format_date_label(app.selected_day(), today).bold());
        println!("{}", render_day(app.listed()));
        println!();

        let Some(choice) = Select::new()
            .items(&labels)
            .default(last)
            .interact_opt()?
        else {
            return Ok(());
        };
        last = choice;

        match Action::ALL[choice] {
            Action::PickDay => {
                if let Some(day) = prompt_day(today)? {
                    app.select_day(day);
                }
            }
            Action::PreviousDay => app.shift_day(-1),
            Action::NextDay => app.shift_day(1),
            Action::Today => app.select_day(today),
            Action::Add => add_event(app)?,
            Action::View => {
                let row = pick_row(app, "  Which event?")?;
                if let Some(event) = app.event_at(row) {
                    println!();
                    println!("{}", render_details(event));
                    pause()?;
                }
            }
            Action::Delete => delete_event(app)?,
            Action::Quit => return Ok(()),
        }
    }
}

/// Prompt for a date, retrying on parse errors. Blank input keeps the current day.
fn prompt_day(today: NaiveDate) -> Result<Option<NaiveDate>> {
    loop {
        let input: String = Input::new()
            .with_prompt("  Day (YYYY-MM-DD, today, tomorrow)")
            .allow_empty(true)
            .interact_text()?;

        if input.trim().is_empty() {
            return Ok(None);
        }

        match parse_date(&input, today) {
            Ok(day) => return Ok(Some(day)),
            Err(e) => eprintln!("  {}", e.to_string().red()),
        }
    }
}

fn add_event(app: &mut App) -> Result<()> {
    let title: String = Input::new()
        .with_prompt("  Title")
        .allow_empty(true)
        .interact_text()?;

    if title.trim().is_empty() {
        return Ok(());
    }

    let time: String = Input::new()
        .with_prompt("  Time (HH:MM)")
        .allow_empty(true)
        .interact_text()?;

    // Bad time aborts the add before asking for anything else
    if let Err(e) = enaptar_core::time::parse_time(&time) {
        notice(&e)?;
        return Ok(());
    }

    let description: String = Input::new()
        .with_prompt("  Description (skip)")
        .allow_empty(true)
        .interact_text()?;

    match app.add_event(&title, &time, &description) {
        Ok(Some(event)) => println!("  {} {}", "Created:".green(), event.render()),
        Ok(None) => {}
        Err(e @ EnaptarError::InvalidTime(_)) => notice(&e)?,
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

fn delete_event(app: &mut App) -> Result<()> {
    let row = pick_row(app, "  Delete which event?")?;

    let Some(event) = app.event_at(row) else {
        return Ok(());
    };

    let confirmed = Confirm::new()
        .with_prompt(format!("  Delete \"{}\"?", event.title))
        .default(false)
        .interact()?;

    if confirmed && let Some(deleted) = app.delete_at(row)? {
        println!("  {} {}", "Deleted:".red(), deleted.render());
    }

    Ok(())
}

/// Let the user pick a row of the current list. `None` when the list is
/// empty or the picker is cancelled.
fn pick_row(app: &App, prompt: &str) -> Result<Option<usize>> {
    if app.listed().is_empty() {
        return Ok(None);
    }

    let rows: Vec<String> = app.listed().iter().map(|e| e.to_string()).collect();

    let row = Select::new()
        .with_prompt(prompt)
        .items(&rows)
        .default(0)
        .interact_opt()?;

    Ok(row)
}

/// Blocking error notice.
fn notice(error: &EnaptarError) -> Result<()> {
    eprintln!("  {}", error.to_string().red());
    pause()
}

fn pause() -> Result<()> {
    Input::<String>::new()
        .with_prompt("  Press Enter to continue")
        .allow_empty(true)
        .show_default(false)
        .interact_text()?;
    Ok(())
}
