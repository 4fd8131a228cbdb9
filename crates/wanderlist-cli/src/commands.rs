// SPDX-License-Identifier: AGPL-3.0
// Wanderlist CLI - Command handlers
//
// Each handler calls into the TravelLog and renders the returned snapshot
// as plain text.

use crate::Command;
use anyhow::{anyhow, bail, Context};
use std::fmt::Write;
use wanderlist_core::query::{self, ProgressSummary};
use wanderlist_core::{catalog, Avatar, Category, Destination, DestinationKey, Filter, TravelLog};

type CommandResult = anyhow::Result<String>;

pub async fn run(log: &TravelLog, command: Command) -> CommandResult {
    match command {
        Command::List {
            category,
            filter,
            search,
        } => list(log, category, &filter, &search).await,
        Command::Filters { category } => Ok(filters(category)),
        Command::Visit { category, id } => visit(log, category, &id).await,
        Command::Favorite { category, id } => favorite(log, category, &id).await,
        Command::Note { category, id, text } => note(log, category, &id, text.as_deref()).await,
        Command::Profile { name, avatar } => profile(log, name.as_deref(), avatar).await,
        Command::Clear => clear(log).await,
    }
}

/// Look up a catalog entry; frontends only act on known destinations
fn lookup(category: Category, id: &str) -> anyhow::Result<&'static Destination> {
    catalog::find(category, id).ok_or_else(|| anyhow!("No {} with id {:?}", category, id))
}

fn describe(destination: &Destination) -> String {
    match destination.altitude {
        Some(altitude) => format!(
            "{} ({}, {}, {})",
            destination.name, destination.state, destination.region, altitude
        ),
        None => format!(
            "{} ({}, {})",
            destination.name, destination.state, destination.region
        ),
    }
}

async fn list(log: &TravelLog, category: Category, filter: &str, search: &str) -> CommandResult {
    let filter = Filter::parse(filter)
        .with_context(|| format!("Unknown filter {:?}; see `wanderlist filters`", filter))?;

    let rows = log.list(category, filter, search).await;
    let visited = log.progress().get_visited(category).await;
    let visited_total = query::category_summary(category, &visited).visited;

    let mut out = String::new();
    for row in &rows {
        writeln!(
            out,
            "[{}]{} {:<4} {}",
            if row.visited { "x" } else { " " },
            if row.favorite { "*" } else { " " },
            row.destination.id,
            describe(row.destination)
        )?;
    }
    writeln!(
        out,
        "{} {} · {} visited",
        rows.len(),
        category.display_plural(),
        visited_total
    )?;
    Ok(out)
}

fn filters(category: Category) -> String {
    query::filters_for(category)
        .iter()
        .map(|f| format!("{}\n", f))
        .collect()
}

async fn visit(log: &TravelLog, category: Category, id: &str) -> CommandResult {
    let destination = lookup(category, id)?;
    let visited = log.toggle_visited(&destination.key()).await;

    Ok(format!(
        "{} {}\n",
        destination.name,
        if visited { "marked visited" } else { "marked not visited" }
    ))
}

async fn favorite(log: &TravelLog, category: Category, id: &str) -> CommandResult {
    let destination = lookup(category, id)?;
    let starred = log.favorites().toggle_favorite(&destination.key()).await;

    Ok(format!(
        "{} {}\n",
        destination.name,
        if starred { "added to favorites" } else { "removed from favorites" }
    ))
}

async fn note(log: &TravelLog, category: Category, id: &str, text: Option<&str>) -> CommandResult {
    let destination = lookup(category, id)?;
    let key = DestinationKey::new(category, destination.id);

    let note = match text {
        Some(text) => log.notes().save_note(&key, text).await,
        None => log.notes().get_note(&key).await,
    };

    Ok(match note {
        Some(note) => format!("{}: {}\n", destination.name, note.content),
        None => format!("{}: no note\n", destination.name),
    })
}

fn stat_line(title: &str, summary: &ProgressSummary) -> String {
    format!(
        "{:<20} {:>3} / {:<3} {:>3}%\n",
        title, summary.visited, summary.total, summary.percentage
    )
}

async fn profile(log: &TravelLog, name: Option<&str>, avatar: Option<u32>) -> CommandResult {
    if let Some(index) = avatar {
        if Avatar::from_index(index).is_none() {
            bail!(
                "Avatar must be between 0 and {}",
                Avatar::ALL.len() - 1
            );
        }
        log.profile().set_avatar(index).await;
    }
    if let Some(name) = name {
        log.profile().set_name(name).await;
    }

    let overview = log.profile_overview().await;
    let avatar = overview
        .profile
        .avatar()
        .map_or("Unknown", |a| a.label());

    let mut out = String::new();
    writeln!(out, "{} ({})", overview.profile.name, avatar)?;
    out.push_str(&stat_line("Beaches Visited", &overview.beaches));
    out.push_str(&stat_line("Mountains Conquered", &overview.mountains));

    if overview.favorites.is_empty() {
        writeln!(out, "No favorites yet")?;
    } else {
        writeln!(out, "Favorites:")?;
        for item in &overview.favorites {
            writeln!(out, "  {}", describe(item.destination))?;
        }
    }
    Ok(out)
}

async fn clear(log: &TravelLog) -> CommandResult {
    log.clear_all().await;
    Ok("Cleared travel progress\n".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_visit_toggles() {
        let log = TravelLog::in_memory();

        let out = visit(&log, Category::Beach, "b10").await.unwrap();
        assert_eq!(out, "Baga Beach marked visited\n");
        let out = visit(&log, Category::Beach, "b10").await.unwrap();
        assert_eq!(out, "Baga Beach marked not visited\n");
    }

    #[tokio::test]
    async fn test_unknown_id_is_rejected() {
        let log = TravelLog::in_memory();
        assert!(visit(&log, Category::Beach, "m1").await.is_err());
        assert!(favorite(&log, Category::Mountain, "b1").await.is_err());
    }

    #[tokio::test]
    async fn test_list_with_filter_and_search() {
        let log = TravelLog::in_memory();
        favorite(&log, Category::Beach, "b10").await.unwrap();
        visit(&log, Category::Beach, "b10").await.unwrap();

        let out = list(&log, Category::Beach, "Goa", "baga").await.unwrap();
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("[x]* b10"));
        assert!(lines[0].contains("Baga Beach (Goa, Western Coast)"));
        assert_eq!(lines[1], "1 beaches · 1 visited");
    }

    #[tokio::test]
    async fn test_list_counts_catalog_ids_only() {
        let log = TravelLog::in_memory();
        let stored = ["b1", "b2", "stale"].iter().map(|s| s.to_string()).collect();
        log.progress().set_visited(Category::Beach, &stored).await;

        let out = list(&log, Category::Beach, "All", "").await.unwrap();
        assert_eq!(out.lines().last(), Some("50 beaches · 2 visited"));

        let out = profile(&log, None, None).await.unwrap();
        assert!(out.contains("Beaches Visited        2 / 50"));
    }

    #[tokio::test]
    async fn test_list_rejects_unknown_filter() {
        let log = TravelLog::in_memory();
        assert!(list(&log, Category::Mountain, "Atlantis", "").await.is_err());
    }

    #[tokio::test]
    async fn test_note_save_show_delete() {
        let log = TravelLog::in_memory();

        let out = note(&log, Category::Mountain, "m1", Some(" Snowy summit ")).await.unwrap();
        assert_eq!(out, "Kedarkantha Trek: Snowy summit\n");
        let out = note(&log, Category::Mountain, "m1", None).await.unwrap();
        assert_eq!(out, "Kedarkantha Trek: Snowy summit\n");
        let out = note(&log, Category::Mountain, "m1", Some("")).await.unwrap();
        assert_eq!(out, "Kedarkantha Trek: no note\n");
    }

    #[tokio::test]
    async fn test_profile_updates_and_summarizes() {
        let log = TravelLog::in_memory();
        visit(&log, Category::Mountain, "m1").await.unwrap();
        favorite(&log, Category::Mountain, "m1").await.unwrap();

        let out = profile(&log, Some("Asha"), Some(1)).await.unwrap();
        assert!(out.starts_with("Asha (Climber)\n"));
        assert!(out.contains("Mountains Conquered"));
        assert!(out.contains("Kedarkantha Trek (Uttarakhand, Himalayas, 3,810m)"));

        assert!(profile(&log, None, Some(7)).await.is_err());
    }

    #[tokio::test]
    async fn test_clear_resets_progress() {
        let log = TravelLog::in_memory();
        visit(&log, Category::Beach, "b1").await.unwrap();
        clear(&log).await.unwrap();

        let out = profile(&log, None, None).await.unwrap();
        assert!(out.contains("Beaches Visited        0 / 50    0%"));
    }

    #[test]
    fn test_filters_output() {
        let out = filters(Category::Mountain);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "All");
        assert_eq!(lines[1], "Himalayas");
        assert_eq!(lines.len(), 1 + 4 + 14);
    }
}
