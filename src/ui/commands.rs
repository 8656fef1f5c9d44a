use std::collections::HashMap;
use std::path::Path;
use std::sync::LazyLock;

use super::app::{App, InputMode, Screen};
use crate::export::DEFAULT_EXPORT_PATH;
use crate::models::Category;
use crate::store::Store;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &mut Store) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit ExpenseTUI", cmd_quit, r);
    register_command!("quit", "Quit ExpenseTUI", cmd_quit, r);
    register_command!("o", "Go to Overview", cmd_overview, r);
    register_command!("overview", "Go to Overview", cmd_overview, r);
    register_command!("e", "Go to Entries", cmd_entries, r);
    register_command!("entries", "Go to Entries", cmd_entries, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!(
        "add",
        "Add entry (e.g. :add Lunch 12.50 food, append 'income' for income)",
        cmd_add,
        r
    );
    register_command!("a", "Add entry (e.g. :a Lunch 12.50 food)", cmd_add, r);
    register_command!(
        "edit",
        "Edit the selected entry in place",
        cmd_edit,
        r
    );
    register_command!(
        "budget",
        "Set monthly budget (e.g. :budget 500)",
        cmd_budget,
        r
    );
    register_command!("b", "Set monthly budget (e.g. :b 500)", cmd_budget, r);
    register_command!(
        "export",
        "Export entries to CSV (default: Expenses.csv)",
        cmd_export,
        r
    );

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app, store)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

/// Parse `<description...> <amount> [category] [income]` from the
/// right: a trailing `income` marks the entry as income, a trailing
/// non-numeric token is the category, the last numeric-looking token
/// is the amount text, and everything before it is the description.
/// The amount token is handed to the store unparsed so that bad input
/// surfaces as the store's parse error.
pub(crate) fn parse_entry_args(args: &str) -> Option<(String, String, Category, bool)> {
    let mut tokens: Vec<&str> = args.split_whitespace().collect();

    let is_income = tokens
        .last()
        .is_some_and(|t| t.eq_ignore_ascii_case("income"));
    if is_income {
        tokens.pop();
    }

    let category = if tokens.len() >= 3 && tokens.last().is_some_and(|t| !looks_numeric(t)) {
        Category::parse(tokens.pop().unwrap_or_default())
    } else {
        Category::Other
    };

    let amount_text = tokens.pop()?.to_string();
    if tokens.is_empty() {
        return None;
    }
    Some((tokens.join(" "), amount_text, category, is_income))
}

fn looks_numeric(token: &str) -> bool {
    token
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+'))
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _store: &mut Store) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_overview(_args: &str, app: &mut App, _store: &mut Store) -> anyhow::Result<()> {
    app.screen = Screen::Overview;
    Ok(())
}

fn cmd_entries(_args: &str, app: &mut App, _store: &mut Store) -> anyhow::Result<()> {
    app.screen = Screen::Entries;
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _store: &mut Store) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_add(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    let Some((description, amount_text, category, is_income)) = parse_entry_args(args) else {
        let categories: Vec<&str> = Category::all().iter().map(Category::as_str).collect();
        app.set_status(format!(
            "Usage: :add <description> <amount> [category] [income]. Categories: {}",
            categories.join(", ")
        ));
        return Ok(());
    };

    match store.add_entry(&description, &amount_text, category, is_income) {
        Ok(()) => {
            let kind = if is_income { "income" } else { "expense" };
            app.set_status(format!("Added {kind}: {description} ({category})"));
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_edit(_args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    if app.screen != Screen::Entries {
        app.set_status("Go to Entries and select one first");
        return Ok(());
    }
    begin_edit(app, store);
    Ok(())
}

/// Pre-fill the command line with the selected entry's fields so the
/// user can adjust them; Enter then commits via `save_entry`.
pub(crate) fn begin_edit(app: &mut App, store: &Store) {
    let Some(entry) = store.entries().get(app.entry_index) else {
        app.set_status(crate::store::StoreError::NotFound(app.entry_index).to_string());
        return;
    };

    let mut line = format!(
        "{} {} {}",
        entry.description,
        entry.amount,
        entry.category.as_str().to_lowercase()
    );
    if entry.is_income {
        line.push_str(" income");
    }

    app.edit_index = Some(app.entry_index);
    app.command_input = line;
    app.input_mode = InputMode::Editing;
    app.set_status("Edit the fields, Enter to save, Esc to cancel");
}

/// Commit the edit line for the entry captured by `begin_edit`.
pub(crate) fn commit_edit(app: &mut App, store: &mut Store) {
    let Some(index) = app.edit_index.take() else {
        app.set_status("Nothing being edited");
        return;
    };
    let line = std::mem::take(&mut app.command_input);
    app.input_mode = InputMode::Normal;

    let Some((description, amount_text, category, is_income)) = parse_entry_args(&line) else {
        app.set_status("Usage: <description> <amount> [category] [income]");
        return;
    };

    match store.save_entry(index, &description, &amount_text, category, is_income) {
        Ok(()) => app.set_status(format!("Saved changes to: {description}")),
        Err(e) => app.set_status(e.to_string()),
    }
}

fn cmd_budget(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :budget <amount>. Example: :budget 500");
        return Ok(());
    }

    match store.set_budget(args) {
        Ok(()) => {
            let limit = store.budget().monthly_limit;
            app.set_status(format!("Monthly budget set to ${limit} (spending reset)"));
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_export(args: &str, app: &mut App, store: &mut Store) -> anyhow::Result<()> {
    let path = if args.is_empty() {
        DEFAULT_EXPORT_PATH
    } else {
        args
    };

    match store.export_csv(Path::new(path)) {
        Ok(count) => app.set_status(format!("Exported {count} entries to {path}")),
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}
