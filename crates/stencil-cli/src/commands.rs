use std::fs;
use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use stencil_diff::compare;
use stencil_merge::{apply_migration_with, MergeConfig};
use stencil_types::{ChangeKind, ConfigTree, MigrationReport};

use crate::cli::*;
use crate::config::CliConfig;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };
    let format = cli
        .format
        .or(config.output.format)
        .unwrap_or(OutputFormat::Text);

    match cli.command {
        Command::Diff(args) => cmd_diff(args, format),
        Command::Apply(args) => cmd_apply(args, config.merge),
    }
}

fn read_tree(path: &Path) -> anyhow::Result<ConfigTree> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config tree {}", path.display()))
}

fn cmd_diff(args: DiffArgs, format: OutputFormat) -> anyhow::Result<()> {
    let old = read_tree(&args.old)?;
    let new = read_tree(&args.new)?;
    let report = compare(&old, &new, args.from, args.to);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print!("{}", render_report(&report)),
    }
    Ok(())
}

fn cmd_apply(args: ApplyArgs, mut merge: MergeConfig) -> anyhow::Result<()> {
    if args.no_mark {
        merge.mark_new_items = false;
    }
    let merged_json = merge_files(&args.user, &args.template, &merge)?;

    match &args.output {
        Some(path) => {
            fs::write(path, merged_json).with_context(|| format!("writing {}", path.display()))?;
            eprintln!("{} Merged tree written to {}", "✓".green().bold(), path.display().to_string().bold());
        }
        None => print!("{merged_json}"),
    }
    Ok(())
}

fn merge_files(user: &Path, template: &Path, merge: &MergeConfig) -> anyhow::Result<String> {
    let user = read_tree(user)?;
    let template = read_tree(template)?;
    let report = compare(&user, &template, "current", "latest");
    tracing::debug!(mark_new_items = merge.mark_new_items, "merging template additions");
    let merged = apply_migration_with(merge, &user, &template, &report);

    eprintln!(
        "{} changes found, {} require a decision",
        report.total_changes().to_string().bold(),
        report.changes_requiring_action().to_string().bold()
    );
    let mut json = serde_json::to_string_pretty(&merged)?;
    json.push('\n');
    Ok(json)
}

fn render_report(report: &MigrationReport) -> String {
    if report.is_empty() {
        return format!(
            "{} No changes between {} and {}.\n",
            "✓".green().bold(),
            report.from_version.yellow(),
            report.to_version.yellow()
        );
    }

    let mut out = format!(
        "Migration {} → {}\n",
        report.from_version.yellow().bold(),
        report.to_version.yellow().bold()
    );
    for change in report.changes() {
        let marker = match change.kind {
            ChangeKind::Added => "+".green(),
            ChangeKind::Removed => "-".red(),
            ChangeKind::Modified => "~".yellow(),
        };
        let action = if change.requires_action {
            " [action]".bold()
        } else {
            "".normal()
        };
        out.push_str(&format!(
            "  {marker} {:<10} {}{action}\n      {}\n",
            change.category.to_string(),
            change.path.to_string().cyan(),
            change.description
        ));
        if let Some(note) = &change.action_description {
            out.push_str(&format!("      {}\n", note.dimmed()));
        }
    }
    out.push_str(&format!(
        "\n{} changes, {} requiring action\n",
        report.total_changes().to_string().bold(),
        report.changes_requiring_action().to_string().bold()
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, body: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, body).unwrap();
        path
    }

    const USER: &str = r##"{
        "pages": [{ "id": "p1", "slug": "index", "title": "Mine", "sections": [] }],
        "theme": { "color": { "primary": "#111" }, "font": "Inter" }
    }"##;

    const TEMPLATE: &str = r##"{
        "pages": [
            { "id": "p1", "slug": "index", "title": "Home", "sections": [{ "id": "s1", "type": "hero" }] },
            { "id": "p2", "slug": "new", "title": "New" }
        ],
        "theme": { "color": { "primary": "#222", "accent": "#f0f" }, "font": "Lato" }
    }"##;

    #[test]
    fn merge_files_produces_merged_json() {
        colored::control::set_override(false);
        let dir = TempDir::new().unwrap();
        let user = write(&dir, "user.json", USER);
        let template = write(&dir, "template.json", TEMPLATE);

        let json = merge_files(&user, &template, &MergeConfig::default()).unwrap();
        let merged: ConfigTree = serde_json::from_str(&json).unwrap();

        assert_eq!(merged.pages.len(), 2);
        assert_eq!(merged.page("p1").unwrap().title, "Mine");
        assert!(merged.page("p1").unwrap().section("s1").unwrap().is_new);
        assert_eq!(merged.theme.as_ref().unwrap().color["primary"], "#111");
        assert!(json.contains("\"_isNew\": true"));
    }

    #[test]
    fn apply_writes_output_file() {
        let dir = TempDir::new().unwrap();
        let user = write(&dir, "user.json", USER);
        let template = write(&dir, "template.json", TEMPLATE);
        let output = dir.path().join("merged.json");

        cmd_apply(
            ApplyArgs {
                user,
                template,
                output: Some(output.clone()),
                no_mark: true,
            },
            MergeConfig::default(),
        )
        .unwrap();

        let merged: ConfigTree = serde_json::from_str(&fs::read_to_string(output).unwrap()).unwrap();
        assert!(merged.contains_page("p2"));
        assert!(!merged.page("p2").unwrap().is_new);
    }

    #[test]
    fn unreadable_input_names_the_file() {
        let dir = TempDir::new().unwrap();
        let bad = write(&dir, "bad.json", "{ not json");

        let err = read_tree(&bad).unwrap_err();
        assert!(format!("{err:#}").contains("bad.json"));
        assert!(read_tree(&dir.path().join("missing.json")).is_err());
    }

    #[test]
    fn text_report_lists_changes() {
        colored::control::set_override(false);
        let user: ConfigTree = serde_json::from_str(USER).unwrap();
        let template: ConfigTree = serde_json::from_str(TEMPLATE).unwrap();
        let report = compare(&user, &template, "1.0", "1.1");

        let text = render_report(&report);
        assert!(text.starts_with("Migration 1.0 → 1.1"));
        assert!(text.contains("pages.p2"));
        assert!(text.contains("pages.p1.sections.s1 [action]"));
        assert!(text.contains("theme.color"));
        assert!(text.contains("4 changes, 3 requiring action"));
    }

    #[test]
    fn empty_report_text() {
        colored::control::set_override(false);
        let report = MigrationReport::new("1.0", "1.0", Vec::new());
        assert_eq!(render_report(&report), "✓ No changes between 1.0 and 1.0.\n");
    }
}
