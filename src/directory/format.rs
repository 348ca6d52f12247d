//! Format directory command output as text.

use crate::directory::types::{
    AgentListOutput, AgentShowOutput, CategoryListOutput, FetchAllOutput, FetchOutput,
    TagListOutput, ValidateOutput,
};
use crate::prompt::PromptLoadState;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;

/// Format a section heading with bold/underline. Respects NO_COLOR and TTY.
pub fn format_section_heading(title: &str) -> String {
    format!("{}", title.bold().underline())
}

/// Tags cell: first three tags, then a +N remainder.
fn format_tags_cell(tags: &[String]) -> String {
    const SHOWN: usize = 3;
    if tags.len() <= SHOWN {
        tags.join(", ")
    } else {
        format!("{} +{}", tags[..SHOWN].join(", "), tags.len() - SHOWN)
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// Format the agent list as human-readable text.
pub fn format_agent_list_text(data: &AgentListOutput) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Agents")));
    if data.criteria.has_active_filters() {
        if let Some(ref query) = data.criteria.search_query {
            out.push_str(&format!("  Search: {}\n", query));
        }
        if let Some(ref category) = data.criteria.category {
            out.push_str(&format!("  Category: {}\n", category));
        }
        if let Some(ref tags) = data.criteria.tags {
            out.push_str(&format!("  Tags: {}\n", tags.join(", ")));
        }
        out.push('\n');
    }
    if data.agents.is_empty() {
        out.push_str("No agents match the current filters.\n");
        return out;
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Name", "Category", "Rating", "Featured", "Tags"]);
    for agent in &data.agents {
        table.add_row(vec![
            agent.name.clone(),
            agent.category.clone(),
            format!("{:.1}", agent.rating),
            yes_no(agent.featured).to_string(),
            format_tags_cell(&agent.tags),
        ]);
    }
    out.push_str(&format!("{}\n\n", table));
    out.push_str(&format!("Total: {} agents.\n", data.total));
    out
}

/// Format one agent's detail view as human-readable text.
pub fn format_agent_show_text(data: &AgentShowOutput) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading(&data.agent.name)));
    out.push_str(&format!("  ID: {}\n", data.agent.id));
    match &data.category {
        Some(category) => {
            out.push_str(&format!("  Category: {} {}\n", category.icon, category.name))
        }
        None => out.push_str(&format!("  Category: {}\n", data.agent.category)),
    }
    out.push_str(&format!("  Rating: {:.1}\n", data.agent.rating));
    out.push_str(&format!("  Usage: {}\n", data.agent.usage_count));
    out.push_str(&format!("  Featured: {}\n", yes_no(data.agent.featured)));
    if !data.agent.tags.is_empty() {
        out.push_str(&format!("  Tags: {}\n", data.agent.tags.join(", ")));
    }
    out.push_str(&format!("\n{}\n", data.agent.description));
    if let Some(ref prompt) = data.prompt {
        out.push_str(&format!("\n{}\n\n", format_section_heading("Prompt")));
        out.push_str(prompt);
        if !prompt.ends_with('\n') {
            out.push('\n');
        }
    }
    out
}

/// Format the unique tag list as human-readable text.
pub fn format_tag_list_text(data: &TagListOutput) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Tags")));
    if data.tags.is_empty() {
        out.push_str("No tags in catalog.\n");
        return out;
    }
    for tag in &data.tags {
        out.push_str(&format!("  {}\n", tag));
    }
    out.push_str(&format!("\nTotal: {} tags.\n", data.total));
    out
}

/// Format the category reference list as human-readable text.
pub fn format_category_list_text(data: &CategoryListOutput) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n\n", format_section_heading("Categories")));
    if data.categories.is_empty() {
        out.push_str("No categories in catalog.\n");
        return out;
    }
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["ID", "Name", "Description"]);
    for category in &data.categories {
        table.add_row(vec![
            category.id.clone(),
            format!("{} {}", category.icon, category.name),
            category.description.clone(),
        ]);
    }
    out.push_str(&format!("{}\n\n", table));
    out.push_str(&format!("Total: {} categories.\n", data.total));
    out
}

/// Format a single-prompt fetch as human-readable text.
///
/// A successful fetch prints the prompt body alone so output pipes
/// cleanly; the other states render a one-line status.
pub fn format_fetch_text(data: &FetchOutput) -> String {
    match &data.state {
        PromptLoadState::Success { content } => {
            let mut out = content.clone();
            if !out.ends_with('\n') {
                out.push('\n');
            }
            out
        }
        PromptLoadState::Error { message } => {
            format!("Failed to fetch prompt for {}: {}\n", data.agent_id, message)
        }
        PromptLoadState::Idle => format!("Prompt for {} not requested.\n", data.agent_id),
        PromptLoadState::Loading => format!("Prompt for {} still loading.\n", data.agent_id),
    }
}

/// Format the fetch --all report as human-readable text.
pub fn format_fetch_all_text(data: &FetchAllOutput) -> String {
    let mut out = String::new();
    for prompt in &data.prompts {
        out.push_str(&format!(
            "{}\n\n",
            format_section_heading(&prompt.agent_id)
        ));
        out.push_str(&prompt.content);
        if !prompt.content.ends_with('\n') {
            out.push('\n');
        }
        out.push('\n');
    }
    out.push_str(&format!("Total: {} prompts.\n", data.total));
    out
}

/// Format the catalog validation report as human-readable text.
pub fn format_validate_text(data: &ValidateOutput) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{}\n\n",
        format_section_heading("Catalog validation")
    ));
    if !data.checks.is_empty() {
        let mut table = Table::new();
        table.load_preset(UTF8_BORDERS_ONLY);
        table.set_header(vec!["Check", "Passed"]);
        for check in &data.checks {
            table.add_row(vec![check.description.clone(), yes_no(check.passed).to_string()]);
        }
        out.push_str(&format!("{}\n\n", table));
    }
    if !data.errors.is_empty() {
        for error in &data.errors {
            out.push_str(&format!("  {}\n", error));
        }
        out.push('\n');
    }
    if data.valid {
        out.push_str(&format!(
            "Validation passed: {}/{} checks\n",
            data.checks.iter().filter(|c| c.passed).count(),
            data.checks.len()
        ));
    } else {
        out.push_str(&format!(
            "Validation failed: {} error(s) found\n",
            data.errors.len()
        ));
    }
    out.push_str(&format!(
        "Total: {} agents, {} categories.\n",
        data.agents, data.categories
    ));
    out
}
