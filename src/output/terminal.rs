// Coloured terminal output for pipeline reports.
//
// The main.rs subcommands delegate here after a run finishes.

use colored::Colorize;

use super::{format_score, truncate_chars};
use crate::pipeline::network::GraphReport;
use crate::pipeline::wordcloud::CloudReport;
use crate::posts::filter::FilterCriteria;

/// Describe the active filter so the user can sanity-check the cloud.
pub fn display_criteria(criteria: &FilterCriteria) {
    println!("{}", "Filter:".bold());

    let mut any = false;
    if !criteria.include_keywords.is_empty() {
        println!("  include any of: {}", criteria.include_keywords.join(", ").green());
        any = true;
    }
    if !criteria.exclude_keywords.is_empty() {
        println!("  exclude any of: {}", criteria.exclude_keywords.join(", ").red());
        any = true;
    }
    for (key, value) in &criteria.attribute_filters {
        println!("  {key} = {}", value.cyan());
        any = true;
    }
    match (criteria.min_age, criteria.max_age) {
        (Some(min), Some(max)) => println!("  age {min}..={max}"),
        (Some(min), None) => println!("  age >= {min}"),
        (None, Some(max)) => println!("  age <= {max}"),
        (None, None) => {}
    }
    any |= criteria.has_age_bound();

    if !any {
        println!("  {}", "(none, every post is used)".dimmed());
    }
}

/// Summary of a word cloud run with a bar chart of the top words.
pub fn display_cloud_report(report: &CloudReport, top_n: usize) {
    println!(
        "\n{}",
        format!(
            "=== Word Cloud ({} of {} posts matched) ===",
            report.matched_posts, report.total_posts
        )
        .bold()
    );

    if report.top_words.is_empty() {
        println!("  {}", "No words left after filtering and stopword removal.".yellow());
    } else {
        let max = report.top_words[0].count.max(1);
        let bar_width: usize = 20;
        for (i, entry) in report.top_words.iter().take(top_n).enumerate() {
            let filled = (entry.count * bar_width).div_ceil(max);
            let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(bar_width - filled));
            println!(
                "  {:>2}. {:<24} {} {}",
                i + 1,
                truncate_chars(&entry.word, 24).bold(),
                bar.bright_blue(),
                entry.count
            );
        }
    }

    println!(
        "\n  {} words drawn. Saved to: {}",
        report.placed_words,
        report.output.display().to_string().bold()
    );
}

/// Ranked post table for a graph run.
pub fn display_graph_report(report: &GraphReport) {
    println!(
        "\n{}",
        format!(
            "=== Social Graph (highlight by '{}') ===",
            report.importance
        )
        .bold()
    );
    println!(
        "  {} nodes, {} edges, highlight threshold {}",
        report.nodes,
        report.edges,
        format_score(report.threshold)
    );
    println!();

    println!(
        "  {:<16} {:<16} {:>5} {:>8} {:>8}  {}",
        "Post".dimmed(),
        "Author".dimmed(),
        "Views".dimmed(),
        "Comments".dimmed(),
        "Score".dimmed(),
        "Last comment".dimmed(),
    );
    println!("  {}", "-".repeat(78).dimmed());

    for row in &report.posts {
        let id = truncate_chars(&row.id, 14);
        let id = if row.highlighted {
            format!("* {id}").yellow().bold()
        } else {
            format!("  {id}").normal()
        };
        let last = row
            .latest_comment
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:<16} {:<16} {:>5} {:>8} {:>8}  {}",
            id,
            truncate_chars(&row.author, 14),
            row.views,
            row.comments,
            format_score(row.score),
            last.dimmed(),
        );
    }

    println!(
        "\n  Saved to: {}",
        report.output.display().to_string().bold()
    );
}
