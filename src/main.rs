use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::process;

use anyhow::{bail, Context, Result};
use clap::Parser;

use clauseref::store::{self, Dataset, StoreError};
use clauseref::{
    annotate_with_coverage, classify_line, highlight, on_page_set, search, tokenize, Candidate,
    LineClass, RankedResult, Segment,
};

mod cli;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Search { data, query, limit } => run_search(&data, &query, limit),
        Commands::Annotate { data, section } => run_annotate(&data, &section),
        Commands::Inspect { data } => run_inspect(&data),
    };

    if let Err(error) = outcome {
        eprintln!("error: {error:#}");
        process::exit(1);
    }
}

/// One source failing does not abort the search; it just contributes
/// nothing while the others still get scored.
fn fetch_or_empty<T>(source: &str, outcome: std::result::Result<Vec<T>, StoreError>) -> Vec<T> {
    match outcome {
        Ok(records) => records,
        Err(error) => {
            eprintln!("warning: skipping {source}: {error}");
            Vec::new()
        }
    }
}

fn run_search(data: &str, query: &str, limit: usize) -> Result<()> {
    let dataset = Dataset::load(Path::new(data))
        .with_context(|| format!("loading dataset {data}"))?;

    let parts = fetch_or_empty("parts", dataset.parts());
    let sections = fetch_or_empty("sections", dataset.sections());
    let videos = fetch_or_empty("videos", dataset.videos());

    let tokens = tokenize(query.trim());
    let video_candidates = store::video_candidates(&videos, &sections, &tokens);
    let section_candidates = store::section_candidates(&sections, &parts, &tokens);
    let part_candidates = store::part_candidates(&parts, &tokens);

    let results = search(query, &video_candidates, &section_candidates, &part_candidates);

    let shown = results.len().min(limit);
    println!(
        "{} result{} for \"{}\"{}",
        results.len(),
        if results.len() == 1 { "" } else { "s" },
        query.trim(),
        if shown < results.len() {
            format!(" (showing {shown})")
        } else {
            String::new()
        }
    );

    for (rank, result) in results.iter().take(limit).enumerate() {
        print_result(rank + 1, result, query);
    }
    Ok(())
}

fn print_result(rank: usize, result: &RankedResult, query: &str) {
    let title = mark_highlights(result.candidate.title(), query);
    match &result.candidate {
        Candidate::Video(video) => {
            println!(
                "{rank:3}. [video]   {title}  (section {}: {})  score {:.1}",
                video.section_number, video.section_title, result.relevance
            );
            println!("     {}", video.video.url);
        }
        Candidate::Section(section) => {
            println!(
                "{rank:3}. [section] Section {}: {title}  (Part {}: {})  score {:.1}",
                section.section.section_number,
                section.part.part_number,
                section.part.title,
                result.relevance
            );
        }
        Candidate::Part(part) => {
            println!(
                "{rank:3}. [part]    Part {}: {title}  score {:.1}",
                part.part.part_number, result.relevance
            );
        }
    }
}

/// Render matched spans as [brackets] on a plain-text terminal.
fn mark_highlights(text: &str, query: &str) -> String {
    highlight(text, query)
        .into_iter()
        .map(|span| {
            if span.matched {
                format!("[{}]", span.text)
            } else {
                span.text
            }
        })
        .collect()
}

fn run_annotate(data: &str, section_number: &str) -> Result<()> {
    let dataset = Dataset::load(Path::new(data))
        .with_context(|| format!("loading dataset {data}"))?;
    let sections = dataset.sections().context("decoding sections")?;

    let Some(section) = store::section_by_number(&sections, section_number) else {
        bail!("no section numbered \"{section_number}\" in {data}");
    };
    let content = section.content.as_deref().unwrap_or("");

    println!("Section {}: {}", section.section_number, section.title);
    println!();

    // One coverage set for the whole page, then annotate line by line.
    let on_page = on_page_set(&section.section_number, content);
    for line in content.lines() {
        let class = classify_line(line);
        if class == LineClass::Blank {
            println!();
            continue;
        }
        let indent = line.len() - line.trim_start().len();
        let treatment = class.treatment(indent);
        if treatment.leading_gap {
            println!();
        }

        let rendered: String = annotate_with_coverage(line.trim(), &on_page)
            .iter()
            .map(render_segment)
            .collect();
        let text = if treatment.bold {
            rendered.to_uppercase()
        } else {
            rendered
        };
        println!("{}{}", " ".repeat(treatment.indent), text);
    }
    Ok(())
}

fn render_segment(segment: &Segment) -> String {
    match segment {
        Segment::Text { text } => text.clone(),
        Segment::Emphasis { text } => format!("*{text}*"),
        Segment::Link { text, provision } => format!("[{text} -> {provision}]"),
    }
}

fn run_inspect(data: &str) -> Result<()> {
    let dataset = Dataset::load(Path::new(data))
        .with_context(|| format!("loading dataset {data}"))?;
    let parts = dataset.parts().context("decoding parts")?;
    let sections = dataset.sections().context("decoding sections")?;
    let videos = dataset.videos().context("decoding videos")?;

    println!("parts:    {}", parts.len());
    println!("sections: {}", sections.len());
    println!("videos:   {}", videos.len());

    let part_ids: HashSet<&str> = parts.iter().map(|p| p.id.as_str()).collect();
    let section_ids: HashSet<&str> = sections.iter().map(|s| s.id.as_str()).collect();

    let orphan_sections: Vec<&str> = sections
        .iter()
        .filter(|s| !part_ids.contains(s.part_id.as_str()))
        .map(|s| s.id.as_str())
        .collect();
    let orphan_videos: Vec<&str> = videos
        .iter()
        .filter(|v| !section_ids.contains(v.section_id.as_str()))
        .map(|v| v.id.as_str())
        .collect();

    if !orphan_sections.is_empty() {
        println!("orphaned sections (missing part): {}", orphan_sections.join(", "));
    }
    if !orphan_videos.is_empty() {
        println!("orphaned videos (missing section): {}", orphan_videos.join(", "));
    }

    let mut number_counts: HashMap<&str, usize> = HashMap::new();
    for section in &sections {
        *number_counts.entry(section.section_number.as_str()).or_default() += 1;
    }
    let mut duplicates: Vec<&str> = number_counts
        .iter()
        .filter(|(_, count)| **count > 1)
        .map(|(number, _)| *number)
        .collect();
    duplicates.sort_unstable();
    if !duplicates.is_empty() {
        println!("duplicate section numbers: {}", duplicates.join(", "));
    }

    if orphan_sections.is_empty() && orphan_videos.is_empty() && duplicates.is_empty() {
        println!("ok: no orphans, no duplicate section numbers");
    }
    Ok(())
}
