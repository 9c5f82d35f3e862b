//! Terminal prompts and output.

use crate::config::ProviderKind;
use crate::summary::Summary;
use colored::Colorize;
use dialoguer::Input;
use std::io::{BufRead, Read};

const RULE_WIDTH: usize = 50;

/// Ask for a provider from the numbered menu until a valid number is entered
pub fn select_provider() -> anyhow::Result<ProviderKind> {
    println!("Select AI provider:");
    for (index, kind) in ProviderKind::ALL.iter().enumerate() {
        println!("{}. {}", index + 1, kind);
    }

    if !atty::is(atty::Stream::Stdin) {
        let stdin = std::io::stdin();
        return read_choice(&mut stdin.lock());
    }

    let choice: String = Input::new()
        .with_prompt("Enter choice (1-3)")
        .validate_with(|input: &String| -> Result<(), &str> {
            match parse_choice(input) {
                Some(_) => Ok(()),
                None => Err("Invalid choice. Please enter 1, 2, or 3."),
            }
        })
        .interact_text()?;

    parse_choice(&choice).ok_or_else(|| anyhow::anyhow!("invalid provider choice: {}", choice))
}

/// Read menu choices line by line, for piped input where dialoguer has no terminal
fn read_choice(reader: &mut impl BufRead) -> anyhow::Result<ProviderKind> {
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            anyhow::bail!("input ended before a provider was chosen");
        }
        match parse_choice(&line) {
            Some(kind) => return Ok(kind),
            None => println!("Invalid choice. Please enter 1, 2, or 3."),
        }
    }
}

fn parse_choice(input: &str) -> Option<ProviderKind> {
    input.trim().parse::<u8>().ok().and_then(ProviderKind::from_choice)
}

/// Read the article from stdin until end of input
pub fn read_article() -> anyhow::Result<String> {
    println!("Please paste your article text below (press Ctrl+D when finished):");
    println!("{}", "-".repeat(RULE_WIDTH));

    let mut article = String::new();
    std::io::stdin().read_to_string(&mut article)?;
    Ok(article)
}

pub fn print_banner() {
    println!("{}", "Article Summarizer with Multiple AI Providers".bold());
    println!("{}", "=".repeat(RULE_WIDTH));
}

pub fn print_summary(summary: &Summary) {
    let rule = "=".repeat(RULE_WIDTH);
    println!("\n{}", rule);
    println!("{}", "ARTICLE SUMMARY".bold());
    println!("{}", rule);
    println!("{}", summary.text);
    println!("{}", rule);

    if !summary.missing_sections.is_empty() {
        let names: Vec<String> = summary.missing_sections.iter().map(ToString::to_string).collect();
        println!(
            "{} summary is missing: {}",
            "Warning:".yellow().bold(),
            names.join(", ")
        );
    }

    if summary.copied_to_clipboard {
        println!("\n{} Summary copied to clipboard!", "✓".green());
    } else {
        println!(
            "\n{} Could not copy to clipboard; the summary is printed above.",
            "Warning:".yellow().bold()
        );
    }
}
