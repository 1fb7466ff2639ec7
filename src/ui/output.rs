use crate::classifier::QueryPlan;
use colored::*;

/// Print the assistant's answer.
pub fn display_content(content: &str) {
    println!("{}", content.trim_end());
}

/// Print what a message would trigger, without running anything.
pub fn display_query_plan(plan: &QueryPlan) {
    println!("{} {}", "Intent:".cyan(), plan.intent.as_str());
    match &plan.query {
        Some(query) => println!("{} {}", "Query:".cyan(), query),
        None => println!("{} {}", "Query:".cyan(), "(no search)".dimmed()),
    }
}

pub fn display_error(error: &dyn std::fmt::Display) {
    eprintln!("{} {}", "Error:".red(), error);
}

pub fn display_warning(message: &str) {
    eprintln!("{}", message.yellow());
}
