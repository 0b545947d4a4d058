//! Output formatting for CLI responses

use anyhow::Error;
use colored::*;
use serde_json::json;
use sway_motion::{MotionState, MotionTransition};

use crate::replay::{ReplayReport, TimelineEntry};

/// Print error in JSON format
pub fn print_error_json(error: &Error) {
    let error_json = json!({
        "success": false,
        "error": {
            "message": error.to_string(),
        }
    });
    match serde_json::to_string_pretty(&error_json) {
        Ok(s) => println!("{s}"),
        Err(e) => eprintln!("Failed to format error as JSON: {e}"),
    }
}

/// Print error in human-readable format
pub fn print_error_human(error: &Error) {
    eprintln!("{} {}", "Error:".red().bold(), error);

    let mut source = error.source();
    while let Some(err) = source {
        eprintln!("  {} {}", "Caused by:".yellow(), err);
        source = err.source();
    }
}

pub fn print_success(message: &str, json: bool) {
    if json {
        let output = json!({ "success": true, "message": message });
        match serde_json::to_string_pretty(&output) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("Failed to format message as JSON: {e}"),
        }
    } else {
        println!("{} {}", "✓".green(), message);
    }
}

/// Print a replay summary in the requested format
pub fn print_report(report: &ReplayReport, json: bool) {
    if json {
        let output = json!({ "success": true, "report": report });
        match serde_json::to_string_pretty(&output) {
            Ok(s) => println!("{s}"),
            Err(e) => eprintln!("Failed to format report as JSON: {e}"),
        }
        return;
    }

    println!("{}", "Replay Summary:".bold());
    println!(
        "  Events: {} ({} acceleration, {} orientation, {} shake)",
        report.events, report.acceleration_samples, report.orientation_samples, report.shakes
    );
    println!("  Final state: {}", format_state(report.snapshot.state));
    match report.snapshot.last_intensity {
        Some(i) => println!("  Last intensity: {i:.3}"),
        None => println!("  Last intensity: {}", "insufficient data".dimmed()),
    }
    println!("  Excitations fired: {}", report.excitations);
    println!("  Engine starts: {}", report.engine_starts);
    println!(
        "  Final force: w={:.2} t={:.2}",
        report.final_force.w, report.final_force.t
    );
    println!(
        "  Peak force: |w|={:.2} |t|={:.2}",
        report.peak_force.w, report.peak_force.t
    );

    if report.transitions.is_empty() {
        println!("  Transitions: {}", "none".dimmed());
    } else {
        println!("  Transitions:");
        for transition in &report.transitions {
            println!("    {}", format_transition(transition));
        }
    }

    if !report.timeline.is_empty() {
        println!();
        println!("{}", "Timeline:".bold());
        for entry in &report.timeline {
            print_timeline_entry(entry);
        }
    }
}

fn print_timeline_entry(entry: &TimelineEntry) {
    let marker = match entry.transition {
        Some(t) => format!("  {}", format_transition(&t)),
        None => String::new(),
    };
    println!(
        "  {:>8}ms {:<12} {:<8} w={:>7.2} t={:>7.2}{}",
        entry.t_ms,
        entry.event,
        format_state(entry.state),
        entry.force.w,
        entry.force.t,
        marker
    );
}

fn format_state(state: MotionState) -> ColoredString {
    match state {
        MotionState::Stopped => "stopped".yellow(),
        MotionState::Moving { .. } => "moving".green(),
    }
}

fn format_transition(transition: &MotionTransition) -> String {
    match transition {
        MotionTransition::Started { at } => format!("started at {}ms", at.as_millis()),
        MotionTransition::Stopped { at, moving_for } => format!(
            "stopped at {}ms after {:.1}s",
            at.as_millis(),
            moving_for.as_secs_f32()
        ),
    }
}
