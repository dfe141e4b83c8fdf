//! Display functions for the plain terminal modes

use super::formatters::{CURRENT_ROW_RGB, KEYBOARD, cell_text, create_progress_bar, palette_color};
use crate::commands::SimulationResult;
use crate::core::{Letter, Pack, Reveal, Snapshot, matrix};
use crate::packs::PuzzleSet;
use colored::{ColoredString, Colorize};

/// Print the letter grid of `pack` as seen from `current_row`
///
/// Passing a `current_row` past the last row shows every letter.
pub fn print_grid(pack: &Pack, current_row: usize, used_letters: &[Letter]) {
    let width = matrix::width(pack);

    println!();
    for row in 0..pack.row_count() {
        let is_current = row == current_row;
        let marker = if is_current { "▶".bright_cyan().bold() } else { " ".normal() };

        let mut line = String::new();
        for col in 0..width {
            let view = matrix::cell_view(pack, row, col, current_row, used_letters);
            let text = cell_text(&view);

            let mut cell: ColoredString = match view.reveal {
                Reveal::Shown(_) => text.bold().black(),
                Reveal::Covered => text.bright_black(),
                Reveal::Hidden => text.normal(),
            };

            if let Some(slot) = view.highlight {
                let (r, g, b) = palette_color(slot);
                cell = cell.on_truecolor(r, g, b);
            } else if is_current {
                let (r, g, b) = CURRENT_ROW_RGB;
                cell = cell.on_truecolor(r, g, b);
            } else if view.reveal != Reveal::Hidden {
                cell = cell.on_white();
            }

            line.push_str(&cell.to_string());
        }

        println!(" {marker} {line}");
    }
    println!();
}

/// Print the on-screen keyboard, dimming letters already used on this row
pub fn print_keyboard(used_letters: &[Letter]) {
    for (indent, keys) in KEYBOARD {
        let mut line = " ".repeat(indent * 2 + 3);
        for ch in keys.chars() {
            let used = used_letters.iter().any(|l| l.as_char() == ch);
            let key = format!("{ch}");
            if used {
                line.push_str(&key.bright_black().strikethrough().to_string());
            } else {
                line.push_str(&key.bright_white().bold().to_string());
            }
            line.push_str("   ");
        }
        println!("{line}");
    }
    println!();
}

/// Print the counters of a session
pub fn print_status(snapshot: &Snapshot) {
    let net = snapshot.net_result();
    let net_text = if net < 0 {
        format!("{net}").red().bold()
    } else {
        format!("{net}").green().bold()
    };

    println!(
        "   Failed attempts: {}   Points: {}   Result: {}   Row: {}/{}",
        snapshot.failed_attempts.to_string().red(),
        snapshot.score.to_string().green(),
        net_text,
        snapshot.current_row + 1,
        snapshot.pack.row_count()
    );
}

/// Print the available packs
pub fn print_pack_list(puzzles: &PuzzleSet) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(" {} ", "AVAILABLE PACKS".bright_cyan().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, pack) in puzzles.iter().enumerate() {
        println!(
            "  {}. {} ({} rows, {} columns)",
            (i + 1).to_string().bright_yellow(),
            pack.name().bold(),
            pack.row_count(),
            matrix::width(pack)
        );
    }
    println!();
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.total_games);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    for stats in &result.packs {
        let completion = if stats.games > 0 {
            stats.completed as f64 / stats.games as f64 * 100.0
        } else {
            0.0
        };

        println!("\n🪜 {}", stats.name.bright_yellow().bold());
        println!(
            "   Completed:        {} {:5.1}%",
            create_progress_bar(completion, 100.0, 30).green(),
            completion
        );
        println!("   Avg guesses:      {:.2}", stats.average_guesses);
        println!("   Avg points:       {:.2}", stats.average_score);
        println!("   Avg failed:       {:.2}", stats.average_failed);
        println!(
            "   Result range:     {} .. {}",
            stats.worst_result.to_string().red(),
            stats.best_result.to_string().green()
        );
    }
    println!();
}
