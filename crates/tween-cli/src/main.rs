// main.rs
//
// Easing curve explorer for tween-engine. `list` prints every registered
// curve name; `plot` renders one curve as ASCII so a shape can be
// eyeballed without wiring up a demo.

use clap::{Parser, Subcommand};
use tween_engine::{Easing, TweenError};

#[derive(Parser)]
#[command(name = "tween-cli", about = "Explore tween-engine easing curves")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every registered easing curve name
    List,
    /// Plot a curve in the terminal
    Plot {
        /// Curve name as shown by `list`, e.g. `bounce_in_out`
        name: String,
        /// Plot width in columns
        #[arg(long, default_value_t = 70)]
        width: usize,
        /// Plot height in rows
        #[arg(long, default_value_t = 30)]
        height: usize,
    },
}

fn main() -> Result<(), TweenError> {
    let cli = Cli::parse();
    match cli.command {
        Command::List => {
            for name in Easing::names() {
                println!("{name}(float in [0, 1]) -> float");
            }
        }
        Command::Plot {
            name,
            width,
            height,
        } => {
            let easing = Easing::from_name(&name)?;
            print!("{}", render(easing, width, height));
        }
    }
    Ok(())
}

/// Render the curve as a grid of `*` cells, origin bottom-left. Values
/// outside [0, 1] (back/elastic overshoot) fall off the plot rather than
/// distorting its scale.
fn render(easing: Easing, width: usize, height: usize) -> String {
    let width = width.max(2);
    let height = height.max(2);
    let mut rows = vec![vec![' '; width]; height];

    for col in 0..width {
        let x = col as f32 / (width - 1) as f32;
        let y = (easing.apply(x) * (height - 1) as f32).round() as isize;
        if (0..height as isize).contains(&y) {
            rows[height - 1 - y as usize][col] = '*';
        }
    }

    let mut out = String::with_capacity(height * (width + 1));
    for row in rows {
        out.extend(row);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_plot_hits_both_corners() {
        let plot = render(Easing::Linear, 10, 5);
        let rows: Vec<&str> = plot.lines().collect();
        assert_eq!(rows.len(), 5);
        assert_eq!(rows[4].chars().next(), Some('*'), "origin bottom-left");
        assert_eq!(rows[0].chars().last(), Some('*'), "end top-right");
    }
}
