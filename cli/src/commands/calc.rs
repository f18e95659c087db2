use colored::*;
use rectarea_common::config::Config;
use rectarea_core::dimensions::Dimensions;
use rectarea_core::{Outcome, calculate};

use crate::rprint;
use crate::terminal::{alert, print};

/// One-shot calculation: validate both arguments, print the result panel
/// for accepted input, and report the mapped alert either way.
///
/// Rejected input is an expected user condition, not a process failure,
/// so the exit status stays zero.
pub fn calc(base_text: &str, height_text: &str, cfg: &Config) -> anyhow::Result<()> {
    let outcome = calculate(base_text, height_text);

    if let Outcome::Success { dimensions } = &outcome {
        print_result(dimensions, cfg);
    }

    alert::show(&outcome.alert(), cfg);

    if cfg.quiet == 0 {
        print::end_of_program();
    }

    Ok(())
}

fn print_result(dimensions: &Dimensions, cfg: &Config) {
    if cfg.quiet >= 2 {
        return;
    }

    print::set_key_width(&["Base", "Height", "Area"]);
    print::aligned_line("Base", format!("{} cm", dimensions.base()));
    print::aligned_line("Height", format!("{} cm", dimensions.height()));
    print::aligned_line(
        "Area",
        format!("{} cm²", dimensions.area()).green().bold(),
    );

    if cfg.quiet == 0 {
        print::fat_separator();
        let summary: String = format!(
            "{} × {} = {} cm²",
            dimensions.base(),
            dimensions.height(),
            format!("{}", dimensions.area()).green().bold()
        );
        print::centerln(&summary);
    }

    rprint!();
}
