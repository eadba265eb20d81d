//! Terminal rendering of the form view
//!
//! Respects NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically (via `colored`).

use std::fmt::Write as _;

use colored::Colorize;
use itertools::Itertools;

use crate::application::form::{FormView, RowView, SliderView};
use crate::domain::currency::MAN_SUFFIX;

const INPUT_WIDTH: usize = 14;

/// Render the whole form.
pub fn render_form(view: &FormView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.title.cyan().bold());
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "{} ({})   {}",
        "Pre-tax sales".bold(),
        MAN_SUFFIX,
        "[+ add]".green()
    );
    for row in &view.rows {
        let _ = writeln!(out, "{}", render_row(row));
    }
    let _ = writeln!(out);

    let adj = &view.adjustment;
    let _ = writeln!(out, "{}", adj.label.bold());
    let beyond = if adj.beyond_slider {
        format!("  {}", "(beyond slider)".yellow())
    } else {
        String::new()
    };
    let _ = writeln!(
        out,
        "  {}  [{:>6}] {}{}",
        render_slider(&adj.slider),
        adj.input,
        MAN_SUFFIX,
        beyond
    );
    let _ = writeln!(out);

    let res = &view.results;
    let _ = writeln!(
        out,
        "  {}  {}  ({}: {})",
        res.tax_included_label.dimmed(),
        res.tax_included.bold(),
        res.raw_total_label,
        res.raw_total
    );
    let _ = writeln!(
        out,
        "  {}  {}",
        res.partner_label.dimmed(),
        res.partner_share.blue().bold()
    );
    let _ = writeln!(
        out,
        "  {}  {}",
        res.remainder_label.dimmed(),
        res.remainder.green().bold()
    );
    out
}

fn render_row(row: &RowView) -> String {
    let field = if row.input.is_empty() {
        format!("{:>width$}", row.placeholder, width = INPUT_WIDTH).dimmed().to_string()
    } else {
        format!("{:>width$}", row.input, width = INPUT_WIDTH)
    };
    let delete = if row.deletable {
        format!("  {}", "[x]".red())
    } else {
        String::new()
    };
    format!("  {:>2}. [{}] {}{}", row.position, field, MAN_SUFFIX, delete)
}

/// Slider bar with one cell per stop, e.g. `0 ─────●───── 10`.
pub fn render_slider(slider: &SliderView) -> String {
    let thumb = slider.stop_index();
    let bar = (0..slider.stops())
        .map(|i| if i == thumb { "●" } else { "─" })
        .join("");
    format!("{} {} {}", slider.min, bar, slider.max)
}
