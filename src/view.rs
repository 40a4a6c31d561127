//! Status-bar rendering.
//!
//! The host reads the plugin's stdout: the first line is shown in the menu
//! bar, lines after `---` go into the dropdown. Each line may end with
//! `| key=value` display directives.

use crate::calculation::RemainingTime;

/// Display directives appended to every rendered line.
const FONT: &str = "courier";

/// Dropdown separator understood by the host.
const SEPARATOR: &str = "---";

/// Marker shown in the menu bar when something is wrong.
const WARNING: &str = "⚠️";

const SETUP_HELP: &str = "\
To setup, create or edit your ~/.bitbarrc file with a new section, like:
|
[remaining_time_to_spend_with_my_children] | font=courier color=black
;# Required                                           | font=courier
child_identifiers       = child0,child1               | font=courier
child0_label            = \":girl:\"                    | font=courier
child0_birthday         = \"2017-04-05+09:00\"          | font=courier
child0_independence_day = \"2035-04-01+09:00\"          | font=courier
child1_label            = \":boy:\"                     | font=courier
child1_birthday         = \"2019-04-05+09:00\"          | font=courier
child1_independence_day = \"2037-04-01+09:00\"          | font=courier
|
;# Optional                                           | font=courier
hours_a_day_during_infant             = 5             | font=courier
hours_a_day_during_elementary         = 5             | font=courier
hours_a_day_during_junior_high_school = 3             | font=courier
hours_a_day_during_high_school        = 2             | font=courier
hours_a_day_during_college_or_later   = 2             | font=courier
";

/// Renders the remaining time of every dependent.
///
/// The menu-bar line shows the first dependent's label and days; the
/// dropdown lists each dependent with days and hours.
///
/// # Example
///
/// ```
/// use remaining_time::calculation::RemainingTime;
/// use remaining_time::view::render;
///
/// let results = vec![RemainingTime {
///     label: ":girl:".to_string(),
///     remaining_days: 3089,
///     remaining_hours: 74136,
///     stages: vec![],
/// }];
///
/// assert_eq!(
///     render(&results, "black"),
///     ":girl:3089 days | font=courier color=black\n\
///      ---\n\
///      :girl: 3089 days (74136 hours) | font=courier color=black\n"
/// );
/// ```
pub fn render(results: &[RemainingTime], text_color: &str) -> String {
    let mut out = String::new();

    if let Some(first) = results.first() {
        out.push_str(&format!(
            "{}{} days | font={} color={}\n",
            first.label, first.remaining_days, FONT, text_color
        ));
    }
    out.push_str(SEPARATOR);
    out.push('\n');

    for result in results {
        out.push_str(&format!(
            "{} {} days ({} hours) | font={} color={}\n",
            result.label, result.remaining_days, result.remaining_hours, FONT, text_color
        ));
    }

    out
}

/// Renders the results as pretty-printed JSON.
pub fn render_json(results: &[RemainingTime]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(results)
}

/// The block shown when no usable configuration exists.
pub fn render_setup_help() -> String {
    format!("{WARNING}\n{SEPARATOR}\n{SETUP_HELP}")
}

/// The block shown for a configuration error.
pub fn render_error(message: &str) -> String {
    format!("{WARNING}\n{SEPARATOR}\n{message}\n")
}
