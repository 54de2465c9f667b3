/// Label for the window analyzed, e.g. "6 months", "1 year", "2 years 3 months".
///
/// Under a year the label is always "<n> months", including "1 months" and
/// "0 months". The remainder after whole years is never singularized.
pub fn period_label(months: u32) -> String {
    if months < 12 {
        return format!("{months} months");
    }

    let years = months / 12;
    let remaining = months % 12;
    let year_word = if years > 1 { "years" } else { "year" };

    if remaining == 0 {
        format!("{years} {year_word}")
    } else {
        format!("{years} {year_word} {remaining} months")
    }
}
