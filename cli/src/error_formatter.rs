use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use std::ops::Range;
use unitconv::batch::tokenize;
use unitconv::ConversionError;

const VALUES_SOURCE_ID: &str = "values";

/// Format a ConversionError for the terminal.
///
/// When the batch input is available, an invalid element is underlined in place
/// using Ariadne. Everything else is a single line.
pub fn format_error(error: &ConversionError, values: Option<&str>) -> String {
    match (error, values) {
        (ConversionError::InvalidNumber { position, .. }, Some(values)) => {
            match render_invalid_number(error, *position, values) {
                Some(report) => report,
                // Fallback to simple format
                None => format!("Error: {}", error),
            }
        }
        (ConversionError::UnknownUnit(token), _) => format!(
            "Error: {}\n  Run `unitconv units` to see the accepted unit names for '{}'.",
            error, token
        ),
        _ => format!("Error: {}", error),
    }
}

fn render_invalid_number(error: &ConversionError, position: usize, values: &str) -> Option<String> {
    let token = tokenize(values).into_iter().nth(position)?;
    let span = label_span(values, token.span);

    let mut output = Vec::new();
    let source_id = VALUES_SOURCE_ID.to_string();

    Report::build(ReportKind::Error, &source_id, span.start)
        .with_config(Config::default().with_color(false))
        .with_message(error.to_string())
        .with_label(
            Label::new((&source_id, span))
                .with_message(format!("value #{} is not a number", position))
                .with_color(Color::Red),
        )
        .with_help("separate values with commas, e.g. 32,50,100")
        .finish()
        .write((&source_id, Source::from(values)), &mut output)
        .ok()?;

    Some(String::from_utf8_lossy(&output).to_string())
}

/// Byte span of the element, as the char range Ariadne expects.
/// An empty element is pointed at through its neighbouring comma.
fn label_span(values: &str, bytes: Range<usize>) -> Range<usize> {
    let start = values[..bytes.start].chars().count();
    let len = values[bytes.clone()].chars().count();

    if len > 0 {
        start..start + len
    } else if start > 0 {
        start - 1..start
    } else {
        start..start + 1
    }
}
