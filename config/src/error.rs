use ariadne::{Color, Config, Label, Report, ReportKind, Source};

/// Render a TOML deserialization error as a source-annotated report.
///
/// Errors without a span (rare, e.g. a missing top-level table) fall back to the
/// plain message.
pub fn format_toml_error(source: &str, error: &toml::de::Error) -> String {
    let message = error.message().trim();
    let Some(span) = error.span() else {
        return message.to_string();
    };

    let mut output = Vec::new();
    Report::build(ReportKind::Error, (), span.start)
        .with_config(Config::default().with_color(false))
        .with_message(message)
        .with_label(Label::new(span).with_color(Color::Red).with_message(message))
        .finish()
        .write(Source::from(source), &mut output)
        .ok();

    let rendered = String::from_utf8(output).unwrap_or_default();
    if rendered.is_empty() {
        message.to_string()
    } else {
        rendered
    }
}
