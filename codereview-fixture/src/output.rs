use std::fmt::Write as _;
use std::io;
use std::path::Path;
use codereview_fixture_lib::export::to_dot;
use codereview_fixture_lib::graph::fixture_call_graph;
use codereview_fixture_lib::issues::known_issues;
use codereview_fixture_lib::{FixtureError, Result};
use crate::demo::{run_demo, DemoInputs, DemoReport, ZeroDivisionOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Dot,
}

impl OutputFormat {
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "text" | "txt" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            "dot" => Some(OutputFormat::Dot),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Dot => "dot",
        }
    }
}

/// Format a float the way the fixture's transcript shows it: whole values keep
/// `.0`, and exponents carry a sign and at least two digits (`1e+20`, `1.5e-07`).
#[must_use]
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    // Debug switches to scientific notation below 1e-4 and from 1e16 up
    let repr = format!("{value:?}");
    let Some((mantissa, exponent)) = repr.split_once('e') else {
        return repr;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

/// Render the report as the plain lines the fixture prints
#[must_use]
pub fn render_text(report: &DemoReport) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "Fibonacci({}) = {}", report.fibonacci_index, report.fibonacci);
    let _ = writeln!(output, "User data: {}", report.user);
    let _ = writeln!(output, "Division result: {}", format_float(report.division));
    match report.zero_division {
        ZeroDivisionOutcome::Caught => output.push_str("Caught division by zero error\n"),
        ZeroDivisionOutcome::Value(value) => {
            let _ = writeln!(output, "Error test result: {}", format_float(value));
        }
    }
    output
}

/// Render the report together with the issue catalogue as one JSON object
///
/// # Errors
///
/// Returns [`FixtureError::Serialization`] if the report cannot be encoded.
pub fn render_json(report: &DemoReport) -> Result<String> {
    let value = serde_json::json!({
        "report": report,
        "known_issues": known_issues(),
    });
    serde_json::to_string_pretty(&value)
        .map(|mut s| {
            s.push('\n');
            s
        })
        .map_err(|e| FixtureError::Serialization(e.to_string()))
}

/// Render the fixture call graph as Graphviz DOT
///
/// # Errors
///
/// Fails only if the static call graph is inconsistent.
pub fn render_dot() -> Result<String> {
    Ok(to_dot(&fixture_call_graph()?))
}

/// Run the demonstration (when the format needs it) and render its output.
///
/// With `inline_diagnostics`, text output starts with the user diagnostic line so
/// the result holds the whole transcript; otherwise the diagnostic goes straight
/// to stdout. JSON always sends it to stderr.
///
/// # Errors
///
/// Propagates any failure of [`run_demo`] or of the renderers.
pub fn render(format: OutputFormat, inputs: &DemoInputs, inline_diagnostics: bool) -> Result<String> {
    match format {
        OutputFormat::Dot => render_dot(),
        OutputFormat::Json => render_json(&run_demo(inputs, &mut io::stderr())?),
        OutputFormat::Text if inline_diagnostics => {
            let mut transcript = Vec::<u8>::new();
            let report = run_demo(inputs, &mut transcript)?;
            let mut output = String::from_utf8_lossy(&transcript).into_owned();
            output.push_str(&render_text(&report));
            Ok(output)
        }
        OutputFormat::Text => {
            let report = run_demo(inputs, &mut io::stdout())?;
            Ok(render_text(&report))
        }
    }
}

/// Write rendered output to `path`, or to stdout when no path is given
///
/// # Errors
///
/// Returns an I/O error if the file cannot be written.
pub fn emit(output: &str, path: Option<&Path>) -> Result<()> {
    if let Some(path) = path {
        std::fs::write(path, output)?;
        log::info!("✅ Output written to {}", path.display());
    } else {
        print!("{output}");
    }
    Ok(())
}
