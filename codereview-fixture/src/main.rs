use clap::Parser;
use codereview_fixture::demo::DemoInputs;
use codereview_fixture::output::{emit, render, OutputFormat};
use codereview_fixture_lib::user_data::UserData;
use codereview_fixture_lib::FixtureError;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "codereview-fixture")]
#[command(about = "Sample program with planted flaws for code-review tooling", long_about = None)]
struct Args {
    /// Output format: text, json or dot
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Output file path (optional); in text mode the file holds the whole transcript
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Fibonacci index to compute
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    fib_index: i64,

    /// User field as KEY=VALUE; replaces the sample user when given
    /// Example: --user name=Jane --user email=jane@example.com
    #[arg(long = "user", value_parser = parse_key_value)]
    user: Vec<(String, String)>,

    /// Dividend for the unguarded division
    #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
    dividend: f64,

    /// Divisor for the unguarded division
    #[arg(long, default_value_t = 2.0, allow_negative_numbers = true)]
    divisor: f64,
}

fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("invalid KEY=VALUE pair: no '=' found in '{raw}'"))?;
    Ok((key.to_string(), value.to_string()))
}

fn build_inputs(args: &Args) -> DemoInputs {
    let mut inputs = DemoInputs {
        fib_index: args.fib_index,
        dividend: args.dividend,
        divisor: args.divisor,
        ..DemoInputs::default()
    };
    if !args.user.is_empty() {
        inputs.user = args.user.iter().cloned().collect::<UserData>();
    }
    inputs
}

fn run(args: &Args) -> Result<(), FixtureError> {
    let Some(format) = OutputFormat::parse(&args.format) else {
        eprintln!("Error: Unknown format '{}'. Use 'text', 'json' or 'dot'", args.format);
        std::process::exit(1);
    };
    log::info!("📝 Output format: {}", format.as_str());

    let inputs = build_inputs(args);
    let output = render(format, &inputs, args.output.is_some())?;
    emit(&output, args.output.as_deref())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    if let Err(err) = run(&args) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codereview_fixture_lib::user_data::user_data;

    fn parse_args(extra: &[&str]) -> Args {
        let argv = std::iter::once("codereview-fixture").chain(extra.iter().copied());
        Args::try_parse_from(argv).expect("arguments should parse")
    }

    #[test]
    fn test_parse_key_value() {
        assert_eq!(
            parse_key_value("name=Jane"),
            Ok(("name".to_string(), "Jane".to_string()))
        );
    }

    #[test]
    fn test_parse_key_value_without_equals() {
        assert!(parse_key_value("name").is_err());
    }

    #[test]
    fn test_parse_key_value_splits_at_first_equals() {
        assert_eq!(
            parse_key_value("k=a=b"),
            Ok(("k".to_string(), "a=b".to_string()))
        );
    }

    #[test]
    fn test_user_flag_without_equals_rejected() {
        let result = Args::try_parse_from(["codereview-fixture", "--user", "name"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_build_inputs_defaults() {
        let inputs = build_inputs(&parse_args(&[]));
        assert_eq!(inputs.fib_index, 10);
        assert_eq!(inputs.user, user_data("John Doe", "john@example.com"));
        assert_eq!(inputs.dividend, 10.0);
        assert_eq!(inputs.divisor, 2.0);
    }

    #[test]
    fn test_build_inputs_overrides_numbers() {
        let args = parse_args(&["--fib-index", "-4", "--dividend", "9", "--divisor", "-3"]);
        let inputs = build_inputs(&args);
        assert_eq!(inputs.fib_index, -4);
        assert_eq!(inputs.dividend, 9.0);
        assert_eq!(inputs.divisor, -3.0);
    }

    #[test]
    fn test_build_inputs_user_replaces_sample() {
        let inputs = build_inputs(&parse_args(&["--user", "name=X"]));
        assert_eq!(inputs.user.len(), 1);
        assert_eq!(inputs.user.get("name").map(String::as_str), Some("X"));
        assert!(!inputs.user.contains_key("email"));

        let err = render(OutputFormat::Text, &inputs, true).unwrap_err();
        assert!(matches!(err, FixtureError::MissingKey(ref key) if key == "email"));
        assert_eq!(err.to_string(), "missing key: 'email'");
    }

    #[test]
    fn test_run_writes_full_transcript_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        let args = parse_args(&["-o", path.to_str().unwrap()]);

        run(&args).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "Processing user: John Doe\n\
             Fibonacci(10) = 55\n\
             User data: User: John Doe <john@example.com>\n\
             Division result: 5.0\n\
             Caught division by zero error\n"
        );
    }

    #[test]
    fn test_run_reports_missing_key() {
        let args = parse_args(&["--user", "name=Jane", "-f", "json"]);
        let err = run(&args).unwrap_err();
        assert_eq!(err.to_string(), "missing key: 'email'");
    }
}
