use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, bail};
use reviewhub_forms::FormKind;
use reviewhub_validator::form::{Form, FormReport, Submission};
use reviewhub_validator::schema::FormSchema;
use serde_json::{Map, Value, json};

use crate::cli::{CheckArgs, Cli, Command, FormSource, InputArgs};

pub fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Command::Forms => {
            list_forms();
            Ok(ExitCode::SUCCESS)
        }
        Command::Schema { form } => {
            println!("{}", form.schema().to_json()?);
            Ok(ExitCode::SUCCESS)
        }
        Command::Check(args) => check(&args),
        Command::Payload(args) => payload(&args),
    }
}

fn list_forms() {
    for kind in FormKind::ALL {
        println!("{:<16} {}", kind.as_str(), kind.description());
    }
}

fn check(args: &CheckArgs) -> anyhow::Result<ExitCode> {
    let mut form = prepare(&args.input)?;
    let report = form.run_validators();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report_json(&report, args.all))?);
    } else if report.any_errors() {
        print_errors(&report, args.all, false);
    } else {
        println!("ok: all {} fields passed", form.len());
    }

    Ok(exit_code(report.any_errors()))
}

fn payload(args: &InputArgs) -> anyhow::Result<ExitCode> {
    let mut form = prepare(args)?;
    match form.submit(|payload| payload) {
        Submission::Sent(payload) => {
            println!("{}", serde_json::to_string_pretty(&payload)?);
            Ok(ExitCode::SUCCESS)
        }
        Submission::Blocked(report) => {
            print_errors(&report, false, true);
            Ok(exit_code(true))
        }
    }
}

fn exit_code(blocked: bool) -> ExitCode {
    if blocked {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn prepare(args: &InputArgs) -> anyhow::Result<Form> {
    let mut form = load_form(&args.source)?;
    let values = read_values(&args.values)?;
    tracing::debug!(fields = form.len(), values = values.len(), "applying values");

    for (name, value) in values {
        let text = value_text(&name, value)?;
        form.handle_change(&name, text)?;
    }
    Ok(form)
}

fn load_form(source: &FormSource) -> anyhow::Result<Form> {
    match (&source.form, &source.schema) {
        (Some(kind), _) => Ok(kind.build()?),
        (None, Some(path)) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open schema {}", path.display()))?;
            let schema = FormSchema::from_reader(BufReader::new(file))
                .with_context(|| format!("failed to load schema {}", path.display()))?;
            Ok(schema.build()?)
        }
        (None, None) => bail!("either --form or --schema is required"),
    }
}

fn read_values(path: &Path) -> anyhow::Result<Map<String, Value>> {
    let mut text = String::new();
    if path == Path::new("-") {
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read values from stdin")?;
    } else {
        File::open(path)
            .and_then(|mut file| file.read_to_string(&mut text))
            .with_context(|| format!("failed to read values {}", path.display()))?;
    }

    match serde_json::from_str(&text).context("values are not valid JSON")? {
        Value::Object(map) => Ok(map),
        other => bail!("values must be a JSON object, got {}", kind_of(&other)),
    }
}

/// Text a control would hold for a JSON value. Checked boxes are `"true"`,
/// unchecked boxes and nulls are empty.
fn value_text(name: &str, value: Value) -> anyhow::Result<String> {
    Ok(match value {
        Value::String(text) => text,
        Value::Null | Value::Bool(false) => String::new(),
        Value::Bool(true) => "true".to_owned(),
        Value::Number(number) => number.to_string(),
        other => bail!("value of `{name}` must be a string, number, bool or null, got {}", kind_of(&other)),
    })
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn print_errors(report: &FormReport, all: bool, to_stderr: bool) {
    for (name, errors) in report.iter() {
        let shown = if all { errors } else { &errors[..errors.len().min(1)] };
        for error in shown {
            if to_stderr {
                eprintln!("{name}: {error}");
            } else {
                println!("{name}: {error}");
            }
        }
    }
}

fn report_json(report: &FormReport, all: bool) -> Value {
    let errors: Map<String, Value> = report
        .iter()
        .filter(|(_, errors)| !errors.is_empty())
        .map(|(name, errors)| {
            let messages: Vec<&str> = errors
                .iter()
                .take(if all { errors.len() } else { 1 })
                .map(|e| e.message.as_ref())
                .collect();
            (name.to_owned(), json!(messages))
        })
        .collect();

    json!({
        "valid": !report.any_errors(),
        "errors": errors,
    })
}
