use clap::Parser;
use std::fs;
use std::io::{self, Read};

use crate::calculator::CalculationSummary;
use crate::error::AppError;
use crate::models::{Assumptions, Inputs, Property};

#[derive(Parser, Debug)]
#[command(author, version, about = "Seawater properties from the TEOS-10 Gibbs function", long_about = None)]
pub struct Args {
    #[arg(long)]
    json: bool,
    #[arg(
        long,
        value_name = "FILE",
        help = "JSON file with inputs, optional assumptions and properties; '-' reads from stdin"
    )]
    input: Option<String>,
    #[arg(
        long,
        value_name = "JSON",
        help = "Inline JSON for inputs (overrides --input)"
    )]
    inputs_json: Option<String>,
    #[arg(
        long,
        value_name = "JSON",
        help = "Inline JSON for assumptions (optional, supplements --inputs-json)"
    )]
    assumptions_json: Option<String>,
    #[arg(
        long = "property",
        value_name = "NAME",
        value_enum,
        help = "Property to evaluate; repeat for several (default: rho, sound_speed, entropy)"
    )]
    properties: Vec<Property>,
    #[arg(short, long, help = "Log solver and masking details to stderr")]
    pub verbose: bool,
}

/// A parsed request: what to evaluate and on which samples.
#[derive(Debug)]
pub struct Request {
    pub inputs: Inputs,
    pub assumptions: Assumptions,
    pub properties: Vec<Property>,
}

#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct CmdInput {
    inputs: Inputs,
    #[serde(default)]
    assumptions: Option<Assumptions>,
    #[serde(default)]
    properties: Option<Vec<Property>>,
}

fn parse_inline_inputs(
    inputs_json: &str,
    assumptions_json: Option<&String>,
) -> Result<(Inputs, Assumptions, Option<Vec<Property>>), AppError> {
    let inputs: Inputs =
        serde_json::from_str(inputs_json).map_err(|source| AppError::ParseInputsJson { source })?;

    let assumptions = match assumptions_json {
        Some(s) => serde_json::from_str::<Assumptions>(s)
            .map_err(|source| AppError::ParseAssumptionsJson { source })?,
        None => Assumptions::default(),
    };

    Ok((inputs, assumptions, None))
}

fn parse_cmd_input_doc(doc: &str) -> Result<(Inputs, Assumptions, Option<Vec<Property>>), AppError> {
    let parsed: CmdInput =
        serde_json::from_str(doc).map_err(|source| AppError::ParseCmdInputJson { source })?;
    Ok((
        parsed.inputs,
        parsed.assumptions.unwrap_or_default(),
        parsed.properties,
    ))
}

pub fn parse_inputs(args: &Args) -> Result<Request, AppError> {
    let (inputs, assumptions, doc_properties) = match (&args.inputs_json, &args.input) {
        (Some(inputs_json), _) => parse_inline_inputs(inputs_json, args.assumptions_json.as_ref())?,
        (None, Some(path)) if path == "-" => {
            let mut s = String::new();
            io::stdin()
                .read_to_string(&mut s)
                .map_err(|source| AppError::ReadStdin { source })?;
            parse_cmd_input_doc(&s)?
        }
        (None, Some(path)) => {
            let s = fs::read_to_string(path).map_err(|source| AppError::ReadFile {
                path: path.clone(),
                source,
            })?;
            parse_cmd_input_doc(&s)?
        }
        (None, None) => return Err(AppError::MissingInputData),
    };

    // Flags win over the document; the document wins over the defaults.
    let properties = if !args.properties.is_empty() {
        args.properties.clone()
    } else {
        doc_properties
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| Property::DEFAULTS.to_vec())
    };

    Ok(Request {
        inputs,
        assumptions,
        properties,
    })
}

fn format_values(values: &[Option<f64>]) -> String {
    values
        .iter()
        .map(|v| match v {
            Some(v) => format!("{v}"),
            None => "--".to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn print_output(out: &CalculationSummary, args: &Args) -> Result<(), AppError> {
    if args.json {
        let s = serde_json::to_string_pretty(&out)
            .map_err(|source| AppError::SerializeOutput { source })?;
        println!("{}", s);
    } else {
        for result in &out.results {
            println!(
                "{} [{}]: {}",
                result.property,
                result.unit,
                format_values(&result.values)
            );
        }
    }

    Ok(())
}
