use qr_payload::api::*;
use serde_json::json;
use std::error::Error;
use std::process::ExitCode;

const USAGE: &str = "usage: qr-payload [--config <file.json>] <command>
  describe <kind>              print the field definitions of a payload kind
  encode <kind> [key=value]... bind the parameters, validate and print the payload
  parse <payload>              detect the kind and print the parsed fields
kinds: otp, wifi, email, phone, sms, url, text";

fn main() -> ExitCode {
    env_logger::init();

    match run(std::env::args().skip(1).collect()) {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            match err.downcast_ref::<PayloadError>() {
                Some(payload_err) => eprintln!("[{}] {}", payload_err.code(), payload_err),
                None => eprintln!("{}", err),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: Vec<String>) -> Result<String, Box<dyn Error>> {
    let (config, args) = take_config(args)?;
    let Some((command, rest)) = args.split_first() else {
        return Err(USAGE.into());
    };

    match command.as_str() {
        "describe" => {
            let kind: PayloadType = argument(rest, 0, "kind")?.parse()?;
            let definitions = describe_fields_json(new_payload(kind).as_ref())?;
            Ok(serde_json::to_string_pretty(&definitions)?)
        }
        "encode" => {
            let kind: PayloadType = argument(rest, 0, "kind")?.parse()?;
            let params = rest[1..]
                .iter()
                .map(|pair| {
                    pair.split_once('=')
                        .map(|(key, value)| (key.to_string(), value.to_string()))
                        .ok_or_else(|| format!("expected key=value, found '{}'", pair))
                })
                .collect::<Result<Vec<_>, _>>()?;

            let mut payload = new_payload(kind);
            payload.bind_params(&params)?;
            Ok(payload.encode_with(&config)?)
        }
        "parse" => {
            let input = argument(rest, 0, "payload")?;
            let payload = parse_any_with(input, &config)?;
            let report = json!({
                "kind": payload.payload_type(),
                "fields": payload.to_json(),
                "valid": payload.validate().is_ok(),
            });
            Ok(serde_json::to_string_pretty(&report)?)
        }
        _ => Err(USAGE.into()),
    }
}

fn take_config(mut args: Vec<String>) -> Result<(CodecConfig, Vec<String>), Box<dyn Error>> {
    if args.first().map(String::as_str) != Some("--config") {
        return Ok((CodecConfig::default(), args));
    }
    if args.len() < 2 {
        return Err("--config requires a file path".into());
    }
    let path = args.remove(1);
    args.remove(0);
    let config = CodecConfig::from_json(&std::fs::read_to_string(&path)?)?;
    log::debug!("loaded codec configuration from {}", path);
    Ok((config, args))
}

fn argument<'a>(args: &'a [String], index: usize, name: &str) -> Result<&'a str, Box<dyn Error>> {
    args.get(index)
        .map(String::as_str)
        .ok_or_else(|| format!("missing <{}>\n{}", name, USAGE).into())
}
