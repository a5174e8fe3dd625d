mod config;

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use npcf::codec::{self, Model};
use npcf::types::*;
use npcf::Validate;

/// Decode an Npcf_PolicyAuthorization JSON body and print its canonical form.
#[derive(Parser, Debug)]
#[command(name = "npcf")]
struct Cli {
    /// Schema name of the body, e.g. AppSessionContextUpdateData.
    model: String,

    /// Read the body from this file instead of stdin.
    file: Option<PathBuf>,

    /// Skip the pattern checks.
    #[arg(long, default_value_t = false)]
    no_validate: bool,

    #[arg(long, default_value_t = false)]
    pretty: bool,
}

#[derive(Debug, Clone, Copy)]
struct Options {
    validate: bool,
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = config::Config::from_env()?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let options = Options {
        validate: config.validate && !cli.no_validate,
        pretty: config.pretty || cli.pretty,
    };

    let body = read_body(cli.file.as_ref())?;
    let output = check(&cli.model, &body, options)?;
    println!("{}", output);

    Ok(())
}

fn read_body(file: Option<&PathBuf>) -> anyhow::Result<Vec<u8>> {
    match file {
        Some(path) => {
            fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            let mut body = Vec::new();
            io::stdin()
                .read_to_end(&mut body)
                .context("Failed to read body from stdin")?;
            Ok(body)
        }
    }
}

fn check(model: &str, body: &[u8], options: Options) -> anyhow::Result<String> {
    match model {
        "AppSessionContext" => roundtrip::<AppSessionContext>(body, options),
        "AppSessionContextReqData" => roundtrip::<AppSessionContextReqData>(body, options),
        "AppSessionContextUpdateData" => roundtrip::<AppSessionContextUpdateData>(body, options),
        "EventsNotification" => roundtrip::<EventsNotification>(body, options),
        "EventsSubscReqData" => roundtrip::<EventsSubscReqData>(body, options),
        "TerminationInfo" => roundtrip_unchecked::<TerminationInfo>(body, options),
        "ProblemDetails" => roundtrip::<ProblemDetails>(body, options),
        "PcscfRestorationRequestData" => roundtrip::<PcscfRestorationRequestData>(body, options),
        "BatOffsetInfo" => roundtrip_unchecked::<BatOffsetInfo>(body, options),
        "MediaComponent" => roundtrip::<MediaComponent>(body, options),
        other => bail!("Unknown model: {}", other),
    }
}

fn roundtrip<T: Model + Validate>(body: &[u8], options: Options) -> anyhow::Result<String> {
    let decoded: T = if options.validate {
        codec::decode_validated(body)
    } else {
        codec::decode(body)
    }
    .with_context(|| format!("Invalid {} body", T::NAME))?;

    render(&decoded, options)
}

/// For models that carry no pattern-constrained properties.
fn roundtrip_unchecked<T: Model>(body: &[u8], options: Options) -> anyhow::Result<String> {
    let decoded: T = codec::decode(body).with_context(|| format!("Invalid {} body", T::NAME))?;
    render(&decoded, options)
}

fn render<T: Model>(model: &T, options: Options) -> anyhow::Result<String> {
    let output = if options.pretty {
        codec::encode_pretty(model)
    } else {
        codec::encode_string(model)
    };
    tracing::info!(model = T::NAME, "Body decoded");
    output.with_context(|| format!("Failed to encode {}", T::NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    const STRICT: Options = Options {
        validate: true,
        pretty: false,
    };

    #[test]
    fn test_check_canonicalizes_body() {
        let out = check("BatOffsetInfo", br#"{ "ranBatOffsetNotif" : 5 }"#, STRICT).unwrap();
        assert_eq!(out, r#"{"ranBatOffsetNotif":5}"#);
    }

    #[test]
    fn test_check_unknown_model() {
        let err = check("SmContext", b"{}", STRICT).unwrap_err();
        assert_eq!(err.to_string(), "Unknown model: SmContext");
    }

    #[test]
    fn test_check_validation_toggle() {
        let body = br#"{"medCompN": 1, "marBwUl": "fast"}"#;
        assert!(check("MediaComponent", body, STRICT).is_err());
        let lenient = Options {
            validate: false,
            ..STRICT
        };
        assert!(check("MediaComponent", body, lenient).is_ok());
    }

    #[test]
    fn test_check_reports_missing_property() {
        let err = check("TerminationInfo", br#"{"termCause": "PS_TO_CS_HO"}"#, STRICT).unwrap_err();
        assert_eq!(
            err.root_cause().to_string(),
            "no value given for required property resUri"
        );
    }
}
