//! policysim command line
//!
//! Runs one simulation and prints the result as JSON.

use policysim::{run, ParamValue, PolicyType, RawParameters};

/// Command line configuration
struct Config {
    /// Policy family to simulate
    policy: PolicyType,
    /// Raw form parameters, e.g. `taxType=income`
    params: RawParameters,
    /// Pretty-print the JSON output
    pretty: bool,
    /// Question for the chat advisor about the result
    #[cfg(feature = "relay")]
    ask: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            policy: PolicyType::default(),
            params: RawParameters::new(),
            pretty: false,
            #[cfg(feature = "relay")]
            ask: None,
        }
    }
}

fn fail(message: &str) -> ! {
    eprintln!("error: {message}");
    std::process::exit(1);
}

/// Numbers become numeric parameters; anything else stays text.
fn param_value(raw: &str) -> ParamValue {
    raw.trim()
        .parse::<f64>()
        .map_or_else(|_| ParamValue::from(raw), ParamValue::from)
}

fn print_help() {
    println!("policysim - economic policy impact simulator");
    println!();
    println!("USAGE:");
    println!("    policysim [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -P, --policy <TYPE>        tax, subsidy, price_control or trade [default: tax]");
    println!("    -p, --param <KEY=VALUE>    Form parameter, repeatable (e.g. taxType=income, rate=20)");
    println!("        --pretty               Pretty-print the JSON result");
    #[cfg(feature = "relay")]
    println!("        --ask <QUESTION>       Ask the AI advisor about the result (needs AI_API_URL, AI_API_KEY)");
    println!("    -h, --help                 Print help information");
    println!();
    println!("Set RUST_LOG=debug to trace the run on stderr.");
}

fn parse_args() -> Config {
    let args: Vec<String> = std::env::args().collect();
    let mut config = Config::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--policy" | "-P" => {
                let Some(value) = args.get(i + 1) else {
                    fail("--policy requires a value");
                };
                config.policy = value.parse().unwrap_or_else(|e| fail(&format!("{e}")));
                i += 2;
            }
            "--param" | "-p" => {
                let Some(pair) = args.get(i + 1) else {
                    fail("--param requires a value");
                };
                let Some((key, value)) = pair.split_once('=') else {
                    fail(&format!("invalid parameter (expected KEY=VALUE): {pair}"));
                };
                config.params.insert(key.trim().to_string(), param_value(value));
                i += 2;
            }
            "--pretty" => {
                config.pretty = true;
                i += 1;
            }
            #[cfg(feature = "relay")]
            "--ask" => {
                let Some(question) = args.get(i + 1) else {
                    fail("--ask requires a value");
                };
                config.ask = Some(question.clone());
                i += 2;
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            arg => fail(&format!("unknown argument: {arg}")),
        }
    }

    config
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(feature = "relay")]
fn ask(result: &policysim::SimulationResult, question: &str) -> policysim::PolicySimResult<()> {
    use std::io::Write;

    use policysim::chat::relay::ChatRelay;
    use policysim::chat::Conversation;
    use policysim::PolicySimError;

    let relay = ChatRelay::from_env()?;
    let mut conversation = Conversation::new();
    conversation.set_simulation(result)?;
    if !conversation.push_user(question) {
        return Err(PolicySimError::internal("question is empty"));
    }

    let runtime = tokio::runtime::Runtime::new().map_err(|e| PolicySimError::internal(e.to_string()))?;
    runtime.block_on(relay.stream_chat(&conversation.to_request(), |delta| {
        print!("{delta}");
        let _ = std::io::stdout().flush();
    }))?;
    println!();
    Ok(())
}

#[cfg(feature = "relay")]
fn follow_up(config: &Config, result: &policysim::SimulationResult) -> Result<(), Box<dyn std::error::Error>> {
    match config.ask.as_deref() {
        Some(question) => Ok(ask(result, question)?),
        None => Ok(()),
    }
}

#[cfg(not(feature = "relay"))]
#[allow(clippy::unnecessary_wraps)]
fn follow_up(_config: &Config, _result: &policysim::SimulationResult) -> Result<(), Box<dyn std::error::Error>> {
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args();
    init_tracing();

    let result = run(config.policy, &config.params);
    let json = if config.pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{json}");

    follow_up(&config, &result)
}
