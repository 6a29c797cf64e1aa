use std::{
    io::Write,
    path::PathBuf,
    process::ExitCode,
};

use clap::{Args as ClapArgs, Parser, Subcommand};
use infix::{
    EvalOptions, PowerAssociativity, Rounding, evaluate_with,
    server::{
        DEFAULT_PORT, STOP,
        client::CalcClient,
        listener::{CalcServer, ServerConfig},
    },
    tokenize,
    util::num::format_number,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// infix evaluates arithmetic expressions, either directly or as a small
/// calculator server.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Evaluates a single expression and prints the result.
    Eval {
        /// The expression, e.g. "3(4 + 5)".
        #[arg(allow_hyphen_values = true)]
        expression: String,

        /// Prints the token sequence instead of evaluating it.
        #[arg(long)]
        tokens: bool,

        #[command(flatten)]
        options: OptionArgs,
    },
    /// Runs the calculator server.
    Serve {
        /// Address to bind.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on.
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Directory where each client's session is logged on disconnect.
        #[arg(long)]
        log_dir: Option<PathBuf>,

        #[command(flatten)]
        options: OptionArgs,
    },
    /// Sends expressions typed on stdin to a running server until `#`.
    Client {
        /// Server address.
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Server port.
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
}

/// Evaluator switches shared by `eval` and `serve`.
#[derive(ClapArgs, Debug)]
struct OptionArgs {
    /// Rounds every intermediate result to this many decimal places.
    #[arg(long, value_name = "PLACES")]
    round: Option<u8>,

    /// Groups chained `^` from the right, so 2^3^2 is 512 instead of 64.
    #[arg(long)]
    right_assoc_power: bool,
}

impl OptionArgs {
    fn to_options(&self) -> EvalOptions {
        let rounding = self.round.map_or(Rounding::None, Rounding::DecimalPlaces);
        let power = if self.right_assoc_power {
            PowerAssociativity::Right
        } else {
            PowerAssociativity::Left
        };
        EvalOptions::default().with_rounding(rounding)
                              .with_power(power)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    // Respects RUST_LOG, defaulting to info for this crate.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("infix=info"));
    tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr))
                                  .with(filter)
                                  .init();

    let args = Args::parse();

    match run(args.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}

async fn run(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Eval { expression,
                        tokens: true,
                        .. } => {
            let tokens = tokenize(&expression)?;
            let rendered: Vec<String> = tokens.iter().map(ToString::to_string).collect();
            println!("{}", rendered.join(" "));
        },
        Command::Eval { expression,
                        options,
                        .. } => {
            let value = evaluate_with(&expression, &options.to_options())?;
            println!("{}", format_number(value));
        },
        Command::Serve { host,
                         port,
                         log_dir,
                         options, } => {
            let config = ServerConfig { host,
                                        port,
                                        log_dir,
                                        options: options.to_options() };
            CalcServer::bind(config).await?.run().await?;
        },
        Command::Client { host, port } => run_client(&host, port).await?,
    }
    Ok(())
}

async fn run_client(host: &str, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let mut client = CalcClient::connect((host, port)).await?;
    println!("Connected");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("Enter equation: ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim() == STOP {
            break;
        }
        let response = client.ask(&line).await?;
        println!("Server response: {response}");
    }

    client.close().await?;
    Ok(())
}
