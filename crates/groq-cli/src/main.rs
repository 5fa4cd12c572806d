//! Command-line demo for the groq-rs pipe adapter
//!
//! Sends one chat completion through the pipe the way a host plugin
//! framework would, or lists the models the pipe currently exposes.

use clap::Parser;
use futures::StreamExt;
use groq_pipe::{GroqPipe, PipeResponse};
use serde_json::{Map, Value, json};
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "groq-cli")]
#[command(about = "Demo client for the groq-rs pipe adapter", long_about = None)]
struct Args {
    /// Model id; a host-style '<prefix>.' is accepted and stripped
    #[arg(short, long, default_value = "groq_new.moonshotai/kimi-k2-instruct")]
    model: String,

    /// User message to send
    #[arg(short, long, default_value = "Hello from demo!")]
    prompt: String,

    /// Request a streamed response and print lines as they arrive
    #[arg(long)]
    stream: bool,

    /// List the models the pipe exposes and exit
    #[arg(long)]
    list_models: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    groq_utils::init_tracing();

    let args = Args::parse();
    let pipe = GroqPipe::from_env()?;

    if args.list_models {
        for entry in pipe.models().await {
            println!("{}", entry.id);
        }
        return Ok(());
    }

    info!(model = %args.model, stream = args.stream, "sending demo request");

    let mut body = Map::new();
    body.insert("model".to_string(), Value::String(args.model));
    body.insert(
        "messages".to_string(),
        json!([{"role": "user", "content": args.prompt}]),
    );
    body.insert("stream".to_string(), Value::Bool(args.stream));

    match pipe.execute(body).await {
        Ok(PipeResponse::Completion(value)) => {
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        Ok(PipeResponse::Stream(mut lines)) => {
            while let Some(line) = lines.next().await {
                match line {
                    Ok(bytes) => println!("{}", String::from_utf8_lossy(&bytes)),
                    Err(err) => {
                        eprintln!("{err}");
                        break;
                    }
                }
            }
        }
        Err(err) => eprintln!("{err}"),
    }

    Ok(())
}
