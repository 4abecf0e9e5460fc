use anyhow::Result;
use clap::Parser;
use reqwest::Client;
use serde_json::{Value, json};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    amount: String,

    message: String,

    #[arg(long, default_value = "http://localhost:8080")]
    url: String,

    #[arg(long)]
    token: Option<String>,

    #[arg(long)]
    leaderboard: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let client = Client::new();

    let mut request = client
        .post(format!("{}/api/payment", args.url))
        .json(&json!({ "amount": args.amount, "message": args.message }));

    if let Some(token) = &args.token {
        request = request.header("X-Webhook-Token", token);
    }

    let res = request.send().await?;
    println!("Status: {}", res.status());
    println!("{}", res.json::<Value>().await?);

    if args.leaderboard {
        let board: Value = client
            .get(format!("{}/api/leaderboard", args.url))
            .send()
            .await?
            .json()
            .await?;

        println!("{}", serde_json::to_string_pretty(&board)?);
    }

    Ok(())
}
