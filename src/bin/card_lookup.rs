use anyhow::Context;
use clap::Parser;
use scry_relay::config::{BotConfig, DEFAULT_API_BASE};
use scry_relay::core::format::reply_for;
use scry_relay::domain::model::Reply;
use scry_relay::utils::logger;
use scry_relay::{extract_queries, ScryfallClient};

/// 不連 Telegram，直接查 Scryfall 並印出 bot 會回的內容
#[derive(Parser)]
#[command(name = "card-lookup")]
#[command(about = "Run the [[card]] lookup for a message and print the replies")]
struct Args {
    /// Message text; `[[...]]` mentions are extracted, otherwise the whole text is the query
    message: String,

    #[arg(long, env = "SCRYFALL_API_BASE", default_value = DEFAULT_API_BASE)]
    api_base: String,

    #[arg(long, default_value = "10")]
    max_suggestions: usize,

    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    let config = BotConfig {
        api_base: args.api_base,
        max_suggestions: args.max_suggestions,
        ..Default::default()
    };
    let client = ScryfallClient::new(&config).context("building Scryfall client")?;

    let mut queries = extract_queries(&args.message);
    if queries.is_empty() {
        queries.push(args.message.trim().to_string());
    }

    for query in &queries {
        let card = client
            .named_exact(query)
            .await
            .with_context(|| format!("looking up '{}'", query))?;

        println!("🔍 [[{}]]", query);
        match reply_for(&card) {
            Reply::Photo { image_url, caption } => {
                println!("  photo: {}", image_url);
                println!("  caption: {}", caption);
            }
            Reply::MediaGroup {
                image_urls,
                caption,
            } => {
                for url in &image_urls {
                    println!("  photo: {}", url);
                }
                println!("  caption: {}", caption);
            }
            Reply::Text { body, .. } => {
                for line in body.lines() {
                    println!("  {}", line);
                }
            }
        }
    }

    Ok(())
}
