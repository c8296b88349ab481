use anyhow::Result;
use clap::Parser;

use newswire::feed::{FeedClient, FetchOutcome};
use newswire::filter::Filter;
use newswire::present::present;
use newswire::util::truncate_to_width;

#[derive(Parser, Debug)]
#[command(name = "newswire", about = "Fetch Google News headlines for a topic")]
struct Args {
    /// Topic to fetch (top headlines when omitted)
    #[arg(long, value_enum, default_value_t = Filter::None)]
    topic: Filter,

    /// Print articles as JSON instead of text rows
    #[arg(long)]
    json: bool,

    /// Truncate titles to this display width (columns)
    #[arg(long, value_name = "COLS")]
    width: Option<usize>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let mut client = FeedClient::new();
    let mut outcomes = client.request_feed(args.topic);

    while let Some(outcome) = outcomes.recv().await {
        match outcome {
            FetchOutcome::Loading => {
                eprintln!("{} を取得中...", args.topic.label());
            }
            FetchOutcome::Loaded(articles) => {
                let items = present(&articles);
                if args.json {
                    println!("{}", serde_json::to_string_pretty(&items)?);
                } else {
                    for item in &items {
                        let title = match args.width {
                            Some(width) => truncate_to_width(&item.title, width),
                            None => (&*item.title).into(),
                        };
                        let date = item.formatted_date.as_deref().unwrap_or("");
                        println!("{:<16} {:>16}  {}", item.source, date, title);
                        println!("{:>33}  {}", "", item.link);
                    }
                    eprintln!("{} 件", items.len());
                }
            }
            FetchOutcome::Error(message) => {
                eprintln!("エラー: {message}");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
