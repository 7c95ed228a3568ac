use anyhow::Result;
use clap::Parser;
use rusty_support::DescribeCommunicationsRequest;

#[derive(Parser)]
struct Cli {
    #[arg(long)]
    case_id: Option<String>,

    #[arg(long)]
    after_time: Option<String>,

    #[arg(long)]
    before_time: Option<String>,

    #[arg(long)]
    next_token: Option<String>,

    #[arg(long)]
    max_results: Option<i32>,
}

fn main() -> Result<()> {
    let Cli {
        case_id,
        after_time,
        before_time,
        next_token,
        max_results,
    } = Cli::parse();

    let mut request = DescribeCommunicationsRequest::new();
    request.case_id = case_id;
    request.before_time = before_time;
    request.after_time = after_time;
    request.next_token = next_token;
    request.max_results = max_results;

    request.validate()?;

    println!("Summary : {}", request);
    println!("Body    : {}", serde_json::to_string(&request)?);

    Ok(())
}
