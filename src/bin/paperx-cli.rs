use clap::{Args, Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "paperx-cli")]
#[command(about = "Command-line client for the PaperX catalogue API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check service health
    Health,
    /// Browse projects
    Projects {
        #[command(subcommand)]
        command: ProjectCommands,
    },
    /// Browse categories
    Categories {
        #[command(subcommand)]
        command: CategoryCommands,
    },
}

#[derive(Subcommand)]
enum ProjectCommands {
    /// Search, filter and page through projects
    List(ProjectListArgs),
    /// Show one project
    Get { id: u64 },
}

#[derive(Subcommand)]
enum CategoryCommands {
    /// Search and sort categories
    List(CategoryListArgs),
    /// Show one category
    Get { id: u64 },
}

#[derive(Args)]
struct ProjectListArgs {
    #[arg(short, long)]
    q: Option<String>,
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    status: Option<String>,
    #[arg(long)]
    tag: Option<String>,
    #[arg(long)]
    min_price: Option<f64>,
    #[arg(long)]
    max_price: Option<f64>,
    #[arg(long)]
    sort_by: Option<String>,
    #[arg(long)]
    order: Option<String>,
    #[arg(long)]
    page: Option<u64>,
    #[arg(long)]
    limit: Option<u64>,
}

#[derive(Args)]
struct CategoryListArgs {
    #[arg(short, long)]
    q: Option<String>,
    #[arg(long)]
    sort_by: Option<String>,
    #[arg(long)]
    order: Option<String>,
}

fn push(params: &mut Vec<(&'static str, String)>, key: &'static str, value: Option<impl ToString>) {
    if let Some(value) = value {
        params.push((key, value.to_string()));
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let request = match cli.command {
        Commands::Health => client.get(format!("{}/api/health", base)),
        Commands::Projects { command: ProjectCommands::Get { id } } => {
            client.get(format!("{}/api/projects/{}", base, id))
        }
        Commands::Projects { command: ProjectCommands::List(args) } => {
            let mut params = Vec::new();
            push(&mut params, "q", args.q);
            push(&mut params, "category", args.category);
            push(&mut params, "status", args.status);
            push(&mut params, "tag", args.tag);
            push(&mut params, "minPrice", args.min_price);
            push(&mut params, "maxPrice", args.max_price);
            push(&mut params, "sortBy", args.sort_by);
            push(&mut params, "order", args.order);
            push(&mut params, "page", args.page);
            push(&mut params, "limit", args.limit);
            client.get(format!("{}/api/projects", base)).query(&params)
        }
        Commands::Categories { command: CategoryCommands::Get { id } } => {
            client.get(format!("{}/api/categories/{}", base, id))
        }
        Commands::Categories { command: CategoryCommands::List(args) } => {
            let mut params = Vec::new();
            push(&mut params, "q", args.q);
            push(&mut params, "sortBy", args.sort_by);
            push(&mut params, "order", args.order);
            client.get(format!("{}/api/categories", base)).query(&params)
        }
    };

    print_response(request.send().await?).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: API returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
