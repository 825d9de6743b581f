use anyhow::{Context, Result, anyhow};
use catalog::{Catalog, Company, Mentor, Seniority};
use clap::{Parser, Subcommand};
use colored::Colorize;
use feeds::{FeedAssembler, FeedConfig, HighlightedMentors};
use pipeline::scoring::{confidence, match_breakdown, reputation_score};
use pipeline::{CompanyFilters, ScoredMentor, SearchFilters};
use serde::Serialize;
use sources::CatalogSource;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

/// MentorMatch - Mentor Ranking & Discovery Engine
#[derive(Parser)]
#[command(name = "mentor-match")]
#[command(about = "Rank, match and discover mentors for companies", long_about = None)]
struct Cli {
    /// Directory holding mentors.json and companies.json
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// Optional JSON file overriding feed limits and timeouts
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print results as JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filtered mentor search, most recently updated first
    Search {
        /// Required stack (repeatable; any one must match)
        #[arg(long = "stack")]
        stacks: Vec<String>,

        /// JUNIOR, PLENO, SENIOR or STAFF
        #[arg(long)]
        seniority: Option<Seniority>,

        #[arg(long)]
        min_rate: Option<f64>,

        #[arg(long)]
        max_rate: Option<f64>,

        /// Minimum weekly availability in hours
        #[arg(long)]
        min_availability: Option<u32>,
    },

    /// Best-fitting mentors for a company
    Match {
        #[arg(long)]
        company_id: String,
    },

    /// Approved mentors ranked by reputation
    Top {
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Top, most active and newest approved mentors
    Highlighted {
        #[arg(long, default_value = "5")]
        limit: usize,
    },

    /// A shuffled mix of top, active and new mentors
    Discover {
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Shuffled match suggestions for a company
    Suggest {
        #[arg(long)]
        company_id: String,

        #[arg(long, default_value = "5")]
        limit: usize,
    },

    /// Search companies by stack and planned learners
    Companies {
        #[arg(long = "stack")]
        stacks: Vec<String>,

        #[arg(long)]
        min_learners: Option<u32>,

        #[arg(long)]
        max_learners: Option<u32>,
    },

    /// Show a mentor profile with its score breakdown
    Mentor {
        #[arg(long)]
        mentor_id: String,

        /// Also explain the match score against this company
        #[arg(long)]
        company_id: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => FeedConfig::from_file(path).context("Failed to load feed config")?,
        None => FeedConfig::default(),
    };

    let catalog = Arc::new(load_catalog(&cli.data_dir)?);
    let source = CatalogSource::new(catalog.clone());
    let assembler = FeedAssembler::new(Arc::new(source)).with_config(config);
    let json = cli.json;

    match cli.command {
        Commands::Search {
            stacks,
            seniority,
            min_rate,
            max_rate,
            min_availability,
        } => {
            let filters = SearchFilters {
                stacks: (!stacks.is_empty()).then_some(stacks),
                seniority,
                min_hourly_rate: min_rate,
                max_hourly_rate: max_rate,
                min_availability_hours: min_availability,
            };
            filters.validate().context("Invalid search filters")?;
            let mentors = assembler.search(&filters).await?;
            emit(json, &mentors, || print_mentors("Search Results", &mentors))?;
        }
        Commands::Match { company_id } => {
            let matched = assembler.match_for_company(&company_id).await?;
            emit(json, &matched, || {
                print_scored(&format!("Matches for {company_id}"), &matched)
            })?;
        }
        Commands::Top { limit } => {
            let top = assembler.get_top_mentors(limit).await?;
            emit(json, &top, || print_scored("Top Mentors", &top))?;
        }
        Commands::Highlighted { limit } => {
            let highlighted = assembler.get_highlighted_mentors(limit).await?;
            emit(json, &highlighted, || print_highlighted(&highlighted))?;
        }
        Commands::Discover { limit } => {
            let mentors = assembler.get_discover_mentors(limit).await?;
            emit(json, &mentors, || print_mentors("Discover", &mentors))?;
        }
        Commands::Suggest { company_id, limit } => {
            let suggestions = assembler
                .get_suggestions_for_company(&company_id, limit)
                .await?;
            emit(json, &suggestions, || {
                print_scored(&format!("Suggestions for {company_id}"), &suggestions)
            })?;
        }
        Commands::Companies {
            stacks,
            min_learners,
            max_learners,
        } => {
            let filters = CompanyFilters {
                stacks: (!stacks.is_empty()).then_some(stacks),
                min_learners,
                max_learners,
            };
            filters.validate().context("Invalid company filters")?;
            let companies = assembler.search_companies(&filters).await?;
            emit(json, &companies, || print_companies(&companies))?;
        }
        Commands::Mentor {
            mentor_id,
            company_id,
        } => handle_mentor(&catalog, &mentor_id, company_id.as_deref(), json)?,
    }

    Ok(())
}

fn load_catalog(data_dir: &Path) -> Result<Catalog> {
    eprintln!("Loading catalog from {}...", data_dir.display());
    let start = Instant::now();
    let catalog = Catalog::load_from_dir(data_dir).context("Failed to load catalog")?;
    let (mentors, companies) = catalog.counts();
    eprintln!(
        "{} Loaded {} mentors and {} companies in {:?}",
        "✓".green(),
        mentors,
        companies,
        start.elapsed()
    );
    Ok(catalog)
}

/// Print `value` as JSON, or run the table printer
fn emit<T: Serialize>(json: bool, value: &T, table: impl FnOnce()) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        table();
    }
    Ok(())
}

/// Handle the 'mentor' command
fn handle_mentor(
    catalog: &Catalog,
    mentor_id: &str,
    company_id: Option<&str>,
    json: bool,
) -> Result<()> {
    let mentor = catalog
        .get_mentor(mentor_id)
        .ok_or_else(|| anyhow!("Mentor {} not found", mentor_id))?;
    let company = company_id
        .map(|id| {
            catalog
                .get_company(id)
                .ok_or_else(|| anyhow!("Company {} not found", id))
        })
        .transpose()?;

    let breakdown = company.map(|c| match_breakdown(mentor, &c.required_stacks));

    if json {
        let value = serde_json::json!({
            "mentor": mentor,
            "confidence": confidence(mentor.reviews_or_zero()),
            "reputationScore": reputation_score(mentor),
            "match": breakdown.map(|b| serde_json::json!({
                "breakdown": b,
                "matchScore": b.match_score(),
            })),
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{}", format!("{} ({})", mentor.name, mentor.id).bold().blue());
    if let Some(title) = &mentor.title {
        println!("{}{}", "• ".green(), title);
    }
    println!("{}Seniority: {}", "• ".green(), mentor.seniority);
    println!("{}Stacks: {}", "• ".green(), mentor.stacks.join(", "));
    println!("{}Hourly rate: {:.2}", "• ".green(), mentor.hourly_rate);
    println!(
        "{}Availability: {}h/week",
        "• ".green(),
        mentor.availability_hours_per_week
    );
    println!(
        "{}Approved: {}  Active: {}",
        "• ".green(),
        mentor.is_approved,
        mentor.user_active
    );

    println!("{}", "Reputation:".bold());
    println!(
        "  rating {:.2} over {} reviews -> confidence {:.2}, score {:.3}",
        mentor.rating_or_zero(),
        mentor.reviews_or_zero(),
        confidence(mentor.reviews_or_zero()),
        reputation_score(mentor)
    );

    if let (Some(company), Some(b)) = (company, breakdown) {
        println!(
            "{}",
            format!("Match against {}:", company.company_name).bold()
        );
        println!("  stack score        {:.3}", b.stack_score);
        println!("  availability bonus {:.3}", b.availability_bonus);
        println!("  reputation         {:.3}", b.reputation_score);
        println!(
            "  final              {:.3} -> {}",
            b.final_score,
            b.match_score().to_string().green()
        );
    }
    Ok(())
}

fn print_mentor_line(rank: usize, mentor: &Mentor, suffix: &str) {
    println!(
        "{}. {} ({}) [{}] {} - {}h/week, {:.0}/h{}",
        rank.to_string().green(),
        mentor.name,
        mentor.id,
        mentor.stacks.join(", "),
        mentor.seniority,
        mentor.availability_hours_per_week,
        mentor.hourly_rate,
        suffix
    );
}

fn print_mentors(header: &str, mentors: &[Mentor]) {
    println!("{}", format!("{header}:").bold().blue());
    if mentors.is_empty() {
        println!("  (none)");
    }
    for (i, mentor) in mentors.iter().enumerate() {
        print_mentor_line(i + 1, mentor, "");
    }
}

fn print_scored(header: &str, scored: &[ScoredMentor]) {
    println!("{}", format!("{header}:").bold().blue());
    if scored.is_empty() {
        println!("  (none)");
    }
    for (i, entry) in scored.iter().enumerate() {
        let suffix = match (entry.match_score(), entry.reputation_score()) {
            (Some(score), _) => format!(" - Match: {score}"),
            (_, Some(score)) => format!(" - Reputation: {score:.3}"),
            _ => String::new(),
        };
        print_mentor_line(i + 1, &entry.mentor, &suffix);
    }
}

fn print_highlighted(highlighted: &HighlightedMentors) {
    print_mentors("Top by Reputation", &highlighted.top_by_reputation);
    print_mentors("Most Active", &highlighted.most_active);
    print_mentors("Newest Approved", &highlighted.newest_approved);
}

fn print_companies(companies: &[Company]) {
    println!("{}", "Companies:".bold().blue());
    if companies.is_empty() {
        println!("  (none)");
    }
    for company in companies {
        let learners = company
            .planned_learners
            .map(|n| n.to_string())
            .unwrap_or_else(|| "?".to_string());
        println!(
            "{} {} ({}) [{}] - {} learners",
            "•".green(),
            company.company_name,
            company.id,
            company.required_stacks.join(", "),
            learners
        );
    }
}
