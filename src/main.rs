//! CLI entry point for morefusion

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use morefusion::calc::{ActivityLevel, BmiInput, CalorieInput, Gender, Goal, UnitSystem};
use morefusion::commands::{self, calc::Output};
use morefusion::content::Category;
use morefusion::Site;

#[derive(Parser)]
#[command(name = "morefusion")]
#[command(version = "0.1.0")]
#[command(about = "Blog content and calculators for the MoreFusion site", long_about = None)]
struct Cli {
    /// Set the site directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List posts, tags or categories
    List {
        /// Type of content to list (post, latest, tag, category)
        #[arg(default_value = "post")]
        r#type: String,

        /// Only posts in this category
        #[arg(short = 'C', long)]
        category: Option<Category>,

        /// Maximum number of posts
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        #[arg(long)]
        json: bool,
    },

    /// Show one post with its neighbours
    Show {
        category: Category,
        slug: String,

        #[arg(long)]
        json: bool,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        #[arg(short = 'C', long, default_value = "general")]
        category: Category,

        /// File name to use instead of the slugified title
        #[arg(short, long)]
        slug: Option<String>,
    },

    /// Loan EMI and amortization schedule
    Emi {
        /// Loan amount
        principal: f64,
        /// Annual interest rate in percent
        rate: f64,
        /// Tenure in years
        years: f64,

        /// Print the schedule as CSV
        #[arg(long, conflicts_with = "json")]
        csv: bool,

        #[arg(long)]
        json: bool,
    },

    /// Daily calorie and macro targets
    Calories {
        #[arg(long)]
        age: f64,
        #[arg(long)]
        gender: Gender,
        /// Weight in kg, or lb with --imperial
        #[arg(long)]
        weight: f64,
        /// Height in cm, or inches with --imperial
        #[arg(long)]
        height: f64,
        #[arg(long, default_value = "moderate")]
        activity: ActivityLevel,
        #[arg(long, default_value = "maintain")]
        goal: Goal,
        #[arg(long)]
        imperial: bool,
        #[arg(long)]
        json: bool,
    },

    /// Body mass index
    Bmi {
        #[arg(long)]
        age: f64,
        /// Height in cm, or feet with --us
        #[arg(long)]
        height: f64,
        /// Extra inches with --us
        #[arg(long, default_value_t = 0.0)]
        inches: f64,
        /// Weight in kg, or lb with --us
        #[arg(long)]
        weight: f64,
        #[arg(long)]
        us: bool,
        #[arg(long)]
        json: bool,
    },

    /// Date arithmetic
    Date {
        #[command(subcommand)]
        command: DateCommands,
    },

    /// Display version information
    Version,
}

#[derive(Subcommand)]
enum DateCommands {
    /// Days between two dates (YYYY-MM-DD)
    Between {
        start: String,
        end: String,
        #[arg(long)]
        json: bool,
    },

    /// Move a date by a number of days
    Add {
        date: String,
        #[arg(allow_hyphen_values = true)]
        days: i64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "morefusion=debug,info"
    } else {
        "morefusion=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::List {
            r#type,
            category,
            limit,
            json,
        } => {
            let site = Site::new(&base_dir)?;
            commands::list::run(&site, &r#type, category, limit, json)?;
        }

        Commands::Show {
            category,
            slug,
            json,
        } => {
            let site = Site::new(&base_dir)?;
            commands::show::run(&site, category, &slug, json)?;
        }

        Commands::New {
            title,
            category,
            slug,
        } => {
            let site = Site::new(&base_dir)?;
            tracing::info!("Creating new {} post with title: {}", category, title);
            let path = commands::new::create_post(&site, &title, category, slug.as_deref())?;
            println!("Created {}", path.display());
        }

        Commands::Emi {
            principal,
            rate,
            years,
            csv,
            json,
        } => {
            let site = Site::new(&base_dir)?;
            let output = if csv {
                Output::Csv
            } else if json {
                Output::Json
            } else {
                Output::Text
            };
            commands::calc::emi(&site, principal, rate, years, output)?;
        }

        Commands::Calories {
            age,
            gender,
            weight,
            height,
            activity,
            goal,
            imperial,
            json,
        } => {
            let input = CalorieInput {
                age,
                gender,
                weight,
                height,
                activity_level: activity,
                goal,
                unit: if imperial {
                    UnitSystem::Imperial
                } else {
                    UnitSystem::Metric
                },
            };
            commands::calc::calories(&input, json)?;
        }

        Commands::Bmi {
            age,
            height,
            inches,
            weight,
            us,
            json,
        } => {
            let input = if us {
                BmiInput::Us {
                    feet: height,
                    inches,
                    pounds: weight,
                }
            } else {
                BmiInput::Metric {
                    height_cm: height,
                    weight_kg: weight,
                }
            };
            commands::calc::bmi(age, input, json)?;
        }

        Commands::Date { command } => match command {
            DateCommands::Between { start, end, json } => {
                commands::calc::date_between(&start, &end, json)?;
            }
            DateCommands::Add { date, days } => {
                commands::calc::date_add(&date, days)?;
            }
        },

        Commands::Version => {
            println!("morefusion version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
