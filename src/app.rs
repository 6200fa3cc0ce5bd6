use crate::cli::{Cli, Commands, OutputFormat};
use crate::config::Config;
use crate::consts::{DEFAULT_KEYWORD, DEFAULT_MAX_PRICE, DEFAULT_MIN_PRICE};
use crate::core::{
    LoadResult, Review, count_by_product_id, filter_by_price_range, find_by_keyword_in_title,
    home_product_ids_under_100, product_ids_by_category_under_price, tech_titles_over_50_dollars,
    titles_by_category_over_price,
};
use crate::error::AppError;
use crate::output::{
    NumberFormat, ReportData, TableOptions, build_count_table, build_review_table,
    build_value_table, output_counts_csv, output_counts_json, output_report_json,
    output_reviews_csv, output_reviews_json, output_values_csv, output_values_json, print_section,
    sorted_counts,
};
use crate::source::{load_reviews, resolve_source};

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) config: &'a Config,
    pub(crate) format: OutputFormat,
    pub(crate) table: TableOptions,
}

impl CommandContext<'_> {
    fn emit_reviews(&self, title: &str, reviews: &[&Review]) -> Result<(), AppError> {
        match self.format {
            OutputFormat::Json => println!("{}", output_reviews_json(reviews)?),
            OutputFormat::Csv => print!("{}", output_reviews_csv(reviews)),
            OutputFormat::Table => {
                print_section(title, self.table.use_color);
                if reviews.is_empty() {
                    println!("  No matching reviews.");
                } else {
                    println!("{}", build_review_table(reviews, self.table));
                }
            }
        }
        Ok(())
    }

    fn emit_values(&self, title: &str, header: &str, values: &[String]) -> Result<(), AppError> {
        match self.format {
            OutputFormat::Json => println!("{}", output_values_json(values)?),
            OutputFormat::Csv => print!("{}", output_values_csv(header, values)),
            OutputFormat::Table => {
                print_section(title, self.table.use_color);
                if values.is_empty() {
                    println!("  No matching reviews.");
                } else {
                    println!("{}", build_value_table(header, values, self.table));
                }
            }
        }
        Ok(())
    }

    fn emit_counts(&self, reviews: &[Review]) -> Result<(), AppError> {
        let counts = count_by_product_id(reviews);
        let rows = sorted_counts(&counts, self.cli.order);
        match self.format {
            OutputFormat::Json => println!("{}", output_counts_json(&rows)?),
            OutputFormat::Csv => print!("{}", output_counts_csv(&rows)),
            OutputFormat::Table => {
                print_section("Count by Product ID", self.table.use_color);
                println!("{}", build_count_table(&rows, self.table));
            }
        }
        Ok(())
    }
}

fn print_summary_line(loaded: &LoadResult, use_color: bool) {
    let text = format!("{} reviews loaded", loaded.reviews.len());
    if use_color {
        println!("\n  {} | \x1b[36m{:.2}ms\x1b[0m\n", text, loaded.elapsed_ms);
    } else {
        println!("\n  {} | {:.2}ms\n", text, loaded.elapsed_ms);
    }
}

fn handle_report(loaded: &LoadResult, ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let reviews = &loaded.reviews;
    let min_price = ctx.config.min_price.unwrap_or(DEFAULT_MIN_PRICE);
    let max_price = ctx.config.max_price.unwrap_or(DEFAULT_MAX_PRICE);
    let keyword = ctx.config.keyword.as_deref().unwrap_or(DEFAULT_KEYWORD);

    let all: Vec<&Review> = reviews.iter().collect();
    let in_range = filter_by_price_range(reviews, min_price, max_price);
    let keyword_matches = find_by_keyword_in_title(reviews, keyword);
    let tech_titles = tech_titles_over_50_dollars(reviews);
    let home_ids = home_product_ids_under_100(reviews);

    match ctx.format {
        OutputFormat::Csv => Err(AppError::UnsupportedFormat {
            format: OutputFormat::Csv.label(),
            command: "report",
        }),
        OutputFormat::Json => {
            let counts = count_by_product_id(reviews);
            let rows = sorted_counts(&counts, ctx.cli.order);
            let json = output_report_json(ReportData {
                reviews: &all,
                min_price,
                max_price,
                in_price_range: &in_range,
                counts: &rows,
                keyword,
                keyword_matches: &keyword_matches,
                tech_titles: &tech_titles,
                home_product_ids: &home_ids,
            })?;
            println!("{json}");
            Ok(())
        }
        OutputFormat::Table => {
            ctx.emit_reviews("Loaded Reviews", &all)?;
            print_summary_line(loaded, ctx.table.use_color);
            ctx.emit_reviews(
                &format!("Reviews with price between {min_price} and {max_price}"),
                &in_range,
            )?;
            ctx.emit_counts(reviews)?;
            ctx.emit_reviews(&format!("Reviews containing '{keyword}'"), &keyword_matches)?;
            ctx.emit_values("Tech titles over $50", "Title", &tech_titles)?;
            ctx.emit_values("Home products under $100", "Product", &home_ids)?;
            Ok(())
        }
    }
}

/// Load the configured source once and run the requested query against it
pub(crate) fn run(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let source = resolve_source(ctx.cli.file.as_deref());
    let loaded = load_reviews(source.as_ref()).map_err(|error| AppError::Load {
        origin: source.display_name(),
        error,
    })?;
    let reviews = &loaded.reviews;

    let command = ctx.cli.command.clone().unwrap_or(Commands::Report);
    tracing::debug!(command = command.name(), "running command");

    match command {
        Commands::Report => handle_report(&loaded, ctx),
        Commands::List => {
            let all: Vec<&Review> = reviews.iter().collect();
            ctx.emit_reviews("Loaded Reviews", &all)
        }
        Commands::Price { min, max } => ctx.emit_reviews(
            &format!("Reviews with price between {min} and {max}"),
            &filter_by_price_range(reviews, min, max),
        ),
        Commands::Count => ctx.emit_counts(reviews),
        Commands::Search { keyword } => ctx.emit_reviews(
            &format!("Reviews containing '{keyword}'"),
            &find_by_keyword_in_title(reviews, &keyword),
        ),
        Commands::Titles { category, over } => ctx.emit_values(
            &format!("{category} titles over {over}"),
            "Title",
            &titles_by_category_over_price(reviews, &category, over),
        ),
        Commands::Products { category, under } => ctx.emit_values(
            &format!("{category} products under {under}"),
            "Product",
            &product_ids_by_category_under_price(reviews, &category, under),
        ),
    }
}

/// Build the command context from merged CLI/config settings
pub(crate) fn build_context<'a>(
    cli: &'a Cli,
    config: &'a Config,
) -> Result<CommandContext<'a>, AppError> {
    let number_format = NumberFormat::from_locale(cli.locale.as_deref())?;
    Ok(CommandContext {
        cli,
        config,
        format: cli.output_format(),
        table: TableOptions {
            use_color: cli.use_color(),
            number_format,
        },
    })
}
