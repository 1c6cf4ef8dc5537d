use bookshelf_resolver::utils::{logger, validation::Validate};
use bookshelf_resolver::{Book, BookResolver, CliArgs, ResolverConfig, ResolverError};
use clap::Parser;

const EXIT_NOT_FOUND: i32 = 1;
const EXIT_INVALID_INPUT: i32 = 2;

fn load_config(args: &CliArgs) -> bookshelf_resolver::Result<ResolverConfig> {
    let config = match &args.config {
        Some(path) => ResolverConfig::from_file(path)?,
        None => ResolverConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

fn build_resolver(args: &CliArgs) -> bookshelf_resolver::Result<BookResolver> {
    let config = load_config(args)?;
    BookResolver::from_config(&config)
}

fn print_book(book: &Book, as_json: bool) -> anyhow::Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(book)?);
        return Ok(());
    }

    println!("ISBN:   {}", book.isbn);
    println!("Title:  {}", book.title);
    println!("Author: {}", book.author);
    if let Some(pages) = book.page_count {
        println!("Pages:  {}", pages);
    }
    if let Some(cover) = &book.cover_url {
        println!("Cover:  {}", cover);
    }
    println!("Size:   {}", book.size);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    if args.log_json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }
    tracing::debug!("CLI args: {:?}", args);

    let resolver = match build_resolver(&args) {
        Ok(resolver) => resolver,
        Err(e) => {
            tracing::error!("Configuration failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(EXIT_INVALID_INPUT);
        }
    };
    let keyword = args.keyword.as_deref();

    let resolved = if args.skip_validation {
        Ok(resolver.resolve(&args.isbn, keyword).await)
    } else {
        resolver.resolve_validated(&args.isbn, keyword).await
    };

    match resolved {
        Ok(Some(book)) => print_book(&book, args.json)?,
        Ok(None) => {
            eprintln!("No book found for ISBN {}", args.isbn);
            std::process::exit(EXIT_NOT_FOUND);
        }
        Err(e @ ResolverError::InvalidIsbn { .. }) => {
            eprintln!("❌ {}", e);
            std::process::exit(EXIT_INVALID_INPUT);
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
