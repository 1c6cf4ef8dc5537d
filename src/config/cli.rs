use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "bookshelf-resolver")]
#[command(about = "Resolve an ISBN-13 to a book record via OpenBD and Google Books")]
pub struct CliArgs {
    /// ISBN-13 to resolve (digits only)
    pub isbn: String,

    /// Free-text keyword searched on Google Books when the ISBN is not found
    #[arg(long, short)]
    pub keyword: Option<String>,

    /// TOML configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Query the sources even if the ISBN check digit does not match
    #[arg(long)]
    pub skip_validation: bool,

    /// Print the record as JSON
    #[arg(long)]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Emit logs as JSON lines instead of the compact format
    #[arg(long)]
    pub log_json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_args() {
        let args = CliArgs::try_parse_from(["bookshelf-resolver", "9784873119038"]).unwrap();

        assert_eq!(args.isbn, "9784873119038");
        assert!(args.keyword.is_none());
        assert!(args.config.is_none());
        assert!(!args.skip_validation);
        assert!(!args.json);
        assert!(!args.log_json);
    }

    #[test]
    fn test_parse_all_args() {
        let args = CliArgs::try_parse_from([
            "bookshelf-resolver",
            "9784041061907",
            "--keyword",
            "君の膵臓をたべたい",
            "--config",
            "resolver.toml",
            "--skip-validation",
            "--json",
            "--verbose",
            "--log-json",
        ])
        .unwrap();

        assert_eq!(args.keyword.as_deref(), Some("君の膵臓をたべたい"));
        assert_eq!(args.config, Some(PathBuf::from("resolver.toml")));
        assert!(args.skip_validation);
        assert!(args.json);
        assert!(args.verbose);
        assert!(args.log_json);
    }

    #[test]
    fn test_isbn_is_required() {
        assert!(CliArgs::try_parse_from(["bookshelf-resolver"]).is_err());
    }
}
