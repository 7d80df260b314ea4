use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate recipe suggestions from your pantry", long_about = None)]
pub struct Cli {
    /// JSON file with the pantry items (defaults to the built-in sample pantry)
    #[arg(short, long)]
    pub pantry: Option<PathBuf>,

    /// JSON file with the dietary preferences (defaults to the built-in sample preferences)
    #[arg(short = 'd', long)]
    pub preferences: Option<PathBuf>,

    /// Model identifier, overrides SMART_MEALS_MODEL. Must accept a strict JSON schema
    /// whose root is an array (OpenAI models only accept object roots)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Print the prompt and the output schema, then exit without calling the model
    #[arg(long)]
    pub print_prompt: bool,

    /// Give up on generation after this many seconds
    #[arg(short, long)]
    pub timeout_secs: Option<u64>,

    /// Write the recipe list here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["smart-meals"]).unwrap();
        assert!(cli.pantry.is_none());
        assert!(!cli.print_prompt);
        assert!(cli.timeout_secs.is_none());
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "smart-meals",
            "--pantry",
            "pantry.json",
            "-d",
            "prefs.json",
            "--model",
            "openai/gpt-4o-mini",
            "--print-prompt",
            "--timeout-secs",
            "30",
            "-o",
            "out.json",
        ])
        .unwrap();
        assert_eq!(cli.pantry, Some(PathBuf::from("pantry.json")));
        assert_eq!(cli.preferences, Some(PathBuf::from("prefs.json")));
        assert_eq!(cli.model.as_deref(), Some("openai/gpt-4o-mini"));
        assert!(cli.print_prompt);
        assert_eq!(cli.timeout_secs, Some(30));
        assert_eq!(cli.output, Some(PathBuf::from("out.json")));
    }
}
