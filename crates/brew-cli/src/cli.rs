//! Line grammar of the interactive recipe builder, using clap
//!
//! Every line typed at the builder prompt is split into words and parsed
//! with clap's derive API, so each command gets argument validation and
//! `help` output for free. The argument structs wrap the core parameter
//! types:
//!
//! ```text
//! Typed line → split_line → BuilderLine (clap) → Core Params → Schedule
//! ```
//!
//! Core parameter types stay free of clap attributes; every wrapper has an
//! explicit `From` conversion to its core counterpart. Numeric fields go
//! through the core boundary parsers (`parse_water`, `parse_seconds`,
//! `parse_positive`), so `--water ""` means 0 and `--water lots` is rejected
//! before anything reaches the schedule.

use brew_core::{
    models::StepKind,
    params::{parse_positive, parse_seconds, parse_water, Id, StepCreate, UpdateStep},
};
use clap::{Args, Parser, Subcommand};

/// One line typed at the builder prompt.
#[derive(Parser, Debug)]
#[command(
    no_binary_name = true,
    disable_version_flag = true,
    help_template = "{all-args}"
)]
pub struct BuilderLine {
    #[command(subcommand)]
    pub command: BuilderCommand,
}

/// Commands available while building a recipe
#[derive(Subcommand, Debug)]
pub enum BuilderCommand {
    /// Append a step (defaults: pour, "Pour N", 50 ml, 30 s)
    #[command(alias = "a")]
    Add(AddStepArgs),
    /// Change fields of an existing step
    #[command(alias = "e")]
    Edit(EditStepArgs),
    /// Remove a step
    #[command(aliases = ["rm", "d"])]
    Remove(StepIdArgs),
    /// Show one step in full
    #[command(alias = "s")]
    Show(StepIdArgs),
    /// Set the coffee dose in grams
    #[command(alias = "g")]
    Grams(GramsArgs),
    /// Set the brew ratio (water per gram of coffee)
    #[command(alias = "r")]
    Ratio(RatioArgs),
    /// Replace everything with the default recipe
    Default,
    /// Print the recipe
    #[command(alias = "ls")]
    List,
    /// Brew the current recipe
    #[command(alias = "t")]
    Timer,
    /// Leave the program
    #[command(aliases = ["q", "exit"])]
    Quit,
}

/// Append a step to the recipe
#[derive(Args, Debug)]
pub struct AddStepArgs {
    /// Bloom or pour
    #[arg(short, long)]
    pub kind: Option<StepKind>,
    /// Label shown in the timer
    #[arg(short, long)]
    pub name: Option<String>,
    /// Water for this step in ml
    #[arg(short, long, value_parser = parse_water)]
    pub water: Option<u32>,
    /// Duration of this step in seconds
    #[arg(short, long, value_parser = parse_seconds)]
    pub time: Option<u32>,
    /// Free-form note
    #[arg(short, long)]
    pub description: Option<String>,
}

impl From<AddStepArgs> for StepCreate {
    fn from(val: AddStepArgs) -> Self {
        StepCreate {
            kind: val.kind,
            name: val.name,
            water: val.water,
            time: val.time,
            description: val.description,
        }
    }
}

/// Change fields of a step; omitted fields stay as they are
#[derive(Args, Debug)]
pub struct EditStepArgs {
    /// ID of the step, as shown by `list`
    pub id: u64,
    #[arg(short, long)]
    pub kind: Option<StepKind>,
    #[arg(short, long)]
    pub name: Option<String>,
    #[arg(short, long, value_parser = parse_water)]
    pub water: Option<u32>,
    #[arg(short, long, value_parser = parse_seconds)]
    pub time: Option<u32>,
    /// New note; an empty string clears it
    #[arg(short, long)]
    pub description: Option<String>,
}

impl From<EditStepArgs> for UpdateStep {
    fn from(val: EditStepArgs) -> Self {
        UpdateStep {
            id: val.id,
            kind: val.kind,
            name: val.name,
            water: val.water,
            time: val.time,
            description: val.description,
        }
    }
}

#[derive(Args, Debug)]
pub struct StepIdArgs {
    /// ID of the step, as shown by `list`
    pub id: u64,
}

impl From<StepIdArgs> for Id {
    fn from(val: StepIdArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Args, Debug)]
pub struct GramsArgs {
    /// Coffee dose in grams
    #[arg(value_parser = parse_grams)]
    pub grams: f64,
}

#[derive(Args, Debug)]
pub struct RatioArgs {
    /// Millilitres of water per gram of coffee
    #[arg(value_parser = parse_ratio)]
    pub ratio: f64,
}

fn parse_grams(input: &str) -> brew_core::Result<f64> {
    parse_positive("coffee_grams", input)
}

fn parse_ratio(input: &str) -> brew_core::Result<f64> {
    parse_positive("ratio", input)
}

/// Splits a typed line into words.
///
/// Words are separated by whitespace. Single or double quotes group words
/// and may be empty (`-d ""` clears a description). A backslash escapes the
/// next character outside single quotes.
pub fn split_line(line: &str) -> Result<Vec<String>, String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some('"') | None, '\\') => {
                let escaped = chars
                    .next()
                    .ok_or_else(|| "trailing backslash".to_string())?;
                current.push(escaped);
                in_word = true;
            }
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(format!("unterminated {q} quote"));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> Result<BuilderCommand, clap::Error> {
        let words = split_line(line).expect("valid quoting");
        BuilderLine::try_parse_from(words).map(|line| line.command)
    }

    #[test]
    fn test_split_line_words_and_quotes() {
        assert_eq!(
            split_line(r#"add -n "Pour 3" -d 'Slow, centre'"#).unwrap(),
            ["add", "-n", "Pour 3", "-d", "Slow, centre"]
        );
        assert_eq!(split_line("  list  ").unwrap(), ["list"]);
        assert!(split_line("").unwrap().is_empty());
    }

    #[test]
    fn test_split_line_empty_quotes_and_escapes() {
        assert_eq!(split_line(r#"edit 2 -d """#).unwrap(), ["edit", "2", "-d", ""]);
        assert_eq!(split_line(r"add -n Pour\ 3").unwrap(), ["add", "-n", "Pour 3"]);
        assert!(split_line(r#"add -n "open"#).is_err());
    }

    #[test]
    fn test_parse_add_with_defaults() {
        let BuilderCommand::Add(args) = parse("add").unwrap() else {
            panic!("expected add");
        };
        let params = StepCreate::from(args);
        assert!(params.name.is_none());
        assert!(params.water.is_none());
    }

    #[test]
    fn test_parse_add_with_fields() {
        let BuilderCommand::Add(args) =
            parse(r#"add -k bloom -n Bloom -w 45.6 -t 40 -d "Wet it""#).unwrap()
        else {
            panic!("expected add");
        };
        let params = StepCreate::from(args);
        assert_eq!(params.kind, Some(StepKind::Bloom));
        assert_eq!(params.water, Some(46));
        assert_eq!(params.time, Some(40));
        assert_eq!(params.description.as_deref(), Some("Wet it"));
    }

    #[test]
    fn test_parse_numeric_coercion() {
        let BuilderCommand::Edit(args) = parse(r#"edit 3 --water "" --time=-5"#).unwrap() else {
            panic!("expected edit");
        };
        let params = UpdateStep::from(args);
        assert_eq!(params.id, 3);
        assert_eq!(params.water, Some(0));
        assert_eq!(params.time, Some(0));
        assert!(params.name.is_none());
    }

    #[test]
    fn test_parse_rejects_non_numeric_water() {
        assert!(parse("add --water lots").is_err());
        assert!(parse("add --kind espresso").is_err());
    }

    #[test]
    fn test_parse_settings() {
        assert!(matches!(
            parse("grams 18").unwrap(),
            BuilderCommand::Grams(GramsArgs { grams }) if grams == 18.0
        ));
        assert!(matches!(
            parse("r 15.5").unwrap(),
            BuilderCommand::Ratio(RatioArgs { ratio }) if ratio == 15.5
        ));
        assert!(parse("grams 0").is_err());
        assert!(parse("ratio -1").is_err());
    }

    #[test]
    fn test_parse_aliases() {
        assert!(matches!(parse("ls").unwrap(), BuilderCommand::List));
        assert!(matches!(parse("q").unwrap(), BuilderCommand::Quit));
        assert!(matches!(parse("t").unwrap(), BuilderCommand::Timer));
        assert!(matches!(
            parse("rm 2").unwrap(),
            BuilderCommand::Remove(StepIdArgs { id: 2 })
        ));
    }
}
