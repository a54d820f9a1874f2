//! Argument handling and the search loop of the `search-monster` command.

use {
    std::io::prelude::*,
    log::warn,
    crate::{
        Error,
        IntoResultExt as _,
        describe::{
            DescribeOpts,
            describe
        },
        search::search,
        source::MonsterSource
    }
};

pub const HELP: &str = "\
Search Monster

Search for Monsters by a part of their name

options:
  -h, --help    show this help message and exit
  --show-id     Enables showing monster IDs
  --hide-id     Disables showing monster IDs
  --show-lv     Enables showing monster levels
  --hide-lv     Disables showing monster levels
  --show-rank   Enables showing monster ranks
  --hide-rank   Disables showing monster ranks

Options can be entered at any point and in any order.
All arguments starting with a - (dash) are parsed as an argument, all other arguments are parsed as search queries.
Use quotes if your query contains spaces!";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    Help,
    Run(Args)
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Args {
    pub opts: DescribeOpts,
    pub queries: Vec<String>,
    /// Dash-prefixed arguments that aren't flags. These are ignored after a warning.
    pub unknown: Vec<String>
}

impl Args {
    /// Parses the arguments (excluding the program name). Flags may appear anywhere; a later flag overrides an earlier one.
    pub fn parse_from<I: IntoIterator<Item = S>, S: Into<String>>(args: I) -> Parsed {
        let mut parsed = Args::default();
        for arg in args {
            let arg = arg.into();
            match &arg[..] {
                "-h" | "--help" => return Parsed::Help,
                "--show-id" => parsed.opts.show_id = Some(true),
                "--hide-id" => parsed.opts.show_id = Some(false),
                "--show-lv" => parsed.opts.show_level = Some(true),
                "--hide-lv" => parsed.opts.show_level = Some(false),
                "--show-rank" => parsed.opts.show_rank = Some(true),
                "--hide-rank" => parsed.opts.show_rank = Some(false),
                _ if arg.starts_with('-') => {
                    warn!("Unknown argument '{}'", arg);
                    parsed.unknown.push(arg);
                }
                _ => parsed.queries.push(arg)
            }
        }
        Parsed::Run(parsed)
    }
}

/// Runs every query against the full monster list and writes the results to `out`.
pub fn run(source: &impl MonsterSource, args: &Args, mut out: impl Write) -> Result<(), Error> {
    let ids = source.monster_list().annotate("monster list")?;
    for query in &args.queries {
        writeln!(out, "Search query '{}':", query).annotate("writing results")?;
        for result in search(source, &ids, query)? {
            writeln!(out, "- {}", describe(&result.data, &args.opts.with_lang(result.lang))).annotate("writing results")?;
        }
        writeln!(out).annotate("writing results")?;
    }
    Ok(())
}
