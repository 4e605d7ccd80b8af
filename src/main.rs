use clap::Parser;
use namepat::cli::Cli;
use namepat::hostname::machine_name;
use namepat::output::{folder_report, pattern_report, Output};
use namepat::pattern::NamePattern;
use namepat::scan::{load_folder_patterns, matching_folders};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    // Reset SIGPIPE handler to default (terminate) so piping to head/tail works correctly
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    let cli = Cli::parse();

    let use_color = !cli.no_color && atty::is(atty::Stream::Stdout);
    let mut output = Output::new(use_color);

    let names = match cli.given_names() {
        names if names.is_empty() => vec![machine_name()?],
        names => names,
    };

    let all_matched = match &cli.dir {
        Some(dir) => run_folders(&cli, dir, &names, &mut output)?,
        None => run_pattern(&cli, &names, &mut output)?,
    };

    std::process::exit(if all_matched { 0 } else { 1 });
}

fn run_pattern(cli: &Cli, names: &[String], output: &mut Output) -> anyhow::Result<bool> {
    let Some(raw) = cli.pattern.as_deref() else {
        anyhow::bail!("a pattern is required unless --dir is given");
    };

    let (pattern, error) = match NamePattern::parse(raw) {
        Ok(pattern) => (pattern, None),
        Err(e) => (NamePattern::Unavailable, Some(e)),
    };

    let results: Vec<(String, bool)> = names
        .iter()
        .map(|name| (name.clone(), pattern.matches(name)))
        .collect();

    if cli.json {
        output.print_json(&pattern_report(raw, &pattern, &results))?;
    } else {
        if cli.explain {
            output.print_explain(raw, &pattern, error.as_ref())?;
        }
        let labelled = results.len() > 1;
        for (name, matched) in &results {
            output.print_verdict(labelled.then_some(name.as_str()), *matched)?;
        }
    }

    Ok(results.iter().all(|(_, matched)| *matched))
}

fn run_folders(
    cli: &Cli,
    dir: &Path,
    names: &[String],
    output: &mut Output,
) -> anyhow::Result<bool> {
    let folders = load_folder_patterns(dir, cli.sequential)?;

    let results: Vec<_> = names
        .iter()
        .map(|name| (name.clone(), matching_folders(&folders, name)))
        .collect();

    if cli.json {
        output.print_json(&folder_report(dir, &folders, &results))?;
    } else {
        if cli.explain {
            for folder in &folders {
                output.print_explain(&folder.name, &folder.pattern, folder.error.as_ref())?;
            }
        }
        let labelled = results.len() > 1;
        for (name, matched) in &results {
            if matched.is_empty() {
                eprintln!("No folder in {} matches {}", dir.display(), name);
            }
            for folder in matched {
                output.print_folder(labelled.then_some(name.as_str()), folder)?;
            }
        }
    }

    Ok(results.iter().all(|(_, matched)| !matched.is_empty()))
}
