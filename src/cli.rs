use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "namepat",
    about = "Match host and folder names against serial-range (Host001~010) and wildcard (Web%) patterns",
    version
)]
pub struct Cli {
    /// Pattern to test, e.g. "Host001~010" or "Web%". With --dir this is the first name to check
    #[arg(required_unless_present = "dir")]
    pub pattern: Option<String>,

    /// Names to check (defaults to this machine's name)
    pub names: Vec<String>,

    /// Use the sub-folder names of DIR as patterns and report which ones match
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Show how each pattern was compiled, or why it is unusable
    #[arg(short, long)]
    pub explain: bool,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Compile folder patterns sequentially instead of in parallel
    #[arg(short, long)]
    pub sequential: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Names given on the command line. In --dir mode there is no pattern
    /// argument, so the first positional is a name as well.
    pub fn given_names(&self) -> Vec<String> {
        match (&self.dir, &self.pattern) {
            (Some(_), Some(first)) => std::iter::once(first.clone())
                .chain(self.names.iter().cloned())
                .collect(),
            _ => self.names.clone(),
        }
    }
}
