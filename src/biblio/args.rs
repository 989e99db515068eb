use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "biblio", version)]
#[command(about = "Interactive library catalog manager", long_about = None)]
pub struct Cli {
    /// Disable colored output
    #[arg(long)]
    pub plain: bool,
}
