use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Default, Parser)]
#[command(name = "noteworthy")]
#[command(version = "0.1.0")]
#[command(about = "Sticky notes on an infinite board, in your terminal")]
pub struct CliArgs {
    /// Open this board directly, creating it if it does not exist
    #[arg(long, short = 'b')]
    pub board: Option<String>,

    /// Directory holding saved boards (overrides config and NOTEWORTHY_DATA_DIR)
    #[arg(long, short = 'd')]
    pub data_dir: Option<PathBuf>,

    /// Print saved board names and exit
    #[arg(long, short = 'l')]
    pub list: bool,

    /// Config file to use instead of the discovered one
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
}

impl CliArgs {
    /// Board name with surrounding whitespace dropped; blank names count as none.
    pub fn board_name(&self) -> Option<&str> {
        self.board
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}

pub fn parse_args() -> Result<CliArgs, Box<dyn std::error::Error>> {
    Ok(CliArgs::parse())
}
