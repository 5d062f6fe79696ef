use clap::Args;
use eyre::Result;

use crate::{
    demo,
    reports::{Output, TerminalOutput},
};

#[derive(Args)]
pub struct DemosCommand {}

impl DemosCommand {
    pub fn run(&self) -> Result<()> {
        let mut out = TerminalOutput::new();
        out.section("Demo classes");
        for class in demo::all() {
            out.list_item(&format!("{} ({} members)", class.name, class.components.len()));
        }
        Ok(())
    }
}
