use clap::Args;

#[derive(Args)]
pub struct SchemaArgs {
    /// Only print the descriptor with this tool name
    #[arg(short = 't', long)]
    tool: Option<String>,
}

impl SchemaArgs {
    pub fn run(&self) -> anyhow::Result<()> {
        let tools: Vec<_> = wall_updater::tools::all_tools()
            .into_iter()
            .filter(|t| self.tool.as_deref().is_none_or(|name| t.name == name))
            .collect();
        if tools.is_empty() {
            anyhow::bail!("unknown tool: {}", self.tool.as_deref().unwrap_or_default());
        }
        println!("{}", serde_json::to_string_pretty(&tools)?);
        Ok(())
    }
}
