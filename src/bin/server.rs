use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    todoist_mcp::cli::run().await?;
    Ok(())
}
