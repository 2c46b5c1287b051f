use anyhow::Result;

fn main() -> Result<()> {
    claude_session_tools::cli::run()
}
