//! Print the OpenAPI document as pretty JSON.

use camply_backend::ApiDoc;
use color_eyre::eyre::Result;
use std::io::Write as _;
use utoipa::OpenApi;

fn main() -> Result<()> {
    color_eyre::install()?;
    let document = ApiDoc::openapi().to_pretty_json()?;
    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{document}")?;
    Ok(())
}
