// Prompt assembly with optional local context
//
// When enabled, the context file is wrapped in <local_context> tags and
// placed ahead of the user's query. A missing or blank file contributes
// nothing.

use tracing::debug;

use super::fs::ContextFs;
use super::store::ContextPaths;
use crate::errors::FsError;

pub async fn build_prompt(
    fs: &dyn ContextFs,
    paths: &ContextPaths,
    enabled: bool,
    query: &str,
) -> Result<String, FsError> {
    if !enabled {
        return Ok(query.to_string());
    }

    let content = match fs.read_to_string(&paths.context_file).await {
        Ok(content) => content,
        Err(e) if e.is_not_found() => {
            debug!(
                "Local context enabled but {} is missing",
                paths.context_file.display()
            );
            return Ok(query.to_string());
        }
        Err(e) => return Err(e),
    };

    if content.trim().is_empty() {
        return Ok(query.to_string());
    }

    debug!("Injecting {} bytes of local context", content.len());
    Ok(format!(
        "<local_context>\n{}\n</local_context>\n\n{}",
        content.trim_end(),
        query
    ))
}
