//! Output surfaces the rendered HTML is written to.

use crate::config::OutputConfig;
use crate::error::Result;
use crate::ui::escape::escape;
use std::path::PathBuf;

/// A single mount point whose entire content is replaced on each write.
pub trait Mount: Send {
    /// Replace the mount's content with `html`.
    fn replace(&mut self, html: &str) -> Result<()>;
}

/// Writes the mount to a file, as a fragment or a standalone document.
///
/// Writes go to a sibling temp file that is then renamed over the target,
/// so readers see either the old or the new content.
#[derive(Debug, Clone)]
pub struct FileMount {
    path: PathBuf,
    mount_id: String,
    standalone: bool,
    stylesheet: Option<String>,
}

impl FileMount {
    pub fn new(config: &OutputConfig) -> Self {
        Self {
            path: config.path.clone(),
            mount_id: config.mount_id.clone(),
            standalone: config.standalone,
            stylesheet: config.stylesheet.clone(),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Wrap content in the mount element, and a document if configured.
    pub fn wrap(&self, html: &str) -> String {
        let fragment = format!("<div id=\"{}\">\n{}</div>\n", escape(&self.mount_id), html);
        if !self.standalone {
            return fragment;
        }

        let stylesheet = self
            .stylesheet
            .as_deref()
            .map(|href| format!("<link rel=\"stylesheet\" href=\"{}\" />\n", escape(href)))
            .unwrap_or_default();
        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\" />\n\
             <title>Athlete Results</title>\n{}</head>\n<body>\n{}</body>\n</html>\n",
            stylesheet, fragment
        )
    }
}

impl Mount for FileMount {
    fn replace(&mut self, html: &str) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        std::fs::write(&tmp, self.wrap(html))?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// Keeps the mount in memory and counts writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryMount {
    content: String,
    writes: usize,
}

impl MemoryMount {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Number of times the content has been replaced.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Mount for MemoryMount {
    fn replace(&mut self, html: &str) -> Result<()> {
        self.content = html.to_string();
        self.writes += 1;
        Ok(())
    }
}
