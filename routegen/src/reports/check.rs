//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from API spec validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the API spec.
    pub api_path: PathBuf,
    /// Service name.
    pub service: String,
    /// Optional API title.
    pub title: Option<String>,
    /// Resolved routes in generation order.
    pub routes: Vec<RouteLine>,
}

/// One route with its resolved handler.
#[derive(Debug)]
pub struct RouteLine {
    pub method: String,
    pub path: String,
    pub handler: String,
    pub file: String,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        out.preformatted(&format!("✓ {} is valid", self.api_path.display()));
        out.newline();

        out.preformatted(&format!("  {}", self.service));
        if let Some(title) = &self.title {
            out.preformatted(&format!("  {}", title));
        }
        out.newline();

        let count = self.routes.len();
        out.section(&format!(
            "  {} route{}",
            count,
            if count == 1 { "" } else { "s" }
        ));
        for route in &self.routes {
            out.preformatted(&format!(
                "    {:<7} {:<24} {} -> {}",
                route.method, route.path, route.handler, route.file
            ));
        }
    }
}
