//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use bcs_domain::{CodeAddress, Tier};
use bcs_gatekeeper::ValidationReport;
use bcs_sdk::{SearchHit, TierAvailability};
use bcs_store::SectionInfo;
use colored::*;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// One decoded token: the code as typed and the paths it resolved to.
#[derive(Debug, Clone)]
pub struct Decoded {
    /// Canonical code (`BCS0102`)
    pub code: String,
    /// Resolved paths, already shaped for display
    pub paths: Vec<String>,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Selected output format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Format decode results.
    pub fn format_decoded(&self, decoded: &[Decoded]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json: Vec<serde_json::Value> = decoded
                    .iter()
                    .map(|d| serde_json::json!({ "code": d.code, "paths": d.paths }))
                    .collect();
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Table | OutputFormat::Quiet => Ok(decoded
                .iter()
                .flat_map(|d| d.paths.iter().map(String::as_str))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format reverse lookups of tier files.
    pub fn format_lookups(&self, lookups: &[(PathBuf, CodeAddress, Tier)], root: &Path) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json: Vec<serde_json::Value> = lookups
                    .iter()
                    .map(|(path, address, tier)| {
                        serde_json::json!({
                            "path": path.display().to_string(),
                            "code": address.to_string(),
                            "tier": tier.as_str(),
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Table => Ok(lookups
                .iter()
                .map(|(path, address, tier)| {
                    format!(
                        "{:<10} {:<9} {}",
                        self.colorize(&address.to_string(), "cyan"),
                        tier,
                        display_path(path, root)
                    )
                })
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Quiet => Ok(lookups
                .iter()
                .map(|(_, address, _)| address.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format the code listing.
    pub fn format_codes(&self, codes: &[(CodeAddress, TierAvailability)]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json: Vec<serde_json::Value> = codes
                    .iter()
                    .map(|(address, tiers)| {
                        serde_json::json!({
                            "code": address.to_string(),
                            "tiers": tiers.tiers().map(|t| t.as_str()).collect::<Vec<_>>(),
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Table => {
                if codes.is_empty() {
                    return Ok(self.colorize("No codes found.", "yellow"));
                }

                let mut builder = Builder::default();
                let mut header = vec!["Code".to_string()];
                header.extend(Tier::ALL.iter().map(|t| t.as_str().to_string()));
                builder.push_record(header);

                for (address, tiers) in codes {
                    let mut row = vec![address.to_string()];
                    row.extend(
                        Tier::ALL
                            .iter()
                            .map(|t| if tiers.has(*t) { "✓" } else { "-" }.to_string()),
                    );
                    builder.push_record(row);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));

                Ok(table.to_string())
            }
            OutputFormat::Quiet => Ok(codes
                .iter()
                .map(|(address, _)| address.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format the section listing.
    pub fn format_sections(&self, sections: &[SectionInfo]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json: Vec<serde_json::Value> = sections
                    .iter()
                    .map(|s| {
                        serde_json::json!({
                            "code": s.address.to_string(),
                            "directory": s.dir_name,
                            "title": s.title,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Table => {
                if sections.is_empty() {
                    return Ok(self.colorize("No sections found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Code", "Directory", "Title"]);
                for section in sections {
                    builder.push_record([
                        section.address.to_string(),
                        section.dir_name.clone(),
                        section.title.clone(),
                    ]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));

                Ok(table.to_string())
            }
            OutputFormat::Quiet => Ok(sections
                .iter()
                .map(|s| s.address.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format search hits.
    ///
    /// Table output is grep-like: `path:line:text` for matches, `path-line-text`
    /// for context, and `--` between groups when context is shown.
    pub fn format_hits(&self, hits: &[SearchHit], root: &Path) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let json: Vec<serde_json::Value> = hits
                    .iter()
                    .map(|h| {
                        serde_json::json!({
                            "path": display_path(&h.path, root),
                            "code": h.address.to_string(),
                            "tier": h.tier.as_str(),
                            "line_number": h.line_number,
                            "line": h.line,
                            "before": h.before,
                            "after": h.after,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&json)?)
            }
            OutputFormat::Table => {
                let with_context = hits.iter().any(|h| !h.before.is_empty() || !h.after.is_empty());
                let mut groups = Vec::with_capacity(hits.len());
                for hit in hits {
                    let path = display_path(&hit.path, root);
                    let mut lines = Vec::new();
                    for (n, text) in &hit.before {
                        lines.push(format!("{}-{}-{}", path, n, text));
                    }
                    lines.push(format!(
                        "{}:{}:{}",
                        self.colorize(&path, "magenta"),
                        self.colorize(&hit.line_number.to_string(), "green"),
                        hit.line
                    ));
                    for (n, text) in &hit.after {
                        lines.push(format!("{}-{}-{}", path, n, text));
                    }
                    groups.push(lines.join("\n"));
                }
                Ok(groups.join(if with_context { "\n--\n" } else { "\n" }))
            }
            OutputFormat::Quiet => {
                let mut seen = BTreeSet::new();
                Ok(hits
                    .iter()
                    .map(|h| display_path(&h.path, root))
                    .filter(|p| seen.insert(p.clone()))
                    .collect::<Vec<_>>()
                    .join("\n"))
            }
        }
    }

    /// Format a validation report.
    pub fn format_report(&self, report: &ValidationReport, root: &Path) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let violations: Vec<serde_json::Value> = report
                    .violations
                    .iter()
                    .map(|v| {
                        serde_json::json!({
                            "kind": v.kind.as_str(),
                            "path": v.path.as_ref().map(|p| display_path(p, root)),
                            "detail": v.detail,
                        })
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&serde_json::json!({
                    "passed": report.passed,
                    "violations": violations,
                }))?)
            }
            OutputFormat::Table => {
                if report.passed {
                    return Ok(self.success("Validation passed"));
                }

                let mut builder = Builder::default();
                builder.push_record(["Kind", "Path", "Detail"]);
                for v in &report.violations {
                    builder.push_record([
                        v.kind.as_str().to_string(),
                        v.path.as_ref().map(|p| display_path(p, root)).unwrap_or_default(),
                        v.detail.clone(),
                    ]);
                }

                let mut table = builder.build();
                table
                    .with(Style::rounded())
                    .with(Modify::new(Rows::first()).with(Alignment::center()));

                Ok(format!(
                    "{}\n{}",
                    table,
                    self.error(&format!("{} violation(s)", report.violations.len()))
                ))
            }
            OutputFormat::Quiet => Ok(report
                .violations
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            "magenta" => text.magenta().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Show `path` relative to `root` when it lies inside it.
pub fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).display().to_string()
}
