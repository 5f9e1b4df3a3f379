//! Rendering of object introspection dumps.
//!
//! # Responsibilities
//! - Collect every reflection category plus the tree in a fixed order
//! - Render them as separate system-log entries (`log_object`)
//! - Render them as one text blob for the debug file (`debug_object`)
//!
//! # Design Decisions
//! - Missing categories render as empty bodies, never as errors
//! - The debug file uses `\r\n` and a blank line between sections

use crate::host::{HostObject, ReflectionCategory};

/// Banner rule framing an object dump.
pub const LINE_RULE: &str =
    "#####################################################################################";

/// Label of the structured tree section.
pub const TREE_LABEL: &str = "Tree As Dictionary";

const NEWLINE: &str = "\r\n";

/// One labeled section of a dump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub label: &'static str,
    pub body: String,
}

impl Section {
    /// Section header as written to logs.
    pub fn header(&self) -> String {
        format!("### {}", self.label)
    }
}

/// Serialize a category's names into a single string.
fn render_names(names: Option<Vec<String>>) -> String {
    match names {
        Some(names) => serde_json::to_string(&names).unwrap_or_default(),
        None => String::new(),
    }
}

fn render_tree(tree: Option<serde_json::Value>) -> String {
    match tree {
        Some(tree) => serde_json::to_string_pretty(&tree).unwrap_or_default(),
        None => String::new(),
    }
}

/// Collect the eight reflection sections followed by the tree section.
pub fn collect_sections(obj: &dyn HostObject) -> Vec<Section> {
    let mut sections: Vec<Section> = ReflectionCategory::ALL
        .iter()
        .map(|&category| Section {
            label: category.label(),
            body: render_names(obj.names(category)),
        })
        .collect();

    sections.push(Section {
        label: TREE_LABEL,
        body: render_tree(obj.tree_as_dictionary()),
    });

    sections
}

/// Entries for the system log: opening banner, one entry per section, closing banner.
pub fn log_entries(obj: &dyn HostObject) -> Vec<String> {
    let sections = collect_sections(obj);
    let mut entries = Vec::with_capacity(sections.len() + 2);

    entries.push(format!(
        "{}\n# Dumping object {}\n# Class: {}",
        LINE_RULE,
        obj.description(),
        obj.class_name()
    ));
    entries.extend(
        sections
            .iter()
            .map(|section| format!("{}\n{}", section.header(), section.body)),
    );
    entries.push(LINE_RULE.to_string());

    entries
}

/// Full dump text for the debug file.
///
/// Every line ends in `\r\n`, including lines inside host-provided text.
pub fn debug_text(obj: &dyn HostObject) -> String {
    let mut output = format!(
        "Dump for object:{}\nClass: {}\n{}\n\n",
        obj.description(),
        obj.class_name(),
        LINE_RULE,
    );

    for section in collect_sections(obj) {
        output.push_str(&section.header());
        output.push('\n');
        output.push_str(&section.body);
        output.push_str("\n\n");
    }

    crlf_line_endings(&output)
}

fn crlf_line_endings(text: &str) -> String {
    text.replace(NEWLINE, "\n").replace('\n', NEWLINE)
}
