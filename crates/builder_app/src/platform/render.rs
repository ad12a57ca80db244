use std::fmt::Write;

use builder_core::{AppViewModel, CodeView, NodeKind, StepStatus, StepView, TreeRowView};

const INDENT: &str = "  ";
const EMPTY_CODE_HINT: &str = "Select a file to view its contents";

pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "== BuilderAI | {} ==", view.prompt);
    out.push('\n');
    out.push_str(&render_steps(&view.steps));
    out.push('\n');
    out.push_str(&render_tree(&view.tree_rows));
    out.push('\n');
    out.push_str(&render_code(view.code.as_ref()));
    out
}

pub fn render_tree(rows: &[TreeRowView]) -> String {
    let mut out = String::from("Files\n");
    for row in rows {
        let cursor = if row.selected { ">" } else { " " };
        let indent = INDENT.repeat(row.depth);
        let _ = match row.kind {
            NodeKind::Folder => writeln!(out, "{cursor} {indent}v {}/", row.name),
            NodeKind::File => writeln!(out, "{cursor} {indent}  {}", row.name),
        };
    }
    out
}

pub fn render_code(code: Option<&CodeView>) -> String {
    let Some(code) = code else {
        return format!("{EMPTY_CODE_HINT}\n");
    };
    let mut out = format!("--- {} ---\n", code.file_name);
    for line in &code.lines {
        let _ = writeln!(out, "{:>4}  {}", line.number, line.text);
    }
    out
}

pub fn render_steps(steps: &[StepView]) -> String {
    let mut out = String::from("Build Steps\n");
    for step in steps {
        let marker = match step.status {
            StepStatus::Completed => "[x]",
            StepStatus::Active => "[>]",
            StepStatus::Pending => "[ ]",
        };
        let _ = writeln!(out, "{marker} {}", step.title);
        let _ = writeln!(out, "    {}", step.description);
        if step.connector_lit {
            out.push_str(" ||\n");
        }
    }
    out
}
