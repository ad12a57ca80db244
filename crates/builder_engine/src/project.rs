use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use builder_core::{MalformedTreeError, Node, NodeKind, NodeTree, DEFAULT_PROMPT};
use engine_logging::engine_info;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("could not read project document {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid project document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("malformed project tree: {0}")]
    Malformed(#[from] MalformedTreeError),
}

/// A generated project ready to hand to the core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub prompt: String,
    pub tree: NodeTree,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
enum NodeKindDocument {
    File,
    Folder,
}

#[derive(Debug, Clone, Deserialize)]
struct NodeDocument {
    name: String,
    #[serde(rename = "type")]
    kind: NodeKindDocument,
    #[serde(default)]
    children: Option<Vec<NodeDocument>>,
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct ProjectDocument {
    #[serde(default)]
    prompt: Option<String>,
    files: Vec<NodeDocument>,
}

impl From<NodeDocument> for Node {
    fn from(doc: NodeDocument) -> Self {
        Node {
            name: doc.name,
            kind: match doc.kind {
                NodeKindDocument::File => NodeKind::File,
                NodeKindDocument::Folder => NodeKind::Folder,
            },
            children: doc
                .children
                .unwrap_or_default()
                .into_iter()
                .map(Node::from)
                .collect(),
            content: doc.content,
        }
    }
}

/// Parse a generator's JSON output into a validated tree.
pub fn parse_project(json: &str) -> Result<Project, ProjectError> {
    let doc: ProjectDocument = serde_json::from_str(json)?;
    let roots = doc.files.into_iter().map(Node::from).collect();
    let tree = NodeTree::load(roots)?;
    Ok(Project {
        prompt: doc
            .prompt
            .filter(|prompt| !prompt.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PROMPT.to_string()),
        tree,
    })
}

pub fn load_project(path: &Path) -> Result<Project, ProjectError> {
    let json = fs::read_to_string(path).map_err(|source| ProjectError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let project = parse_project(&json)?;
    engine_info!(
        "Loaded project from {:?} ({} nodes)",
        path,
        project.tree.flatten().count()
    );
    Ok(project)
}
