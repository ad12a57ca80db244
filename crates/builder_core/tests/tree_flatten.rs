use builder_core::{MalformedTreeError, Node, NodeKind, NodePath, NodeTree};

fn sample_tree() -> NodeTree {
    NodeTree::load(vec![
        Node::folder(
            "src",
            vec![
                Node::folder(
                    "components",
                    vec![Node::file("Header.tsx", "h"), Node::file("Hero.tsx", "x")],
                ),
                Node::folder("pages", vec![Node::file("index.tsx", "i")]),
            ],
        ),
        Node::folder("public", vec![]),
        Node::file("package.json", "{}"),
    ])
    .expect("well-formed tree")
}

#[test]
fn flatten_is_preorder_with_depths() {
    let tree = sample_tree();
    let rows: Vec<(String, usize)> = tree
        .flatten()
        .map(|entry| (entry.node.name.clone(), entry.depth))
        .collect();

    assert_eq!(
        rows,
        vec![
            ("src".to_string(), 0),
            ("components".to_string(), 1),
            ("Header.tsx".to_string(), 2),
            ("Hero.tsx".to_string(), 2),
            ("pages".to_string(), 1),
            ("index.tsx".to_string(), 2),
            ("public".to_string(), 0),
            ("package.json".to_string(), 0),
        ]
    );
}

#[test]
fn folders_precede_their_descendants() {
    let tree = sample_tree();
    let paths: Vec<NodePath> = tree.flatten().map(|entry| entry.path).collect();

    for (position, path) in paths.iter().enumerate() {
        for (other_position, other) in paths.iter().enumerate() {
            if path.is_ancestor_of(other) {
                assert!(position < other_position, "{path} must come before {other}");
            }
        }
    }
}

#[test]
fn flatten_is_restartable() {
    let tree = sample_tree();
    let first: Vec<NodePath> = tree.flatten().map(|entry| entry.path).collect();
    let second: Vec<NodePath> = tree.flatten().map(|entry| entry.path).collect();

    assert_eq!(first, second);
    assert_eq!(first.len(), 8);
}

#[test]
fn paths_resolve_back_to_nodes() {
    let tree = sample_tree();
    for entry in tree.flatten() {
        let resolved = tree.get(&entry.path).expect("path resolves");
        assert!(std::ptr::eq(resolved, entry.node));
    }
    assert!(tree.get(&NodePath::from_indices(vec![0, 9])).is_none());
    assert!(tree.get(&NodePath::from_indices(Vec::new())).is_none());
}

#[test]
fn empty_tree_flattens_to_nothing() {
    let tree = NodeTree::load(Vec::new()).unwrap();
    assert!(tree.is_empty());
    assert_eq!(tree.flatten().count(), 0);
    assert_eq!(tree.first_file(), None);
}

#[test]
fn first_file_follows_display_order() {
    let tree = sample_tree();
    let path = tree.first_file().expect("tree has files");
    assert_eq!(path, NodePath::from_indices(vec![0, 0, 0]));
    assert_eq!(tree.get(&path).unwrap().name, "Header.tsx");
}

#[test]
fn file_with_children_is_rejected() {
    let mut bad = Node::file("main.rs", "fn main() {}");
    bad.children.push(Node::file("inner.rs", ""));

    let err = NodeTree::load(vec![Node::folder("src", vec![bad])]).unwrap_err();
    assert_eq!(
        err,
        MalformedTreeError::FileWithChildren {
            path: NodePath::from_indices(vec![0, 0]),
            name: "main.rs".to_string(),
            count: 1,
        }
    );
    assert_eq!(err.to_string(), "file `main.rs` at 0/0 has 1 children");
}

#[test]
fn folder_with_content_is_rejected() {
    let mut bad = Node::folder("assets", vec![]);
    bad.content = Some("oops".to_string());

    let err = NodeTree::load(vec![Node::file("a", "x"), bad]).unwrap_err();
    assert!(matches!(
        err,
        MalformedTreeError::FolderWithContent { ref name, .. } if name == "assets"
    ));
}

#[test]
fn loaded_nodes_are_stored_verbatim() {
    let roots = vec![
        Node::empty_file("README"),
        Node::folder("docs", vec![Node::file("guide.md", "# Guide")]),
    ];
    let tree = NodeTree::load(roots.clone()).unwrap();

    assert_eq!(tree.roots(), roots.as_slice());
    assert_eq!(tree.roots()[0].kind, NodeKind::File);
    assert_eq!(tree.roots()[0].content, None);
}
