use pkgup_core::render::{label, render_tree};
use pkgup_core::tree::DependencyNode;

#[test]
fn test_label_with_version() {
    assert_eq!(label("lodash", &DependencyNode::with_version("4.17.4")), "lodash@4.17.4");
}

#[test]
fn test_label_without_version() {
    assert_eq!(label("my-app", &DependencyNode::default()), "my-app");
}

#[test]
fn test_label_shows_resolved_for_git_sources() {
    let node = DependencyNode {
        version: Some("1.0.0".to_string()),
        from: Some("github:acme/alpha".to_string()),
        resolved: Some("git+https://github.com/acme/alpha.git#abc".to_string()),
        ..DependencyNode::default()
    };
    assert_eq!(
        label("alpha", &node),
        "alpha@1.0.0 (git+https://github.com/acme/alpha.git#abc)"
    );
}

#[test]
fn test_label_hides_resolved_for_registry_sources() {
    let node = DependencyNode {
        version: Some("1.0.0".to_string()),
        from: Some("alpha@^1.0.0".to_string()),
        resolved: Some("https://registry.npmjs.org/alpha/-/alpha-1.0.0.tgz".to_string()),
        ..DependencyNode::default()
    };
    assert_eq!(label("alpha", &node), "alpha@1.0.0");
}

#[test]
fn test_render_plain_tree() {
    let tree = DependencyNode::default()
        .dependency(
            "a",
            DependencyNode::with_version("1.0.0")
                .dependency("lodash", DependencyNode::with_version("4.1.0")),
        )
        .dependency("lodash", DependencyNode::with_version("4.2.0"));
    let out = render_tree("app", &tree, "lodash", false);
    assert_eq!(
        out,
        "app\n├── a@1.0.0\n│   └── lodash@4.1.0\n└── lodash@4.2.0\n"
    );
}

#[test]
fn test_render_highlights_target() {
    let tree = DependencyNode::default().dependency("lodash", DependencyNode::with_version("4.2.0"));
    let out = render_tree("app", &tree, "lodash", true);
    assert!(out.contains("\u{1b}["), "expected ANSI escape in {out:?}");
    assert!(out.starts_with("app\n"));
}
