use pkgup_core::tree::DependencyNode;

const LISTING: &str = r#"{
  "name": "my-app",
  "version": "1.0.0",
  "problems": ["peer dep missing: react@^16"],
  "dependencies": {
    "zeta": {
      "version": "2.0.0",
      "from": "zeta@^2.0.0",
      "resolved": "https://registry.npmjs.org/zeta/-/zeta-2.0.0.tgz",
      "dependencies": {
        "lodash": { "version": "4.17.4", "from": "lodash@^4.17.0" }
      }
    },
    "alpha": {
      "version": "1.0.0",
      "from": "github:acme/alpha",
      "resolved": "git+https://github.com/acme/alpha.git#abc123"
    },
    "missing-peer": { "required": "^16.0.0", "missing": true }
  }
}"#;

#[test]
fn test_parse_listing() {
    let tree = DependencyNode::from_json(LISTING).unwrap();
    assert_eq!(tree.name.as_deref(), Some("my-app"));
    assert_eq!(tree.version.as_deref(), Some("1.0.0"));
    assert_eq!(tree.dependencies.len(), 3);

    let lodash = tree.child("zeta").and_then(|z| z.child("lodash")).unwrap();
    assert_eq!(lodash.version.as_deref(), Some("4.17.4"));
    assert!(lodash.is_leaf());
}

#[test]
fn test_dependency_order_is_preserved() {
    let tree = DependencyNode::from_json(LISTING).unwrap();
    let names: Vec<&str> = tree.dependencies.names().collect();
    assert_eq!(names, vec!["zeta", "alpha", "missing-peer"]);
}

#[test]
fn test_missing_node_has_no_version() {
    let tree = DependencyNode::from_json(LISTING).unwrap();
    let missing = tree.child("missing-peer").unwrap();
    assert!(missing.version.is_none());
}

#[test]
fn test_empty_listing() {
    let tree = DependencyNode::from_json("{}").unwrap();
    assert!(tree.name.is_none());
    assert!(tree.is_leaf());
}

#[test]
fn test_null_dependencies() {
    let tree = DependencyNode::from_json(r#"{"name": "x", "dependencies": null}"#).unwrap();
    assert!(tree.is_leaf());
}

#[test]
fn test_invalid_json_is_error() {
    let err = DependencyNode::from_json("npm ERR! code ELSPROBLEMS").unwrap_err();
    assert!(err.to_string().contains("invalid dependency tree JSON"));
}

#[test]
fn test_serialize_keeps_order() {
    let tree = DependencyNode::default()
        .dependency("b", DependencyNode::with_version("1.0.0"))
        .dependency("a", DependencyNode::with_version("2.0.0"));
    let json = serde_json::to_string(&tree).unwrap();
    assert_eq!(
        json,
        r#"{"dependencies":{"b":{"version":"1.0.0"},"a":{"version":"2.0.0"}}}"#
    );
    assert_eq!(DependencyNode::from_json(&json).unwrap(), tree);
}

#[test]
fn test_duplicate_keys_keep_first() {
    let tree = DependencyNode::from_json(
        r#"{"dependencies": {"a": {"version": "1.0.0"}, "a": {"version": "2.0.0"}}}"#,
    )
    .unwrap();
    assert_eq!(tree.dependencies.len(), 1);
    assert_eq!(tree.child("a").unwrap().version.as_deref(), Some("1.0.0"));
}

#[test]
fn test_collect_drops_repeated_names() {
    let deps: pkgup_core::tree::Dependencies = (0..1000)
        .map(|i| (format!("pkg-{}", i % 10), DependencyNode::with_version(format!("1.0.{i}"))))
        .collect();
    assert_eq!(deps.len(), 10);
    assert_eq!(deps.get("pkg-3").unwrap().version.as_deref(), Some("1.0.3"));
    assert_eq!(deps.names().next(), Some("pkg-0"));
}
