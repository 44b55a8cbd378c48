use tempfile::TempDir;
use upm_kit::Scaffolder;

#[test]
fn test_create_produces_upm_layout() {
    let temp = TempDir::new().unwrap();
    let packages_dir = temp.path().join("Packages");

    let scaffolder = Scaffolder::new("Kiwi", "PushTool", &packages_dir, false);
    let package_path = scaffolder.run().unwrap();

    assert_eq!(package_path, packages_dir.join("Kiwi PushTool"));

    // package.json
    let manifest: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(package_path.join("package.json")).unwrap())
            .unwrap();
    assert_eq!(manifest["name"], "com.kiwi.pushtool");
    assert_eq!(manifest["version"], "1.0.0");
    assert_eq!(manifest["displayName"], "Kiwi PushTool");

    // README
    let readme = std::fs::read_to_string(package_path.join("README.md")).unwrap();
    assert_eq!(readme, "PushTool\n---");

    // CHANGELOG follows Keep a Changelog
    let changelog = std::fs::read_to_string(package_path.join("CHANGELOG.md")).unwrap();
    assert!(changelog.starts_with("# Changelog"));
    assert!(changelog.contains("keepachangelog.com"));
    assert!(changelog.contains("## [1.0.0] -"));

    // asmdefs
    let editor_asmdef: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(
            package_path
                .join("Editor")
                .join("Kiwi.PushTool.Editor.asmdef"),
        )
        .unwrap(),
    )
    .unwrap();
    assert_eq!(editor_asmdef["name"], "Kiwi.PushTool.Editor");
    assert_eq!(editor_asmdef["includePlatforms"][0], "Editor");
    assert_eq!(editor_asmdef["autoReferenced"], true);

    let runtime_asmdef: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(package_path.join("Runtime").join("Kiwi.PushTool.asmdef"))
            .unwrap(),
    )
    .unwrap();
    assert_eq!(runtime_asmdef["name"], "Kiwi.PushTool");
    assert_eq!(
        runtime_asmdef["includePlatforms"],
        serde_json::Value::Array(vec![])
    );
}

#[test]
fn test_create_is_idempotent_and_never_overwrites() {
    let temp = TempDir::new().unwrap();
    let packages_dir = temp.path().join("Packages");

    let scaffolder = Scaffolder::new("Kiwi", "PushTool", &packages_dir, false);
    let package_path = scaffolder.run().unwrap();

    // 使用者改過的檔案重跑後必須原封不動
    std::fs::write(package_path.join("README.md"), "custom readme").unwrap();
    std::fs::write(
        package_path.join("package.json"),
        r#"{"name":"com.kiwi.pushtool","version":"9.9.9","displayName":"Kiwi PushTool"}"#,
    )
    .unwrap();

    let second_run = Scaffolder::new("Kiwi", "PushTool", &packages_dir, false);
    second_run.run().unwrap();

    let readme = std::fs::read_to_string(package_path.join("README.md")).unwrap();
    assert_eq!(readme, "custom readme");

    let manifest: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(package_path.join("package.json")).unwrap())
            .unwrap();
    assert_eq!(manifest["version"], "9.9.9");
}

#[test]
fn test_full_layout_is_additive_on_existing_package() {
    let temp = TempDir::new().unwrap();
    let packages_dir = temp.path().join("Packages");

    Scaffolder::new("Kiwi", "PushTool", &packages_dir, false)
        .run()
        .unwrap();

    // 之後以 --full 重跑, 只補缺的部分
    let package_path = Scaffolder::new("Kiwi", "PushTool", &packages_dir, true)
        .run()
        .unwrap();

    assert!(package_path
        .join("Tests")
        .join("Editor")
        .join("Kiwi.PushTool.Editor.Tests.asmdef")
        .exists());
    assert!(package_path
        .join("Tests")
        .join("Runtime")
        .join("Kiwi.PushTool.Tests.asmdef")
        .exists());
    assert!(package_path
        .join("Documentation~")
        .join("PushTool.md")
        .exists());

    let tests_asmdef: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(
            package_path
                .join("Tests")
                .join("Runtime")
                .join("Kiwi.PushTool.Tests.asmdef"),
        )
        .unwrap(),
    )
    .unwrap();
    assert_eq!(tests_asmdef["references"][0], "Kiwi.PushTool");
}
