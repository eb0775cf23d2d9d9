use std::path::{Path, PathBuf};

use mvnpath_core::config::MavenConfig;
use mvnpath_maven::invoker::MavenInvoker;

#[test]
fn test_executable_from_path_by_default() {
    let invoker = MavenInvoker::new(&MavenConfig::default());
    assert!(invoker.executable().to_string_lossy().starts_with("mvn"));
}

#[test]
fn test_executable_under_maven_home() {
    let config = MavenConfig {
        home: Some(PathBuf::from("/opt/maven")),
        ..MavenConfig::default()
    };
    let invoker = MavenInvoker::new(&config);
    assert!(invoker.executable().starts_with("/opt/maven/bin"));
}

#[test]
fn test_command_line_flags() {
    let config = MavenConfig {
        settings: Some(PathBuf::from("/etc/settings.xml")),
        offline: true,
        ..MavenConfig::default()
    };
    let line = MavenInvoker::new(&config)
        .command(Path::new("/p/pom.xml"), "dependency:list")
        .display();
    assert!(line.ends_with("-B -U -o -s /etc/settings.xml -f /p/pom.xml dependency:list"), "got: {line}");
}

#[test]
fn test_command_line_without_snapshot_updates() {
    let config = MavenConfig {
        update_snapshots: false,
        ..MavenConfig::default()
    };
    let line = MavenInvoker::new(&config)
        .command(Path::new("pom.xml"), "validate")
        .display();
    assert!(line.ends_with("-B -f pom.xml validate"), "got: {line}");
}

#[cfg(unix)]
mod fake_maven {
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;

    use mvnpath_core::config::MavenConfig;
    use mvnpath_core::scope::ClasspathScope;
    use mvnpath_maven::invoker::MavenInvoker;
    use mvnpath_util::errors::MvnpathError;
    use tempfile::TempDir;

    /// Install an executable `bin/mvn` under `home` that runs `script`.
    fn install_mvn(home: &Path, script: &str) {
        let bin = home.join("bin");
        std::fs::create_dir_all(&bin).unwrap();
        let mvn = bin.join("mvn");
        std::fs::write(&mvn, script).unwrap();
        std::fs::set_permissions(&mvn, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    fn config(home: &Path) -> MavenConfig {
        MavenConfig {
            home: Some(home.to_path_buf()),
            ..MavenConfig::default()
        }
    }

    const LIST_SCRIPT: &str = r#"#!/bin/sh
for arg in "$@"; do
  case "$arg" in
    -DoutputFile=*) out="${arg#-DoutputFile=}" ;;
  esac
done
printf '\nThe following files have been resolved:\n   g:a:jar:1.0:test:/repo/a-1.0.jar\n   g:b:jar:2.0:test:/repo/b-2.0.jar\n\n' > "$out"
"#;

    const CLASSPATH_SCRIPT: &str = r#"#!/bin/sh
for arg in "$@"; do
  case "$arg" in
    -Dmdep.outputFile=*) out="${arg#-Dmdep.outputFile=}" ;;
    -Dmdep.includeScope=*) scope="${arg#-Dmdep.includeScope=}" ;;
  esac
done
printf '/repo/%s.jar:/repo/common.jar' "$scope" > "$out"
"#;

    #[test]
    fn dependency_list_reads_output_file() {
        let tmp = TempDir::new().unwrap();
        install_mvn(tmp.path(), LIST_SCRIPT);
        let pom = tmp.path().join("pom.xml");
        std::fs::write(&pom, "<project/>").unwrap();

        let classpath = MavenInvoker::new(&config(tmp.path()))
            .dependency_list(&pom)
            .unwrap();
        assert_eq!(classpath, vec!["/repo/a-1.0.jar", "/repo/b-2.0.jar"]);
    }

    #[test]
    fn build_classpath_passes_scope() {
        let tmp = TempDir::new().unwrap();
        install_mvn(tmp.path(), CLASSPATH_SCRIPT);
        let pom = tmp.path().join("pom.xml");
        std::fs::write(&pom, "<project/>").unwrap();

        let classpath = MavenInvoker::new(&config(tmp.path()))
            .build_classpath(&pom, ClasspathScope::Runtime)
            .unwrap();
        assert_eq!(classpath, vec!["/repo/runtime.jar", "/repo/common.jar"]);
    }

    #[test]
    fn failing_build_is_invocation_error() {
        let tmp = TempDir::new().unwrap();
        install_mvn(tmp.path(), "#!/bin/sh\necho '[ERROR] Could not resolve dependencies'\nexit 1\n");
        let pom = tmp.path().join("pom.xml");
        std::fs::write(&pom, "<project/>").unwrap();

        let err = MavenInvoker::new(&config(tmp.path()))
            .dependency_list(&pom)
            .unwrap_err();
        match err {
            MvnpathError::Invocation { status, output, .. } => {
                assert_eq!(status, "exit code 1");
                assert!(output.contains("Could not resolve dependencies"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_executable_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let err = MavenInvoker::new(&config(&tmp.path().join("no-maven")))
            .dependency_list(&tmp.path().join("pom.xml"))
            .unwrap_err();
        assert!(matches!(err, MvnpathError::Io(_)));
    }

    #[test]
    fn empty_output_file_is_malformed() {
        let tmp = TempDir::new().unwrap();
        install_mvn(tmp.path(), "#!/bin/sh\nexit 0\n");
        let pom = tmp.path().join("pom.xml");
        std::fs::write(&pom, "<project/>").unwrap();

        let err = MavenInvoker::new(&config(tmp.path()))
            .dependency_list(&pom)
            .unwrap_err();
        assert!(matches!(err, MvnpathError::MalformedOutput { .. }));
    }
}
