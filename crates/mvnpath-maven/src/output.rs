//! Parsing of the files the Maven dependency plugin writes with `outputFile`.

use mvnpath_util::errors::MvnpathError;

/// Line that precedes the artifact list in `dependency:list` output.
pub const RESOLVED_MARKER: &str = "The following files have been resolved:";

/// Extract absolute artifact paths from `dependency:list` output produced
/// with `outputAbsoluteArtifactFilename=true`.
///
/// Each entry looks like `group:artifact:type[:classifier]:version:scope:/path`;
/// the path is everything after the final separator colon.
pub fn parse_dependency_list(text: &str) -> Result<Vec<String>, MvnpathError> {
    let mut lines = text.lines();
    if !lines.by_ref().any(|l| l.trim_end() == RESOLVED_MARKER) {
        return Err(MvnpathError::MalformedOutput {
            message: format!("dependency list does not contain '{RESOLVED_MARKER}'"),
        });
    }

    let mut classpath = Vec::new();
    for line in lines {
        let entry = line.trim();
        if entry.is_empty() || entry == "none" {
            break;
        }
        if let Some(path) = artifact_path(entry) {
            classpath.push(path.to_string());
        }
    }
    Ok(classpath)
}

/// Path part of one dependency list entry.
fn artifact_path(entry: &str) -> Option<&str> {
    // Newer plugin versions append the JPMS module name.
    let entry = entry.split(" -- module ").next().unwrap_or(entry).trim_end();
    let (head, path) = entry.rsplit_once(':')?;

    // Keep a Windows drive letter (`...:test:C:\repo\a.jar`) with its path.
    if path.starts_with('\\') || path.starts_with('/') {
        if let Some((rest, drive)) = head.rsplit_once(':') {
            if drive.len() == 1 && drive.chars().all(|c| c.is_ascii_alphabetic()) && rest.contains(':') {
                return Some(&entry[rest.len() + 1..]);
            }
        }
    }

    let path = path.trim();
    (!path.is_empty()).then_some(path)
}

/// Split `dependency:build-classpath` output on the platform path separator.
pub fn parse_build_classpath(text: &str) -> Vec<String> {
    let line = text.lines().map(str::trim).find(|l| !l.is_empty());
    match line {
        Some(line) => std::env::split_paths(line)
            .map(|p| p.to_string_lossy().to_string())
            .filter(|p| !p.is_empty())
            .collect(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST_OUTPUT: &str = "
The following files have been resolved:
   commons-lang:commons-lang:jar:2.6:test:/home/me/.m2/repository/commons-lang/commons-lang/2.6/commons-lang-2.6.jar
   fitnesse:fitnesse-subdep:jar:1.0:test:/repo/fitnesse/fitnesse-subdep/1.0/fitnesse-subdep-1.0.jar

";

    #[test]
    fn parses_paths_after_marker() {
        let classpath = parse_dependency_list(LIST_OUTPUT).unwrap();
        assert_eq!(
            classpath,
            vec![
                "/home/me/.m2/repository/commons-lang/commons-lang/2.6/commons-lang-2.6.jar",
                "/repo/fitnesse/fitnesse-subdep/1.0/fitnesse-subdep-1.0.jar",
            ]
        );
    }

    #[test]
    fn stops_at_first_blank_line() {
        let text = format!("{LIST_OUTPUT}   g:a:jar:1:test:/ignored.jar\n");
        assert_eq!(parse_dependency_list(&text).unwrap().len(), 2);
    }

    #[test]
    fn strips_module_annotation() {
        let text = "The following files have been resolved:\n   org.slf4j:slf4j-api:jar:2.0.9:compile:/r/slf4j-api-2.0.9.jar -- module org.slf4j\n";
        assert_eq!(
            parse_dependency_list(text).unwrap(),
            vec!["/r/slf4j-api-2.0.9.jar"]
        );
    }

    #[test]
    fn keeps_windows_drive_letter() {
        let text = "The following files have been resolved:\r\n   junit:junit:jar:4.13.2:test:C:\\m2\\junit-4.13.2.jar\r\n";
        assert_eq!(
            parse_dependency_list(text).unwrap(),
            vec!["C:\\m2\\junit-4.13.2.jar"]
        );
    }

    #[test]
    fn none_means_empty_classpath() {
        let text = "The following files have been resolved:\n   none\n";
        assert!(parse_dependency_list(text).unwrap().is_empty());
    }

    #[test]
    fn missing_marker_is_malformed() {
        let err = parse_dependency_list("[INFO] BUILD SUCCESS\n").unwrap_err();
        assert!(matches!(err, MvnpathError::MalformedOutput { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn build_classpath_splits_on_separator() {
        assert_eq!(
            parse_build_classpath("/a/x.jar:/b/y.jar\n"),
            vec!["/a/x.jar", "/b/y.jar"]
        );
    }

    #[test]
    fn build_classpath_empty_output() {
        assert!(parse_build_classpath("").is_empty());
        assert!(parse_build_classpath("\n\n").is_empty());
    }
}
