//! POM files: writing a throwaway project that depends on one coordinate,
//! and reading a real project's build directories.

use std::path::{Path, PathBuf};

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use mvnpath_core::scope::ClasspathScope;
use mvnpath_core::symbol::ArtifactCoordinate;
use mvnpath_util::errors::MvnpathError;
use mvnpath_util::fs::absolutize;

const POM_NAMESPACE: &str = "http://maven.apache.org/POM/4.0.0";
const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
const POM_SCHEMA_LOCATION: &str =
    "http://maven.apache.org/POM/4.0.0 http://maven.apache.org/maven-v4_0_0.xsd";

/// Coordinates of the synthetic project that hosts the requested dependency.
const SYNTHETIC_GROUP_ID: &str = "org.mvnpath";
const SYNTHETIC_ARTIFACT_ID: &str = "mvnpath-classpath";
const SYNTHETIC_VERSION: &str = "1.0-SNAPSHOT";

/// Render a minimal `pom.xml` whose only dependency is `coord`.
///
/// Running `dependency:list` against it yields the coordinate's transitive
/// closure for the coordinate's scope.
pub fn synthetic_pom(coord: &ArtifactCoordinate) -> Result<String, MvnpathError> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 4);

    let mut project = BytesStart::new("project");
    project.push_attribute(("xmlns", POM_NAMESPACE));
    project.push_attribute(("xmlns:xsi", XSI_NAMESPACE));
    project.push_attribute(("xsi:schemaLocation", POM_SCHEMA_LOCATION));

    write_event(&mut writer, Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    write_event(&mut writer, Event::Start(project))?;
    text_element(&mut writer, "modelVersion", "4.0.0")?;
    text_element(&mut writer, "groupId", SYNTHETIC_GROUP_ID)?;
    text_element(&mut writer, "artifactId", SYNTHETIC_ARTIFACT_ID)?;
    text_element(&mut writer, "version", SYNTHETIC_VERSION)?;

    write_event(&mut writer, Event::Start(BytesStart::new("dependencies")))?;
    write_event(&mut writer, Event::Start(BytesStart::new("dependency")))?;
    text_element(&mut writer, "groupId", &coord.group_id)?;
    text_element(&mut writer, "artifactId", &coord.artifact_id)?;
    text_element(&mut writer, "version", &coord.version)?;
    text_element(&mut writer, "scope", &coord.scope)?;
    if coord.has_classifier() {
        text_element(&mut writer, "classifier", &coord.classifier)?;
    }
    text_element(&mut writer, "type", &coord.packaging)?;
    write_event(&mut writer, Event::End(BytesEnd::new("dependency")))?;
    write_event(&mut writer, Event::End(BytesEnd::new("dependencies")))?;

    write_event(&mut writer, Event::End(BytesEnd::new("project")))?;

    String::from_utf8(writer.into_inner()).map_err(|e| MvnpathError::Generic {
        message: format!("Generated POM is not UTF-8: {e}"),
    })
}

fn text_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<(), MvnpathError> {
    write_event(writer, Event::Start(BytesStart::new(name)))?;
    write_event(writer, Event::Text(BytesText::new(text)))?;
    write_event(writer, Event::End(BytesEnd::new(name)))
}

fn write_event(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), MvnpathError> {
    writer.write_event(event).map_err(|e| MvnpathError::Generic {
        message: format!("Failed to write POM XML: {e}"),
    })
}

/// Where a Maven project puts its compiled classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub basedir: PathBuf,
    pub build_directory: PathBuf,
    pub output_directory: PathBuf,
    pub test_output_directory: PathBuf,
}

impl ProjectLayout {
    /// Read the layout of the project described by the POM at `pom_path`.
    pub fn from_pom(pom_path: &Path) -> Result<Self, MvnpathError> {
        let xml = std::fs::read_to_string(pom_path).map_err(|e| MvnpathError::Resolution {
            message: format!("Could not read {}: {e}", pom_path.display()),
        })?;
        let parent = match pom_path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
            _ => PathBuf::from("."),
        };
        let basedir = std::path::absolute(&parent).unwrap_or(parent);
        Self::from_pom_xml(&xml, &basedir)
    }

    /// Parse the `<build>` directories out of POM XML.
    ///
    /// Missing elements take Maven's defaults; relative paths are resolved
    /// against `basedir`.
    pub fn from_pom_xml(xml: &str, basedir: &Path) -> Result<Self, MvnpathError> {
        let build = parse_build_section(xml)?;
        let basedir_str = basedir.display().to_string();

        let build_dir_raw = build.directory.unwrap_or_else(|| "${project.basedir}/target".into());
        let build_directory = absolutize(
            basedir,
            Path::new(&interpolate(&build_dir_raw, &basedir_str, None)),
        );
        let build_dir_str = build_directory.display().to_string();

        let resolve = |value: Option<String>, default: &str| {
            let raw = value.unwrap_or_else(|| format!("${{project.build.directory}}/{default}"));
            absolutize(
                basedir,
                Path::new(&interpolate(&raw, &basedir_str, Some(&build_dir_str))),
            )
        };
        let output_directory = resolve(build.output_directory, "classes");
        let test_output_directory = resolve(build.test_output_directory, "test-classes");

        Ok(Self {
            basedir: basedir.to_path_buf(),
            build_directory,
            output_directory,
            test_output_directory,
        })
    }

    /// Project output directories that lead a classpath of the given scope.
    pub fn classpath_dirs(&self, scope: ClasspathScope) -> Vec<PathBuf> {
        if scope.includes_test_output() {
            vec![
                self.test_output_directory.clone(),
                self.output_directory.clone(),
            ]
        } else {
            vec![self.output_directory.clone()]
        }
    }
}

#[derive(Debug, Default)]
struct BuildSection {
    directory: Option<String>,
    output_directory: Option<String>,
    test_output_directory: Option<String>,
}

fn parse_build_section(xml: &str) -> Result<BuildSection, MvnpathError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut build = BuildSection::default();
    let mut path: Vec<String> = Vec::new();
    let mut text_buf = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                path.push(String::from_utf8_lossy(e.name().as_ref()).to_string());
                text_buf.clear();
            }
            Ok(Event::Text(ref e)) => {
                text_buf = e.unescape().unwrap_or_default().to_string();
            }
            Ok(Event::End(_)) => {
                match path.join(">").as_str() {
                    "project>build>directory" => build.directory = Some(text_buf.clone()),
                    "project>build>outputDirectory" => {
                        build.output_directory = Some(text_buf.clone());
                    }
                    "project>build>testOutputDirectory" => {
                        build.test_output_directory = Some(text_buf.clone());
                    }
                    _ => {}
                }
                path.pop();
                text_buf.clear();
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(MvnpathError::Resolution {
                    message: format!("Failed to parse POM XML: {e}"),
                });
            }
            _ => {}
        }
    }

    Ok(build)
}

/// Substitute the basedir and build-directory expressions Maven allows in
/// `<build>` paths.
fn interpolate(input: &str, basedir: &str, build_dir: Option<&str>) -> String {
    let mut out = input
        .replace("${project.basedir}", basedir)
        .replace("${basedir}", basedir);
    if let Some(dir) = build_dir {
        out = out.replace("${project.build.directory}", dir);
    }
    out
}
