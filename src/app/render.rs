use crate::domain::model::{ResourceSpec, Revision};
use crate::utils::error::{ClientError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Tabular,
    Yaml,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "tabular" => Ok(OutputFormat::Tabular),
            "yaml" => Ok(OutputFormat::Yaml),
            "json" => Ok(OutputFormat::Json),
            other => Err(ClientError::InvalidConfigValueError {
                field: "format".to_string(),
                value: other.to_string(),
                reason: "Unsupported format. Valid formats: tabular, yaml, json".to_string(),
            }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Tabular => "tabular",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Json => "json",
        })
    }
}

/// Structured (YAML/JSON) view of one spec.
#[derive(Debug, Serialize)]
struct FormattedSpec<'a> {
    name: &'a str,
    #[serde(rename = "type")]
    resource_type: &'static str,
    path: &'a str,
    comment: &'a str,
    origin: &'static str,
}

impl<'a> From<&'a ResourceSpec> for FormattedSpec<'a> {
    fn from(spec: &'a ResourceSpec) -> Self {
        Self {
            name: &spec.name,
            resource_type: spec.resource_type.map(|t| t.as_str()).unwrap_or(""),
            path: &spec.path,
            comment: &spec.comment,
            origin: spec.origin.map(|o| o.as_str()).unwrap_or(""),
        }
    }
}

pub fn render(specs: &[ResourceSpec], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Tabular => Ok(render_tabular(specs)),
        OutputFormat::Yaml => render_yaml(specs),
        OutputFormat::Json => render_json(specs),
    }
}

/// Column layout: every cell, the last included, is padded to the column
/// width plus one space; the table ends with a blank line.
pub fn render_tabular(specs: &[ResourceSpec]) -> String {
    let mut rows: Vec<[String; 4]> = vec![[
        "RESOURCE".to_string(),
        "FROM".to_string(),
        "REV".to_string(),
        "COMMENT".to_string(),
    ]];
    for spec in specs {
        rows.push([
            spec.name.clone(),
            spec.origin.map(|o| o.to_string()).unwrap_or_default(),
            format_revision(spec.revision),
            spec.comment.clone(),
        ]);
    }

    let mut widths = [0usize; 4];
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for row in &rows {
        for (width, cell) in widths.iter().zip(row.iter()) {
            out.push_str(&format!("{:<w$} ", cell, w = *width));
        }
        out.push('\n');
    }
    out.push('\n');
    out
}

fn format_revision(revision: Option<Revision>) -> String {
    match revision {
        // 未設定的 revision 也顯示為 "-"
        Some(rev) => rev.to_string(),
        None => "-".to_string(),
    }
}

pub fn render_yaml(specs: &[ResourceSpec]) -> Result<String> {
    let formatted: Vec<FormattedSpec> = specs.iter().map(FormattedSpec::from).collect();
    Ok(serde_yaml::to_string(&formatted)?)
}

pub fn render_json(specs: &[ResourceSpec]) -> Result<String> {
    let formatted: Vec<FormattedSpec> = specs.iter().map(FormattedSpec::from).collect();
    let mut out = serde_json::to_string(&formatted)?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{OriginKind, ResourceType};

    fn spec(name: &str, suffix: &str, comment: &str) -> ResourceSpec {
        ResourceSpec {
            name: name.to_string(),
            resource_type: Some(ResourceType::File),
            path: format!("{}{}", name, suffix),
            comment: comment.to_string(),
            origin: Some(OriginKind::Upload),
            revision: Some(Revision::NoRevision),
        }
    }

    fn sample() -> Vec<ResourceSpec> {
        vec![
            spec("website", ".tgz", ".tgz of your website"),
            spec("music", ".mp3", "mp3 of your backing vocals"),
        ]
    }

    #[test]
    fn test_tabular() {
        let expected = concat!(
            "RESOURCE FROM   REV COMMENT                    \n",
            "website  upload -   .tgz of your website       \n",
            "music    upload -   mp3 of your backing vocals \n",
            "\n",
        );
        assert_eq!(render_tabular(&sample()), expected);
    }

    #[test]
    fn test_tabular_empty_and_numbered_revision() {
        assert_eq!(render_tabular(&[]), "RESOURCE FROM REV COMMENT \n\n");

        let mut pinned = spec("db", ".tgz", "");
        pinned.origin = Some(OriginKind::Store);
        pinned.revision = Some(Revision::Number(12));
        let table = render_tabular(&[pinned]);
        assert_eq!(
            table.lines().nth(1).unwrap(),
            format!("{:<9}{:<6}{:<4}{:<8}", "db", "store", "12", "")
        );
    }

    #[test]
    fn test_json() {
        let expected = concat!(
            r#"[{"name":"website","type":"file","path":"website.tgz","comment":".tgz of your website","origin":"upload"},"#,
            r#"{"name":"music","type":"file","path":"music.mp3","comment":"mp3 of your backing vocals","origin":"upload"}]"#,
            "\n",
        );
        assert_eq!(render_json(&sample()).unwrap(), expected);
    }

    #[test]
    fn test_yaml() {
        let specs = vec![spec("music", ".mp3", "mp3 of your backing vocals")];
        let expected = "- name: music\n  type: file\n  path: music.mp3\n  comment: mp3 of your backing vocals\n  origin: upload\n";
        assert_eq!(render_yaml(&specs).unwrap(), expected);
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::default(), OutputFormat::Tabular);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
