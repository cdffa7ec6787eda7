use super::shape::{display_text, Shape};
use crate::types::Service;
use serde_yaml::Value;

/// Parse one compose file and extract its services.
///
/// Merge keys (`<<: *anchor`) are applied before extraction. Malformed
/// YAML, or a merge of something that is not a map, is an error for the
/// whole file; callers skip the file.
pub fn parse_compose(
    text: &str,
    link_host: Option<&str>,
) -> Result<Vec<Service>, serde_yaml::Error> {
    let mut doc: Value = serde_yaml::from_str(text)?;
    doc.apply_merge()?;
    Ok(extract_services(&doc, link_host))
}

/// Extract every entry of the top-level `services` map, in file order.
///
/// A missing or non-map `services` key yields nothing.
pub fn extract_services(doc: &Value, link_host: Option<&str>) -> Vec<Service> {
    let services = match Shape::of(Some(doc)).field("services") {
        Shape::Map(map) => map,
        _ => return Vec::new(),
    };

    services
        .iter()
        .map(|(name, config)| extract_service(name, Shape::of(Some(config)), link_host))
        .collect()
}

fn extract_service(name: &Value, config: Shape<'_>, link_host: Option<&str>) -> Service {
    let (ports, links) = extract_ports(config.field("ports"), link_host);

    Service {
        name: display_text(name),
        container_name: config.field("container_name").text(),
        restart: config.field("restart").text(),
        ports,
        links,
        volumes: string_entries(config.field("volumes")),
        environment: extract_environment(config.field("environment")),
    }
}

/// Returns `(ports, links)`. Only "HOST:CONTAINER" with a numeric host port
/// gets a link; non-string entries (long syntax) are dropped.
fn extract_ports(ports: Shape<'_>, link_host: Option<&str>) -> (Vec<String>, Vec<String>) {
    let mut port_list = Vec::new();
    let mut link_list = Vec::new();

    for port in string_entries(ports) {
        if let Some(host_port) = published_host_port(&port) {
            if let Some(host) = link_host {
                link_list.push(format!("http://{}:{}", host, host_port));
            }
        }
        port_list.push(port);
    }

    (port_list, link_list)
}

/// "8080:80" -> Some("8080"). Anything with another colon count, or a
/// non-numeric first segment, is not linkable.
fn published_host_port(port: &str) -> Option<&str> {
    let parts: Vec<&str> = port.split(':').collect();
    match parts.as_slice() {
        [host, _] if !host.is_empty() && host.bytes().all(|b| b.is_ascii_digit()) => Some(*host),
        _ => None,
    }
}

fn extract_environment(env: Shape<'_>) -> Vec<String> {
    match env {
        Shape::Map(map) => map
            .iter()
            .map(|(key, value)| format!("{}={}", display_text(key), display_text(value)))
            .collect(),
        Shape::Sequence(items) => items.iter().map(display_text).collect(),
        _ => Vec::new(),
    }
}

/// String items of a list node, in order. Everything else is skipped.
fn string_entries(list: Shape<'_>) -> Vec<String> {
    match list {
        Shape::Sequence(items) => items
            .iter()
            .filter_map(|item| Shape::of(Some(item)).as_str())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}
