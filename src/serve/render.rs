use crate::types::{ReportGroup, Service};
use std::fmt::Write;

const STYLE: &str = r#"
    html, body {
      height: 100%;
      margin: 0;
    }
    body {
      font-family: Arial, sans-serif;
      background: #f0f2f5;
      color: #333;
      display: flex;
      justify-content: center;
      align-items: center;
      padding: 2em;
      box-sizing: border-box;
      min-height: 100vh;
    }
    #container {
      width: 90vw;
      overflow-y: auto;
      max-height: 90vh;
      background: white;
      padding: 1em 2em 2em 2em;
      box-shadow: 0 0 8px rgba(0,0,0,0.1);
      border-radius: 6px;
    }
    h1 {
      margin-top: 0;
      margin-bottom: 1em;
      color: #2a3f54;
      font-weight: 700;
    }
    h2 {
      margin-top: 2em;
      margin-bottom: 0.5em;
      font-weight: 700;
      border-bottom: 2px solid #666;
      padding-bottom: 0.2em;
      color: #2a3f54;
    }
    table {
      border-collapse: collapse;
      width: 100%;
      min-width: 800px;
      table-layout: fixed;
    }
    th, td {
      border: 1px solid #ccc;
      padding: 0.6em 1em;
      text-align: left;
      vertical-align: top;
      font-size: 0.95rem;
      word-break: break-word;
      overflow-wrap: break-word;
    }
    th {
      background-color: #e2e6ea;
      font-weight: 600;
    }
    th.service-col, td.service-col       { width: 7%; }
    th.container-col, td.container-col   { width: 7%; }
    th.restart-col, td.restart-col       { width: 7%; }
    th.links-col, td.links-col           { width: 10%; }
    th.ports-col, td.ports-col           { width: 10%; }
    th.volumes-col, td.volumes-col       { width: 40%; }
    th.env-col, td.env-col {
      width: 20%;
      white-space: pre-wrap;
      font-family: monospace;
    }
    tbody tr:nth-child(odd) {
      background-color: #fafafa;
    }
    tbody tr:nth-child(even) {
      background-color: #f4f6f8;
    }
    a {
      color: #007bff;
      text-decoration: none;
      word-break: break-all;
    }
    a:hover {
      text-decoration: underline;
    }
    div.link-item {
      margin-bottom: 0.3em;
    }
    pre {
      margin: 0;
      font-family: monospace;
      font-size: 0.9rem;
      white-space: pre-wrap;
      word-break: break-word;
      text-align: left;
    }
"#;

/// (css class, header text), in column order.
const COLUMNS: [(&str, &str); 7] = [
    ("service-col", "Service"),
    ("container-col", "Container Name"),
    ("restart-col", "Restart Policy"),
    ("links-col", "Links (IP:Port)"),
    ("ports-col", "Ports"),
    ("volumes-col", "Volumes"),
    ("env-col", "Environment Variables"),
];

/// Escape text for use in element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// "8080:80" -> "8080 → 80". Display only; the record keeps the original.
fn arrowed(mapping: &str) -> String {
    mapping.replace(':', " → ")
}

/// Render the whole report page.
pub fn render_report(groups: &[ReportGroup]) -> String {
    let mut html = String::new();

    html.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("  <meta charset=\"utf-8\">\n  <title>Docker Compose Services</title>\n");
    let _ = writeln!(html, "  <style>{}  </style>", STYLE);
    html.push_str("</head>\n<body>\n  <div id=\"container\">\n");
    html.push_str("    <h1>Docker Compose Services</h1>\n");

    for group in groups {
        render_group(&mut html, group);
    }

    html.push_str("  </div>\n</body>\n</html>\n");
    html
}

fn render_group(html: &mut String, group: &ReportGroup) {
    let _ = writeln!(html, "    <h2>{}</h2>", escape_html(&group.filename));
    html.push_str("    <table>\n      <thead>\n        <tr>\n");
    for (class, title) in COLUMNS {
        let _ = writeln!(html, "          <th class=\"{}\">{}</th>", class, title);
    }
    html.push_str("        </tr>\n      </thead>\n      <tbody>\n");

    for service in &group.services {
        render_service(html, service);
    }

    html.push_str("      </tbody>\n    </table>\n");
}

fn render_service(html: &mut String, service: &Service) {
    html.push_str("        <tr>\n");

    let _ = writeln!(
        html,
        "          <td class=\"service-col\">{}</td>",
        escape_html(&service.name)
    );
    let _ = writeln!(
        html,
        "          <td class=\"container-col\">{}</td>",
        escape_html(service.container_name.as_deref().unwrap_or(""))
    );
    let _ = writeln!(
        html,
        "          <td class=\"restart-col\">{}</td>",
        escape_html(service.restart.as_deref().unwrap_or(""))
    );

    html.push_str("          <td class=\"links-col\">");
    for link in &service.links {
        let link = escape_html(link);
        let _ = write!(
            html,
            "<div class=\"link-item\">\
             <a href=\"{}\" target=\"_blank\" rel=\"noopener\">{}</a></div>",
            link, link
        );
    }
    html.push_str("</td>\n");

    let ports: Vec<String> = service.ports.iter().map(|p| arrowed(p)).collect();
    let volumes: Vec<String> = service.volumes.iter().map(|v| arrowed(v)).collect();
    render_lines(html, "ports-col", &ports);
    render_lines(html, "volumes-col", &volumes);
    render_lines(html, "env-col", &service.environment);

    html.push_str("        </tr>\n");
}

/// One entry per line inside a `<pre>`; empty lists give an empty cell.
fn render_lines(html: &mut String, class: &str, lines: &[String]) {
    let _ = write!(html, "          <td class=\"{}\">", class);
    if !lines.is_empty() {
        let escaped: Vec<String> = lines.iter().map(|l| escape_html(l)).collect();
        let _ = write!(html, "<pre>{}</pre>", escaped.join("\n"));
    }
    html.push_str("</td>\n");
}
