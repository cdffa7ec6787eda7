/// One entry of a compose file's `services` map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Service {
    pub name: String,
    pub container_name: Option<String>,
    pub restart: Option<String>,
    /// Port mappings as declared, e.g. "8080:80".
    pub ports: Vec<String>,
    /// Derived from `ports`, never declared in the file.
    pub links: Vec<String>,
    pub volumes: Vec<String>,
    /// "KEY=VALUE" entries.
    pub environment: Vec<String>,
}

/// Services found in one compose file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportGroup {
    /// Path relative to the search directory.
    pub filename: String,
    pub services: Vec<Service>,
}
