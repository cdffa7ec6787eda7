use std::path::{Path, PathBuf};

/// Process-wide settings, resolved once from the command line.
#[derive(Debug, Clone)]
pub struct RunConfig {
    search_dir: PathBuf,
    host: String,
    port: u16,
    link_host: Option<String>,
}

impl RunConfig {
    /// The link host is the `--service-ip` override, else the bind host.
    /// Empty strings count as unset.
    pub fn new(
        search_dir: impl Into<PathBuf>,
        host: String,
        port: u16,
        service_ip: Option<String>,
    ) -> Self {
        let link_host = service_ip
            .filter(|ip| !ip.is_empty())
            .or_else(|| Some(host.clone()).filter(|h| !h.is_empty()));

        Self {
            search_dir: search_dir.into(),
            host,
            port,
            link_host,
        }
    }

    pub fn search_dir(&self) -> &Path {
        &self.search_dir
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn link_host(&self) -> Option<&str> {
        self.link_host.as_deref()
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
