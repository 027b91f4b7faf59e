use crate::utils::repr::PyRepr;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const PORT_OK_MIN: i64 = 8080;
pub const PORT_OK_MAX: i64 = 65535;

/// One product entry of the inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub warehouse: String,
    pub sku: String,
    pub price: f64,
    pub quantity: i64,
}

impl Default for ProductRecord {
    fn default() -> Self {
        Self {
            warehouse: "main".to_string(),
            sku: String::new(),
            price: 0.0,
            quantity: 0,
        }
    }
}

impl PyRepr for ProductRecord {
    fn repr(&self) -> String {
        format!(
            "{{'warehouse': {}, 'sku': {}, 'price': {}, 'quantity': {}}}",
            self.warehouse.repr(),
            self.sku.repr(),
            self.price.repr(),
            self.quantity.repr()
        )
    }
}

/// Connection options with no behaviour attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlainOpts {
    pub host: String,
    pub port: i64,
    pub debug: bool,
}

/// Connection options that can check their own port.
///
/// Nothing is validated on construction; out-of-range ports are stored as
/// given and only [`ConnectionOpts::is_port_ok`] looks at them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionOpts {
    pub host: String,
    pub port: i64,
    pub debug: bool,
}

const OPTS_FIELDS: [&str; 3] = ["host", "port", "debug"];

fn fmt_opts(f: &mut fmt::Formatter<'_>, host: &str, port: i64, debug: bool) -> fmt::Result {
    write!(
        f,
        "Opts(host={}, port={}, debug={})",
        host.repr(),
        port,
        debug.repr()
    )
}

impl PlainOpts {
    pub fn new(host: impl Into<String>, port: i64, debug: bool) -> Self {
        Self {
            host: host.into(),
            port,
            debug,
        }
    }

    pub fn field_names() -> &'static [&'static str] {
        &OPTS_FIELDS
    }

    pub fn with_port(&self, port: i64) -> Self {
        Self {
            port,
            ..self.clone()
        }
    }
}

impl fmt::Display for PlainOpts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_opts(f, &self.host, self.port, self.debug)
    }
}

impl ConnectionOpts {
    pub fn new(host: impl Into<String>, port: i64, debug: bool) -> Self {
        Self {
            host: host.into(),
            port,
            debug,
        }
    }

    pub fn field_names() -> &'static [&'static str] {
        &OPTS_FIELDS
    }

    pub fn with_port(&self, port: i64) -> Self {
        Self {
            port,
            ..self.clone()
        }
    }

    pub fn is_port_ok(&self) -> bool {
        (PORT_OK_MIN..=PORT_OK_MAX).contains(&self.port)
    }
}

impl fmt::Display for ConnectionOpts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_opts(f, &self.host, self.port, self.debug)
    }
}

impl From<PlainOpts> for ConnectionOpts {
    fn from(opts: PlainOpts) -> Self {
        Self {
            host: opts.host,
            port: opts.port,
            debug: opts.debug,
        }
    }
}

/// Statistics of an LRU cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheInfo {
    pub hits: u64,
    pub misses: u64,
    pub max_size: usize,
    pub current_size: usize,
}

impl fmt::Display for CacheInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CacheInfo(hits={}, misses={}, maxsize={}, currsize={})",
            self.hits, self.misses, self.max_size, self.current_size
        )
    }
}

/// Lines printed by a single demo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoOutput {
    pub name: String,
    pub lines: Vec<String>,
}
