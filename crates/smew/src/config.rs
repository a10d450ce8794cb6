//! Library version and configuration option metadata

use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Library version string, always prefixed with `v`.
pub fn version() -> &'static str {
    concat!("v", env!("CARGO_PKG_VERSION"))
}

static CONFIGURATION_OPTIONS: LazyLock<BTreeMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        BTreeMap::from([
            (
                "access_mode",
                "Access mode of the database (AUTOMATIC, READ_ONLY or READ_WRITE)",
            ),
            (
                "default_order",
                "The order type used when none is specified (ASC or DESC)",
            ),
            (
                "default_null_order",
                "Null ordering used when none is specified (NULLS_FIRST or NULLS_LAST)",
            ),
            (
                "memory_limit",
                "The maximum memory of the system (e.g. 1GB)",
            ),
            (
                "threads",
                "The number of total threads used by the system",
            ),
        ])
    });

/// Descriptions of the supported configuration options, keyed by name.
pub fn configuration_option_descriptions() -> &'static BTreeMap<&'static str, &'static str> {
    &CONFIGURATION_OPTIONS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_prefix() {
        let version = version();
        assert!(version.starts_with('v'));
        assert!(version.len() > 1);
    }

    #[test]
    fn test_configuration_options() {
        let options = configuration_option_descriptions();
        assert!(options.contains_key("memory_limit"));
        assert!(options.values().all(|d| !d.is_empty()));
    }
}
