//! Resource URL rendering
//!
//! Resources are located through the loader chain (see
//! [`LoaderChain::resource`](crate::loader::LoaderChain::resource)).
//! URL rendering applies a fixed substitution table for a handful of
//! accented characters that the legacy deployment format stores
//! percent-encoded; the table is static configuration, not logic.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use crate::loader::LoaderChain;

static CHAR_ENCODINGS: Lazy<FxHashMap<char, &'static str>> = Lazy::new(|| {
    let mut table = FxHashMap::default();
    table.insert('ä', "%C3%A4");
    table.insert('ö', "%C3%B6");
    table.insert('ü', "%C3%BC");
    table.insert('Ä', "%C3%84");
    table.insert('Ö', "%C3%96");
    table.insert('Ü', "%C3%9C");
    table
});

/// Apply the substitution table to a URL string
pub fn encode_url(url: &str) -> String {
    let mut encoded = String::with_capacity(url.len());
    for c in url.chars() {
        match CHAR_ENCODINGS.get(&c) {
            Some(replacement) => encoded.push_str(replacement),
            None => encoded.push(c),
        }
    }
    encoded
}

/// Locate a resource through the chain and render its URL with the
/// substitution table applied; `None` when every loader misses.
pub fn resource_url_as_string(chain: &LoaderChain, name: &str) -> Option<String> {
    chain.resource(name).map(|resource| encode_url(&resource.url))
}

/// Locate a resource through the chain and return its payload;
/// `None` when every loader misses.
pub fn resource_bytes(chain: &LoaderChain, name: &str) -> Option<Vec<u8>> {
    chain.resource(name).map(|resource| resource.bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::RegistryLoader;
    use std::sync::Arc;
    use tenon_types::ClassRegistry;

    #[test]
    fn test_encode_url_substitutions() {
        assert_eq!(encode_url("file:/prüfung/ä.bpmn"), "file:/pr%C3%BCfung/%C3%A4.bpmn");
        assert_eq!(encode_url("file:/plain.bpmn"), "file:/plain.bpmn");
        assert_eq!(encode_url("ÄÖÜ"), "%C3%84%C3%96%C3%9C");
    }

    #[test]
    fn test_resource_url_through_chain() {
        let registry = Arc::new(ClassRegistry::new());
        let mut local = RegistryLoader::new("local", registry);
        local.add_resource("forms/prüfung.html", "file:/forms/prüfung.html", vec![]);

        let chain = LoaderChain::new().with_local(Arc::new(local));
        assert_eq!(
            resource_url_as_string(&chain, "forms/prüfung.html").unwrap(),
            "file:/forms/pr%C3%BCfung.html"
        );
        assert!(resource_url_as_string(&chain, "missing").is_none());
    }

    #[test]
    fn test_resource_bytes() {
        let registry = Arc::new(ClassRegistry::new());
        let mut local = RegistryLoader::new("local", registry);
        local.add_resource("data.bin", "file:/data.bin", vec![1, 2, 3]);

        let chain = LoaderChain::new().with_local(Arc::new(local));
        assert_eq!(resource_bytes(&chain, "data.bin"), Some(vec![1, 2, 3]));
        assert_eq!(resource_bytes(&chain, "other.bin"), None);
    }
}
