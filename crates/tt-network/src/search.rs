//! Route search for the line list.

use tt_core::Language;

use crate::{Route, RouteCatalog};

impl RouteCatalog {
    /// Routes matching `query`, in catalog order.
    ///
    /// An empty query matches everything.  Otherwise a route matches when
    /// the lowercased query is a substring of its lowercased `code` or of
    /// its name in `lang`.
    pub fn search(&self, query: &str, lang: Language) -> Vec<&Route> {
        if query.is_empty() {
            return self.routes().iter().collect();
        }
        let needle = query.to_lowercase();
        self.routes()
            .iter()
            .filter(|r| {
                r.code.to_lowercase().contains(&needle)
                    || r.name[lang].to_lowercase().contains(&needle)
            })
            .collect()
    }
}
