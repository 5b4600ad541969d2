//! Reference resolution: building the id → URL map from prioritized local
//! sources and generation-tagged remote lookups.
//!
//! One [`Resolution`] is owned per rendering context. It is rebuilt
//! wholesale by [`Resolution::begin_pass`] whenever the document or its
//! sources change; completions carrying a superseded generation are
//! discarded without touching current state.

use std::collections::{HashMap, HashSet};

use smol_str::SmolStr;

use crate::placeholder::{MediaKind, PlaceholderSyntax, scan_placeholders};

/// A media asset exposed by a local source.
///
/// `url` is nullable: a stored asset whose direct URL has not been issued
/// resolves nothing, and the id falls through to the remote lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaAsset {
    pub id: SmolStr,
    pub kind: MediaKind,
    pub url: Option<SmolStr>,
}

impl MediaAsset {
    pub fn new(id: impl Into<SmolStr>, kind: MediaKind, url: Option<SmolStr>) -> Self {
        Self {
            id: id.into(),
            kind,
            url,
        }
    }
}

/// An ordered local collection of assets.
///
/// Several sources may be attached to one document; earlier sources take
/// priority on id collision.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssetSource {
    pub assets: Vec<MediaAsset>,
}

impl AssetSource {
    pub fn new(assets: Vec<MediaAsset>) -> Self {
        Self { assets }
    }
}

/// Work order produced by a resolution pass: the generation tag plus the
/// ids that still need a remote lookup, each listed once.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PassTicket {
    pub generation: u64,
    pub pending: Vec<(MediaKind, SmolStr)>,
}

/// What a remote lookup completion did to the resolution state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LookupOutcome {
    /// A usable URL was accepted into the map.
    Applied,
    /// The lookup settled without a usable URL; the id renders as missing.
    Unresolved,
    /// The completion belonged to a superseded pass; state untouched.
    Stale,
}

/// Resolution state for one rendering context.
///
/// The map and the loading set never share a key: `begin_pass` routes each
/// id to exactly one of them, and `complete` removes an id from the loading
/// set before it can enter the map.
#[derive(Clone, Debug, Default)]
pub struct Resolution {
    map: HashMap<SmolStr, SmolStr>,
    loading: HashSet<SmolStr>,
    generation: u64,
}

impl Resolution {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generation tag of the current pass.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Direct URL for `id`, if it resolved.
    pub fn url_for(&self, id: &str) -> Option<&str> {
        self.map.get(id).map(|url| url.as_str())
    }

    /// Whether `id` is awaiting a remote lookup.
    pub fn is_loading(&self, id: &str) -> bool {
        self.loading.contains(id)
    }

    /// Snapshot of the id → URL map built by the current pass.
    pub fn resolution_map(&self) -> &HashMap<SmolStr, SmolStr> {
        &self.map
    }

    /// Start a fresh resolution pass over `text`.
    ///
    /// Discards all previous state, bumps the generation, resolves every
    /// placeholder id against the local sources in priority order (first
    /// source exposing a usable URL wins), and returns the ids that still
    /// need a remote lookup. Each unresolved id is listed once, tagged with
    /// the kind of its first occurrence.
    pub fn begin_pass(
        &mut self,
        text: &str,
        syntax: PlaceholderSyntax,
        sources: &[AssetSource],
    ) -> PassTicket {
        self.generation += 1;
        self.map.clear();
        self.loading.clear();

        let mut pending = Vec::new();
        for place in scan_placeholders(text, syntax) {
            if self.map.contains_key(&place.id) || self.loading.contains(&place.id) {
                continue;
            }
            let local_url = sources
                .iter()
                .flat_map(|source| source.assets.iter())
                .filter(|asset| asset.id == place.id)
                .find_map(|asset| asset.url.clone());
            match local_url {
                Some(url) => {
                    self.map.insert(place.id.clone(), url);
                }
                None => {
                    self.loading.insert(place.id.clone());
                    pending.push((place.kind, place.id));
                }
            }
        }

        tracing::debug!(
            generation = self.generation,
            resolved = self.map.len(),
            pending = pending.len(),
            "resolution pass started"
        );

        PassTicket {
            generation: self.generation,
            pending,
        }
    }

    /// Settle the remote lookup for `id` issued under `generation`.
    ///
    /// A completion from a superseded pass is a no-op. Otherwise the id
    /// leaves the loading set; a usable URL enters the map unless the id
    /// already resolved locally (local resolutions are never overwritten),
    /// and no URL leaves the id unresolved for the missing render path.
    pub fn complete(
        &mut self,
        generation: u64,
        id: &str,
        url: Option<SmolStr>,
    ) -> LookupOutcome {
        if generation != self.generation {
            tracing::debug!(
                id,
                generation,
                current = self.generation,
                "dropping stale lookup completion"
            );
            return LookupOutcome::Stale;
        }

        self.loading.remove(id);
        match url {
            Some(url) => {
                self.map.entry(SmolStr::new(id)).or_insert(url);
                LookupOutcome::Applied
            }
            None => LookupOutcome::Unresolved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source(entries: &[(&str, Option<&str>)]) -> AssetSource {
        AssetSource::new(
            entries
                .iter()
                .map(|(id, url)| {
                    MediaAsset::new(*id, MediaKind::Image, url.map(SmolStr::new))
                })
                .collect(),
        )
    }

    #[test]
    fn test_local_source_resolves() {
        let mut res = Resolution::new();
        let ticket = res.begin_pass(
            "[IMAGE:abc]",
            PlaceholderSyntax::Lesson,
            &[source(&[("abc", Some("https://x/a.png"))])],
        );
        assert!(ticket.pending.is_empty());
        assert_eq!(res.url_for("abc"), Some("https://x/a.png"));
        assert!(!res.is_loading("abc"));
    }

    #[test]
    fn test_earlier_source_wins_on_collision() {
        let mut res = Resolution::new();
        res.begin_pass(
            "[IMAGE:abc]",
            PlaceholderSyntax::Lesson,
            &[
                source(&[("abc", Some("https://first/a.png"))]),
                source(&[("abc", Some("https://second/a.png"))]),
            ],
        );
        assert_eq!(res.url_for("abc"), Some("https://first/a.png"));
    }

    #[test]
    fn test_source_without_url_falls_through() {
        let mut res = Resolution::new();
        let ticket = res.begin_pass(
            "[IMAGE:abc]",
            PlaceholderSyntax::Lesson,
            &[
                source(&[("abc", None)]),
                source(&[("abc", Some("https://second/a.png"))]),
            ],
        );
        assert!(ticket.pending.is_empty());
        assert_eq!(res.url_for("abc"), Some("https://second/a.png"));
    }

    #[test]
    fn test_unresolved_id_goes_to_loading_once() {
        let mut res = Resolution::new();
        let ticket = res.begin_pass(
            "[IMAGE:abc] [IMAGE:abc] [IMAGE:def]",
            PlaceholderSyntax::Lesson,
            &[],
        );
        assert_eq!(ticket.pending.len(), 2);
        assert!(res.is_loading("abc"));
        assert!(res.is_loading("def"));
        assert!(res.resolution_map().is_empty());
    }

    #[test]
    fn test_complete_applies_url() {
        let mut res = Resolution::new();
        let ticket = res.begin_pass("[IMAGE:abc]", PlaceholderSyntax::Lesson, &[]);
        let outcome = res.complete(ticket.generation, "abc", Some(SmolStr::new("https://r/a")));
        assert_eq!(outcome, LookupOutcome::Applied);
        assert_eq!(res.url_for("abc"), Some("https://r/a"));
        assert!(!res.is_loading("abc"));
    }

    #[test]
    fn test_complete_without_url_leaves_id_missing() {
        let mut res = Resolution::new();
        let ticket = res.begin_pass("[VIDEO:xyz]", PlaceholderSyntax::Test, &[]);
        let outcome = res.complete(ticket.generation, "xyz", None);
        assert_eq!(outcome, LookupOutcome::Unresolved);
        assert_eq!(res.url_for("xyz"), None);
        assert!(!res.is_loading("xyz"));
    }

    #[test]
    fn test_stale_completion_is_noop() {
        let mut res = Resolution::new();
        let first = res.begin_pass("[IMAGE:abc]", PlaceholderSyntax::Lesson, &[]);
        let second = res.begin_pass("[IMAGE:abc]", PlaceholderSyntax::Lesson, &[]);
        assert!(second.generation > first.generation);

        let outcome = res.complete(first.generation, "abc", Some(SmolStr::new("https://old/a")));
        assert_eq!(outcome, LookupOutcome::Stale);
        assert_eq!(res.url_for("abc"), None);
        // Still awaiting the second pass's lookup.
        assert!(res.is_loading("abc"));
    }

    #[test]
    fn test_remote_never_overwrites_local() {
        let mut res = Resolution::new();
        let ticket = res.begin_pass(
            "[IMAGE:abc]",
            PlaceholderSyntax::Lesson,
            &[source(&[("abc", Some("https://local/a.png"))])],
        );
        res.complete(ticket.generation, "abc", Some(SmolStr::new("https://remote/a")));
        assert_eq!(res.url_for("abc"), Some("https://local/a.png"));
    }

    #[test]
    fn test_idempotent_passes() {
        let sources = [source(&[("abc", Some("https://x/a.png")), ("def", None)])];
        let mut a = Resolution::new();
        let mut b = Resolution::new();
        a.begin_pass("[IMAGE:abc] [IMAGE:def]", PlaceholderSyntax::Lesson, &sources);
        b.begin_pass("[IMAGE:abc] [IMAGE:def]", PlaceholderSyntax::Lesson, &sources);
        assert_eq!(a.resolution_map(), b.resolution_map());
    }

    #[test]
    fn test_map_and_loading_disjoint() {
        let mut res = Resolution::new();
        let ticket = res.begin_pass(
            "[IMAGE:abc] [IMAGE:def]",
            PlaceholderSyntax::Lesson,
            &[source(&[("abc", Some("https://x/a.png"))])],
        );
        for id in res.resolution_map().keys() {
            assert!(!res.is_loading(id));
        }
        res.complete(ticket.generation, "def", Some(SmolStr::new("https://r/d")));
        for id in res.resolution_map().keys() {
            assert!(!res.is_loading(id));
        }
    }
}
