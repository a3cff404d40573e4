use std::path::Path;
use std::sync::Arc;

use usvg::fontdb;

use crate::config::FontConfig;

/// Where a resolved face came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FontOrigin {
    /// The configured font file.
    Preferred,
    /// An installed face found by family lookup.
    System,
}

/// A font face ready for layout and rasterization.
#[derive(Clone)]
pub struct ResolvedFont {
    /// Raw font file bytes (may be a collection).
    pub data: Arc<Vec<u8>>,
    /// Face index inside `data`.
    pub index: u32,
    /// Family name used to select the face during layout.
    pub family: String,
    /// How the face was found.
    pub origin: FontOrigin,
}

impl std::fmt::Debug for ResolvedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedFont")
            .field("bytes", &self.data.len())
            .field("index", &self.index)
            .field("family", &self.family)
            .field("origin", &self.origin)
            .finish()
    }
}

/// Resolve the font once, before anything is drawn.
///
/// Order: the configured file, then the configured fallback families, then the generic
/// monospace family, then any installed face. `None` means no face exists at all; the renderer
/// then draws chrome without text. Never fails.
#[tracing::instrument(skip_all, fields(preferred = %cfg.preferred_path.display()))]
pub fn resolve_font(cfg: &FontConfig) -> Option<ResolvedFont> {
    if let Some(font) = load_preferred(&cfg.preferred_path, &cfg.preferred_family) {
        tracing::debug!(family = %font.family, "using preferred font");
        return Some(font);
    }

    let mut db = fontdb::Database::new();
    db.load_system_fonts();

    let mut families: Vec<fontdb::Family<'_>> = cfg
        .fallback_families
        .iter()
        .map(|name| fontdb::Family::Name(name.as_str()))
        .collect();
    families.push(fontdb::Family::Monospace);

    let query = fontdb::Query {
        families: &families,
        ..Default::default()
    };
    let id = db.query(&query).or_else(|| db.faces().next().map(|f| f.id));
    let font = id.and_then(|id| face_to_font(&db, id, FontOrigin::System));

    match &font {
        Some(f) => tracing::warn!(
            family = %f.family,
            "preferred font unavailable, falling back to an installed face"
        ),
        None => tracing::warn!("no usable font face found; text will not be drawn"),
    }
    font
}

fn load_preferred(path: &Path, family: &str) -> Option<ResolvedFont> {
    let mut db = fontdb::Database::new();
    if let Err(e) = db.load_font_file(path) {
        tracing::debug!(error = %e, "preferred font file not loadable");
        return None;
    }
    let families = [fontdb::Family::Name(family)];
    let query = fontdb::Query {
        families: &families,
        ..Default::default()
    };
    let id = db.query(&query).or_else(|| db.faces().next().map(|f| f.id))?;
    face_to_font(&db, id, FontOrigin::Preferred)
}

fn face_to_font(db: &fontdb::Database, id: fontdb::ID, origin: FontOrigin) -> Option<ResolvedFont> {
    let family = db.face(id)?.families.first()?.0.clone();
    let (data, index) = db.with_face_data(id, |data, index| (data.to_vec(), index))?;
    Some(ResolvedFont {
        data: Arc::new(data),
        index,
        family,
        origin,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/font.rs"]
mod tests;
