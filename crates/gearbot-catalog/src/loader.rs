//! CSV ingestion for the product and video tables.
//!
//! Loading never takes the process down: an unreadable source degrades to an
//! empty snapshot and malformed rows are skipped with a warning, so the
//! responder falls back to its fixed data-unavailable reply instead of
//! crashing.

use std::path::Path;

use serde::Deserialize;
use sha2::{Digest, Sha256};

use gearbot_core::types::{MediaRecord, ProductRecord};

use crate::snapshot::{CatalogSnapshot, MediaSnapshot};

/// Products row as it appears in the CSV export. All fields optional so a
/// partially filled row still parses and can be validated here.
#[derive(Debug, Deserialize)]
struct RawProductRow {
    #[serde(rename = "ProductID")]
    id: Option<String>,
    #[serde(rename = "ProductName")]
    name: Option<String>,
    #[serde(rename = "ProductURL")]
    url: Option<String>,
    #[serde(rename = "RelatedKeywords")]
    keywords: Option<String>,
}

/// Videos row as it appears in the CSV export.
#[derive(Debug, Deserialize)]
struct RawVideoRow {
    #[serde(rename = "ProductID")]
    product_id: Option<String>,
    #[serde(rename = "VideoTitle")]
    title: Option<String>,
    #[serde(rename = "VideoURL")]
    url: Option<String>,
}

fn fingerprint(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

/// Hash the current source bytes without building a snapshot.
/// `None` when the file is unreadable.
pub fn source_fingerprint(path: &Path) -> Option<String> {
    std::fs::read(path).ok().map(|bytes| fingerprint(&bytes))
}

fn csv_reader(bytes: &[u8]) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new().flexible(true).from_reader(bytes)
}

fn non_blank(field: Option<String>) -> Option<String> {
    let value = field?;
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
}

fn validate_product(raw: RawProductRow) -> Option<ProductRecord> {
    let id = non_blank(raw.id)?;
    let name = non_blank(raw.name)?;
    Some(ProductRecord {
        id,
        name,
        url: raw.url.unwrap_or_default(),
        keywords: raw.keywords.unwrap_or_default(),
    })
}

/// Load the products table. Rows without an id or a name are unusable and
/// skipped; an unreadable file yields an empty snapshot.
pub fn load_catalog(path: &Path) -> CatalogSnapshot {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!("products table {} unreadable: {e}", path.display());
            return CatalogSnapshot::empty();
        }
    };
    let fp = fingerprint(&bytes);

    let mut products = Vec::new();
    for (idx, row) in csv_reader(&bytes).deserialize::<RawProductRow>().enumerate() {
        match row {
            Ok(raw) => match validate_product(raw) {
                Some(record) => products.push(record),
                None => tracing::warn!("products row {}: missing id or name, skipped", idx + 1),
            },
            Err(e) => tracing::warn!("products row {}: {e}, skipped", idx + 1),
        }
    }
    tracing::info!("loaded {} products from {}", products.len(), path.display());
    CatalogSnapshot::new(products, fp)
}

/// Load the videos table. Videos carry no usability invariant — a row with a
/// blank product id simply never joins to anything.
pub fn load_media(path: &Path) -> MediaSnapshot {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!("videos table {} unreadable: {e}", path.display());
            return MediaSnapshot::empty();
        }
    };
    let fp = fingerprint(&bytes);

    let mut videos = Vec::new();
    for (idx, row) in csv_reader(&bytes).deserialize::<RawVideoRow>().enumerate() {
        match row {
            Ok(raw) => videos.push(MediaRecord {
                product_id: raw.product_id.unwrap_or_default(),
                title: raw.title.unwrap_or_default(),
                url: raw.url.unwrap_or_default(),
            }),
            Err(e) => tracing::warn!("videos row {}: {e}, skipped", idx + 1),
        }
    }
    tracing::info!("loaded {} videos from {}", videos.len(), path.display());
    MediaSnapshot::new(videos, fp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_catalog_ok() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "products.csv",
            "ProductID,ProductName,ProductURL,RelatedKeywords\n\
             P1,BOSU Elite,https://shop.example.com/p1,balance core\n\
             P2,RMT Club,https://shop.example.com/p2,rotation swing golf\n",
        );
        let snapshot = load_catalog(&path);
        assert_eq!(snapshot.products.len(), 2);
        assert_eq!(snapshot.products[0].id, "P1");
        assert_eq!(snapshot.products[0].keywords, "balance core");
        assert!(!snapshot.fingerprint.is_empty());
    }

    #[test]
    fn test_rows_missing_id_or_name_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "products.csv",
            "ProductID,ProductName,ProductURL,RelatedKeywords\n\
             ,No Id,https://shop.example.com/x,\n\
             P2,,https://shop.example.com/y,\n\
             P3,Kept,https://shop.example.com/z,agility\n",
        );
        let snapshot = load_catalog(&path);
        assert_eq!(snapshot.products.len(), 1);
        assert_eq!(snapshot.products[0].name, "Kept");
    }

    #[test]
    fn test_blank_optional_fields_default_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "products.csv",
            "ProductID,ProductName,ProductURL,RelatedKeywords\nP1,Bare,,\n",
        );
        let snapshot = load_catalog(&path);
        assert_eq!(snapshot.products[0].url, "");
        assert_eq!(snapshot.products[0].keywords, "");
    }

    #[test]
    fn test_missing_file_degrades_to_empty() {
        let snapshot = load_catalog(Path::new("/nonexistent/products.csv"));
        assert!(snapshot.is_empty());
        assert!(snapshot.fingerprint.is_empty());

        let media = load_media(Path::new("/nonexistent/videos.csv"));
        assert!(media.is_empty());
    }

    #[test]
    fn test_load_media_keeps_blank_product_id_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "videos.csv",
            "ProductID,VideoTitle,VideoURL\n\
             P1,Intro,https://videos.example.com/1\n\
             ,Orphan Clip,https://videos.example.com/2\n",
        );
        let snapshot = load_media(&path);
        assert_eq!(snapshot.videos.len(), 2);
        assert_eq!(snapshot.videos[1].product_id, "");
    }

    #[test]
    fn test_fingerprint_tracks_content() {
        let dir = tempfile::tempdir().unwrap();
        let header = "ProductID,ProductName,ProductURL,RelatedKeywords\n";
        let a = write_file(&dir, "a.csv", &format!("{header}P1,One,,\n"));
        let b = write_file(&dir, "b.csv", &format!("{header}P2,Two,,\n"));
        assert_ne!(load_catalog(&a).fingerprint, load_catalog(&b).fingerprint);
        assert_eq!(
            source_fingerprint(&a).unwrap(),
            load_catalog(&a).fingerprint
        );
    }
}
