//! Answer assembly: joins matched products to their videos and formats one
//! markdown reply.

use gearbot_catalog::SnapshotPair;
use gearbot_core::config::EngineConfig;
use gearbot_core::types::{MediaRecord, ProductRecord};

use crate::matcher::find_matches;
use crate::tokenizer::tokenize;

/// Fixed reply when either snapshot is empty.
pub const DATA_UNAVAILABLE: &str =
    "Sorry, the product data could not be loaded. Please check the data files.";

/// Fixed reply when no product matches the query.
pub const NO_MATCH: &str = "I'm sorry, I couldn't find any products that match your query. \
    Could you try asking in a different way? For example, ask about \
    'improving my golf swing' or 'core strength'.";

const INTRO: &str =
    "Based on your request, I found these matching products and training videos for you:";

const BLOCK_SEPARATOR: &str = "\n\n---\n\n";

/// Stateless responder. Every `answer` call is a pure function of the query
/// and the snapshot pair it is handed; nothing persists between calls.
pub struct Responder {
    config: EngineConfig,
}

impl Responder {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Answer a free-text query against one coherent snapshot pair.
    pub fn answer(&self, query: &str, pair: &SnapshotPair) -> String {
        if pair.is_unusable() {
            return DATA_UNAVAILABLE.to_string();
        }

        let keywords = tokenize(query);
        let matches = find_matches(&keywords, &pair.catalog.products);
        tracing::debug!(
            "query yielded {} keywords, {} matching products",
            keywords.len(),
            matches.len()
        );
        if matches.is_empty() {
            return NO_MATCH.to_string();
        }

        let mut sections = vec![INTRO.to_string()];
        for product in matches {
            sections.push(self.product_block(product, &pair.media.videos));
        }
        sections.join(BLOCK_SEPARATOR)
    }

    /// Videos whose `product_id` contains the product id, case-insensitive,
    /// capped at `max_videos_per_product` in media order.
    ///
    /// Containment rather than equality is deliberate: media rows tagged with
    /// composite keys like "P1,P2" belong to every embedded product. The flip
    /// side — a very short id picking up unrelated rows — is part of the
    /// matching policy and covered by tests, not something to quietly tighten.
    fn videos_for<'a>(
        &self,
        product: &ProductRecord,
        videos: &'a [MediaRecord],
    ) -> Vec<&'a MediaRecord> {
        let needle = product.id.to_lowercase();
        videos
            .iter()
            .filter(|video| video.product_id.to_lowercase().contains(&needle))
            .take(self.config.max_videos_per_product)
            .collect()
    }

    fn product_block(&self, product: &ProductRecord, videos: &[MediaRecord]) -> String {
        let related = self.videos_for(product, videos);

        let mut block = format!("### {}\n", product.name);
        block.push_str(
            "This product is a great choice for what you're looking for. \
             You can learn more and purchase it here:\n",
        );
        block.push_str(&format!(
            "➡️ **[{} Product Page]({})**\n",
            product.name, product.url
        ));

        if related.is_empty() {
            block.push_str(&format!(
                "\n_I couldn't find a specific training video for this product, \
                 but check out the {} YouTube channel for hundreds of tutorials!_",
                self.config.channel_name
            ));
        } else {
            block.push_str("\nHere are some popular training videos to get you started:\n");
            let links: Vec<String> = related
                .iter()
                .map(|video| format!("- [{}]({})", video.title, video.url))
                .collect();
            block.push_str(&links.join("\n"));
        }
        block
    }
}
