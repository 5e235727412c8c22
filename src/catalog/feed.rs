//! Community feed: randomly generated research-report cards with paging.
//!
//! Cards are drawn from a [`StdRng`], so a fixed seed reproduces the same
//! feed. [`CommunityFeed`] mimics the infinite-scroll page: an initial batch,
//! then fixed-size pages after a simulated load delay until the feed is full.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::debug;

const CATEGORIES: [&str; 6] = ["生产力工具", "设计工具", "沟通协作", "数据管理", "项目管理", "知识管理"];
const LOCATIONS: [&str; 6] = ["北京", "上海", "深圳", "杭州", "成都", "广州"];
const TAGS: [&str; 3] = ["功能分析", "竞品对比", "用户调研"];

/// One card of the community feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedCard {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub likes: u32,
    pub comments: u32,
    pub shares: u32,
    pub rating: f32,
    pub category: String,
    pub tags: Vec<String>,
    pub publish_hours_ago: u32,
    pub location: Option<String>,
    pub is_hot: bool,
}

/// Source of random feed cards.
pub struct FeedGenerator {
    rng: StdRng,
}

impl FeedGenerator {
    /// Deterministic generator: equal seeds yield equal feeds.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generator seeded from OS randomness, as the live page behaves.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Generates `count` cards with consecutive ids starting at `start_id`.
    pub fn generate(&mut self, start_id: u32, count: usize) -> Vec<FeedCard> {
        (0..count as u32).map(|i| self.card(start_id + i)).collect()
    }

    fn card(&mut self, id: u32) -> FeedCard {
        let rng = &mut self.rng;
        let rating = (rng.gen_range(3.0f32..5.0) * 10.0).round() / 10.0;
        let tag_count = rng.gen_range(1..=TAGS.len());
        let location = if rng.gen_bool(0.5) {
            Some(LOCATIONS[rng.gen_range(0..LOCATIONS.len())].to_string())
        } else {
            None
        };

        FeedCard {
            id,
            title: format!("产品调研报告 #{id}"),
            author: format!("用户{}", rng.gen_range(0..1000)),
            likes: rng.gen_range(100..2100),
            comments: rng.gen_range(10..510),
            shares: rng.gen_range(5..205),
            rating,
            category: CATEGORIES[rng.gen_range(0..CATEGORIES.len())].to_string(),
            tags: TAGS[..tag_count].iter().map(|t| t.to_string()).collect(),
            publish_hours_ago: rng.gen_range(0..24),
            location,
            is_hot: rng.gen_bool(0.3),
        }
    }
}

/// Paging limits of the feed.
#[derive(Debug, Clone, Copy)]
pub struct FeedPaging {
    /// Cards loaded when the feed is created.
    pub initial: usize,
    /// Cards added by each further load.
    pub page_size: usize,
    /// Once the feed holds more than this many cards, the next load is the last.
    pub limit: usize,
    /// Simulated latency of one load.
    pub load_delay: Duration,
}

impl Default for FeedPaging {
    fn default() -> Self {
        Self {
            initial: 12,
            page_size: 6,
            limit: 50,
            load_delay: Duration::from_millis(1000),
        }
    }
}

/// The infinite-scroll feed: the cards loaded so far and whether another
/// page can follow.
pub struct CommunityFeed {
    generator: FeedGenerator,
    paging: FeedPaging,
    cards: Vec<FeedCard>,
    has_more: bool,
}

impl CommunityFeed {
    /// Creates the feed with its initial page already loaded.
    pub fn new(mut generator: FeedGenerator, paging: FeedPaging) -> Self {
        let cards = generator.generate(1, paging.initial);
        Self {
            generator,
            paging,
            cards,
            has_more: true,
        }
    }

    pub fn cards(&self) -> &[FeedCard] {
        &self.cards
    }

    /// `false` once the last page has been loaded.
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Loads the next page after the simulated delay. Returns the number of
    /// cards added, zero when the feed is exhausted.
    pub async fn load_more(&mut self) -> usize {
        if !self.has_more {
            return 0;
        }
        if !self.paging.load_delay.is_zero() {
            tokio::time::sleep(self.paging.load_delay).await;
        }

        let before = self.cards.len();
        let page = self.generator.generate(before as u32 + 1, self.paging.page_size);
        self.cards.extend(page);
        if before > self.paging.limit {
            self.has_more = false;
        }
        debug!(cards = self.cards.len(), has_more = self.has_more, "feed page loaded");
        self.paging.page_size
    }

    /// Loads up to `pages` further pages, stopping early once exhausted.
    pub async fn load_pages(&mut self, pages: usize) -> usize {
        let mut added = 0;
        for _ in 0..pages {
            if !self.has_more {
                break;
            }
            added += self.load_more().await;
        }
        added
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant_paging() -> FeedPaging {
        FeedPaging {
            load_delay: Duration::ZERO,
            ..Default::default()
        }
    }

    #[test]
    fn same_seed_same_cards() {
        let a = FeedGenerator::seeded(7).generate(1, 12);
        let b = FeedGenerator::seeded(7).generate(1, 12);
        assert_eq!(a, b);
    }

    #[test]
    fn generated_fields_stay_in_range() {
        let cards = FeedGenerator::seeded(42).generate(1, 200);
        for (i, card) in cards.iter().enumerate() {
            assert_eq!(card.id, i as u32 + 1);
            assert_eq!(card.title, format!("产品调研报告 #{}", card.id));
            assert!((100..2100).contains(&card.likes));
            assert!((10..510).contains(&card.comments));
            assert!((5..205).contains(&card.shares));
            assert!((3.0..=5.0).contains(&card.rating));
            assert!((1..=3).contains(&card.tags.len()));
            assert_eq!(card.tags[0], "功能分析");
            assert!(card.publish_hours_ago < 24);
            assert!(CATEGORIES.contains(&card.category.as_str()));
            if let Some(loc) = &card.location {
                assert!(LOCATIONS.contains(&loc.as_str()));
            }
        }
    }

    #[tokio::test]
    async fn pages_continue_ids() {
        let mut feed = CommunityFeed::new(FeedGenerator::seeded(1), instant_paging());
        assert_eq!(feed.cards().len(), 12);
        assert_eq!(feed.load_more().await, 6);
        let ids: Vec<u32> = feed.cards().iter().map(|c| c.id).collect();
        assert_eq!(ids, (1..=18).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn feed_stops_after_passing_the_limit() {
        let mut feed = CommunityFeed::new(FeedGenerator::seeded(1), instant_paging());
        feed.load_pages(100).await;
        // 12 + 6k cards; the load that starts above 50 (at 54) is the last.
        assert_eq!(feed.cards().len(), 60);
        assert!(!feed.has_more());
        assert_eq!(feed.load_more().await, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn load_waits_for_the_delay() {
        let mut feed = CommunityFeed::new(FeedGenerator::seeded(3), FeedPaging::default());
        let started = tokio::time::Instant::now();
        feed.load_pages(2).await;
        assert_eq!(started.elapsed(), Duration::from_millis(2000));
        assert_eq!(feed.cards().len(), 24);
    }
}
