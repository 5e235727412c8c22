//! Static mock datasets behind every dashboard page.

pub mod compare;
pub mod feed;
pub mod products;
pub mod research;
pub mod sentiment;

pub use compare::{Advantage, Comparison, comparison};
pub use feed::{CommunityFeed, FeedCard, FeedGenerator, FeedPaging};
pub use products::{Product, ResearchStatus, products};
pub use research::{FEATURE_STATS, FeatureCategory, USER_FLOWS, feature_categories};
pub use sentiment::{Platform, Sentiment, SocialPost, social_posts};
