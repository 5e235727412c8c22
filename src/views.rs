//! Derived views over the static record sets.
//!
//! Everything here is a pure function of its inputs: filtering, stable
//! sorting, and the ordered union used by the comparison table.

use serde::Serialize;

use crate::catalog::{
    Advantage, Comparison, FeatureCategory, FeedCard, Platform, Product, ResearchStatus,
    Sentiment, SocialPost,
};

/// Keeps the records matching `predicate`, in their original order.
pub fn filter_by<'a, T>(records: &'a [T], predicate: impl Fn(&T) -> bool) -> Vec<&'a T> {
    records.iter().filter(|r| predicate(*r)).collect()
}

/// Sorts by `key`, largest first. Equal keys keep their relative order.
pub fn sort_desc_by_key<T, K: Ord>(records: &mut [T], key: impl Fn(&T) -> K) {
    records.sort_by(|a, b| key(b).cmp(&key(a)));
}

/// Sorts by `key`, smallest first. Equal keys keep their relative order.
pub fn sort_asc_by_key<T, K: Ord>(records: &mut [T], key: impl Fn(&T) -> K) {
    records.sort_by_key(|r| key(r));
}

/// An element of a two-sided union and the sides that contain it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Membership<T> {
    pub item: T,
    pub in_a: bool,
    pub in_b: bool,
}

/// Union of `a` and `b` in first-seen order, each element flagged with the
/// side(s) it appears on.
pub fn union_with_membership<T: PartialEq + Clone>(a: &[T], b: &[T]) -> Vec<Membership<T>> {
    let mut union: Vec<Membership<T>> = Vec::with_capacity(a.len() + b.len());
    for item in a.iter().chain(b) {
        if union.iter().any(|m| &m.item == item) {
            continue;
        }
        union.push(Membership {
            item: item.clone(),
            in_a: a.contains(item),
            in_b: b.contains(item),
        });
    }
    union
}

/// The three tabs of the community feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedView {
    /// Cards with at least [`HOT_LIKES`] likes, most liked first.
    Hot,
    /// Every card, oldest id first.
    New,
    /// Cards with a location, most liked first.
    Nearby,
}

pub const HOT_LIKES: u32 = 1000;

impl FeedView {
    pub fn apply<'a>(self, cards: &'a [FeedCard]) -> Vec<&'a FeedCard> {
        match self {
            FeedView::Hot => {
                let mut view = filter_by(cards, |c| c.likes >= HOT_LIKES);
                sort_desc_by_key(&mut view, |c| c.likes);
                view
            }
            FeedView::New => {
                let mut view = filter_by(cards, |_| true);
                sort_asc_by_key(&mut view, |c| c.id);
                view
            }
            FeedView::Nearby => {
                let mut view = filter_by(cards, |c| c.location.is_some());
                sort_desc_by_key(&mut view, |c| c.likes);
                view
            }
        }
    }
}

/// Products whose name, category or any tag contains `query`, ignoring case.
/// A blank query keeps everything.
pub fn search_products<'a>(products: &'a [Product], query: &str) -> Vec<&'a Product> {
    let needle = query.trim().to_lowercase();
    filter_by(products, |p| {
        needle.is_empty()
            || p.name.to_lowercase().contains(&needle)
            || p.category.to_lowercase().contains(&needle)
            || p.tags.iter().any(|t| t.to_lowercase().contains(&needle))
    })
}

pub fn products_in_category<'a>(products: &'a [Product], category: &str) -> Vec<&'a Product> {
    filter_by(products, |p| p.category == category)
}

/// How many products sit in each research status.
pub fn status_counts(products: &[Product]) -> Vec<(ResearchStatus, usize)> {
    [ResearchStatus::Researched, ResearchStatus::Comparing, ResearchStatus::Pending]
        .into_iter()
        .map(|s| (s, products.iter().filter(|p| p.status == s).count()))
        .collect()
}

/// A product's connections split into those on the map and those that are not.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductLinks<'a> {
    pub product: &'a Product,
    pub on_map: Vec<&'a Product>,
    pub external: Vec<&'a str>,
}

pub fn product_links<'a>(products: &'a [Product], name: &str) -> Option<ProductLinks<'a>> {
    let product = products.iter().find(|p| p.name.eq_ignore_ascii_case(name))?;
    let mut on_map = Vec::new();
    let mut external = Vec::new();
    for connection in &product.connections {
        match products.iter().find(|p| &p.name == connection) {
            Some(linked) => on_map.push(linked),
            None => external.push(connection.as_str()),
        }
    }
    Some(ProductLinks {
        product,
        on_map,
        external,
    })
}

/// Per-category feature union of a comparison.
pub fn comparison_rows(comparison: &Comparison) -> Vec<(String, Vec<Membership<String>>)> {
    comparison
        .categories
        .iter()
        .map(|c| (c.name.clone(), union_with_membership(&c.a.features, &c.b.features)))
        .collect()
}

/// Categories won by each side, as `(a, b, tie)`.
pub fn advantage_tally(comparison: &Comparison) -> (usize, usize, usize) {
    comparison
        .categories
        .iter()
        .fold((0, 0, 0), |(a, b, tie), c| match c.advantage {
            Advantage::A => (a + 1, b, tie),
            Advantage::B => (a, b + 1, tie),
            Advantage::Tie => (a, b, tie + 1),
        })
}

/// Integer percentages of each sentiment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SentimentDistribution {
    pub positive: u8,
    pub neutral: u8,
    pub negative: u8,
}

/// Shares of positive, neutral and negative posts. Rounded with the largest
/// remainder method so the three add up to 100 for a non-empty set.
///
/// The shares come from `posts` alone: the bundled mock posts give 50/50/0,
/// not the fixed 60/30/10 headline of the dashboard page.
pub fn sentiment_distribution(posts: &[SocialPost]) -> SentimentDistribution {
    let total = posts.len();
    if total == 0 {
        return SentimentDistribution::default();
    }

    let order = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];
    let counts = order.map(|s| posts.iter().filter(|p| p.sentiment == s).count());
    let mut shares = counts.map(|c| c * 100 / total);
    let remainders = counts.map(|c| c * 100 % total);

    let mut leftover = 100 - shares.iter().sum::<usize>();
    let mut by_remainder = [0usize, 1, 2];
    by_remainder.sort_by(|&i, &j| remainders[j].cmp(&remainders[i]));
    for &i in by_remainder.iter().cycle() {
        if leftover == 0 {
            break;
        }
        shares[i] += 1;
        leftover -= 1;
    }

    SentimentDistribution {
        positive: shares[0] as u8,
        neutral: shares[1] as u8,
        negative: shares[2] as u8,
    }
}

pub fn posts_on(posts: &[SocialPost], platform: Platform) -> Vec<&SocialPost> {
    filter_by(posts, |p| p.platform == platform)
}

/// Posts ordered by parsed like count, most liked first.
pub fn posts_by_likes(posts: &[SocialPost]) -> Vec<&SocialPost> {
    let mut view = filter_by(posts, |_| true);
    sort_desc_by_key(&mut view, |p| p.like_count());
    view
}

/// Number of features per research category, plus the grand total.
pub fn feature_counts(categories: &[FeatureCategory]) -> (Vec<(&str, usize)>, usize) {
    let counts: Vec<(&str, usize)> = categories
        .iter()
        .map(|c| (c.category.as_str(), c.features.len()))
        .collect();
    let total = counts.iter().map(|(_, n)| n).sum();
    (counts, total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{FeedGenerator, comparison, feature_categories, products, social_posts};

    fn card(id: u32, likes: u32, location: Option<&str>) -> FeedCard {
        let mut c = FeedGenerator::seeded(0).generate(id, 1).remove(0);
        c.likes = likes;
        c.location = location.map(String::from);
        c
    }

    #[test]
    fn union_preserves_first_seen_order_and_flags_sides() {
        let a = ["x", "y"];
        let b = ["y", "z"];
        let union = union_with_membership(&a, &b);
        let got: Vec<(&str, bool, bool)> = union.iter().map(|m| (m.item, m.in_a, m.in_b)).collect();
        assert_eq!(
            got,
            vec![("x", true, false), ("y", true, true), ("z", false, true)]
        );
    }

    #[test]
    fn union_collapses_duplicates_within_a_side() {
        let union = union_with_membership(&["a", "a", "b"], &["b", "b"]);
        assert_eq!(union.len(), 2);
    }

    #[test]
    fn hot_filter_keeps_thousand_and_above() {
        let cards = vec![card(1, 500, None), card(2, 1200, None), card(3, 1000, None)];
        let hot = FeedView::Hot.apply(&cards);
        let likes: Vec<u32> = hot.iter().map(|c| c.likes).collect();
        assert_eq!(likes, vec![1200, 1000]);
    }

    #[test]
    fn descending_sort_is_stable() {
        let mut rows = vec![("a", 5), ("b", 9), ("c", 5), ("d", 9), ("e", 1)];
        sort_desc_by_key(&mut rows, |r| r.1);
        let names: Vec<&str> = rows.iter().map(|r| r.0).collect();
        assert_eq!(names, vec!["b", "d", "a", "c", "e"]);
    }

    #[test]
    fn new_view_orders_by_id() {
        let cards = vec![card(3, 10, None), card(1, 10, None), card(2, 10, None)];
        let ids: Vec<u32> = FeedView::New.apply(&cards).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn nearby_view_needs_a_location() {
        let cards = vec![
            card(1, 300, Some("北京")),
            card(2, 900, None),
            card(3, 700, Some("上海")),
        ];
        let ids: Vec<u32> = FeedView::Nearby.apply(&cards).iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn search_matches_name_category_and_tags() {
        let all = products();
        let names = |q: &str| -> Vec<String> {
            search_products(&all, q).iter().map(|p| p.name.clone()).collect()
        };
        assert_eq!(names("notion"), vec!["Notion"]);
        assert_eq!(names("设计"), vec!["Figma"]);
        assert_eq!(names("协作"), vec!["Notion", "Figma", "Slack", "Airtable"]);
        assert_eq!(names("  ").len(), 6);
        assert!(names("nothing-here").is_empty());
    }

    #[test]
    fn category_filter_is_exact() {
        let all = products();
        let found = products_in_category(&all, "知识管理");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Obsidian");
        assert!(products_in_category(&all, "知识").is_empty());
    }

    #[test]
    fn status_counts_cover_catalog() {
        let counts = status_counts(&products());
        assert_eq!(
            counts,
            vec![
                (ResearchStatus::Researched, 4),
                (ResearchStatus::Comparing, 1),
                (ResearchStatus::Pending, 1),
            ]
        );
    }

    #[test]
    fn links_split_on_map_and_external() {
        let all = products();
        let links = product_links(&all, "notion").unwrap();
        let on_map: Vec<&str> = links.on_map.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(on_map, vec!["Obsidian", "Airtable"]);
        assert!(links.external.is_empty());

        let links = product_links(&all, "Figma").unwrap();
        assert!(links.on_map.is_empty());
        assert_eq!(links.external, vec!["Sketch", "Adobe XD"]);

        assert!(product_links(&all, "Unknown").is_none());
    }

    #[test]
    fn comparison_rows_flag_each_side() {
        let rows = comparison_rows(&comparison());
        let (name, users) = &rows[0];
        assert_eq!(name, "用户管理");
        assert_eq!(users.len(), 4);
        assert!(users[0].in_a && users[0].in_b);
        assert!(users[3].in_a && !users[3].in_b);

        let (_, content) = &rows[1];
        let items: Vec<&str> = content.iter().map(|m| m.item.as_str()).collect();
        assert_eq!(items, vec!["富文本编辑", "媒体上传", "版本控制", "批量操作", "定时发布"]);
    }

    #[test]
    fn tally_counts_wins() {
        assert_eq!(advantage_tally(&comparison()), (2, 2, 0));
    }

    #[test]
    fn sentiment_shares_sum_to_one_hundred() {
        let dist = sentiment_distribution(&social_posts());
        assert_eq!(dist, SentimentDistribution { positive: 50, neutral: 50, negative: 0 });

        let mut posts = social_posts();
        posts.truncate(3);
        posts[2].sentiment = Sentiment::Negative;
        let dist = sentiment_distribution(&posts);
        assert_eq!(
            dist.positive as u32 + dist.neutral as u32 + dist.negative as u32,
            100
        );
        assert_eq!(dist, SentimentDistribution { positive: 34, neutral: 33, negative: 33 });
    }

    #[test]
    fn empty_sentiment_set_is_all_zero() {
        assert_eq!(sentiment_distribution(&[]), SentimentDistribution::default());
    }

    #[test]
    fn posts_sorted_by_parsed_likes() {
        let posts = social_posts();
        let likes: Vec<u64> = posts_by_likes(&posts).iter().map(|p| p.like_count()).collect();
        assert_eq!(likes, vec![21_000, 15_000, 1_500, 1_200, 892, 892]);
        assert_eq!(posts_on(&posts, Platform::WeChat).len(), 2);
    }

    #[test]
    fn feature_counts_total() {
        let categories = feature_categories();
        let (counts, total) = feature_counts(&categories);
        assert_eq!(counts, vec![("用户管理", 4), ("内容管理", 4), ("社交功能", 4)]);
        assert_eq!(total, 12);
    }
}
