//! Plain-text renderings of each page's results.

use std::fmt::Write as _;

use console::style;

use crate::catalog::{
    Advantage, Comparison, FeatureCategory, FeedCard, Platform, Product, ResearchStatus,
    Sentiment, SocialPost,
};
use crate::catalog::research::{FeatureStats, UserFlow};
use crate::catalog::sentiment::{KEY_INSIGHTS, SUGGESTIONS};
use crate::views::{self, ProductLinks, SentimentDistribution};

fn status_style(status: ResearchStatus) -> console::StyledObject<&'static str> {
    match status {
        ResearchStatus::Researched => style(status.label()).green(),
        ResearchStatus::Comparing => style(status.label()).yellow(),
        ResearchStatus::Pending => style(status.label()).dim(),
    }
}

fn sentiment_style(sentiment: Sentiment) -> console::StyledObject<&'static str> {
    match sentiment {
        Sentiment::Positive => style(sentiment.label()).green(),
        Sentiment::Neutral => style(sentiment.label()).yellow(),
        Sentiment::Negative => style(sentiment.label()).red(),
    }
}

fn mark(present: bool) -> console::StyledObject<&'static str> {
    if present {
        style("✓").green()
    } else {
        style("✗").red()
    }
}

pub fn features(categories: &[FeatureCategory]) -> String {
    let (counts, total) = views::feature_counts(categories);
    let mut out = String::new();
    let _ = writeln!(out, "{} ({total})", style("功能列表").bold());
    for (category, (_, count)) in categories.iter().zip(counts) {
        let _ = writeln!(out, "\n{} [{count}]", style(&category.category).cyan().bold());
        for f in &category.features {
            let _ = writeln!(out, "  • {} — {}", style(&f.name).bold(), f.description);
            let _ = writeln!(out, "    痛点: {} | 目标用户: {}", f.pain_point, f.target_user);
        }
    }
    out
}

/// Implementation statistics followed by the extracted user flows.
pub fn research_overview(stats: FeatureStats, flows: &[UserFlow]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}  总功能 {}  {} {}  {} {}  {} {}",
        style("功能统计").bold(),
        stats.total,
        style("已实现").green(),
        stats.implemented,
        style("部分实现").yellow(),
        stats.partial,
        style("未实现").red(),
        stats.missing
    );
    for flow in flows {
        let _ = writeln!(out, "\n{}", style(flow.name).cyan().bold());
        let _ = writeln!(out, "  {}", flow.steps.join(" → "));
    }
    out
}

pub fn comparison(data: &Comparison, product_a: &str, product_b: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}  {} ({product_a}): {} 分 / {} 项功能    {} ({product_b}): {} 分 / {} 项功能",
        style("对比概览").bold(),
        data.a.name,
        data.a.score,
        data.a.features,
        data.b.name,
        data.b.score,
        data.b.features
    );
    let (a_wins, b_wins, ties) = views::advantage_tally(data);
    let _ = writeln!(out, "优势类别: A {a_wins} / B {b_wins} / 持平 {ties}");

    for (category, (name, rows)) in data.categories.iter().zip(views::comparison_rows(data)) {
        let winner = match category.advantage {
            Advantage::A => style("A 领先").green(),
            Advantage::B => style("B 领先").blue(),
            Advantage::Tie => style("持平").dim(),
        };
        let _ = writeln!(
            out,
            "\n{}  A:{} B:{}  {winner}",
            style(name).cyan().bold(),
            category.a.status,
            category.b.status
        );
        for row in rows {
            let _ = writeln!(out, "  {} {}  {}", mark(row.in_a), mark(row.in_b), row.item);
        }
    }

    let _ = writeln!(out, "\n{}", style("产品A 改进建议").bold());
    for r in &data.recommendations_a {
        let _ = writeln!(out, "  - {r}");
    }
    let _ = writeln!(out, "{}", style("产品B 改进建议").bold());
    for r in &data.recommendations_b {
        let _ = writeln!(out, "  - {r}");
    }
    let _ = writeln!(out, "\n{}", data.conclusion);
    out
}

fn post_metrics(post: &SocialPost) -> String {
    let m = &post.metrics;
    let mut parts = Vec::new();
    if let Some(views) = &m.views {
        parts.push(format!("浏览 {views}"));
    }
    parts.push(format!("赞 {}", m.likes));
    if let Some(comments) = &m.comments {
        parts.push(format!("评论 {comments}"));
    }
    if let Some(shares) = &m.shares {
        parts.push(format!("分享 {shares}"));
    }
    if let Some(duration) = &m.duration {
        parts.push(format!("时长 {duration}"));
    }
    parts.join(" · ")
}

pub fn sentiment(posts: &[SocialPost], dist: SentimentDistribution) -> String {
    let mut out = String::new();
    for platform in Platform::ALL {
        let _ = writeln!(out, "{}", style(platform.label()).cyan().bold());
        for post in views::posts_on(posts, platform) {
            let _ = writeln!(
                out,
                "  [{}] {} — {} ({})",
                sentiment_style(post.sentiment),
                style(&post.title).bold(),
                post.author,
                post.publish_date
            );
            let _ = writeln!(out, "      {}", post_metrics(post));
            let _ = writeln!(out, "      {}", post.summary);
            if !post.tags.is_empty() {
                let _ = writeln!(out, "      #{}", post.tags.join(" #"));
            }
        }
        out.push('\n');
    }

    let _ = writeln!(
        out,
        "{}  正面 {}%  中性 {}%  负面 {}%",
        style("整体情感倾向").bold(),
        dist.positive,
        dist.neutral,
        dist.negative
    );
    let _ = writeln!(out, "  {}", style(format!("基于 {} 条内容统计", posts.len())).dim());
    let _ = writeln!(out, "{}", style("最受关注").bold());
    for post in views::posts_by_likes(posts).into_iter().take(3) {
        let _ = writeln!(out, "  {} ({})", post.title, post.metrics.likes);
    }
    let _ = writeln!(out, "{}", style("关键洞察").bold());
    for insight in KEY_INSIGHTS {
        let _ = writeln!(out, "  - {insight}");
    }
    let _ = writeln!(out, "{}", style("改进建议").bold());
    for suggestion in SUGGESTIONS {
        let _ = writeln!(out, "  - {suggestion}");
    }
    out
}

pub fn feed(cards: &[&FeedCard], has_more: bool) -> String {
    let mut out = String::new();
    for card in cards {
        let hot = if card.is_hot { style(" HOT").red().bold() } else { style("") };
        let _ = writeln!(
            out,
            "#{:<4} {}{hot}  [{}] ★{:.1}",
            card.id,
            style(&card.title).bold(),
            card.category,
            card.rating
        );
        let _ = writeln!(
            out,
            "      {} · {}小时前{}  ♥{} 💬{} ↗{}  {}",
            card.author,
            card.publish_hours_ago,
            card.location.as_deref().map(|l| format!(" · {l}")).unwrap_or_default(),
            card.likes,
            card.comments,
            card.shares,
            card.tags.join(" ")
        );
    }
    let _ = writeln!(
        out,
        "{} 条{}",
        cards.len(),
        if has_more { "，还有更多" } else { "，已全部加载" }
    );
    out
}

pub fn products(products: &[&Product]) -> String {
    let mut out = String::new();
    for p in products {
        let _ = writeln!(
            out,
            "{} [{}] {}",
            style(&p.name).bold(),
            p.category,
            status_style(p.status)
        );
        let _ = writeln!(out, "    {}", p.description);
        let rating = if p.rating > 0.0 {
            format!("★{:.1}", p.rating)
        } else {
            "未评分".to_string()
        };
        let updated = if p.last_updated.is_empty() {
            String::new()
        } else {
            format!("  更新于 {}", p.last_updated)
        };
        let _ = writeln!(
            out,
            "    {rating}  {} 项功能  用户 {}  #{}{updated}",
            p.features,
            p.users,
            p.tags.join(" #")
        );
    }
    if products.is_empty() {
        let _ = writeln!(out, "没有匹配的产品");
    }
    out
}

pub fn network(links: &[ProductLinks<'_>]) -> String {
    let mut out = String::new();
    for link in links {
        let _ = writeln!(out, "{} ({})", style(&link.product.name).bold(), link.product.category);
        for linked in &link.on_map {
            let _ = writeln!(out, "  ── {} {}", style(&linked.name).cyan(), status_style(linked.status));
        }
        for name in &link.external {
            let _ = writeln!(out, "  ·· {}", style(name).dim());
        }
    }
    out
}
