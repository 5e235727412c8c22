use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    YouTube,
    WeChat,
    Xiaohongshu,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::YouTube, Platform::WeChat, Platform::Xiaohongshu];

    pub fn label(self) -> &'static str {
        match self {
            Platform::YouTube => "YouTube",
            Platform::WeChat => "微信公众号",
            Platform::Xiaohongshu => "小红书",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl Sentiment {
    pub fn label(self) -> &'static str {
        match self {
            Sentiment::Positive => "正面",
            Sentiment::Neutral => "中性",
            Sentiment::Negative => "负面",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Engagement figures as the platforms display them, e.g. `"12.5万"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostMetrics {
    pub views: Option<String>,
    pub likes: String,
    pub comments: Option<String>,
    pub shares: Option<String>,
    /// Video length, YouTube only.
    pub duration: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialPost {
    pub platform: Platform,
    pub title: String,
    pub author: String,
    pub publish_date: String,
    pub summary: String,
    pub sentiment: Sentiment,
    pub tags: Vec<String>,
    pub metrics: PostMetrics,
}

/// Parses a displayed count such as `"892"`, `"1.2千"` or `"12.5万"`.
pub fn parse_count(text: &str) -> Option<u64> {
    let text = text.trim();
    let (number, multiplier) = if let Some(n) = text.strip_suffix('万') {
        (n, 10_000.0)
    } else if let Some(n) = text.strip_suffix('千') {
        (n, 1_000.0)
    } else {
        (text, 1.0)
    };
    let value: f64 = number.trim().parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    Some((value * multiplier).round() as u64)
}

impl SocialPost {
    /// Like count as a number; unparsable figures count as zero.
    pub fn like_count(&self) -> u64 {
        parse_count(&self.metrics.likes).unwrap_or(0)
    }
}

pub const KEY_INSIGHTS: &[&str] = &[
    "多数用户对产品的UI设计和易用性给予正面评价，特别是新手友好度较高",
    "用户对高级功能有较多需求，希望产品能够提供更多专业化工具",
    "部分用户认为产品定价偏高，希望有更多价格档位选择",
];

pub const SUGGESTIONS: &[&str] = &[
    "加强用户教育和技术支持，提供更多使用教程和最佳实践",
    "考虑推出不同价格档位的版本，满足不同用户群体的需求",
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Posts the sentiment run "collects" across the three platforms.
pub fn social_posts() -> Vec<SocialPost> {
    vec![
        SocialPost {
            platform: Platform::YouTube,
            title: "产品深度评测：功能全面解析".into(),
            author: "科技评测师".into(),
            publish_date: "2024-01-15".into(),
            summary: "详细介绍了产品的核心功能，用户反馈整体积极，特别是UI设计和易用性方面获得好评。".into(),
            sentiment: Sentiment::Positive,
            tags: Vec::new(),
            metrics: PostMetrics {
                views: Some("12.5万".into()),
                likes: "2.1万".into(),
                duration: Some("15:32".into()),
                ..Default::default()
            },
        },
        SocialPost {
            platform: Platform::YouTube,
            title: "使用体验分享：一个月真实感受".into(),
            author: "产品体验官".into(),
            publish_date: "2024-01-10".into(),
            summary: "用户分享了一个月的使用体验，提到了一些小bug但整体满意度较高。".into(),
            sentiment: Sentiment::Neutral,
            tags: Vec::new(),
            metrics: PostMetrics {
                views: Some("8.3万".into()),
                likes: "1.5万".into(),
                duration: Some("12:45".into()),
                ..Default::default()
            },
        },
        SocialPost {
            platform: Platform::WeChat,
            title: "这款产品真的值得入手吗？".into(),
            author: "数字生活指南".into(),
            publish_date: "2024-01-12".into(),
            summary: "从性价比角度分析产品优劣，认为功能丰富但价格偏高，适合专业用户。".into(),
            sentiment: Sentiment::Neutral,
            tags: strings(&["产品评测", "性价比", "专业工具"]),
            metrics: PostMetrics {
                views: Some("5.2万".into()),
                likes: "892".into(),
                ..Default::default()
            },
        },
        SocialPost {
            platform: Platform::WeChat,
            title: "产品使用技巧大全".into(),
            author: "效率工具箱".into(),
            publish_date: "2024-01-08".into(),
            summary: "分享了多个实用技巧和隐藏功能，帮助用户更好地使用产品。".into(),
            sentiment: Sentiment::Positive,
            tags: strings(&["使用技巧", "教程", "效率提升"]),
            metrics: PostMetrics {
                views: Some("3.8万".into()),
                likes: "1.2千".into(),
                ..Default::default()
            },
        },
        SocialPost {
            platform: Platform::Xiaohongshu,
            title: "新手必看！产品入门指南".into(),
            author: "小红薯用户".into(),
            publish_date: "2024-01-14".into(),
            summary: "详细的新手教程，图文并茂，获得了很多初学者的好评。".into(),
            sentiment: Sentiment::Positive,
            tags: strings(&["新手教程", "入门指南", "实用"]),
            metrics: PostMetrics {
                likes: "1.5千".into(),
                comments: Some("234".into()),
                shares: Some("89".into()),
                ..Default::default()
            },
        },
        SocialPost {
            platform: Platform::Xiaohongshu,
            title: "踩坑记录：使用中遇到的问题".into(),
            author: "数码达人".into(),
            publish_date: "2024-01-11".into(),
            summary: "记录了使用过程中遇到的一些问题和解决方案，对其他用户很有帮助。".into(),
            sentiment: Sentiment::Neutral,
            tags: strings(&["问题解决", "经验分享", "踩坑"]),
            metrics: PostMetrics {
                likes: "892".into(),
                comments: Some("156".into()),
                shares: Some("45".into()),
                ..Default::default()
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_displayed_counts() {
        assert_eq!(parse_count("12.5万"), Some(125_000));
        assert_eq!(parse_count("1.2千"), Some(1_200));
        assert_eq!(parse_count("892"), Some(892));
        assert_eq!(parse_count(" 2.1万 "), Some(21_000));
    }

    #[test]
    fn rejects_garbage_counts() {
        assert_eq!(parse_count(""), None);
        assert_eq!(parse_count("万"), None);
        assert_eq!(parse_count("many"), None);
        assert_eq!(parse_count("-3"), None);
    }

    #[test]
    fn two_posts_per_platform() {
        let posts = social_posts();
        for platform in Platform::ALL {
            assert_eq!(posts.iter().filter(|p| p.platform == platform).count(), 2);
        }
        assert_eq!(posts[0].like_count(), 21_000);
    }
}
