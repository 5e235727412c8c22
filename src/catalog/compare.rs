use std::fmt;

use serde::{Deserialize, Serialize};

/// How complete one product's coverage of a category is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Maturity {
    Complete,
    Advanced,
    Basic,
}

impl Maturity {
    pub fn label(self) -> &'static str {
        match self {
            Maturity::Complete => "完整",
            Maturity::Advanced => "高级",
            Maturity::Basic => "基础",
        }
    }
}

impl fmt::Display for Maturity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which side a category favours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Advantage {
    A,
    B,
    Tie,
}

/// How one product fares in a comparison category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSide {
    pub status: Maturity,
    /// Features this product offers in the category.
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonCategory {
    pub name: String,
    pub a: ProductSide,
    pub b: ProductSide,
    pub advantage: Advantage,
}

/// Headline numbers of one product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonOverview {
    pub name: String,
    /// Overall score out of 100.
    pub score: u32,
    /// Number of features found.
    pub features: u32,
}

/// Full result of comparing product A against product B.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub a: ComparisonOverview,
    pub b: ComparisonOverview,
    /// Category-by-category breakdown, in display order.
    pub categories: Vec<ComparisonCategory>,
    /// Improvement suggestions for product A.
    pub recommendations_a: Vec<String>,
    /// Improvement suggestions for product B.
    pub recommendations_b: Vec<String>,
    pub conclusion: String,
}

fn side(status: Maturity, features: &[&str]) -> ProductSide {
    ProductSide {
        status,
        features: features.iter().map(|f| f.to_string()).collect(),
    }
}

fn category(name: &str, a: ProductSide, b: ProductSide, advantage: Advantage) -> ComparisonCategory {
    ComparisonCategory {
        name: name.to_string(),
        a,
        b,
        advantage,
    }
}

/// The canned comparison every compare run produces.
pub fn comparison() -> Comparison {
    use Maturity::*;

    Comparison {
        a: ComparisonOverview {
            name: "产品A".into(),
            score: 85,
            features: 24,
        },
        b: ComparisonOverview {
            name: "产品B".into(),
            score: 78,
            features: 19,
        },
        categories: vec![
            category(
                "用户管理",
                side(Complete, &["注册登录", "个人资料", "权限管理", "多账号切换"]),
                side(Basic, &["注册登录", "个人资料"]),
                Advantage::A,
            ),
            category(
                "内容管理",
                side(Complete, &["富文本编辑", "媒体上传", "版本控制"]),
                side(Complete, &["富文本编辑", "媒体上传", "批量操作", "定时发布"]),
                Advantage::B,
            ),
            category(
                "数据分析",
                side(Basic, &["基础统计", "导出功能"]),
                side(Advanced, &["实时分析", "自定义报表", "数据可视化", "预测分析"]),
                Advantage::B,
            ),
            category(
                "API集成",
                side(Complete, &["RESTful API", "Webhook", "第三方集成"]),
                side(Basic, &["RESTful API"]),
                Advantage::A,
            ),
        ],
        recommendations_a: vec![
            "建议增加实时数据分析、自定义报表和数据可视化功能，提升产品的数据洞察能力".into(),
            "可以学习产品B的批量操作和定时发布功能，提升内容管理效率".into(),
        ],
        recommendations_b: vec![
            "建议增加权限管理和多账号切换功能，提升企业级用户的使用体验".into(),
            "建议增加Webhook和第三方集成功能，提升产品的扩展性和集成能力".into(),
        ],
        conclusion: "产品A更适合功能全面的通用型解决方案，产品B更适合专业化的垂直领域应用。\
                     建议根据目标用户群体的具体需求来选择发展方向。"
            .into(),
    }
}
