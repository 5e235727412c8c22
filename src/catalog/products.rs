use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a product stands in the research backlog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResearchStatus {
    Researched,
    Comparing,
    Pending,
}

impl ResearchStatus {
    pub fn label(self) -> &'static str {
        match self {
            ResearchStatus::Researched => "已调研",
            ResearchStatus::Comparing => "对比中",
            ResearchStatus::Pending => "待调研",
        }
    }
}

impl fmt::Display for ResearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An entry on the product map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub status: ResearchStatus,
    pub rating: f32,
    /// Number of features catalogued so far.
    pub features: u32,
    /// Empty until the product has been researched.
    pub last_updated: String,
    pub users: String,
    pub description: String,
    pub tags: Vec<String>,
    /// Names of related products, which may or may not be on the map.
    pub connections: Vec<String>,
}

type Row = (
    u32,
    &'static str,
    &'static str,
    ResearchStatus,
    f32,
    u32,
    &'static str,
    &'static str,
    &'static str,
    &'static [&'static str],
    &'static [&'static str],
);

const PRODUCTS: &[Row] = &[
    (
        1,
        "Notion",
        "生产力工具",
        ResearchStatus::Researched,
        4.5,
        28,
        "2024-01-15",
        "2000万+",
        "全能型工作空间，集笔记、数据库、项目管理于一体",
        &["笔记", "协作", "数据库"],
        &["Obsidian", "Airtable"],
    ),
    (
        2,
        "Figma",
        "设计工具",
        ResearchStatus::Researched,
        4.7,
        35,
        "2024-01-12",
        "400万+",
        "协作式界面设计工具，支持实时多人编辑",
        &["设计", "协作", "原型"],
        &["Sketch", "Adobe XD"],
    ),
    (
        3,
        "Slack",
        "沟通协作",
        ResearchStatus::Comparing,
        4.2,
        22,
        "2024-01-10",
        "1200万+",
        "企业级即时通讯和协作平台",
        &["沟通", "团队", "集成"],
        &["Discord", "Microsoft Teams"],
    ),
    (
        4,
        "Airtable",
        "数据管理",
        ResearchStatus::Researched,
        4.4,
        31,
        "2024-01-08",
        "300万+",
        "低代码数据库平台，结合电子表格的易用性",
        &["数据库", "低代码", "协作"],
        &["Notion", "Google Sheets"],
    ),
    (
        5,
        "Linear",
        "项目管理",
        ResearchStatus::Pending,
        4.6,
        0,
        "",
        "10万+",
        "现代化的项目管理和问题跟踪工具",
        &["项目管理", "敏捷", "开发"],
        &["Jira", "Asana"],
    ),
    (
        6,
        "Obsidian",
        "知识管理",
        ResearchStatus::Researched,
        4.3,
        25,
        "2024-01-05",
        "100万+",
        "基于链接的知识管理工具，支持图谱视图",
        &["笔记", "知识图谱", "本地"],
        &["Notion", "Roam Research"],
    ),
];

pub fn products() -> Vec<Product> {
    PRODUCTS
        .iter()
        .map(
            |&(id, name, category, status, rating, features, last_updated, users, description, tags, connections)| {
                Product {
                    id,
                    name: name.to_string(),
                    category: category.to_string(),
                    status,
                    rating,
                    features,
                    last_updated: last_updated.to_string(),
                    users: users.to_string(),
                    description: description.to_string(),
                    tags: tags.iter().map(|t| t.to_string()).collect(),
                    connections: connections.iter().map(|c| c.to_string()).collect(),
                }
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_products_with_unique_ids() {
        let all = products();
        assert_eq!(all.len(), 6);
        let mut ids: Vec<u32> = all.iter().map(|p| p.id).collect();
        ids.dedup();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn pending_products_have_no_update_date() {
        for p in products() {
            assert_eq!(p.status == ResearchStatus::Pending, p.last_updated.is_empty(), "{}", p.name);
        }
    }
}
