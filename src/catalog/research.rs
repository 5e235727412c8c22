use serde::{Deserialize, Serialize};

/// One feature extracted from a product website.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub name: String,
    pub description: String,
    pub pain_point: String,
    pub target_user: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureCategory {
    pub category: String,
    pub features: Vec<Feature>,
}

/// Implementation coverage shown in the report's statistics block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureStats {
    pub total: u32,
    pub implemented: u32,
    pub partial: u32,
    pub missing: u32,
}

pub const FEATURE_STATS: FeatureStats = FeatureStats {
    total: 15,
    implemented: 12,
    partial: 2,
    missing: 1,
};

/// A named user journey and its ordered steps.
#[derive(Debug, Clone, Copy)]
pub struct UserFlow {
    pub name: &'static str,
    pub steps: &'static [&'static str],
}

pub const USER_FLOWS: &[UserFlow] = &[
    UserFlow {
        name: "新用户注册流程",
        steps: &[
            "访问注册页面",
            "选择注册方式（邮箱/手机）",
            "填写基本信息",
            "验证身份",
            "完成注册并引导",
        ],
    },
    UserFlow {
        name: "内容发布流程",
        steps: &["登录系统", "进入创作页面", "编辑内容", "预览确认", "发布内容"],
    },
];

const FEATURES: &[(&str, &[(&str, &str, &str, &str)])] = &[
    (
        "用户管理",
        &[
            ("用户注册", "支持邮箱、手机号多种方式注册", "新用户快速入门", "所有新用户"),
            ("用户登录", "安全的身份验证和会话管理", "账户安全保护", "注册用户"),
            ("个人资料", "用户信息管理和个性化设置", "个性化体验需求", "活跃用户"),
            ("权限管理", "基于角色的访问控制系统", "数据安全和权限控制", "管理员用户"),
        ],
    ),
    (
        "内容管理",
        &[
            ("文章发布", "支持富文本内容创建和发布", "内容创作效率", "内容创作者"),
            ("富文本编辑", "所见即所得的编辑体验", "格式化内容需求", "内容创作者"),
            ("媒体上传", "图片、视频等多媒体文件管理", "多媒体内容展示", "内容创作者"),
            ("内容审核", "自动化和人工审核机制", "内容质量控制", "平台管理员"),
        ],
    ),
    (
        "社交功能",
        &[
            ("评论系统", "用户互动和反馈机制", "用户参与度提升", "所有用户"),
            ("点赞收藏", "内容互动和个人收藏", "内容价值认可", "活跃用户"),
            ("关注系统", "用户间的社交连接", "社交网络构建", "社交用户"),
            ("私信功能", "用户间私密沟通渠道", "私密交流需求", "高级用户"),
        ],
    ),
];

/// The feature categories a research run "extracts".
pub fn feature_categories() -> Vec<FeatureCategory> {
    FEATURES
        .iter()
        .map(|&(category, features)| FeatureCategory {
            category: category.to_string(),
            features: features
                .iter()
                .map(|&(name, description, pain_point, target_user)| Feature {
                    name: name.to_string(),
                    description: description.to_string(),
                    pain_point: pain_point.to_string(),
                    target_user: target_user.to_string(),
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_categories_of_four_features() {
        let categories = feature_categories();
        assert_eq!(categories.len(), 3);
        assert!(categories.iter().all(|c| c.features.len() == 4));
        assert_eq!(categories[2].features[3].name, "私信功能");
    }

    #[test]
    fn stats_add_up() {
        let s = FEATURE_STATS;
        assert_eq!(s.implemented + s.partial + s.missing, s.total);
    }
}
