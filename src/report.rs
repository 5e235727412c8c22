//! Markdown feature-analysis report produced by a research run.

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::info;

use crate::catalog::{FEATURE_STATS, USER_FLOWS, feature_categories};
use crate::error::ScoutError;

/// Placeholder written when the user gave no analysis focus.
pub const DEFAULT_PROMPT: &str = "无特殊要求";

const REPORT_PREFIX: &str = "产品功能分析报告";

const BACKEND_STACK: &[(&str, &str)] = &[
    ("用户认证", "JWT + OAuth2.0"),
    ("数据存储", "PostgreSQL + Redis缓存"),
    ("文件存储", "云存储服务"),
    ("API设计", "RESTful API + GraphQL"),
    ("安全机制", "HTTPS + 数据加密"),
];

const FRONTEND_STACK: &[(&str, &str)] = &[
    ("框架", "React + TypeScript"),
    ("状态管理", "Redux/Zustand"),
    ("UI组件", "自定义组件库"),
    ("构建工具", "Vite/Webpack"),
    ("部署", "CDN + 静态托管"),
];

const IMPROVEMENTS: &[(&str, &str)] = &[
    ("功能完善", "优先完善私信功能和内容审核机制"),
    ("用户体验", "提升新手引导和操作流程"),
    ("性能优化", "加强缓存策略和加载速度"),
    ("安全加固", "完善权限控制和数据保护"),
];

const SUMMARY: &str = "该产品具有完整的用户管理和内容管理功能，社交功能相对完善但仍有提升空间。\
                       建议优先完善私信功能和内容审核机制，以提升用户体验和平台安全性。";

/// The feature-analysis report of one research run.
///
/// Rendering goes through [`fmt::Display`]; [`ResearchReport::export`] saves
/// it as `产品功能分析报告_<date>.md`.
pub struct ResearchReport<'a> {
    /// Analysed website, embedded verbatim.
    pub url: &'a str,
    /// Analysis focus; blank means [`DEFAULT_PROMPT`].
    pub prompt: &'a str,
    /// Timestamp shown in the overview and used for the file name.
    pub generated_at: DateTime<Local>,
}

impl<'a> ResearchReport<'a> {
    /// Report stamped with the current local time.
    pub fn new(url: &'a str, prompt: &'a str) -> Self {
        Self {
            url,
            prompt,
            generated_at: Local::now(),
        }
    }

    /// File name the report is saved under, dated with the generation day.
    pub fn file_name(&self) -> String {
        format!("{REPORT_PREFIX}_{}.md", self.generated_at.format("%Y-%m-%d"))
    }

    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Writes the report into `dir`, creating it if needed.
    pub fn export(&self, dir: &Path) -> Result<PathBuf, ScoutError> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(self.file_name());
        std::fs::write(&path, self.render())?;
        info!(path = %path.display(), "report exported");
        Ok(path)
    }
}

impl fmt::Display for ResearchReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let time = self.generated_at.format("%Y-%m-%d %H:%M:%S").to_string();
        let prompt = if self.prompt.trim().is_empty() {
            DEFAULT_PROMPT
        } else {
            self.prompt
        };
        let stats = FEATURE_STATS;

        writeln!(f, "# 产品功能分析报告\n")?;
        writeln!(f, "## 分析概览")?;
        writeln!(f, "- 网站URL: {}", self.url)?;
        writeln!(f, "- 分析时间: {time}")?;
        writeln!(f, "- 用户提示: {prompt}\n")?;

        writeln!(f, "## 功能统计")?;
        writeln!(f, "- 总功能数: {}", stats.total)?;
        writeln!(f, "- 已实现: {}", stats.implemented)?;
        writeln!(f, "- 部分实现: {}", stats.partial)?;
        writeln!(f, "- 未实现: {}\n", stats.missing)?;

        writeln!(f, "## 详细功能列表\n")?;
        for category in feature_categories() {
            writeln!(f, "### {}", category.category)?;
            writeln!(f, "| 功能 | 功能描述 | 解决痛点 | 目标用户 |")?;
            writeln!(f, "|------|----------|----------|----------|")?;
            for feature in &category.features {
                writeln!(
                    f,
                    "| {} | {} | {} | {} |",
                    feature.name, feature.description, feature.pain_point, feature.target_user
                )?;
            }
            writeln!(f)?;
        }

        writeln!(f, "## 用户流程分析\n")?;
        for flow in USER_FLOWS {
            writeln!(f, "### {}", flow.name)?;
            for (i, step) in flow.steps.iter().enumerate() {
                writeln!(f, "{}. {step}", i + 1)?;
            }
            writeln!(f)?;
        }

        writeln!(f, "## 技术实现分析\n")?;
        writeln!(f, "### 后端技术架构")?;
        write_bold_list(f, BACKEND_STACK)?;
        writeln!(f, "\n### 前端技术栈")?;
        write_bold_list(f, FRONTEND_STACK)?;

        writeln!(f, "\n## 改进建议\n")?;
        for (i, (title, text)) in IMPROVEMENTS.iter().enumerate() {
            writeln!(f, "{}. **{title}**: {text}", i + 1)?;
        }

        writeln!(f, "\n## 总结\n")?;
        writeln!(f, "{SUMMARY}\n")?;
        writeln!(f, "---")?;
        writeln!(f, "*报告生成时间: {time}*")?;
        Ok(())
    }
}

fn write_bold_list(f: &mut fmt::Formatter<'_>, items: &[(&str, &str)]) -> fmt::Result {
    for (key, value) in items {
        writeln!(f, "- **{key}**: {value}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed(url: &'static str, prompt: &'static str) -> ResearchReport<'static> {
        ResearchReport {
            url,
            prompt,
            generated_at: Local.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap(),
        }
    }

    #[test]
    fn empty_prompt_gets_placeholder_and_url_is_verbatim() {
        let url = "https://example.com/path?q=1&x=<y>";
        let md = fixed(url, "").render();
        assert!(md.contains("- 用户提示: 无特殊要求"));
        assert!(md.contains(&format!("- 网站URL: {url}")));
    }

    #[test]
    fn blank_prompt_counts_as_empty() {
        let md = fixed("https://a.com", "   ").render();
        assert!(md.contains(DEFAULT_PROMPT));
    }

    #[test]
    fn prompt_is_embedded_when_given() {
        let md = fixed("https://a.com", "关注支付流程").render();
        assert!(md.contains("- 用户提示: 关注支付流程"));
        assert!(!md.contains(DEFAULT_PROMPT));
    }

    #[test]
    fn report_has_every_section() {
        let md = fixed("https://a.com", "").render();
        for heading in [
            "# 产品功能分析报告",
            "## 分析概览",
            "## 功能统计",
            "### 用户管理",
            "### 内容管理",
            "### 社交功能",
            "### 新用户注册流程",
            "### 内容发布流程",
            "### 后端技术架构",
            "### 前端技术栈",
            "## 改进建议",
            "## 总结",
        ] {
            assert!(md.contains(heading), "missing {heading}");
        }
        assert!(md.contains("- 总功能数: 15"));
        assert!(md.contains("| 私信功能 | 用户间私密沟通渠道 | 私密交流需求 | 高级用户 |"));
        assert!(md.contains("5. 完成注册并引导"));
        assert!(md.contains("1. **功能完善**: 优先完善私信功能和内容审核机制"));
        assert!(md.trim_end().ends_with("*报告生成时间: 2024-01-15 09:30:00*"));
    }

    #[test]
    fn file_name_carries_the_date() {
        assert_eq!(fixed("u", "").file_name(), "产品功能分析报告_2024-01-15.md");
    }

    #[test]
    fn export_writes_into_directory() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("reports");
        let report = fixed("https://example.com", "");

        let path = report.export(&target).unwrap();
        assert_eq!(path, target.join("产品功能分析报告_2024-01-15.md"));
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, report.render());
    }
}
