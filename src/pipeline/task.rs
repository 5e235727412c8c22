use std::fmt;

use serde::{Deserialize, Serialize};

use super::step::Step;
use crate::error::ScoutError;

/// The three simulated agent tasks of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskKind {
    Research,
    Compare,
    Sentiment,
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskKind::Research => write!(f, "research"),
            TaskKind::Compare => write!(f, "compare"),
            TaskKind::Sentiment => write!(f, "sentiment"),
        }
    }
}

impl TaskKind {
    /// Display title of the page running this task.
    pub fn title(self) -> &'static str {
        match self {
            TaskKind::Research => "产品功能调研",
            TaskKind::Compare => "产品功能对比",
            TaskKind::Sentiment => "产品舆情调研",
        }
    }

    /// The fixed step plan of this task.
    pub fn steps(self) -> Vec<Step> {
        let plan: &[(&str, u64)] = match self {
            TaskKind::Research => &[
                ("访问网站", 1000),
                ("解析页面结构", 1500),
                ("提取功能信息", 2000),
                ("生成流程图", 1500),
                ("整理报告", 1000),
            ],
            TaskKind::Compare => &[
                ("分析产品A", 1500),
                ("分析产品B", 1500),
                ("功能对比", 2000),
                ("生成差异报告", 1500),
                ("整理建议", 500),
            ],
            TaskKind::Sentiment => &[
                ("搜索YouTube", 1500),
                ("搜索微信公众号", 1500),
                ("搜索小红书", 1500),
                ("分析内容", 2000),
                ("生成摘要", 1000),
            ],
        };
        plan.iter().map(|&(name, ms)| Step::new(name, ms)).collect()
    }
}

/// A validated request to start one task, carrying the user's inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskRequest {
    Research { url: String, prompt: String },
    Compare { product_a: String, product_b: String },
    Sentiment { product: String },
}

fn required(value: &str, field: &'static str) -> Result<String, ScoutError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ScoutError::EmptyInput(field));
    }
    Ok(trimmed.to_string())
}

impl TaskRequest {
    pub fn research(url: &str, prompt: Option<&str>) -> Result<Self, ScoutError> {
        Ok(TaskRequest::Research {
            url: required(url, "url")?,
            prompt: prompt.map(str::trim).unwrap_or_default().to_string(),
        })
    }

    pub fn compare(product_a: &str, product_b: &str) -> Result<Self, ScoutError> {
        Ok(TaskRequest::Compare {
            product_a: required(product_a, "product_a")?,
            product_b: required(product_b, "product_b")?,
        })
    }

    pub fn sentiment(product: &str) -> Result<Self, ScoutError> {
        Ok(TaskRequest::Sentiment {
            product: required(product, "product")?,
        })
    }

    pub fn kind(&self) -> TaskKind {
        match self {
            TaskRequest::Research { .. } => TaskKind::Research,
            TaskRequest::Compare { .. } => TaskKind::Compare,
            TaskRequest::Sentiment { .. } => TaskKind::Sentiment,
        }
    }

    /// Short human-readable subject of the request, used in progress messages.
    pub fn subject(&self) -> String {
        match self {
            TaskRequest::Research { url, .. } => url.clone(),
            TaskRequest::Compare { product_a, product_b } => format!("{product_a} vs {product_b}"),
            TaskRequest::Sentiment { product } => product.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_task_has_five_steps() {
        for kind in [TaskKind::Research, TaskKind::Compare, TaskKind::Sentiment] {
            assert_eq!(kind.steps().len(), 5, "{kind}");
        }
    }

    #[test]
    fn research_plan_matches_dashboard() {
        let steps = TaskKind::Research.steps();
        assert_eq!(steps[0], Step::new("访问网站", 1000));
        assert_eq!(steps[4], Step::new("整理报告", 1000));
        let total: u64 = steps.iter().map(|s| s.duration_ms).sum();
        assert_eq!(total, 7000);
    }

    #[test]
    fn compare_and_sentiment_totals() {
        let total = |k: TaskKind| k.steps().iter().map(|s| s.duration_ms).sum::<u64>();
        assert_eq!(total(TaskKind::Compare), 7000);
        assert_eq!(total(TaskKind::Sentiment), 7500);
    }

    #[test]
    fn empty_inputs_are_rejected() {
        assert!(matches!(
            TaskRequest::research("   ", None),
            Err(ScoutError::EmptyInput("url"))
        ));
        assert!(matches!(
            TaskRequest::compare("https://a.com", ""),
            Err(ScoutError::EmptyInput("product_b"))
        ));
        assert!(matches!(
            TaskRequest::sentiment(""),
            Err(ScoutError::EmptyInput("product"))
        ));
    }

    #[test]
    fn research_prompt_is_optional() {
        let req = TaskRequest::research(" https://example.com ", None).unwrap();
        assert_eq!(
            req,
            TaskRequest::Research {
                url: "https://example.com".into(),
                prompt: String::new(),
            }
        );
        assert_eq!(req.kind(), TaskKind::Research);
        assert_eq!(req.subject(), "https://example.com");
    }

    #[test]
    fn compare_subject_names_both_sides() {
        let req = TaskRequest::compare("a.com", "b.com").unwrap();
        assert_eq!(req.subject(), "a.com vs b.com");
        assert_eq!(req.kind(), TaskKind::Compare);
    }
}
