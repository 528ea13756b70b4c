//! 题目目录：分类 → 知识点 → 题目数量

use serde::{Deserialize, Serialize};

/// 单个知识点及其题目数量
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicCount {
    pub name: String,
    /// 期望生成的题目数量；负数不报错，按 0 处理
    pub count: i64,
}

impl TopicCount {
    pub fn new(name: impl Into<String>, count: i64) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }

    /// 实际生成的行数
    pub fn effective_count(&self) -> usize {
        usize::try_from(self.count).unwrap_or(0)
    }
}

/// 一个分类（Theory / Practical）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub name: String,
    #[serde(default, rename = "topic")]
    pub topics: Vec<TopicCount>,
}

/// 题目目录
///
/// 顺序即输出顺序，构造后只读。
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TopicCatalog {
    #[serde(default, rename = "category")]
    pub categories: Vec<CategoryEntry>,
}

impl TopicCatalog {
    /// 从 (分类, [(知识点, 数量)]) 列表构造
    pub fn from_table(table: &[(&str, &[(&str, i64)])]) -> Self {
        let categories = table
            .iter()
            .map(|(category, topics)| CategoryEntry {
                name: category.to_string(),
                topics: topics
                    .iter()
                    .map(|(name, count)| TopicCount::new(*name, *count))
                    .collect(),
            })
            .collect();
        Self { categories }
    }

    /// 内置 COPA 题库目录
    pub fn copa() -> Self {
        Self::from_table(&[
            (
                "Theory",
                &[
                    ("Computer Fundamentals", 50),
                    ("Hardware & Software", 50),
                    ("Operating Systems", 80),
                    ("MS Office", 120),
                    ("Advance Excel", 60),
                    ("Databases Management", 70),
                    ("Networking & Web", 80),
                    ("JavaScript", 60),
                    ("Electronic Commerce", 50),
                    ("Cyber Security", 80),
                    ("Cloud Computing", 80),
                ],
            ),
            (
                "Practical",
                &[
                    ("Computer Components", 40),
                    ("Command Line", 60),
                    ("Word & Spreadsheet", 80),
                    ("Image Editing", 50),
                    ("MS-Access", 60),
                    ("Network Configuration", 50),
                    ("Internet Usage", 40),
                    ("Web Pages Design", 70),
                    ("JavaScript Development", 40),
                    ("VBA Programming", 30),
                    ("Accounting Software", 20),
                ],
            ),
        ])
    }

    /// 按顺序遍历所有 (分类名, 知识点)
    pub fn iter_topics(&self) -> impl Iterator<Item = (&str, &TopicCount)> {
        self.categories.iter().flat_map(|category| {
            category
                .topics
                .iter()
                .map(move |topic| (category.name.as_str(), topic))
        })
    }

    /// 所有知识点的题目总数
    pub fn total_questions(&self) -> usize {
        self.iter_topics()
            .map(|(_, topic)| topic.effective_count())
            .sum()
    }

    pub fn topic_count(&self) -> usize {
        self.categories.iter().map(|c| c.topics.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.topic_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copa_catalog_totals() {
        let catalog = TopicCatalog::copa();
        assert_eq!(catalog.categories.len(), 2);
        assert_eq!(catalog.topic_count(), 22);
        // Theory 780 + Practical 540
        assert_eq!(catalog.total_questions(), 1320);
    }

    #[test]
    fn iteration_keeps_declaration_order() {
        let catalog = TopicCatalog::copa();
        let first: Vec<_> = catalog.iter_topics().take(2).map(|(c, t)| (c, t.name.as_str())).collect();
        assert_eq!(
            first,
            vec![("Theory", "Computer Fundamentals"), ("Theory", "Hardware & Software")]
        );
        let (last_category, last_topic) = catalog.iter_topics().last().unwrap();
        assert_eq!(last_category, "Practical");
        assert_eq!(last_topic.name, "Accounting Software");
    }

    #[test]
    fn negative_count_contributes_nothing() {
        let catalog = TopicCatalog::from_table(&[("Theory", &[("A", 3), ("B", -5)])]);
        assert_eq!(catalog.total_questions(), 3);
        assert_eq!(TopicCount::new("B", -5).effective_count(), 0);
    }

    #[test]
    fn empty_catalog() {
        assert!(TopicCatalog::default().is_empty());
        assert!(TopicCatalog::from_table(&[("Theory", &[])]).is_empty());
        assert_eq!(TopicCatalog::default().total_questions(), 0);
    }
}
