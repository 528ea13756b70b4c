//! 题目行生成服务
//!
//! 只负责"把一个知识点展开成若干行"，不关心 SQL 格式。
//! 随机源由调用方注入，生产环境用熵种子，测试用固定种子。

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::models::{CorrectAnswer, Difficulty, GeneratedRow, TopicCatalog};

/// 题目行生成器
#[derive(Debug, Default, Clone, Copy)]
pub struct RowGenerator;

impl RowGenerator {
    pub fn new() -> Self {
        Self
    }

    /// 为整个目录生成所有行，顺序与目录一致
    pub fn generate<R: Rng + ?Sized>(
        &self,
        catalog: &TopicCatalog,
        rng: &mut R,
    ) -> Vec<GeneratedRow> {
        let mut rows = Vec::with_capacity(catalog.total_questions());
        for (category, topic) in catalog.iter_topics() {
            rows.extend(self.generate_topic(category, &topic.name, topic.effective_count(), rng));
        }
        rows
    }

    /// 为单个知识点生成 `count` 行
    pub fn generate_topic<R: Rng + ?Sized>(
        &self,
        category: &str,
        sub_topic: &str,
        count: usize,
        rng: &mut R,
    ) -> Vec<GeneratedRow> {
        debug!("生成知识点 {} / {}: {} 题", category, sub_topic, count);
        (0..count)
            .map(|index| self.generate_row(category, sub_topic, index, rng))
            .collect()
    }

    /// 生成一行占位题目
    pub fn generate_row<R: Rng + ?Sized>(
        &self,
        category: &str,
        sub_topic: &str,
        index: usize,
        rng: &mut R,
    ) -> GeneratedRow {
        GeneratedRow {
            category: category.to_string(),
            sub_topic: sub_topic.to_string(),
            question: placeholder_question(sub_topic, index),
            options: placeholder_options(),
            correct_answer: random_answer(rng),
            difficulty: random_difficulty(rng),
        }
    }
}

/// 题干占位文本，题号从 1 开始
fn placeholder_question(sub_topic: &str, index: usize) -> String {
    format!("Sample {} question {}", sub_topic, index + 1)
}

fn placeholder_options() -> [String; 4] {
    CorrectAnswer::ALL.map(|answer| format!("Option {}", answer))
}

fn random_difficulty<R: Rng + ?Sized>(rng: &mut R) -> Difficulty {
    *Difficulty::ALL.choose(rng).unwrap_or(&Difficulty::Medium)
}

fn random_answer<R: Rng + ?Sized>(rng: &mut R) -> CorrectAnswer {
    let index = rng.gen_range(0..CorrectAnswer::ALL.len());
    CorrectAnswer::from_index(index).unwrap_or(CorrectAnswer::A)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn topic_rows_use_placeholders() {
        let mut rng = StdRng::seed_from_u64(7);
        let rows =
            RowGenerator::new().generate_topic("Theory", "Computer Fundamentals", 2, &mut rng);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].question, "Sample Computer Fundamentals question 1");
        assert_eq!(rows[1].question, "Sample Computer Fundamentals question 2");
        for row in &rows {
            assert_eq!(row.category, "Theory");
            assert_eq!(row.sub_topic, "Computer Fundamentals");
            assert_eq!(row.options, ["Option A", "Option B", "Option C", "Option D"]);
        }
    }

    #[test]
    fn per_topic_counts_match_catalog() {
        let catalog = TopicCatalog::copa();
        let mut rng = StdRng::seed_from_u64(1);
        let rows = RowGenerator::new().generate(&catalog, &mut rng);
        assert_eq!(rows.len(), catalog.total_questions());
        for (category, topic) in catalog.iter_topics() {
            let n = rows
                .iter()
                .filter(|r| r.category == category && r.sub_topic == topic.name)
                .count();
            assert_eq!(n, topic.effective_count(), "{} / {}", category, topic.name);
        }
    }

    #[test]
    fn negative_and_zero_counts_yield_no_rows() {
        let catalog =
            TopicCatalog::from_table(&[("Practical", &[("Zero", 0), ("Neg", -3), ("One", 1)])]);
        let mut rng = StdRng::seed_from_u64(3);
        let rows = RowGenerator::new().generate(&catalog, &mut rng);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].sub_topic, "One");
    }

    #[test]
    fn random_choices_cover_their_domains() {
        let mut rng = StdRng::seed_from_u64(99);
        let rows = RowGenerator::new().generate_topic("Theory", "JavaScript", 400, &mut rng);
        let answers: HashSet<_> = rows.iter().map(|r| r.correct_answer).collect();
        let difficulties: HashSet<_> = rows.iter().map(|r| r.difficulty).collect();
        assert_eq!(answers.len(), 4);
        assert_eq!(difficulties.len(), 3);
    }

    #[test]
    fn same_seed_same_rows() {
        let catalog = TopicCatalog::from_table(&[("Theory", &[("MS Office", 20)])]);
        let a = RowGenerator::new().generate(&catalog, &mut StdRng::seed_from_u64(5));
        let b = RowGenerator::new().generate(&catalog, &mut StdRng::seed_from_u64(5));
        assert_eq!(a, b);
    }
}
