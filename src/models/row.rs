use std::fmt;

/// 难度等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// 写入 SQL 的标签
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_label(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.label() == s)
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 正确答案选项
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CorrectAnswer {
    A,
    B,
    C,
    D,
}

impl CorrectAnswer {
    pub const ALL: [CorrectAnswer; 4] = [
        CorrectAnswer::A,
        CorrectAnswer::B,
        CorrectAnswer::C,
        CorrectAnswer::D,
    ];

    /// 0..=3 映射为 A..=D，越界返回 None
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// 'A' + index
    pub fn letter(self) -> char {
        (b'A' + self as u8) as char
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CorrectAnswer::A => "A",
            CorrectAnswer::B => "B",
            CorrectAnswer::C => "C",
            CorrectAnswer::D => "D",
        }
    }
}

impl fmt::Display for CorrectAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 生成的一行题目数据，对应一个 SQL 值元组
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedRow {
    pub category: String,
    pub sub_topic: String,
    pub question: String,
    pub options: [String; 4],
    pub correct_answer: CorrectAnswer,
    pub difficulty: Difficulty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_letters_follow_index() {
        let letters: String = (0..4)
            .map(|i| CorrectAnswer::from_index(i).unwrap().letter())
            .collect();
        assert_eq!(letters, "ABCD");
        assert_eq!(CorrectAnswer::from_index(4), None);
        for answer in CorrectAnswer::ALL {
            assert_eq!(answer.as_str(), answer.letter().to_string());
            assert_eq!(CorrectAnswer::from_index(answer.index()), Some(answer));
        }
    }

    #[test]
    fn difficulty_labels() {
        assert_eq!(Difficulty::Medium.to_string(), "Medium");
        assert_eq!(Difficulty::from_label("Hard"), Some(Difficulty::Hard));
        assert_eq!(Difficulty::from_label("hard"), None);
    }
}
