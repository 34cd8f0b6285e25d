use std::collections::HashSet;

/// 单道题目
///
/// `body` 为去掉原题号后的完整内容（题干 + 选项，换行分隔），
/// 身份键为第一行去除首尾空白后的文本
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBlock {
    body: String,
}

impl QuestionBlock {
    pub fn new(body: impl Into<String>) -> Self {
        Self { body: body.into() }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// 去重用的身份键
    pub fn identity_key(&self) -> &str {
        self.stem_line().trim()
    }

    /// 题干行（第一个换行之前的内容，未 trim）
    pub fn stem_line(&self) -> &str {
        self.body.split('\n').next().unwrap_or_default()
    }

    /// 题干之后的各行（选项）
    pub fn option_lines(&self) -> impl Iterator<Item = &str> {
        self.body.split('\n').skip(1)
    }

    pub fn into_body(self) -> String {
        self.body
    }
}

/// 按插入顺序保存的去重题目集合
///
/// 任意两道题的身份键都不相同；先出现的题目保留，后出现的重复题直接丢弃
#[derive(Debug, Default)]
pub struct UniqueQuestionSet {
    seen: HashSet<String>,
    questions: Vec<QuestionBlock>,
}

impl UniqueQuestionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// 插入题目，返回是否为新题
    pub fn insert(&mut self, question: QuestionBlock) -> bool {
        if self.seen.contains(question.identity_key()) {
            return false;
        }
        self.seen.insert(question.identity_key().to_string());
        self.questions.push(question);
        true
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuestionBlock> {
        self.questions.iter()
    }

    pub fn into_questions(self) -> Vec<QuestionBlock> {
        self.questions
    }
}
