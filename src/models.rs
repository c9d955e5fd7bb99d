use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// 除零结果的哨兵值
pub const ERROR_SENTINEL: &str = "Error";

/// 历史记录最大条数，超出后丢弃最早的条目
const MAX_HISTORY_ENTRIES: usize = 200;

/// 运算符
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl Operator {
    /// 从按键字符解析运算符（同时接受 ASCII 和显示符号两种写法）
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' | '−' => Some(Self::Subtract),
            '*' | '×' => Some(Self::Multiply),
            '/' | '÷' => Some(Self::Divide),
            '%' => Some(Self::Modulo),
            _ => None,
        }
    }

    /// 显示符号
    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '−',
            Self::Multiply => '×',
            Self::Divide => '÷',
            Self::Modulo => '%',
        }
    }

    fn apply(&self, prev: f64, curr: f64) -> f64 {
        match self {
            Self::Add => prev + curr,
            Self::Subtract => prev - curr,
            Self::Multiply => prev * curr,
            Self::Divide => prev / curr,
            // f64 的 % 是取余，符号跟随被除数
            Self::Modulo => prev % curr,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// 一次已完成的运算
#[derive(Debug, Clone, PartialEq)]
pub struct Calculation {
    pub lhs: String,
    pub op: Operator,
    pub rhs: String,
    pub result: String,
}

impl Calculation {
    /// 算式部分，不含结果，如 "5 + 3"
    pub fn expression(&self) -> String {
        format!("{} {} {}", self.lhs, self.op, self.rhs)
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression(), self.result)
    }
}

/// 计算器状态机
///
/// 三个字段构成全部可变状态：正在输入的数字、待定运算的左操作数、
/// 待定运算符。操作数以文本保存（保留 "3." 这类输入中间态），
/// 只在 calculate / convert_to_percent 内部转为浮点数。
#[derive(Debug, Clone, Default)]
pub struct Calculator {
    current_input: String,
    previous_input: String,
    operator: Option<Operator>,
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 输入一个数字字符或小数点
    ///
    /// 同一段输入中第二个小数点会被静默忽略。调用方负责过滤
    /// 非法字符。
    pub fn input_digit(&mut self, c: char) {
        if c == '.' && self.current_input.contains('.') {
            return;
        }
        self.current_input.push(c);
    }

    /// 选择运算符
    ///
    /// 三种情况按顺序判断：
    /// 1. 还没输入右操作数时再按运算符，只是改变主意换运算符；
    /// 2. 左右操作数都齐了，先结算已有运算，结果作为新的左操作数；
    /// 3. 随后总是提交：当前输入移入左操作数，等待右操作数。
    /// 因此连续运算严格从左到右结合，没有优先级。
    ///
    /// 情况 2 发生时返回被结算的运算，供调用方记录。
    pub fn choose_operator(&mut self, op: Operator) -> Option<Calculation> {
        if self.current_input.is_empty() && !self.previous_input.is_empty() {
            self.operator = Some(op);
            return None;
        }

        let chained = if !self.previous_input.is_empty() {
            self.calculate()
        } else {
            None
        };

        self.operator = Some(op);
        self.previous_input = std::mem::take(&mut self.current_input);
        chained
    }

    /// 结算待定运算
    ///
    /// 运算符、左操作数、右操作数三者缺一即为空操作。除数为零时
    /// 结果是哨兵文本 "Error" 而不是数值。成功后结果文本成为新的
    /// 当前输入，左操作数和运算符一并清空。
    pub fn calculate(&mut self) -> Option<Calculation> {
        let op = self.operator?;
        if self.current_input.is_empty() || self.previous_input.is_empty() {
            return None;
        }

        let prev = parse_operand(&self.previous_input);
        let curr = parse_operand(&self.current_input);

        let result = if op == Operator::Divide && curr == 0.0 {
            ERROR_SENTINEL.to_string()
        } else {
            op.apply(prev, curr).to_string()
        };

        let rhs = std::mem::replace(&mut self.current_input, result.clone());
        let lhs = std::mem::take(&mut self.previous_input);
        self.operator = None;

        Some(Calculation { lhs, op, rhs, result })
    }

    /// 删除当前输入的最后一个字符，输入为空时无事发生
    ///
    /// 不影响已提交的左操作数和运算符。
    pub fn delete_last(&mut self) {
        self.current_input.pop();
    }

    /// 清空全部状态
    pub fn clear_all(&mut self) {
        self.current_input.clear();
        self.previous_input.clear();
        self.operator = None;
    }

    /// 把当前输入换算成百分比（除以 100）
    pub fn convert_to_percent(&mut self) {
        if self.current_input.is_empty() {
            return;
        }
        self.current_input = (parse_operand(&self.current_input) / 100.0).to_string();
    }

    /// 用历史结果覆盖整个状态，作为新的当前输入
    pub fn recall(&mut self, value: &str) {
        self.clear_all();
        self.current_input = value.to_string();
    }

    /// 显示值：当前输入 > 左操作数 > "0"
    pub fn display_value(&self) -> &str {
        if !self.current_input.is_empty() {
            &self.current_input
        } else if !self.previous_input.is_empty() {
            &self.previous_input
        } else {
            "0"
        }
    }

    /// 待定运算的提示文本，如 "5 +"，没有待定运算时为 None
    pub fn pending_display(&self) -> Option<String> {
        self.operator
            .map(|op| format!("{} {}", self.previous_input, op.symbol()))
    }
}

/// 操作数文本转浮点数，解析失败得到 NaN
///
/// "Error" 这类哨兵文本参与后续运算时解析失败，NaN 随之在
/// 结果中传播。
fn parse_operand(s: &str) -> f64 {
    s.parse().unwrap_or(f64::NAN)
}

/// TOML 文件结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryData {
    pub meta: HistoryMeta,
    #[serde(default)]
    pub entries: Vec<HistoryEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryMeta {
    pub version: String,
    pub created_at: DateTime<Local>,
    pub last_modified: DateTime<Local>,
}

impl Default for HistoryData {
    fn default() -> Self {
        let now = Local::now();
        Self {
            meta: HistoryMeta {
                version: "1.0".to_string(),
                created_at: now,
                last_modified: now,
            },
            entries: Vec::new(),
        }
    }
}

/// 一条历史记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: String,
    pub expression: String,
    pub result: String,
    pub created_at: DateTime<Local>,
}

impl HistoryEntry {
    pub fn new(calculation: &Calculation) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            expression: calculation.expression(),
            result: calculation.result.clone(),
            created_at: Local::now(),
        }
    }

    /// 结果是否可以回填为新的输入（"Error"、NaN 不行）
    pub fn recallable(&self) -> bool {
        self.result
            .parse::<f64>()
            .map(|v| !v.is_nan())
            .unwrap_or(false)
    }
}

/// 运行时历史记录
#[derive(Debug, Clone)]
pub struct History {
    pub entries: Vec<HistoryEntry>,
    pub dirty: bool,
    created_at: DateTime<Local>,
}

impl History {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            dirty: false,
            created_at: Local::now(),
        }
    }

    pub fn from_data(data: HistoryData) -> Self {
        Self {
            entries: data.entries,
            dirty: false,
            created_at: data.meta.created_at,
        }
    }

    pub fn to_data(&self) -> HistoryData {
        HistoryData {
            meta: HistoryMeta {
                version: "1.0".to_string(),
                created_at: self.created_at,
                last_modified: Local::now(),
            },
            entries: self.entries.clone(),
        }
    }

    /// 追加一条记录，超出上限时丢弃最早的条目
    pub fn push(&mut self, calculation: &Calculation) {
        self.entries.push(HistoryEntry::new(calculation));
        if self.entries.len() > MAX_HISTORY_ENTRIES {
            let excess = self.entries.len() - MAX_HISTORY_ENTRIES;
            self.entries.drain(..excess);
        }
        self.dirty = true;
    }

    /// 清空全部记录
    pub fn clear(&mut self) {
        self.entries.clear();
        self.dirty = true;
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
