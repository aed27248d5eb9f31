use once_cell::sync::Lazy;
use regex::Regex;

/// 匹配行尾的 `file:line:col` 位置
///
/// 兼容两种常见栈格式:
/// - V8 风格: `at fn (src/a.ts:10:3)` 或 `at src/a.ts:10:3`
/// - Rust backtrace 风格: `at src/main.rs:10:5`
///
/// Windows 盘符路径（C:/x.ts:10:3）中的冒号属于文件名
static FRAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?P<file>[^\s()]+?):(?P<line>\d+):(?P<col>\d+)\)?\s*$").unwrap());

/// 单个栈帧解析出的源位置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    pub file: String,
    pub line: u32,
    pub column: u32,
}

impl SourceLocation {
    /// 栈中解析不出任何帧时的兜底位置
    pub fn unknown() -> Self {
        Self {
            file: "<unknown>".to_string(),
            line: 0,
            column: 0,
        }
    }
}

/// 从错误的原始栈文本解析出的帧序列
#[derive(Debug, Clone, Default)]
pub struct StackTrace {
    frames: Vec<SourceLocation>,
}

impl StackTrace {
    /// 逐行扫描栈文本，收集所有能识别的 `file:line:col` 帧
    ///
    /// 不匹配的行（错误消息、纯符号帧）直接跳过
    pub fn parse(raw: &str) -> Self {
        let frames = raw
            .lines()
            .filter_map(|line| {
                let caps = FRAME_RE.captures(line)?;
                let line_no: u32 = caps["line"].parse().ok()?;
                let col_no: u32 = caps["col"].parse().ok()?;
                Some(SourceLocation {
                    file: caps["file"].to_string(),
                    line: line_no,
                    column: col_no,
                })
            })
            .collect();

        Self { frames }
    }

    /// 栈顶帧（最靠近抛出点的一帧）
    pub fn top(&self) -> Option<&SourceLocation> {
        self.frames.first()
    }

    pub fn frames(&self) -> &[SourceLocation] {
        &self.frames
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_v8_style() {
        let raw = "Error: expected 1 to equal 2\n    at Object.<anonymous> (tests/math.spec.ts:10:3)\n    at run (node_modules/runner/index.js:55:12)";
        let stack = StackTrace::parse(raw);

        assert_eq!(stack.frames().len(), 2);
        let top = stack.top().unwrap();
        assert_eq!(top.file, "tests/math.spec.ts");
        assert_eq!(top.line, 10);
        assert_eq!(top.column, 3);
    }

    #[test]
    fn test_parse_bare_location() {
        let stack = StackTrace::parse("    at src/a.ts:7:1");
        assert_eq!(
            stack.top(),
            Some(&SourceLocation {
                file: "src/a.ts".to_string(),
                line: 7,
                column: 1,
            })
        );
    }

    #[test]
    fn test_parse_rust_backtrace_style() {
        let raw = "   0: app::handler\n             at src/main.rs:42:9\n   1: core::ops::function::FnOnce::call_once";
        let stack = StackTrace::parse(raw);

        assert_eq!(stack.frames().len(), 1);
        assert_eq!(stack.top().unwrap().file, "src/main.rs");
        assert_eq!(stack.top().unwrap().line, 42);
    }

    #[test]
    fn test_parse_windows_drive_letter() {
        // 盘符冒号保留在文件名里
        let stack = StackTrace::parse("    at C:/work/x.ts:10:3");
        let top = stack.top().unwrap();
        assert_eq!(top.file, "C:/work/x.ts");
        assert_eq!(top.line, 10);
        assert_eq!(top.column, 3);
    }

    #[test]
    fn test_parse_no_frames() {
        let stack = StackTrace::parse("Error: something went wrong");
        assert!(stack.is_empty());
        assert_eq!(stack.top(), None);
    }

    #[test]
    fn test_parse_empty_input() {
        let stack = StackTrace::parse("");
        assert!(stack.is_empty());
    }

    #[test]
    fn test_unknown_fallback() {
        let loc = SourceLocation::unknown();
        assert_eq!(loc.file, "<unknown>");
        assert_eq!(loc.line, 0);
        assert_eq!(loc.column, 0);
    }
}
